//! Engine - orchestration state shared by the TUI runner and tests
//!
//! The Engine owns the TEA state, the message channel, the backend used for
//! submissions and the splash timer. Frontends feed it messages and draw
//! `engine.state`.

use std::sync::Arc;

use shiftlog_client::ShiftBackend;
use tokio::sync::mpsc;
use tracing::info;

use crate::actions::handle_action;
use crate::config::Settings;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::process;
use crate::splash::SplashTimer;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

pub struct Engine<B> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    backend: Arc<B>,

    /// Pending splash delay, if the splash is still up
    splash_timer: Option<SplashTimer>,
}

impl<B> Engine<B>
where
    B: ShiftBackend + Send + Sync + 'static,
{
    /// Create the engine and mount the shell.
    ///
    /// Must be called inside a tokio runtime: the splash timer is started
    /// here when the splash is enabled.
    pub fn new(settings: Settings, backend_url: impl Into<String>, backend: B) -> Self {
        let state = AppState::new(&settings, backend_url);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        let mut engine = Self {
            state,
            msg_tx,
            msg_rx,
            backend: Arc::new(backend),
            splash_timer: None,
        };

        if engine.state.splash.is_visible() {
            engine.dispatch(UpdateAction::StartSplashTimer);
        }

        info!("Engine ready (backend: {})", engine.state.backend_url);
        engine
    }

    fn dispatch(&mut self, action: UpdateAction) {
        handle_action(
            action,
            self.msg_tx.clone(),
            &self.backend,
            &mut self.splash_timer,
        );
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.backend,
            &mut self.splash_timer,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// The engine keeps its own sender, so this waits until something is
    /// queued. Returns true once a message has been processed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Whether the splash delay is still scheduled
    pub fn splash_pending(&self) -> bool {
        self.splash_timer.as_ref().is_some_and(|t| t.is_pending())
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Release background resources. In-flight submissions are left to
    /// finish on their own; their results are discarded.
    pub fn shutdown(&mut self) {
        if let Some(mut timer) = self.splash_timer.take() {
            timer.cancel();
        }
        info!("Engine shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiSettings;
    use crate::form::{EntryForm, FormId, SubmitStatus, Zone};
    use crate::input_key::InputKey;
    use crate::splash::SPLASH_DURATION;
    use crate::state::Tab;
    use chrono::{FixedOffset, TimeZone, Utc};
    use shiftlog_client::test_utils::FakeBackend;
    use shiftlog_client::SubmitError;
    use shiftlog_core::{OperatorType, Submission, TestType};
    use std::time::Duration;

    fn no_splash() -> Settings {
        Settings {
            ui: UiSettings { show_splash: false },
            ..Default::default()
        }
    }

    fn engine_with(fake: &FakeBackend) -> Engine<FakeBackend> {
        let mut engine = Engine::new(no_splash(), "http://backend.test", fake.clone());
        engine.state.zone = Zone::Fixed(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap());
        engine
    }

    fn fill_production(engine: &mut Engine<FakeBackend>) {
        let form = engine.state.form.as_production_mut().unwrap();
        form.operator_name = "Asha".into();
        form.operator_id = "E-104".into();
        form.operator_type = Some(OperatorType::Onrole);
        form.set_test_type(Some(TestType::Hv));
        assert!(form.set_test_station("HSPA-23"));
        assert!(form.set_device_type("7SR10"));
        form.count = "12".into();
        form.timestamp = "2024-03-01T08:30".into();
    }

    fn status(engine: &Engine<FakeBackend>) -> String {
        engine.state.form.entry().status().display_text()
    }

    #[tokio::test]
    async fn test_production_submission_round_trip() {
        let fake = FakeBackend::new();
        fake.respond_with_shift("Morning");
        let mut engine = engine_with(&fake);
        fill_production(&mut engine);

        engine.process_message(Message::Submit);
        assert_eq!(status(&engine), "Saving...");

        assert!(engine.process_next().await);
        assert_eq!(status(&engine), "Submitted to Morning shift");

        let form = engine.state.form.as_production_mut().unwrap();
        assert!(form.count.is_empty());
        assert_eq!(form.operator_name, "Asha");

        let sent = fake.received();
        assert_eq!(sent.len(), 1);
        let Submission::Production(record) = &sent[0] else {
            panic!("expected production record");
        };
        assert_eq!(record.production_count, 12);
        assert_eq!(
            record.timestamp,
            Utc.with_ymd_and_hms(2024, 3, 1, 3, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_backend_rejection_keeps_fields() {
        let fake = FakeBackend::new();
        fake.respond_with_error(SubmitError::rejected(400, Some("Invalid device".into())));
        let mut engine = engine_with(&fake);
        fill_production(&mut engine);

        engine.process_message(Message::Submit);
        engine.process_next().await;

        assert_eq!(status(&engine), "Error: Invalid device");
        assert_eq!(engine.state.form.as_production_mut().unwrap().count, "12");
    }

    #[tokio::test]
    async fn test_network_failure_message() {
        let fake = FakeBackend::new();
        fake.respond_with_error(SubmitError::transport("Network down"));
        let mut engine = engine_with(&fake);
        fill_production(&mut engine);

        engine.process_message(Message::Submit);
        engine.process_next().await;

        assert_eq!(status(&engine), "Error: Network down");
    }

    #[tokio::test]
    async fn test_second_submit_while_saving_is_ignored() {
        let fake = FakeBackend::new();
        fake.hold();
        let mut engine = engine_with(&fake);
        fill_production(&mut engine);

        engine.process_message(Message::Submit);
        engine.process_message(Message::Key(InputKey::CharCtrl('s')));
        tokio::task::yield_now().await;

        fake.release();
        engine.process_next().await;

        assert_eq!(fake.submit_count(), 1);
        assert_eq!(status(&engine), "Submitted to Morning shift");
    }

    #[tokio::test]
    async fn test_result_for_unmounted_form_is_dropped() {
        let fake = FakeBackend::new();
        fake.hold();
        let mut engine = engine_with(&fake);
        fill_production(&mut engine);

        engine.process_message(Message::Submit);
        engine.process_message(Message::SelectTab(Tab::Packing));
        engine.process_message(Message::SelectTab(Tab::Production));

        fake.release();
        engine.process_next().await;

        assert_eq!(engine.state.form.entry().status(), &SubmitStatus::Idle);
        assert_ne!(engine.state.form.id(), FormId(1));
    }

    #[tokio::test]
    async fn test_incomplete_form_sends_nothing() {
        let fake = FakeBackend::new();
        let mut engine = engine_with(&fake);

        engine.process_message(Message::Submit);
        tokio::task::yield_now().await;

        assert_eq!(fake.submit_count(), 0);
        assert_eq!(status(&engine), "");
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_splash_dismissed_after_five_seconds() {
        let mut engine = Engine::new(Settings::default(), "http://backend.test", FakeBackend::new());
        assert!(engine.state.splash.is_visible());
        assert!(engine.splash_pending());

        // Keys other than quit are ignored under the splash
        engine.process_message(Message::Key(InputKey::F(2)));
        assert_eq!(engine.state.active_tab, Tab::Production);

        tokio::time::advance(Duration::from_secs(3)).await;
        tokio::task::yield_now().await;
        assert_eq!(engine.drain_pending_messages(), 0);
        assert!(engine.state.splash.is_visible());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(engine.process_next().await);
        assert!(!engine.state.splash.is_visible());
        assert!(!engine.splash_pending());

        engine.process_message(Message::Key(InputKey::F(2)));
        assert_eq!(engine.state.active_tab, Tab::Packing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_splash_dismissed_when_channel_was_full() {
        let mut engine = Engine::new(Settings::default(), "http://backend.test", FakeBackend::new());
        while engine.msg_tx.try_send(Message::Tick).is_ok() {}

        tokio::time::advance(SPLASH_DURATION).await;
        tokio::task::yield_now().await;
        assert!(engine.state.splash.is_visible());

        assert_eq!(engine.drain_pending_messages(), MESSAGE_CHANNEL_CAPACITY);
        assert!(engine.process_next().await);
        assert!(!engine.state.splash.is_visible());
        assert!(!engine.splash_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_during_splash_cancels_timer() {
        let mut engine = Engine::new(Settings::default(), "http://backend.test", FakeBackend::new());

        tokio::time::advance(Duration::from_secs(3)).await;
        engine.process_message(Message::Key(InputKey::CharCtrl('c')));
        assert!(engine.should_quit());
        assert!(!engine.splash_pending());

        tokio::time::advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_shutdown_releases_timer() {
        let mut engine = Engine::new(Settings::default(), "http://backend.test", FakeBackend::new());
        assert!(engine.splash_pending());
        engine.shutdown();
        assert!(!engine.splash_pending());
    }
}
