//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use shiftlog_client::ShiftBackend;
use shiftlog_core::Submission;
use tokio::sync::mpsc;
use tracing::debug;

use crate::form::FormId;
use crate::message::Message;
use crate::splash::{SplashTimer, SPLASH_DURATION};
use crate::UpdateAction;

/// Execute an action, spawning background work where needed.
///
/// `splash_timer` is the engine-owned slot for the splash delay; replacing or
/// clearing it drops (and so cancels) any previous timer.
pub fn handle_action<B>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    backend: &Arc<B>,
    splash_timer: &mut Option<SplashTimer>,
) where
    B: ShiftBackend + Send + Sync + 'static,
{
    match action {
        UpdateAction::SubmitRecord {
            form_id,
            submission,
        } => {
            spawn_submission(form_id, submission, backend.clone(), msg_tx);
        }

        UpdateAction::StartSplashTimer => {
            let tx = msg_tx;
            *splash_timer = Some(SplashTimer::start(SPLASH_DURATION, async move {
                // Waits for capacity; a full channel must not keep the splash up
                if tx.send(Message::SplashElapsed).await.is_err() {
                    debug!("Splash completion dropped: channel closed");
                }
            }));
            debug!("Splash timer started ({:?})", SPLASH_DURATION);
        }

        UpdateAction::CancelSplashTimer => {
            if let Some(mut timer) = splash_timer.take() {
                timer.cancel();
            }
        }
    }
}

/// Post a record in the background and report the outcome
fn spawn_submission<B>(
    form_id: FormId,
    submission: Submission,
    backend: Arc<B>,
    msg_tx: mpsc::Sender<Message>,
) where
    B: ShiftBackend + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let outcome = backend.submit(&submission).await;
        if msg_tx
            .send(Message::SubmissionCompleted { form_id, outcome })
            .await
            .is_err()
        {
            // Engine is gone; nothing left to update
            debug!("Submission result for {} dropped: channel closed", form_id);
        }
    });
}
