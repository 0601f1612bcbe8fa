//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use shiftlog_client::ShiftBackend;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::splash::SplashTimer;
use crate::state::AppState;

/// Process a message through the TEA update function, following any chained
/// messages and executing the actions they produce
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
    splash_timer: &mut Option<SplashTimer>,
) where
    B: ShiftBackend + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), backend, splash_timer);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
