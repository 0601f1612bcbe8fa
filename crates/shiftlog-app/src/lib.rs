//! shiftlog-app - Application state and orchestration for shiftlog
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the three
//! entry forms: a pure `handler::update()` over [`AppState`], an action
//! dispatcher that runs submissions and the splash timer as tokio tasks, and
//! the [`Engine`] that ties the message channel, backend and state together.
//! Settings loading and backend URL resolution live in `config`.

pub mod actions;
pub mod config;
pub mod engine;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod splash;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use form::{EntryForm, FieldKind, FieldView, FormId, SubmitStatus, Zone};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use splash::{SplashState, SPLASH_DURATION};
pub use state::{ActiveForm, AppPhase, AppState, Tab};
