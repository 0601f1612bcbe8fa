//! Custom widgets for the shiftlog TUI

mod footer;
mod form;
mod header;
pub mod splash;
mod tabs;

pub use footer::Footer;
pub use form::FormView;
pub use header::AppHeader;
pub use splash::SplashOverlay;
pub use tabs::TabBar;
