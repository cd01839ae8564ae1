//! UI view modules: pure rendering functions.
//!
//! Each submodule draws one part of the window. Views read fragments built
//! from [`AppState`](crate::state::AppState) and send
//! [`UiEvent`](crate::events::UiEvent)s on user interaction. Only the
//! transfer form writes, and only to its own input strings.

pub mod header;
pub mod history;
pub mod overview;
pub mod toasts;
pub mod transfer;
