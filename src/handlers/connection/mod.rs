//! Connection and registration handlers.
//!
//! Handles NICK, USER and QUIT, plus the welcome burst sent when
//! registration completes.

mod nick;
mod quit;
mod user;
mod welcome;

pub use nick::NickHandler;
pub use quit::QuitHandler;
pub use user::UserHandler;
pub use welcome::send_welcome_burst;
