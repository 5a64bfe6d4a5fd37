//! User query handlers: WHO

mod who;

pub use who::WhoHandler;
