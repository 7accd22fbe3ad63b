//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Action, App, Message, MessageStyle, Statistics, key_action, run_tui};
