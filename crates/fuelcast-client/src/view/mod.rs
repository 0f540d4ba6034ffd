//! `SubmitView` implementations.

pub mod recording;
pub mod terminal;

pub use recording::{RecordingView, ViewEvent};
pub use terminal::TerminalView;
