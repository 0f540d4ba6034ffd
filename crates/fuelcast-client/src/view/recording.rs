//! In-memory view that records every UI effect.

use std::sync::{Mutex, MutexGuard};

use fuelcast_core::models::FormSnapshot;
use fuelcast_core::traits::SubmitView;

/// A single UI effect, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Trigger { label: String, enabled: bool },
    ResultShown,
    ResultVisible,
    Rendered(String),
    Alert(String),
}

#[derive(Debug)]
struct State {
    snapshot: FormSnapshot,
    trigger_label: String,
    trigger_enabled: bool,
    result_hidden: bool,
    result_visible: bool,
    display: String,
    events: Vec<ViewEvent>,
}

/// Headless view: holds the form state and logs effects.
#[derive(Debug)]
pub struct RecordingView {
    state: Mutex<State>,
}

impl RecordingView {
    pub fn new(snapshot: FormSnapshot, trigger_label: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(State {
                snapshot,
                trigger_label: trigger_label.into(),
                trigger_enabled: true,
                result_hidden: true,
                result_visible: false,
                display: String::new(),
                events: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the form state, as a user editing fields would.
    pub fn set_snapshot(&self, snapshot: FormSnapshot) {
        self.lock().snapshot = snapshot;
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.lock().events.clone()
    }

    pub fn rendered(&self) -> Vec<String> {
        self.lock()
            .events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Rendered(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock()
            .events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Alert(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Current text of the result display.
    pub fn display(&self) -> String {
        self.lock().display.clone()
    }

    pub fn trigger_enabled(&self) -> bool {
        self.lock().trigger_enabled
    }

    pub fn is_result_hidden(&self) -> bool {
        self.lock().result_hidden
    }

    pub fn is_result_visible(&self) -> bool {
        self.lock().result_visible
    }
}

impl SubmitView for RecordingView {
    fn snapshot(&self) -> FormSnapshot {
        self.lock().snapshot.clone()
    }

    fn trigger_label(&self) -> String {
        self.lock().trigger_label.clone()
    }

    fn set_trigger(&self, label: &str, enabled: bool) {
        let mut state = self.lock();
        state.trigger_label = label.to_string();
        state.trigger_enabled = enabled;
        state.events.push(ViewEvent::Trigger {
            label: label.to_string(),
            enabled,
        });
    }

    fn show_result(&self) {
        let mut state = self.lock();
        state.result_hidden = false;
        state.events.push(ViewEvent::ResultShown);
    }

    fn mark_result_visible(&self) {
        let mut state = self.lock();
        state.result_visible = true;
        state.events.push(ViewEvent::ResultVisible);
    }

    fn render_value(&self, text: &str) {
        let mut state = self.lock();
        state.display = text.to_string();
        state.events.push(ViewEvent::Rendered(text.to_string()));
    }

    fn alert(&self, message: &str) {
        self.lock().events.push(ViewEvent::Alert(message.to_string()));
    }
}
