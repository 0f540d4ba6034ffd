//! Line-oriented terminal rendering of the prediction form.

use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use fuelcast_core::models::FormSnapshot;
use fuelcast_core::traits::SubmitView;

struct Inner<W> {
    out: W,
    label: String,
    result_open: bool,
}

/// Renders trigger state, the counting result and alerts to a writer.
///
/// The result display redraws in place with `\r`; call [`TerminalView::finish`]
/// once the submission returns to end the line.
pub struct TerminalView<W: Write + Send> {
    snapshot: FormSnapshot,
    result_caption: String,
    inner: Mutex<Inner<W>>,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(snapshot: FormSnapshot, result_caption: impl Into<String>, out: W) -> Self {
        Self {
            snapshot,
            result_caption: result_caption.into(),
            inner: Mutex::new(Inner {
                out,
                label: "Predict".to_string(),
                result_open: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<W>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Terminate the in-place result line, if one is open.
    pub fn finish(&self) {
        let mut inner = self.lock();
        if inner.result_open {
            inner.result_open = false;
            let _ = writeln!(inner.out);
            let _ = inner.out.flush();
        }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.inner
            .into_inner()
            .unwrap_or_else(|e| e.into_inner())
            .out
    }
}

impl<W: Write + Send> SubmitView for TerminalView<W> {
    fn snapshot(&self) -> FormSnapshot {
        self.snapshot.clone()
    }

    fn trigger_label(&self) -> String {
        self.lock().label.clone()
    }

    fn set_trigger(&self, label: &str, enabled: bool) {
        let mut inner = self.lock();
        inner.label = label.to_string();
        if !enabled {
            let _ = writeln!(inner.out, "{label}");
            let _ = inner.out.flush();
        }
    }

    fn show_result(&self) {
        self.lock().result_open = true;
    }

    fn mark_result_visible(&self) {}

    fn render_value(&self, text: &str) {
        let mut inner = self.lock();
        let caption = &self.result_caption;
        let _ = write!(inner.out, "\r{caption}: {text}");
        let _ = inner.out.flush();
    }

    fn alert(&self, message: &str) {
        let mut inner = self.lock();
        let _ = writeln!(inner.out, "{message}");
        let _ = inner.out.flush();
    }
}
