//! The page a submission handler drives.

use crate::models::FormSnapshot;

/// UI surface of the prediction form: the form fields, the trigger
/// control, the result container and its value display, and alerts.
///
/// Methods take `&self`; implementations own their interior mutability,
/// the way DOM handles are shared between an event handler and the
/// animation callbacks it schedules.
pub trait SubmitView: Send + Sync {
    /// Current form state.
    fn snapshot(&self) -> FormSnapshot;

    /// Current label of the trigger control.
    fn trigger_label(&self) -> String;

    /// Relabel the trigger control and enable or disable it.
    fn set_trigger(&self, label: &str, enabled: bool);

    /// Un-hide the result container.
    fn show_result(&self);

    /// Start the container's visibility transition.
    fn mark_result_visible(&self);

    /// Replace the text of the result value display.
    fn render_value(&self, text: &str);

    /// Blocking, user-facing message.
    fn alert(&self, message: &str);
}
