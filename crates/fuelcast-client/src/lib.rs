//! # fuelcast-client
//!
//! The submitting side of the prediction form. On submit the handler
//! disables the trigger, coerces the form into a payload, POSTs it as JSON,
//! and either counts the prediction up into the result display or raises an
//! alert. The trigger is restored on every path.
//!
//! ## Outcomes
//!
//! | Response | View effect |
//! |----------|-------------|
//! | success status + numeric prediction | result revealed, value counted up from 0 |
//! | any other status (or no prediction) | alert `Error: <message>` |
//! | connection error / unreadable body | alert `Failed to connect to the server.` |

pub mod animation;
pub mod format;
pub mod handler;
pub mod transport;
pub mod view;

pub use animation::{animate, CountUp, Frame, FrameClock, IntervalClock, SteppedClock};
pub use format::NumberFormat;
pub use handler::{SubmissionHandler, SubmitOutcome};
pub use transport::{HttpClientConfig, PredictionClient, PredictionReply};
pub use view::{RecordingView, TerminalView, ViewEvent};
