//! # fuelcast-form
//!
//! Turns the raw textual state of the prediction form into a `FormPayload`.
//!
//! | Field | Coerced to |
//! |-------|-----------|
//! | categorical field | string, verbatim |
//! | toggle field | `1` if checked, else `0` (read from the control, never from entries) |
//! | everything else | `parse_float` number (NaN when unparseable) |

pub mod coerce;
pub mod number;
pub mod schema;

pub use coerce::coerce;
pub use number::parse_float;
pub use schema::FormSchema;
