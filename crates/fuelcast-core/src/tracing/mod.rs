//! Observability for fuelcast.
//! `tracing` crate with `EnvFilter`, structured events per operation.

pub mod events;
pub mod setup;

pub use setup::init_tracing;
