pub mod predict;
pub mod serve;
