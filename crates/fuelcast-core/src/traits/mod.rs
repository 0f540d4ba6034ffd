pub mod predictor;
pub mod view;

pub use predictor::Predictor;
pub use view::SubmitView;
