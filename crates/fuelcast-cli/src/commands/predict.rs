//! `fuelcast predict`: submit the form from the command line.

use std::process::ExitCode;

use anyhow::Context;
use fuelcast_client::{IntervalClock, SteppedClock, SubmissionHandler, TerminalView};
use fuelcast_core::config::FuelcastConfig;
use fuelcast_core::constants::PREDICTION_KEY_LITERS;

use crate::cli::PredictArgs;

pub async fn run(args: &PredictArgs, config: &FuelcastConfig) -> anyhow::Result<ExitCode> {
    let handler = SubmissionHandler::from_config(config)
        .context("building the prediction client")?;
    let view = TerminalView::new(
        args.snapshot(),
        result_caption(handler.prediction_key()),
        std::io::stdout(),
    );

    let outcome = if args.instant {
        let mut clock = SteppedClock::new(config.animation.effective_duration());
        handler.submit(&view, &mut clock).await
    } else {
        let mut clock = IntervalClock::new(config.animation.effective_frame_interval());
        handler.submit(&view, &mut clock).await
    };
    view.finish();

    Ok(if outcome.is_displayed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn result_caption(prediction_key: &str) -> &'static str {
    if prediction_key == PREDICTION_KEY_LITERS {
        "Predicted fuel (L)"
    } else {
        "Predicted fuel (t)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_names_the_unit() {
        assert_eq!(result_caption("predicted_fuel_liters"), "Predicted fuel (L)");
        assert_eq!(result_caption("predicted_fuel_tons"), "Predicted fuel (t)");
    }
}
