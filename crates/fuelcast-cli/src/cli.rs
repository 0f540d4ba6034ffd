//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fuelcast_core::config::CliOverrides;
use fuelcast_core::models::FormSnapshot;

/// Ship fuel prediction form and endpoint
#[derive(Parser, Debug)]
#[command(name = "fuelcast", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to ./fuelcast.toml when present)
    #[arg(long, global = true, env = "FUELCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level or filter directive, e.g. `debug` or `fuelcast_client=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit the prediction form and count the result up
    Predict(PredictArgs),
    /// Run the prediction endpoint
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Endpoint base URL
    #[arg(long)]
    pub url: Option<String>,

    /// Response key the prediction is read from
    #[arg(long)]
    pub key: Option<String>,

    /// Render the count-up without real-time pacing
    #[arg(long)]
    pub instant: bool,

    /// Checkbox fields that are ticked
    #[arg(long = "checked", value_name = "NAME")]
    pub checked: Vec<String>,

    /// Form fields in document order
    #[arg(value_name = "NAME=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen address
    #[arg(long)]
    pub bind: Option<String>,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    FormSnapshot::parse_assignment(raw).ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            config_path: self.config.clone(),
            log_level: self.log_level.clone(),
            ..CliOverrides::default()
        };
        match &self.command {
            Command::Predict(args) => {
                overrides.base_url = args.url.clone();
                overrides.prediction_key = args.key.clone();
            }
            Command::Serve(args) => {
                overrides.bind = args.bind.clone();
            }
        }
        overrides
    }
}

impl PredictArgs {
    /// The form state described by the arguments.
    pub fn snapshot(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::from_pairs(self.fields.iter().cloned());
        for name in &self.checked {
            snapshot.check(name.as_str());
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn predict_collects_fields_and_checkboxes() {
        let cli = Cli::try_parse_from([
            "fuelcast",
            "predict",
            "--instant",
            "--checked",
            "monsoon_season",
            "ship_type=Cargo",
            "distance_nm=120.5",
        ])
        .unwrap();
        let Command::Predict(args) = &cli.command else {
            panic!("expected predict");
        };
        assert!(args.instant);
        let snapshot = args.snapshot();
        let entries: Vec<_> = snapshot.entries().collect();
        assert_eq!(entries, [("ship_type", "Cargo"), ("distance_nm", "120.5")]);
        assert!(snapshot.is_checked("monsoon_season"));
    }

    #[test]
    fn malformed_field_is_rejected() {
        assert!(Cli::try_parse_from(["fuelcast", "predict", "distance_nm"]).is_err());
    }

    #[test]
    fn overrides_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "fuelcast",
            "--log-level",
            "debug",
            "serve",
            "--bind",
            "0.0.0.0:8080",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.bind.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(overrides.log_level.as_deref(), Some("debug"));
        assert!(overrides.base_url.is_none());
    }
}
