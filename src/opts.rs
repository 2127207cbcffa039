//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::model::ModelFormat;

mod parsers;

#[derive(Parser)]
#[clap(author, version, about, long_about = None, propagate_version = true)]
pub struct Opts {
    /// Sentry DSN
    #[clap(long, env = "STUDY_SCORE_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[clap(
        long,
        default_value = "0",
        env = "STUDY_SCORE_TRACES_SAMPLE_RATE",
        value_parser = parsers::sample_rate,
    )]
    pub traces_sample_rate: f32,

    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    /// Runs the prediction web service
    Web(WebOpts),

    /// Predicts the score once and prints it
    Predict(PredictOpts),
}

#[derive(Args)]
pub struct WebOpts {
    #[clap(flatten)]
    pub model: ModelOpts,

    /// Web application bind host
    #[clap(long, default_value = "::", env = "STUDY_SCORE_HOST")]
    pub host: String,

    /// Web application bind port
    #[clap(
        short,
        long,
        default_value = "8080",
        env = "STUDY_SCORE_PORT",
        value_parser = parsers::non_zero_u16,
    )]
    pub port: u16,
}

#[derive(Args)]
pub struct PredictOpts {
    #[clap(flatten)]
    pub model: ModelOpts,

    /// Number of study hours
    #[clap(long, allow_negative_numbers = true)]
    pub study_hours: f64,
}

#[derive(Args)]
pub struct ModelOpts {
    /// Trained model artifact path
    #[clap(
        long = "model",
        default_value = "./pontuation_model.pkl",
        env = "STUDY_SCORE_MODEL"
    )]
    pub path: PathBuf,

    /// Model artifact format, inferred from the file extension when omitted
    #[clap(long = "model-format", value_enum, env = "STUDY_SCORE_MODEL_FORMAT")]
    pub format: Option<ModelFormat>,
}
