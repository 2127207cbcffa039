use clap::{crate_name, crate_version, Parser};

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

mod math;
mod model;
mod opts;
mod predict;
mod prelude;
mod tracing;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = crate::tracing::init(opts.sentry_dsn, opts.traces_sample_rate)?;
    info!(version = crate_version!(), "{} is starting…", crate_name!());

    let result = match opts.subcommand {
        Subcommand::Web(opts) => web::run(opts).await,
        Subcommand::Predict(opts) => predict::run(opts),
    };
    if let Err(error) = &result {
        error!("fatal error: {:#}", error);
    }
    result
}
