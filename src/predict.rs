//! One-shot prediction from the command line.

use crate::model;
use crate::opts::PredictOpts;
use crate::prelude::*;
use crate::web::models::PredictResponse;

pub fn run(opts: PredictOpts) -> Result {
    let model = model::load(&opts.model.path, opts.model.format)?;
    let pontuation = model::predict_pontuation(&model, opts.study_hours)?;
    info!(opts.study_hours, pontuation);
    println!("{}", serde_json::to_string(&PredictResponse { pontuation })?);
    Ok(())
}
