//! The pontuation model: a linear regression over the study hours.

use std::fs;
use std::path::Path;

use num_traits::ToPrimitive;

pub use self::artifact::ModelFormat;
pub use self::regression::LinearRegression;
use crate::model::artifact::Artifact;
use crate::prelude::*;
use crate::tracing::format_elapsed;

mod artifact;
mod regression;

/// Loads the model artifact.
/// Fails when the artifact is missing or does not decode into a valid regression.
#[instrument(level = "info", skip_all, fields(path = ?path))]
pub fn load(path: &Path, format: Option<ModelFormat>) -> Result<LinearRegression> {
    let start_instant = Instant::now();
    let format = format.unwrap_or_else(|| ModelFormat::infer(path));
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read the model artifact `{}`", path.display()))?;
    let artifact = Artifact::from_slice(&bytes, format)
        .with_context(|| format!("invalid model artifact `{}`", path.display()))?;
    let model = LinearRegression::try_from(artifact)?;
    info!(
        ?format,
        n_features = model.n_features(),
        elapsed = %format_elapsed(start_instant),
        "model loaded"
    );
    Ok(model)
}

/// Predicts the pontuation for the given number of study hours.
pub fn predict_pontuation(model: &LinearRegression, study_hours: f64) -> Result<i64> {
    let prediction = model
        .predict(&[[study_hours]])?
        .first()
        .copied()
        .ok_or_else(|| anyhow!("the model returned no predictions"))?;
    to_pontuation(prediction)
}

/// Truncates the prediction toward zero.
fn to_pontuation(prediction: f64) -> Result<i64> {
    prediction
        .to_i64()
        .ok_or_else(|| anyhow!("prediction {} does not fit into a pontuation", prediction))
}
