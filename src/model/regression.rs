use crate::math::dot;
use crate::model::artifact::Artifact;
use crate::prelude::*;

/// Ordinary linear regression: `y = coefficients · x + intercept`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl TryFrom<Artifact> for LinearRegression {
    type Error = anyhow::Error;

    fn try_from(artifact: Artifact) -> Result<Self> {
        ensure!(!artifact.coef.is_empty(), "the model has no coefficients");
        ensure!(
            artifact.coef.iter().all(|coefficient| coefficient.is_finite()),
            "the model has non-finite coefficients"
        );
        ensure!(artifact.intercept.is_finite(), "the model has a non-finite intercept");
        Ok(Self {
            coefficients: artifact.coef,
            intercept: artifact.intercept,
        })
    }
}

impl LinearRegression {
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predicts a value per each row of the input matrix.
    pub fn predict<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<Vec<f64>> {
        rows.iter()
            .map(|row| self.predict_row(row.as_ref()))
            .collect()
    }

    fn predict_row(&self, x: &[f64]) -> Result<f64> {
        ensure!(
            x.len() == self.n_features(),
            "expected {} features, got {}",
            self.n_features(),
            x.len()
        );
        Ok(dot(&self.coefficients, x) + self.intercept)
    }
}
