//! Trained model artifact.
//!
//! The training toolchain exports the fitted coefficients either as JSON or as a Python pickle
//! of the same mapping: `{"coef": [...], "intercept": ...}`.

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModelFormat {
    Json,
    Pickle,
}

impl ModelFormat {
    /// `.json` files are JSON, everything else is expected to be a pickle.
    pub fn infer(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pickle,
        }
    }
}

#[derive(Deserialize, Debug, PartialEq)]
#[cfg_attr(test, derive(serde::Serialize))]
pub struct Artifact {
    #[serde(alias = "coef_")]
    pub coef: Vec<f64>,

    #[serde(default, alias = "intercept_")]
    pub intercept: f64,
}

impl Artifact {
    pub fn from_slice(bytes: &[u8], format: ModelFormat) -> Result<Self> {
        match format {
            ModelFormat::Json => {
                serde_json::from_slice(bytes).context("failed to decode the JSON artifact")
            }
            ModelFormat::Pickle => serde_pickle::from_slice(bytes, Default::default())
                .context("failed to decode the pickled artifact"),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// `pickle.dumps({"coef": [9.75], "intercept": 2.5}, protocol=2)`
    pub const PICKLE_PROTOCOL_2: &[u8] = b"\x80\x02\x7d\x71\x00\x28\x58\x04\x00\x00\x00\x63\x6f\x65\x66\x71\x01\x5d\x71\x02\x47\x40\x23\x80\x00\x00\x00\x00\x00\x61\x58\x09\x00\x00\x00\x69\x6e\x74\x65\x72\x63\x65\x70\x74\x71\x03\x47\x40\x04\x00\x00\x00\x00\x00\x00\x75\x2e";

    /// `pickle.dumps({"coef": [9.75], "intercept": 2.5}, protocol=4)`
    pub const PICKLE_PROTOCOL_4: &[u8] = b"\x80\x04\x95\x2d\x00\x00\x00\x00\x00\x00\x00\x7d\x94\x28\x8c\x04\x63\x6f\x65\x66\x94\x5d\x94\x47\x40\x23\x80\x00\x00\x00\x00\x00\x61\x8c\x09\x69\x6e\x74\x65\x72\x63\x65\x70\x74\x94\x47\x40\x04\x00\x00\x00\x00\x00\x00\x75\x2e";

    /// `pickle.dumps({"coef": [9.75], "intercept": 2.5}, protocol=5)`
    pub const PICKLE_PROTOCOL_5: &[u8] = b"\x80\x05\x95\x2d\x00\x00\x00\x00\x00\x00\x00\x7d\x94\x28\x8c\x04\x63\x6f\x65\x66\x94\x5d\x94\x47\x40\x23\x80\x00\x00\x00\x00\x00\x61\x8c\x09\x69\x6e\x74\x65\x72\x63\x65\x70\x74\x94\x47\x40\x04\x00\x00\x00\x00\x00\x00\x75\x2e";

    #[test]
    fn infer_format_ok() {
        assert_eq!(ModelFormat::infer(Path::new("model.json")), ModelFormat::Json);
        assert_eq!(ModelFormat::infer(Path::new("MODEL.JSON")), ModelFormat::Json);
        assert_eq!(ModelFormat::infer(Path::new("./pontuation_model.pkl")), ModelFormat::Pickle);
        assert_eq!(ModelFormat::infer(Path::new("model")), ModelFormat::Pickle);
    }

    #[test]
    fn parse_json_ok() -> Result {
        let artifact = Artifact::from_slice(
            // language=JSON
            br#"{"coef": [9.7], "intercept": 2.48}"#,
            ModelFormat::Json,
        )?;
        assert_eq!(artifact, Artifact { coef: vec![9.7], intercept: 2.48 });
        Ok(())
    }

    #[test]
    fn parse_json_aliases_ok() -> Result {
        let artifact = Artifact::from_slice(
            // language=JSON
            br#"{"coef_": [1, 2], "intercept_": 3}"#,
            ModelFormat::Json,
        )?;
        assert_eq!(artifact, Artifact { coef: vec![1.0, 2.0], intercept: 3.0 });
        Ok(())
    }

    #[test]
    fn parse_json_missing_intercept_ok() -> Result {
        let artifact = Artifact::from_slice(br#"{"coef": [0.5]}"#, ModelFormat::Json)?;
        assert_eq!(artifact.intercept, 0.0);
        Ok(())
    }

    #[test]
    fn parse_json_missing_coef_fails() {
        assert!(Artifact::from_slice(br#"{"intercept": 1.0}"#, ModelFormat::Json).is_err());
    }

    #[test]
    fn parse_pickle_ok() -> Result {
        let expected = Artifact { coef: vec![9.7], intercept: 2.48 };
        let bytes = serde_pickle::to_vec(&expected, serde_pickle::SerOptions::new())?;
        assert_eq!(Artifact::from_slice(&bytes, ModelFormat::Pickle)?, expected);
        Ok(())
    }

    #[test]
    fn parse_python_pickles_ok() -> Result {
        let expected = Artifact::from_slice(
            // language=JSON
            br#"{"coef": [9.75], "intercept": 2.5}"#,
            ModelFormat::Json,
        )?;
        for bytes in [PICKLE_PROTOCOL_2, PICKLE_PROTOCOL_4, PICKLE_PROTOCOL_5] {
            assert_eq!(Artifact::from_slice(bytes, ModelFormat::Pickle)?, expected);
        }
        Ok(())
    }

    #[test]
    fn parse_pickle_garbage_fails() {
        assert!(Artifact::from_slice(b"definitely not a pickle", ModelFormat::Pickle).is_err());
    }
}
