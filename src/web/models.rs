use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// Prediction request body.
#[serde_as]
#[derive(Deserialize, Debug)]
pub struct PredictRequest {
    /// Accepts either a number or a string containing one.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub study_hours: f64,
}

#[derive(Serialize, Debug)]
pub struct PredictResponse {
    pub pontuation: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn parse_number_ok() -> Result {
        let request: PredictRequest = serde_json::from_str(
            // language=JSON
            r#"{"study_hours": 2.5}"#,
        )?;
        assert_eq!(request.study_hours, 2.5);
        Ok(())
    }

    #[test]
    fn parse_integer_ok() -> Result {
        let request: PredictRequest = serde_json::from_str(r#"{"study_hours": 0}"#)?;
        assert_eq!(request.study_hours, 0.0);
        Ok(())
    }

    #[test]
    fn parse_numeric_string_ok() -> Result {
        let request: PredictRequest = serde_json::from_str(r#"{"study_hours": "-3.25"}"#)?;
        assert_eq!(request.study_hours, -3.25);
        Ok(())
    }

    #[test]
    fn parse_extra_fields_ok() -> Result {
        let request: PredictRequest =
            serde_json::from_str(r#"{"study_hours": 1, "name": "Maria"}"#)?;
        assert_eq!(request.study_hours, 1.0);
        Ok(())
    }

    #[test]
    fn parse_invalid_fails() {
        for body in [
            r#"{}"#,
            r#"{"study_hours": "abc"}"#,
            r#"{"study_hours": null}"#,
            r#"{"study_hours": true}"#,
            r#"{"study_hours": [1.0]}"#,
        ] {
            assert!(serde_json::from_str::<PredictRequest>(body).is_err(), "{}", body);
        }
    }

    #[test]
    fn serialize_response_ok() -> Result {
        let response = serde_json::to_string(&PredictResponse { pontuation: 42 })?;
        assert_eq!(response, r#"{"pontuation":42}"#);
        Ok(())
    }
}
