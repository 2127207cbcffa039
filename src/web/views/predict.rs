use poem::handler;
use poem::web::{Data, Json};

use crate::model::{predict_pontuation, LinearRegression};
use crate::prelude::*;
use crate::tracing::format_elapsed;
use crate::web::extract::JsonBody;
use crate::web::models::{PredictRequest, PredictResponse};

#[handler]
#[instrument(level = "info", skip_all)]
pub async fn post_predict(
    JsonBody(request): JsonBody<PredictRequest>,
    Data(model): Data<&Arc<LinearRegression>>,
) -> Result<Json<PredictResponse>> {
    let start_instant = Instant::now();
    let pontuation = predict_pontuation(model, request.study_hours)?;
    info!(request.study_hours, pontuation, elapsed = %format_elapsed(start_instant));
    Ok(Json(PredictResponse { pontuation }))
}
