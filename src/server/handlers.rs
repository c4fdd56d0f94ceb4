//! Request handlers
//!
//! Parsing errors are converted to each endpoint's error shape at this
//! boundary; nothing below it ever sees a malformed request, and no
//! request error crashes the process.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::features::FeatureVector;
use crate::pipeline::Prediction;

use super::AppState;

/// Form-encoded request body for `POST /predict`
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    /// Comma-separated feature values, same order as training
    pub features: String,
}

/// JSON request body for `POST /api/predict`
#[derive(Debug, Deserialize)]
pub struct ApiPredictRequest {
    pub features: Vec<f64>,
}

/// JSON success response for `POST /api/predict`
#[derive(Debug, Serialize)]
pub struct ApiPredictResponse {
    pub linear_prediction: f64,
    pub lasso_prediction: f64,
}

/// JSON error response for `POST /api/predict`
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

/// `GET /` - static HTML input form
pub async fn home() -> Html<&'static str> {
    Html(
        r#"
        <h1>Crypto Price Prediction</h1>
        <form method="POST" action="/predict">
            <p>Enter comma-separated feature values (same order as training):</p>
            <input type="text" name="features" style="width:400px">
            <input type="submit" value="Predict">
        </form>
    "#,
    )
}

/// `POST /predict` - web form endpoint
///
/// Always answers 200; failures are rendered as an inline `Error: ...`
/// string, matching the form contract.
pub async fn predict_form(
    State(pipeline): State<AppState>,
    form: Result<Form<PredictForm>, FormRejection>,
) -> Html<String> {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return Html(format!("Error: {}", rejection.body_text())),
    };

    let result = FeatureVector::parse_csv(&form.features)
        .and_then(|vector| pipeline.infer(&vector));

    match result {
        Ok(prediction) => Html(render_results(&prediction)),
        Err(e) => {
            debug!(error = %e, "form prediction failed");
            Html(format!("Error: {}", e))
        }
    }
}

/// `POST /api/predict` - JSON endpoint
///
/// 200 with both predictions on success, 400 with an `error` key on any
/// failure, including bodies axum itself rejects.
pub async fn predict_api(
    State(pipeline): State<AppState>,
    body: Result<Json<ApiPredictRequest>, JsonRejection>,
) -> Result<Json<ApiPredictResponse>, (StatusCode, Json<ApiError>)> {
    let Json(request) = body.map_err(|rejection| bad_request(rejection.body_text()))?;

    let vector =
        FeatureVector::from_values(request.features).map_err(|e| bad_request(e.to_string()))?;

    let prediction = pipeline
        .infer(&vector)
        .map_err(|e| bad_request(e.to_string()))?;

    Ok(Json(ApiPredictResponse {
        linear_prediction: prediction.linear,
        lasso_prediction: prediction.lasso,
    }))
}

fn render_results(prediction: &Prediction) -> String {
    format!(
        r#"
        <h2>Prediction Results</h2>
        <p><strong>Linear Regression:</strong> {:.4}</p>
        <p><strong>Lasso Regression:</strong> {:.4}</p>
        <a href="/">Go Back</a>
    "#,
        prediction.linear, prediction.lasso
    )
}

fn bad_request(message: String) -> (StatusCode, Json<ApiError>) {
    debug!(error = %message, "api prediction failed");
    (StatusCode::BAD_REQUEST, Json(ApiError { error: message }))
}
