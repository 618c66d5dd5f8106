//! Echo controller: connects the /echo route to the echo usecase

use axum::extract::State;
use axum::Json;
use tracing::warn;

use crate::api::dto::echo_dto::EchoResponse;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct EchoController;

impl EchoController {
    pub async fn echo(State(state): State<AppState>) -> Result<Json<EchoResponse>, AppError> {
        match state.echo_service.echo().await {
            Ok(resp) => Ok(Json(resp)),
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "Echo request failed");
                Err(err.into())
            }
        }
    }
}
