//! Echo routes (e.g., /echo)

use axum::{routing::get, Router};
use crate::api::controller::echo::EchoController;
use crate::app_state::AppState;

pub fn echo_routes() -> Router<AppState> {
    Router::new().route("/echo", get(EchoController::echo))
}
