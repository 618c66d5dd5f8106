use anyhow::Result;
use tracing::info;

use crate::app_state::AppState;
use crate::errors::AppError;

/// Runs only with `--once`: one echo snapshot to stdout, no listener
pub async fn run_once(state: &AppState) -> Result<()> {
    info!("🔧 One-shot mode: building a single echo snapshot...");

    println!("{}", snapshot_json(state).await?);

    info!("Snapshot written. Exiting...");
    Ok(())
}

pub async fn snapshot_json(state: &AppState) -> Result<String> {
    let resp = state
        .echo_service
        .echo()
        .await
        .map_err(AppError::from)?;

    Ok(serde_json::to_string_pretty(&resp)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::client::error::ClusterError;
    use crate::testing::{app_state, FakePodSource};

    #[tokio::test]
    async fn snapshot_matches_echo_body() {
        let cfg = AppConfig {
            port: 9090,
            pod_name: "foo".into(),
            pod_ip: "10.0.0.5".into(),
            ..Default::default()
        };
        let state = app_state(cfg, FakePodSource::pods(&[("a", "1.1.1.1")]), &["10.1.0.4"]);

        let json: serde_json::Value =
            serde_json::from_str(&snapshot_json(&state).await.unwrap()).unwrap();

        assert_eq!(json["podInfos"], serde_json::json!(["a - 1.1.1.1"]));
        assert_eq!(json["hostIP"], "10.1.0.4");
    }

    #[tokio::test]
    async fn snapshot_surfaces_cluster_failure() {
        let state = app_state(
            AppConfig::default(),
            FakePodSource::failing(ClusterError::Client("invalid CA bundle".into())),
            &[],
        );

        let err = snapshot_json(&state).await.unwrap_err();
        assert_eq!(err.to_string(), "Cluster client error: invalid CA bundle");
    }
}
