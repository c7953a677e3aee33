//! Root greeting endpoint.

use axum::Json;
use serde::Serialize;

pub const GREETING: &str = "Hello from Minikube";

/// Deployment revision reported to callers, bumped by hand on each rollout
pub const DEPLOY_VERSION: &str = "2";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RootResponse {
    pub message: &'static str,
    #[serde(rename = "Version")]
    pub version: &'static str,
}

pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        message: GREETING,
        version: DEPLOY_VERSION,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_greets_with_capitalized_version_key() {
        let Json(body) = index().await;
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"message":"Hello from Minikube","Version":"2"}"#
        );
    }
}
