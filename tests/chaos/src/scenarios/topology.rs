//! Aggregate-view scenarios: a small topology watched by the dashboard.

#[cfg(test)]
mod tests {
    use crate::harness::{spawn_dashboard, spawn_discovery, spawn_ledger, TestRelay};
    use reqwest::StatusCode;

    #[tokio::test]
    async fn dashboard_reports_every_node_online() {
        let relay = TestRelay::spawn().await;
        let discovery = spawn_discovery().await;
        let ledger = spawn_ledger().await;

        let dashboard = spawn_dashboard(vec![
            ("relay1", relay.base_url.clone(), true),
            ("discovery", discovery.base_url.clone(), false),
            ("ledger", ledger.base_url.clone(), false),
        ])
        .await;

        let status: serde_json::Value = reqwest::get(format!("{}/api/status", dashboard.base_url))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(status["relay1"], "online");
        assert_eq!(status["discovery"], "online");
        assert_eq!(status["ledger"], "online");
    }

    #[tokio::test]
    async fn a_relay_under_full_chaos_still_reads_online() {
        // Health checks bypass the interceptor, so chaos never hides a node
        // from the operator's view.
        let relay = TestRelay::spawn().await;
        relay.set_chaos(1.0, 0, false).await;

        let dashboard = spawn_dashboard(vec![("relay1", relay.base_url.clone(), true)]).await;

        let status: serde_json::Value = reqwest::get(format!("{}/api/status", dashboard.base_url))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(status["relay1"], "online");
    }

    #[tokio::test]
    async fn a_stopped_node_reads_offline_without_failing_the_aggregate() {
        let relay = TestRelay::spawn().await;
        let ledger = spawn_ledger().await;

        let dashboard = spawn_dashboard(vec![
            ("relay1", relay.base_url.clone(), true),
            ("ledger", ledger.base_url.clone(), false),
        ])
        .await;

        relay.shutdown();
        // Give the aborted serve task a beat to drop its listener.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let response = reqwest::get(format!("{}/api/status", dashboard.base_url))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let status: serde_json::Value = response.json().await.unwrap();
        assert_eq!(status["relay1"], "offline");
        assert_eq!(status["ledger"], "online");
    }

    #[tokio::test]
    async fn dashboard_aggregates_node_logs() {
        let relay = TestRelay::spawn().await;
        relay.send_message("hello world", "bob").await;

        let dashboard = spawn_dashboard(vec![("relay1", relay.base_url.clone(), true)]).await;

        let logs: serde_json::Value = reqwest::get(format!("{}/api/logs", dashboard.base_url))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let relay_lines = logs["relay1"].as_array().unwrap();
        assert!(relay_lines
            .iter()
            .any(|l| l.as_str().unwrap().contains("Relay received message for bob")));
    }

    #[tokio::test]
    async fn chaos_can_be_driven_through_the_dashboard() {
        let relay = TestRelay::spawn().await;
        let dashboard = spawn_dashboard(vec![("relay1", relay.base_url.clone(), true)]).await;

        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/api/chaos/relay1", dashboard.base_url))
            .json(&serde_json::json!({
                "failure_rate": 1.0,
                "latency_ms": 0,
                "corrupt_bytes": false,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "updated");
        assert_eq!(body["config"]["failure_rate"], 1.0);

        // The proxied update really landed on the relay.
        let doomed = relay.send_message("doomed", "bob").await;
        assert_eq!(doomed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn dashboard_surfaces_relay_validation_errors() {
        let relay = TestRelay::spawn().await;
        let dashboard = spawn_dashboard(vec![("relay1", relay.base_url.clone(), true)]).await;

        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/api/chaos/relay1", dashboard.base_url))
            .json(&serde_json::json!({
                "failure_rate": 9.0,
                "latency_ms": 0,
                "corrupt_bytes": false,
            }))
            .send()
            .await
            .unwrap();

        // The relay's 400 passes through the proxy unchanged.
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
