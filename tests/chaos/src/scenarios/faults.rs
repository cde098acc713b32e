//! Failure-injection scenarios: the failure rate's extreme settings and
//! the operational bypass list.

#[cfg(test)]
mod tests {
    use crate::harness::TestRelay;
    use reqwest::StatusCode;

    const FAULT_BODY: &str = "Chaos Monkey says no!";

    #[tokio::test]
    async fn full_failure_rate_always_returns_the_fixed_500() {
        let relay = TestRelay::spawn().await;
        relay.set_chaos(1.0, 0, false).await;

        for _ in 0..10 {
            let response = relay.send_message("doomed", "bob").await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response.text().await.unwrap(), FAULT_BODY);
        }
    }

    #[tokio::test]
    async fn zero_failure_rate_never_fails() {
        let relay = TestRelay::spawn().await;
        relay.set_chaos(0.0, 0, false).await;

        for _ in 0..50 {
            let response = relay.send_message("steady", "bob").await;
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn operational_endpoints_survive_full_chaos() {
        let relay = TestRelay::spawn().await;
        relay.set_chaos(1.0, 0, false).await;

        let health = relay.health().await;
        assert_eq!(health.status(), StatusCode::OK);

        // Log retrieval works, and records the injected failures.
        relay.send_message("doomed", "bob").await;
        let logs = relay.logs().await;
        assert!(logs.iter().any(|l| l.contains("Chaos: simulated 500")));

        // The chaos endpoint itself stays reachable: an operator can always
        // dial the failure rate back down.
        let response = relay.set_chaos(0.0, 0, false).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = relay.send_message("recovered", "bob").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn chaos_failed_requests_mutate_nothing() {
        let relay = TestRelay::spawn().await;
        relay.set_chaos(1.0, 0, false).await;

        for _ in 0..5 {
            relay.send_message("doomed", "bob").await;
        }

        relay.set_chaos(0.0, 0, false).await;
        assert!(relay.messages(None).await.is_empty());
    }

    #[tokio::test]
    async fn out_of_range_failure_rate_is_rejected() {
        let relay = TestRelay::spawn().await;

        let response = relay.set_chaos(2.0, 0, false).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // The previous (default) config stays in effect.
        let response = relay.send_message("fine", "bob").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
