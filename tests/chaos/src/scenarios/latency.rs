//! Latency-injection scenarios.

#[cfg(test)]
mod tests {
    use crate::harness::TestRelay;
    use reqwest::StatusCode;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn configured_latency_is_a_floor_on_round_trips() {
        let relay = TestRelay::spawn().await;
        relay.set_chaos(0.0, 500, false).await;

        let start = Instant::now();
        let response = relay.send_message("slow", "bob").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            start.elapsed() >= Duration::from_millis(500),
            "round trip finished in {:?}",
            start.elapsed()
        );
    }

    #[tokio::test]
    async fn zero_latency_adds_no_delay() {
        let relay = TestRelay::spawn().await;
        relay.set_chaos(0.0, 0, false).await;

        let start = Instant::now();
        relay.send_message("fast", "bob").await;
        // Loopback round trips are sub-millisecond; anything near the
        // injected-latency scale means the latency phase fired.
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn latency_applies_before_the_failure_roll() {
        // Even requests doomed by a 1.0 failure rate observe the delay.
        let relay = TestRelay::spawn().await;
        relay.set_chaos(1.0, 300, false).await;

        let start = Instant::now();
        let response = relay.send_message("slow and doomed", "bob").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test]
    async fn one_slow_request_does_not_block_another() {
        let relay = TestRelay::spawn().await;
        relay.set_chaos(0.0, 400, false).await;

        // Two concurrent requests each wait their own 400ms; if the delay
        // serialized them the pair would take 800ms.
        let start = Instant::now();
        let (a, b) = tokio::join!(
            relay.send_message("one", "bob"),
            relay.send_message("two", "bob"),
        );
        assert_eq!(a.status(), StatusCode::OK);
        assert_eq!(b.status(), StatusCode::OK);

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(400));
        assert!(
            elapsed < Duration::from_millis(750),
            "concurrent requests serialized: {elapsed:?}"
        );
    }

    #[tokio::test]
    async fn bypassed_endpoints_skip_the_latency_phase() {
        let relay = TestRelay::spawn().await;
        relay.set_chaos(0.0, 500, false).await;

        let start = Instant::now();
        relay.health().await;
        relay.logs().await;
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
