//! Seeded-dice reproducibility scenarios.

#[cfg(test)]
mod tests {
    use crate::harness::TestRelay;
    use localnet_relay::config::{ChaosSection, Config};
    use reqwest::StatusCode;

    fn seeded_config(seed: u64) -> Config {
        Config {
            chaos: ChaosSection {
                failure_rate: 0.5,
                seed: Some(seed),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    async fn status_sequence(relay: &TestRelay, calls: usize) -> Vec<StatusCode> {
        let mut statuses = Vec::with_capacity(calls);
        for _ in 0..calls {
            statuses.push(relay.send_message("coin flip", "bob").await.status());
        }
        statuses
    }

    #[tokio::test]
    async fn same_seed_reproduces_the_accept_fail_sequence() {
        let relay_a = TestRelay::spawn_with(seeded_config(1234)).await;
        let relay_b = TestRelay::spawn_with(seeded_config(1234)).await;

        let seq_a = status_sequence(&relay_a, 30).await;
        let seq_b = status_sequence(&relay_b, 30).await;

        assert_eq!(seq_a, seq_b);
        // At a 0.5 rate over 30 rolls both outcomes show up.
        assert!(seq_a.contains(&StatusCode::OK));
        assert!(seq_a.contains(&StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn stored_count_matches_the_accepted_calls() {
        let relay = TestRelay::spawn_with(seeded_config(99)).await;

        let accepted = status_sequence(&relay, 40)
            .await
            .iter()
            .filter(|s| **s == StatusCode::OK)
            .count();

        assert_eq!(relay.messages(None).await.len(), accepted);
    }
}
