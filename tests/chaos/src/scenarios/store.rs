//! Store-consistency scenarios: exact counts, filters, counted clears.

#[cfg(test)]
mod tests {
    use crate::harness::TestRelay;
    use futures_util::future::join_all;
    use reqwest::StatusCode;

    #[tokio::test]
    async fn n_successful_sends_yield_exactly_n_messages() {
        let relay = TestRelay::spawn().await;

        for i in 0..10 {
            let response = relay.send_message(&format!("message {i}"), "bob").await;
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(relay.messages(None).await.len(), 10);
    }

    #[tokio::test]
    async fn recipient_filter_returns_exactly_the_matching_subset() {
        let relay = TestRelay::spawn().await;

        for (message, recipient) in [
            ("one", "alice"),
            ("two", "bob"),
            ("three", "alice"),
            ("four", "carol"),
        ] {
            relay.send_message(message, recipient).await;
        }

        let alices = relay.messages(Some("alice")).await;
        assert_eq!(alices.len(), 2);
        assert!(alices.iter().all(|m| m["recipient"] == "alice"));

        assert_eq!(relay.messages(Some("bob")).await.len(), 1);
        assert!(relay.messages(Some("nobody")).await.is_empty());
        assert_eq!(relay.messages(None).await.len(), 4);
    }

    #[tokio::test]
    async fn clear_reports_the_exact_count_and_empties_the_store() {
        let relay = TestRelay::spawn().await;

        for _ in 0..7 {
            relay.send_message("payload", "bob").await;
        }

        let cleared = relay.clear_messages().await;
        assert_eq!(cleared["status"], "cleared");
        assert_eq!(cleared["removed"], 7);

        assert!(relay.messages(None).await.is_empty());

        let cleared_again = relay.clear_messages().await;
        assert_eq!(cleared_again["removed"], 0);
    }

    #[tokio::test]
    async fn concurrent_sends_are_all_stored_with_unique_ids() {
        let relay = TestRelay::spawn().await;

        let payloads: Vec<String> = (0..20).map(|i| format!("msg {i}")).collect();
        let sends = payloads.iter().map(|p| relay.send_message(p, "bob"));
        for response in join_all(sends).await {
            assert_eq!(response.status(), StatusCode::OK);
        }

        let messages = relay.messages(None).await;
        assert_eq!(messages.len(), 20);

        let mut ids: Vec<String> = messages
            .iter()
            .map(|m| m["id"].as_str().unwrap().to_string())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }
}
