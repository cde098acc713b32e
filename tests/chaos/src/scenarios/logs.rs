//! Log-ring retention scenarios.

#[cfg(test)]
mod tests {
    use crate::harness::TestRelay;

    #[tokio::test]
    async fn ring_keeps_the_newest_fifty_entries() {
        let relay = TestRelay::spawn().await;

        // 51 log-worthy operations: every accepted chaos update appends one
        // line. Distinct latency values make each line identifiable.
        for i in 0..51u64 {
            relay.set_chaos(0.0, i, false).await;
        }

        let logs = relay.logs().await;
        assert_eq!(logs.len(), 50);

        // The oldest of the 51 is gone, the newest is present.
        assert!(!logs.iter().any(|l| l.contains("latency_ms=0 ")));
        assert!(logs[0].contains("latency_ms=1 "));
        assert!(logs[49].contains("latency_ms=50 "));
    }

    #[tokio::test]
    async fn log_lines_carry_a_clock_prefix() {
        let relay = TestRelay::spawn().await;
        relay.send_message("hello there", "bob").await;

        let logs = relay.logs().await;
        assert_eq!(logs.len(), 1);
        // "[HH:MM:SS] ..."
        let line = &logs[0];
        assert_eq!(&line[0..1], "[");
        assert_eq!(&line[9..11], "] ");
        assert!(line[1..9].chars().all(|c| c.is_ascii_digit() || c == ':'));
    }

    #[tokio::test]
    async fn logs_are_ordered_oldest_first() {
        let relay = TestRelay::spawn().await;

        relay.send_message("first message", "alice").await;
        relay.send_message("second message", "bob").await;
        relay.clear_messages().await;

        let logs = relay.logs().await;
        assert_eq!(logs.len(), 3);
        assert!(logs[0].contains("for alice"));
        assert!(logs[1].contains("for bob"));
        assert!(logs[2].contains("Cleared 2"));
    }
}
