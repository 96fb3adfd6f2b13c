//! Timed suspension used between quorum polling rounds.

use std::time::Duration;

use async_trait::async_trait;

/// Awaitable delay. Injected so tests can drive rounds without real time.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn after(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn after(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tokio_sleeper_waits_at_least_the_duration() {
        let start = tokio::time::Instant::now();
        TokioSleeper.after(Duration::from_millis(5)).await;
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
