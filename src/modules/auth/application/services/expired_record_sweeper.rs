use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::auth::application::ports::outgoing::{AdapterError, AuthAdapter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub sessions_removed: u64,
    pub verification_tokens_removed: u64,
}

/// Periodically removes sessions and verification tokens whose expiry has
/// passed. Lookups already ignore expired sessions, so this only keeps the
/// tables from growing.
#[derive(Clone)]
pub struct ExpiredRecordSweeper {
    adapter: Arc<dyn AuthAdapter>,
}

impl ExpiredRecordSweeper {
    pub fn new(adapter: Arc<dyn AuthAdapter>) -> Self {
        Self { adapter }
    }

    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<SweepReport, AdapterError> {
        let sessions_removed = self.adapter.delete_expired_sessions(now).await?;
        let verification_tokens_removed =
            self.adapter.delete_expired_verification_tokens(now).await?;

        Ok(SweepReport {
            sessions_removed,
            verification_tokens_removed,
        })
    }

    /// Runs until the task is dropped. A failed pass is logged and retried on
    /// the next tick.
    #[cfg(not(tarpaulin_include))]
    pub async fn run_every(self, period: Duration) {
        let mut ticker = tokio::time::interval(period);

        loop {
            ticker.tick().await;

            match self.sweep(Utc::now()).await {
                Ok(report) => info!(
                    sessions = report.sessions_removed,
                    verification_tokens = report.verification_tokens_removed,
                    "Expired record sweep finished"
                ),
                Err(e) => error!(error = %e, "Expired record sweep failed"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::mocks::MockAdapter;
    use chrono::TimeZone;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn sweep_reports_both_counts() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let mut adapter = MockAdapter::new();
        adapter
            .expect_delete_expired_sessions()
            .with(eq(now))
            .times(1)
            .returning(|_| Ok(4));
        adapter
            .expect_delete_expired_verification_tokens()
            .with(eq(now))
            .times(1)
            .returning(|_| Ok(1));

        let sweeper = ExpiredRecordSweeper::new(Arc::new(adapter));

        // Act
        let report = sweeper.sweep(now).await.unwrap();

        // Assert
        assert_eq!(
            report,
            SweepReport {
                sessions_removed: 4,
                verification_tokens_removed: 1,
            }
        );
    }

    #[tokio::test]
    async fn sweep_stops_at_first_failure() {
        let mut adapter = MockAdapter::new();
        adapter
            .expect_delete_expired_sessions()
            .returning(|_| Err(AdapterError::Storage("down".to_string())));
        adapter.expect_delete_expired_verification_tokens().never();

        let sweeper = ExpiredRecordSweeper::new(Arc::new(adapter));

        let result = sweeper.sweep(Utc::now()).await;

        assert_eq!(result, Err(AdapterError::Storage("down".to_string())));
    }
}
