//! Timeout enforcement for remote calls.
//!
//! # Responsibilities
//! - Bound every analysis-service call with a deadline
//! - Turn an expired deadline into a `RemoteCallError`
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timed-out calls surface as 504 Gateway Timeout
//! - The abandoned call is dropped, not left running

use std::future::Future;
use std::time::Duration;

use crate::analyzer::RemoteCallError;

/// Run `call`, giving up after `limit`.
pub async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, RemoteCallError>
where
    F: Future<Output = Result<T, RemoteCallError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(limit_ms = limit.as_millis() as u64, "Remote call timed out");
            Err(RemoteCallError::timeout(Some(limit)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_fast_call_passes_through() {
        let out = bounded(Duration::from_secs(1), async { Ok::<_, RemoteCallError>(7) }).await;
        assert_eq!(out, Ok(7));
    }

    #[tokio::test]
    async fn test_slow_call_times_out() {
        let out: Result<(), _> = bounded(Duration::from_millis(50), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;

        let err = out.unwrap_err();
        assert_eq!(err.status, Some(StatusCode::GATEWAY_TIMEOUT));
    }
}
