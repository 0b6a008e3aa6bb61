//! Database connection pool management
//!
//! The pool is built once at startup. Establishing it is retried a fixed
//! number of times; if the database stays unreachable, startup fails.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How often and how patiently to retry the initial connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub attempts: u32,
    /// Fixed pause between two attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            delay: Duration::from_secs(3),
        }
    }
}

/// Failure to establish the pool
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("unable to connect to database after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },
}

/// Create a PostgreSQL connection pool, retrying per `policy`.
///
/// # Example
///
/// ```ignore
/// let pool = connect_with_retry(&settings.database_url, 5, RetryPolicy::default()).await?;
/// ```
pub async fn connect_with_retry(
    database_url: &str,
    max_connections: u32,
    policy: RetryPolicy,
) -> Result<PgPool, ConnectError> {
    let pool = retry(policy, || create_pool_with_options(database_url, max_connections))
        .await
        .map_err(|source| ConnectError::Exhausted {
            attempts: policy.attempts.max(1),
            source,
        })?;

    tracing::info!(max_connections, "Connected to the database");
    Ok(pool)
}

/// Create a PostgreSQL connection pool with a single connection attempt.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run `op` until it succeeds or the policy's attempts are used up,
/// sleeping `policy.delay` between attempts. Returns the last error.
pub async fn retry<T, E, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, E>
where
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < attempts => {
                tracing::warn!(
                    attempt,
                    attempts,
                    delay_secs = policy.delay.as_secs_f64(),
                    error = %err,
                    "Unable to connect to database, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::error!(attempt, attempts, error = %err, "Unable to connect to database");
                return Err(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn retries_until_success() {
        let calls = AtomicU32::new(0);
        let started = Instant::now();

        let result: Result<&str, String> = retry(RetryPolicy::default(), || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err(format!("refused #{n}"))
                } else {
                    Ok("pool")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "pool");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // Two pauses of 3 seconds before the third attempt
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(6) && elapsed < Duration::from_secs(7));
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_five_attempts() {
        let calls = AtomicU32::new(0);
        let started = Instant::now();

        let result: Result<(), String> = retry(RetryPolicy::default(), || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Err(format!("refused #{n}")) }
        })
        .await;

        assert_eq!(result.unwrap_err(), "refused #5");
        assert_eq!(calls.load(Ordering::SeqCst), 5);
        // Four pauses, none after the final failure
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(12) && elapsed < Duration::from_secs(13));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_still_tries_once() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy {
            attempts: 0,
            delay: Duration::from_secs(1),
        };

        let result: Result<(), String> = retry(policy, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("down".to_string()) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = connect_with_retry(&url, DEFAULT_MAX_CONNECTIONS, RetryPolicy::default())
            .await
            .expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
