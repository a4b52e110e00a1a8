//! Database metrics collection.
//!
//! Query timings are labelled by table and operation so the four content
//! tables show up as separate series.

use metrics::{counter, gauge, histogram};
use sqlx::SqlitePool;
use std::future::Future;
use std::time::Instant;

/// Repository operation kinds used as the `operation` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    FindById,
    Create,
    Count,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::FindById => "find_by_id",
            Operation::Create => "create",
            Operation::Count => "count",
        }
    }
}

/// Runs one query and records `database_query_duration_seconds{table, operation}`.
/// Failed queries also bump `database_query_errors_total`.
pub async fn timed<T, F>(
    table: &'static str,
    operation: Operation,
    query: F,
) -> Result<T, sqlx::Error>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    let start = Instant::now();
    let result = query.await;

    histogram!(
        "database_query_duration_seconds",
        "table" => table,
        "operation" => operation.as_str()
    )
    .record(start.elapsed().as_secs_f64());

    if result.is_err() {
        counter!(
            "database_query_errors_total",
            "table" => table,
            "operation" => operation.as_str()
        )
        .increment(1);
    }

    result
}

/// Publishes pool occupancy gauges. Called from the health endpoint.
pub fn record_pool_metrics(pool: &SqlitePool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();

    gauge!("sqlite_pool_connections", "state" => "active").set(size.saturating_sub(idle) as f64);
    gauge!("sqlite_pool_connections", "state" => "idle").set(idle as f64);
    gauge!("sqlite_pool_connections", "state" => "total").set(size as f64);
}
