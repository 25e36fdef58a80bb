//! Query client metrics

use prometheus::{
    register_counter_vec, register_histogram_vec, register_int_counter, CounterVec, HistogramVec,
    IntCounter,
};

lazy_static::lazy_static! {
    /// JSON-RPC requests by method and outcome
    pub static ref RPC_REQUESTS_TOTAL: CounterVec = register_counter_vec!(
        "ledger_query_rpc_requests_total",
        "Total JSON-RPC requests to the ledger node",
        &["method", "status"]
    )
    .unwrap();

    /// JSON-RPC latency by method
    pub static ref RPC_REQUEST_DURATION: HistogramVec = register_histogram_vec!(
        "ledger_query_rpc_request_duration_seconds",
        "JSON-RPC request duration",
        &["method"]
    )
    .unwrap();

    /// Pages requested across all walks
    pub static ref PAGES_FETCHED: IntCounter = register_int_counter!(
        "ledger_query_pages_fetched_total",
        "Pages requested by pagination walks"
    )
    .unwrap();
}
