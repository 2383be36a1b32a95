use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static REGISTRY_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "class_registry_operations_total",
        "Registry operations completed successfully, by operation",
        &["op"]
    )
    .expect("register operations_total")
});

pub static REGISTRY_NOT_FOUND_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "class_registry_not_found_total",
        "Registry operations rejected because a student or class id was unknown"
    )
    .expect("register not_found_total")
});

pub fn record_operation(op: &str) {
    REGISTRY_OPERATIONS_TOTAL.with_label_values(&[op]).inc();
}

pub fn record_not_found() {
    REGISTRY_NOT_FOUND_TOTAL.inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    // 确保计数器在首次抓取前已注册
    Lazy::force(&REGISTRY_OPERATIONS_TOTAL);
    Lazy::force(&REGISTRY_NOT_FOUND_TOTAL);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
