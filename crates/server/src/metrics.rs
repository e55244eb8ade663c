use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static EMPLOYEES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "employee_registry_created_total",
        "Total employees created"
    )
    .expect("register created_total")
});

pub static EMPLOYEES_UPDATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "employee_registry_updated_total",
        "Total employees updated"
    )
    .expect("register updated_total")
});

pub static EMPLOYEES_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "employee_registry_deleted_total",
        "Total employees actually removed by delete requests"
    )
    .expect("register deleted_total")
});

pub static EMPLOYEE_NOT_FOUND_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "employee_registry_not_found_total",
        "Total lookups or updates that hit an unknown employee id"
    )
    .expect("register not_found_total")
});

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

/// Force registration so every series shows up in `/metrics` from the start.
pub fn register_all() {
    Lazy::force(&EMPLOYEES_CREATED_TOTAL);
    Lazy::force(&EMPLOYEES_UPDATED_TOTAL);
    Lazy::force(&EMPLOYEES_DELETED_TOTAL);
    Lazy::force(&EMPLOYEE_NOT_FOUND_TOTAL);
}
