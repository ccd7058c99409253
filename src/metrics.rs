use lazy_static::lazy_static;
use prometheus::{IntCounterVec, HistogramVec, register_int_counter_vec, register_histogram_vec, opts};

const HTTP_RESPONSE_TIME_BUCKETS: &[f64; 8] = &[
    0.5, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0
];

lazy_static! {
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        opts!("http_requests_total", "HTTP requests total"),
        &[]
    )
    .expect("Can't create a metric");
    pub static ref HTTP_REQUESTS_ERRORS: IntCounterVec = register_int_counter_vec!(
        opts!("http_requests_errors", "HTTP requests errors"),
        &[]
    )
    .expect("Can't create a metric");
    pub static ref HTTP_RESPONSE_TIME_SECONDS: HistogramVec = register_histogram_vec!(
        "http_response_time_seconds",
        "HTTP response times",
        &[],
        HTTP_RESPONSE_TIME_BUCKETS.to_vec()
    ).expect("Can't create a metric");
    pub static ref ARCHIVE_RUNS_TOTAL: IntCounterVec = register_int_counter_vec!(
        opts!("archive_runs_total", "Archive runs by outcome"),
        &["outcome"]
    )
    .expect("Can't create a metric");
    pub static ref ARCHIVED_SLIDES_TOTAL: IntCounterVec = register_int_counter_vec!(
        opts!("archived_slides_total", "Slides copied or deleted by archive runs"),
        &["kind"]
    )
    .expect("Can't create a metric");
}
