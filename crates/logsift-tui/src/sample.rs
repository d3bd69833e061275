//! Fixed sample data for demoing the formatter without a log file.

/// Illustrative multi-format sample: four access-log lines and one
/// JSON line
pub const SAMPLE_LOG: &str = r#"127.0.0.1 - - [10/Nov/2025:12:34:56 +0900] "GET / HTTP/1.1" 200 1234 "-" "curl/7.79.1"
127.0.0.1 - - [10/Nov/2025:12:35:01 +0900] "GET /admin HTTP/1.1" 403 321 "-" "Mozilla/5.0"
127.0.0.1 - - [10/Nov/2025:12:35:10 +0900] "GET /healthcheck HTTP/1.1" 200 12 "-" "kube-probe/1.24"
192.168.0.10 - - [10/Nov/2025:12:36:00 +0900] "POST /api/login HTTP/1.1" 500 0 "-" "Mozilla/5.0"
{"time":"2025-11-10T03:36:00Z","level":"error","msg":"DB timeout","path":"/api/order","status":504}"#;
