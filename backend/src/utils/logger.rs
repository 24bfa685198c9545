use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tracing::{error, info, warn};

const SERVICE: &str = "interviews-service";

#[derive(Debug)]
pub struct StructuredLogger;

impl StructuredLogger {
    pub fn log_database_query(&self, query: &str, duration_ms: u128, result_count: Option<usize>) {
        let query = query.split_whitespace().collect::<Vec<_>>().join(" ");
        let log_entry = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "event_type": "database_query",
            "query_hash": format!("{:x}", md5::compute(&query)),
            "query_preview": preview(&query),
            "duration_ms": duration_ms,
            "result_count": result_count,
            "service": SERVICE
        });

        if duration_ms > 1000 {
            warn!("Slow query detected: {}", log_entry);
        } else {
            info!("{}", log_entry);
        }
    }

    pub fn log_error(&self, error: &str, context: HashMap<String, serde_json::Value>) {
        let mut log_entry = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "event_type": "error",
            "error_message": error,
            "service": SERVICE
        });

        for (key, value) in context {
            log_entry[key] = value;
        }

        error!("{}", log_entry);
    }

    pub fn log_business_event(
        &self,
        event_name: &str,
        subject: Option<&serde_json::Value>,
        metadata: HashMap<String, serde_json::Value>,
    ) {
        let mut log_entry = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "event_type": "business_event",
            "event_name": event_name,
            "subject": subject,
            "service": SERVICE
        });

        for (key, value) in metadata {
            log_entry[key] = value;
        }

        info!("{}", log_entry);
    }
}

fn preview(query: &str) -> String {
    match query.char_indices().nth(100) {
        Some((end, _)) => format!("{}...", &query[..end]),
        None => query.to_string(),
    }
}

pub static LOGGER: StructuredLogger = StructuredLogger;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_queries() {
        let query = "x".repeat(150);
        let preview = preview(&query);
        assert_eq!(preview.len(), 103);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_keeps_short_queries() {
        assert_eq!(preview("SELECT 1"), "SELECT 1");
    }
}
