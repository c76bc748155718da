//! Time — reports the current UTC time.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use servicehub_domain::error::ServiceError;
use servicehub_domain::payload::Payload;
use servicehub_domain::service::Service;

/// Service returning `{"now": "<RFC 3339 UTC timestamp>"}`. Input is ignored.
#[derive(Debug, Default)]
pub struct Time;

impl Service for Time {
    fn process(&self, _input: Payload) -> Result<Payload, ServiceError> {
        let mut output = Payload::new();
        output.insert(
            "now".to_string(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn should_return_parseable_current_time() {
        let before = Utc::now();
        let output = Time.process(Payload::new()).unwrap();
        let after = Utc::now();

        let now = output["now"].as_str().unwrap();
        let parsed = DateTime::parse_from_rfc3339(now).unwrap();
        // Millisecond precision: compare against truncated bounds.
        assert!(parsed.timestamp_millis() >= before.timestamp_millis());
        assert!(parsed.timestamp_millis() <= after.timestamp_millis());
    }

    #[test]
    fn should_use_utc_designator() {
        let output = Time.process(Payload::new()).unwrap();
        assert!(output["now"].as_str().unwrap().ends_with('Z'));
    }
}
