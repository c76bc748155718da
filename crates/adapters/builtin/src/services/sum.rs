//! Sum — adds every numeric field of the input.

use serde_json::{Value, json};
use servicehub_domain::error::ServiceError;
use servicehub_domain::payload::Payload;
use servicehub_domain::service::Service;

/// Service returning `{"sum": <total>}` over all input fields.
///
/// Fields may be JSON numbers or numeric strings, so the service works the
/// same through query parameters and JSON bodies. Any other value fails the
/// call.
#[derive(Debug, Default)]
pub struct Sum;

impl Service for Sum {
    fn process(&self, input: Payload) -> Result<Payload, ServiceError> {
        let mut total = 0.0;
        for (field, value) in &input {
            total += as_number(field, value)?;
        }

        let mut output = Payload::new();
        output.insert("sum".to_string(), json!(total));
        Ok(output)
    }
}

fn as_number(field: &str, value: &Value) -> Result<f64, ServiceError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(ServiceError::invalid_field(field, "expected a finite number")),
    }
}
