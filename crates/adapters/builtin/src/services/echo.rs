//! Echo — returns its input unchanged.

use servicehub_domain::error::ServiceError;
use servicehub_domain::payload::Payload;
use servicehub_domain::service::Service;

/// Service returning the request input as its output.
#[derive(Debug, Default)]
pub struct Echo;

impl Service for Echo {
    fn process(&self, input: Payload) -> Result<Payload, ServiceError> {
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_return_input_unchanged() {
        let mut input = Payload::new();
        input.insert("a".to_string(), json!(1));
        input.insert("nested".to_string(), json!({"b": [true, null]}));

        assert_eq!(Echo.process(input.clone()).unwrap(), input);
    }

    #[test]
    fn should_echo_empty_input() {
        assert!(Echo.process(Payload::new()).unwrap().is_empty());
    }
}
