//! Tool handler: context in, serialized verdict out

use std::sync::Arc;

use oversize_domain::{check_package, EvaluationObserver, NoopObserver};
use oversize_types::EvaluationError;
use serde_json::{Map, Value};

use crate::tool::response::{RejectionPayload, ToolResponse};

/// Handles `check_package_oversized` invocations.
///
/// Stateless apart from the observer; one instance can serve any number of
/// calls, from any thread.
#[derive(Clone)]
pub struct PackageCheckTool {
    observer: Arc<dyn EvaluationObserver>,
    pretty: bool,
}

impl Default for PackageCheckTool {
    fn default() -> Self {
        Self::new(Arc::new(NoopObserver))
    }
}

impl PackageCheckTool {
    pub fn new(observer: Arc<dyn EvaluationObserver>) -> Self {
        Self {
            observer,
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Handle a raw context string and return the serialized response.
    pub fn handle(&self, context: &str) -> String {
        self.render(&self.invoke(context))
    }

    /// Serialize a response using this tool's formatting.
    pub fn render(&self, response: &ToolResponse) -> String {
        response.to_json(self.pretty)
    }

    pub fn invoke(&self, context: &str) -> ToolResponse {
        match serde_json::from_str::<Value>(context) {
            Ok(value) => self.handle_value(&value),
            Err(_) => self.reject(EvaluationError::MalformedInput),
        }
    }

    /// Handle a context the host has already parsed.
    pub fn handle_value(&self, context: &Value) -> ToolResponse {
        let Value::Object(record) = context else {
            return self.reject(EvaluationError::UnexpectedFailure(format!(
                "context must be an object, found {}",
                value_kind(context)
            )));
        };
        let empty = Map::new();
        let arguments = match record.get("arguments") {
            None => &empty,
            Some(Value::Object(arguments)) => arguments,
            Some(other) => {
                return self.reject(EvaluationError::UnexpectedFailure(format!(
                    "arguments must be an object, found {}",
                    value_kind(other)
                )))
            }
        };
        check_package(arguments, self.observer.as_ref()).into()
    }

    fn reject(&self, err: EvaluationError) -> ToolResponse {
        self.observer.on_rejected(&err);
        ToolResponse::Rejected(RejectionPayload::from(&err))
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oversize_domain::EvaluationResult;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingObserver {
        events: Mutex<Vec<String>>,
    }

    impl EvaluationObserver for CountingObserver {
        fn on_evaluated(&self, result: &EvaluationResult) {
            self.events
                .lock()
                .unwrap()
                .push(format!("evaluated:{}", result.oversized));
        }

        fn on_rejected(&self, error: &EvaluationError) {
            self.events
                .lock()
                .unwrap()
                .push(format!("rejected:{}", error.kind()));
        }
    }

    fn error_of(response: ToolResponse) -> String {
        match response {
            ToolResponse::Rejected(payload) => payload.error,
            ToolResponse::Evaluated(result) => panic!("expected rejection, got {:?}", result),
        }
    }

    #[test]
    fn test_invalid_json() {
        let tool = PackageCheckTool::default();
        assert_eq!(
            error_of(tool.invoke("{not json")),
            "Invalid JSON format in context"
        );
    }

    #[test]
    fn test_non_object_context_is_unexpected_failure() {
        let tool = PackageCheckTool::default();
        assert_eq!(
            error_of(tool.invoke("[1, 2]")),
            "Error processing package check: context must be an object, found array"
        );
        assert_eq!(
            error_of(tool.invoke("null")),
            "Error processing package check: context must be an object, found null"
        );
        assert_eq!(
            error_of(tool.invoke("\"abc\"")),
            "Error processing package check: context must be an object, found string"
        );
    }

    #[test]
    fn test_non_object_arguments_is_unexpected_failure() {
        let tool = PackageCheckTool::default();
        assert_eq!(
            error_of(tool.invoke(r#"{"arguments": [70, 30]}"#)),
            "Error processing package check: arguments must be an object, found array"
        );
        assert_eq!(
            error_of(tool.invoke(r#"{"arguments": null}"#)),
            "Error processing package check: arguments must be an object, found null"
        );
    }

    #[test]
    fn test_missing_arguments_defaults_to_zero() {
        let tool = PackageCheckTool::default();
        match tool.invoke("{}") {
            ToolResponse::Evaluated(result) => {
                assert!(!result.oversized);
                assert_eq!(result.total_dimensions, 0.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_observer_sees_every_outcome() {
        let observer = Arc::new(CountingObserver::default());
        let tool = PackageCheckTool::new(observer.clone());
        tool.handle(r#"{"arguments": {"length": 70}}"#);
        tool.handle(r#"{"arguments": {"length": "long"}}"#);
        tool.handle("nope");
        tool.handle(r#"{"arguments": 5}"#);
        assert_eq!(
            *observer.events.lock().unwrap(),
            vec![
                "evaluated:true",
                "rejected:non_numeric_field",
                "rejected:malformed_input",
                "rejected:unexpected_failure",
            ]
        );
    }

    #[test]
    fn test_pretty_output() {
        let tool = PackageCheckTool::default().with_pretty(true);
        let out = tool.handle(r#"{"arguments": {}}"#);
        assert!(out.contains("\n  \"oversized\": false"));
    }
}
