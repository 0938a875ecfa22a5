//! Invocation boundary with the tool-calling host

pub mod handler;
pub mod registration;
pub mod response;

pub use handler::PackageCheckTool;
pub use registration::{tool_definition, ToolDefinition, ToolProperty, TOOL_NAME};
pub use response::{RejectionPayload, ToolResponse};
