//! Canned MCP responses the built-in checks run against.
//!
//! Nothing here talks to a server. The tool and resource lists are built
//! from the `rmcp` model types so they serialize to the real wire shape.

use rmcp::model::{
    CallToolResult, Content, JsonObject, ProtocolVersion, RawResource, Resource, Tool,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

pub const ECHO_TOOL: &str = "echo";
pub const CALCULATE_TOOL: &str = "calculate";
pub const ECHO_MESSAGE: &str = "Hello, MCP!";
pub const TOOL_NOT_FOUND: &str = "Tool not found";

/// Metadata a server reports about itself during initialization
#[derive(Debug, Clone, Serialize)]
pub struct ServerDescriptor {
    pub name: &'static str,
    pub version: &'static str,
    pub protocol_version: ProtocolVersion,
}

// Stand-in for a real `initialize` handshake.
pub const SERVER_DESCRIPTOR: ServerDescriptor = ServerDescriptor {
    name: "test-server",
    version: "0.1.0",
    protocol_version: ProtocolVersion::V_2024_11_05,
};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct EchoParams {
    #[schemars(description = "The text to echo back")]
    pub message: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CalculateParams {
    #[schemars(description = "An arithmetic expression to evaluate")]
    pub expression: String,
}

fn input_schema<T: JsonSchema>() -> serde_json::Result<Arc<JsonObject>> {
    let schema = schemars::schema_for!(T);
    match serde_json::to_value(schema)? {
        Value::Object(object) => Ok(Arc::new(object)),
        other => Err(serde::ser::Error::custom(format!(
            "input schema is not an object: {other}"
        ))),
    }
}

pub fn tools() -> serde_json::Result<Vec<Tool>> {
    Ok(vec![
        Tool::new(
            ECHO_TOOL,
            "Echo back the input",
            input_schema::<EchoParams>()?,
        ),
        Tool::new(
            CALCULATE_TOOL,
            "Perform basic calculations",
            input_schema::<CalculateParams>()?,
        ),
    ])
}

fn resource(uri: &str, name: &str, description: &str, mime_type: &str) -> Resource {
    let mut raw = RawResource::new(uri, name);
    raw.description = Some(description.into());
    raw.mime_type = Some(mime_type.into());
    Resource {
        raw,
        annotations: None,
    }
}

pub fn resources() -> Vec<Resource> {
    vec![
        resource(
            "file:///example.txt",
            "Example File",
            "An example text file",
            "text/plain",
        ),
        resource(
            "data://config.json",
            "Configuration",
            "Server configuration data",
            "application/json",
        ),
    ]
}

/// Arguments for the canned `echo` invocation
pub fn echo_arguments() -> JsonObject {
    let mut args = JsonObject::new();
    args.insert("message".into(), Value::from(ECHO_MESSAGE));
    args
}

/// Dispatches a tool call by name. Only `echo` is executable; every other
/// name produces an error result rather than an `Err`.
pub fn call_tool(name: &str, arguments: JsonObject) -> serde_json::Result<CallToolResult> {
    match name {
        ECHO_TOOL => {
            let params: EchoParams = serde_json::from_value(Value::Object(arguments))?;
            Ok(CallToolResult::success(vec![Content::text(params.message)]))
        }
        _ => Ok(CallToolResult::error(vec![Content::text(TOOL_NOT_FOUND)])),
    }
}
