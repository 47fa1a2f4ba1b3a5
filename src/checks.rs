//! The four built-in checks. Each one fabricates its subject from
//! [`crate::fixtures`], serializes it to JSON and asserts on the shape a
//! client would see.

use crate::{CheckFailure, ensure, fixtures};
use serde_json::Value;

pub type CheckOutcome = std::result::Result<String, CheckFailure>;

/// Names and routines in the order they run
pub const BUILTIN: [(&str, fn() -> CheckOutcome); 4] = [
    ("server_info", server_info),
    ("list_tools", list_tools),
    ("call_tool", call_tool),
    ("list_resources", list_resources),
];

// TODO: fetch the descriptor from a live `initialize` response instead of
// validating the local fixture against itself.
pub fn server_info() -> CheckOutcome {
    let info = serde_json::to_value(fixtures::SERVER_DESCRIPTOR)?;
    for key in ["name", "version", "protocol_version"] {
        ensure!(info.get(key).is_some(), "server info is missing '{key}'");
    }
    Ok("Server info retrieved successfully".to_string())
}

pub fn list_tools() -> CheckOutcome {
    let tools = serde_json::to_value(fixtures::tools()?)?;
    let tools = as_array(&tools, "tool list")?;
    ensure!(!tools.is_empty(), "tool list is empty");

    for tool in tools {
        for key in ["name", "description", "inputSchema"] {
            ensure!(tool.get(key).is_some(), "tool is missing '{key}': {tool}");
        }
    }
    Ok(format!("Found {} tools", tools.len()))
}

pub fn call_tool() -> CheckOutcome {
    let tool_name = fixtures::ECHO_TOOL;
    let result = fixtures::call_tool(tool_name, fixtures::echo_arguments())?;
    let response = serde_json::to_value(result)?;

    let content = response
        .get("content")
        .ok_or_else(|| CheckFailure::assertion("response has no 'content'"))?;
    as_array(content, "content")?;

    Ok(format!("Tool '{tool_name}' called successfully"))
}

pub fn list_resources() -> CheckOutcome {
    let resources = serde_json::to_value(fixtures::resources())?;
    let resources = as_array(&resources, "resource list")?;

    for resource in resources {
        for key in ["uri", "name"] {
            ensure!(
                resource.get(key).is_some(),
                "resource is missing '{key}': {resource}"
            );
        }
    }
    Ok(format!("Found {} resources", resources.len()))
}

fn as_array<'a>(
    value: &'a Value,
    what: &str,
) -> std::result::Result<&'a Vec<Value>, CheckFailure> {
    value
        .as_array()
        .ok_or_else(|| CheckFailure::assertion(format!("{what} is not a list: {value}")))
}
