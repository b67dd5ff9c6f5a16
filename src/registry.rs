//! Static tool registry.
//!
//! Built once at first use and never mutated. The same entry backs both the
//! `tools/list` response and the argument validation for `tools/call`, so the
//! advertised `inputSchema` can never drift from what is enforced.

use std::sync::OnceLock;

use jsonschema::{validator_for, Validator};
use serde::Serialize;
use serde_json::{json, Value};

/// A registered tool: its advertised descriptor plus the compiled schema
/// validator for its arguments.
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    validator: Validator,
}

impl Tool {
    fn new(name: &'static str, description: &'static str, input_schema: Value) -> Self {
        let validator =
            validator_for(&input_schema).expect("tool input schema must compile");
        Self {
            name,
            description,
            input_schema,
            validator,
        }
    }

    /// Validate call arguments against the declared input schema.
    pub fn check_args(&self, args: &Value) -> Result<(), String> {
        self.validator.validate(args).map_err(|e| e.to_string())
    }
}

/// The shape advertised by `tools/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor<'a> {
    pub name: &'a str,
    pub description: &'a str,
    #[serde(rename = "inputSchema")]
    pub input_schema: &'a Value,
}

static REGISTRY: OnceLock<Vec<Tool>> = OnceLock::new();

/// All registered tools, in advertised order.
pub fn all() -> &'static [Tool] {
    REGISTRY.get_or_init(build).as_slice()
}

/// Look up a tool by name.
pub fn find(name: &str) -> Option<&'static Tool> {
    all().iter().find(|tool| tool.name == name)
}

/// Descriptors for the `tools/list` response.
pub fn descriptors() -> Vec<ToolDescriptor<'static>> {
    all()
        .iter()
        .map(|tool| ToolDescriptor {
            name: tool.name,
            description: tool.description,
            input_schema: &tool.input_schema,
        })
        .collect()
}

fn build() -> Vec<Tool> {
    let no_args = || {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    };

    vec![
        Tool::new(
            "ping",
            "Health check for MCP endpoint - returns a confirmation message",
            no_args(),
        ),
        Tool::new(
            "getTasks",
            "Retrieve all todo items from the database",
            no_args(),
        ),
        Tool::new(
            "addTask",
            "Create a new todo item",
            json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "The title/description of the todo task"
                    }
                },
                "required": ["title"]
            }),
        ),
        Tool::new(
            "completeTask",
            "Mark a todo item as completed",
            json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "The ID of the todo task to complete"
                    }
                },
                "required": ["id"]
            }),
        ),
        Tool::new(
            "deleteTask",
            "Remove a todo item from the database",
            json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "The ID of the todo task to delete"
                    }
                },
                "required": ["id"]
            }),
        ),
    ]
}
