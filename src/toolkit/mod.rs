//! # Dynamic Tool Synthesis
//!
//! The toolkit system turns a component's declarative input/output contract
//! into invokable tools compatible with an agent's tool-calling protocol.
//!
//! For every method-backed output of a component this module synthesizes:
//!
//! - A validation schema over the output's declared input dependencies
//! - A sanitized, protocol-safe tool name
//! - A deterministic human/LLM-readable description
//! - A bound callable that applies arguments as input state and runs the
//!   output method under the component's invocation lock
//!
//! ## Usage
//!
//! ```rust
//! use component_toolkit::component::{Component, InputSpec, OutputSpec};
//! use component_toolkit::toolkit::ComponentToolkit;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let component = Arc::new(
//!     Component::new("Calculator", "adds numbers")
//!         .with_input(InputSpec::integer("x").required())
//!         .with_input(InputSpec::integer("y").required())
//!         .with_output(OutputSpec::new("sum", "add").with_required_inputs(&["x", "y"]))
//!         .with_method("add", |state| {
//!             let x = state.value("x").and_then(|v| v.as_i64()).unwrap_or(0);
//!             let y = state.value("y").and_then(|v| v.as_i64()).unwrap_or(0);
//!             Ok(json!(x + y))
//!         }),
//! );
//!
//! let tools = ComponentToolkit::new(component).get_tools().unwrap();
//! assert_eq!(tools[0].name, "Calculator-add");
//! assert_eq!(tools[0].call(&json!({ "x": 2, "y": 3 })).unwrap(), json!(5));
//! ```

mod binder;
mod builder;
mod description;
mod models;
mod name;
mod provider;
mod schema;

// Re-export the public API
pub use builder::ComponentToolkit;
pub use description::build_description;
pub use models::{Tool, ToolDescriptor, ToolFunction};
pub use name::format_tool_name;
pub use provider::{ComponentToolProvider, ToolProvider};
pub use schema::{create_input_schema, InputSchema, SchemaField};
