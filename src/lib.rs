#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![deny(rustdoc::invalid_html_tags)]
#![deny(rustdoc::bare_urls)]
#![deny(clippy::missing_panics_doc)]

//! Component Toolkit synthesizes invokable agent tools from declarative flow
//! components. A component describes what it accepts and produces (typed
//! inputs, method-backed outputs); this crate bridges that capability
//! declaration to an agent's tool-calling protocol: a validation schema, a
//! sanitized name, a generated description, and a bound callable per output.
//!
//! ## Basic Usage
//!
//! ```rust
//! use component_toolkit::component::{Component, InputSpec, OutputSpec};
//! use component_toolkit::toolkit::{ComponentToolProvider, ToolProvider};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Declare a component
//!     let calculator = Arc::new(
//!         Component::new("Calculator", "adds numbers")
//!             .with_input(InputSpec::integer("x").required())
//!             .with_input(InputSpec::integer("y").required())
//!             .with_output(OutputSpec::new("sum", "add").with_required_inputs(&["x", "y"]))
//!             .with_method("add", |state| {
//!                 let x = state.value("x").and_then(|v| v.as_i64()).unwrap_or(0);
//!                 let y = state.value("y").and_then(|v| v.as_i64()).unwrap_or(0);
//!                 Ok(json!(x + y))
//!             }),
//!     );
//!
//!     // Synthesize its tools and expose them to an agent runtime
//!     let provider = ComponentToolProvider::new();
//!     provider.register_component(calculator)?;
//!
//!     let result = provider.call_tool("Calculator-add", &json!({ "x": 2, "y": 3 })).await?;
//!     assert_eq!(result, json!(5));
//!
//!     Ok(())
//! }
//! ```

/// Capability declarations: components with typed inputs and method-backed outputs.
pub mod component;

/// Configuration management
pub mod config;

/// Telemetry initialization built on `tracing`
pub mod telemetry;

/// Dynamic tool synthesis: schema, description, name, and callable generation.
pub mod toolkit;

/// Utility modules for error handling and common functionality.
pub mod utils;

/// Re-exported component types for convenience
pub use component::{Component, InputSpec, InputState, OutputMethod, OutputSpec, TOOL_OUTPUT_NAME};

/// Re-exported toolkit types for convenience
pub use toolkit::{
    build_description, create_input_schema, format_tool_name, ComponentToolProvider,
    ComponentToolkit, InputSchema, SchemaField, Tool, ToolDescriptor, ToolFunction, ToolProvider,
};

// Re-export error types
pub use utils::error::{ToolkitError, ToolkitResult};

/// Re-export telemetry types and functions for easier access
pub use telemetry::{init_telemetry, TelemetryConfig};

/// Re-export configuration types for easier access
pub use config::{load_settings, parse_settings, LoggerSettings, Settings};
