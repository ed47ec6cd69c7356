//! Tool model
//!
//! The invokable unit handed to an agent runtime: a sanitized name, a
//! generated description, a synthesized argument schema, and the bound
//! callable that executes the component's output method.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::toolkit::schema::InputSchema;
use crate::utils::error::ToolkitResult;

/// Type for the bound function a tool invokes
pub type ToolFunction = Arc<dyn Fn(&Value) -> ToolkitResult<Value> + Send + Sync>;

/// A synthesized tool: name, description, argument schema, bound callable.
///
/// Tools hold no ownership relation back to their component beyond the
/// closure capturing it.
#[derive(Clone)]
pub struct Tool {
    /// Unique, protocol-safe identifier for the tool
    pub name: String,

    /// Human-readable description of functionality
    pub description: String,

    /// Synthesized argument schema
    schema: InputSchema,

    /// Bound invocation function
    func: ToolFunction,
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl Tool {
    /// Creates a new tool from its synthesized parts
    pub(crate) fn new(
        name: String,
        description: String,
        schema: InputSchema,
        func: ToolFunction,
    ) -> Self {
        Self {
            name,
            description,
            schema,
            func,
        }
    }

    /// Returns the tool's argument schema
    pub fn schema(&self) -> &InputSchema {
        &self.schema
    }

    /// Invokes the tool with the given keyword arguments.
    ///
    /// Arguments are validated against the schema first; failures surface as
    /// [`crate::ToolkitError::InvalidArguments`] without touching component
    /// state.
    pub fn call(&self, arguments: &Value) -> ToolkitResult<Value> {
        self.schema.validate(arguments)?;
        (self.func)(arguments)
    }

    /// Returns the wire-facing projection of the tool
    pub fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name.clone(),
            description: self.description.clone(),
            input_schema: self.schema.document().clone(),
        }
    }
}

/// The serializable face of a tool as listed to an agent runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique identifier for the tool
    pub name: String,

    /// Human-readable description of functionality
    pub description: String,

    /// JSON Schema defining expected parameters
    pub input_schema: Value,
}
