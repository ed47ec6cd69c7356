//! Tool provider seam for agent runtimes
//!
//! The agent-facing surface: list the available tools and call one by name.
//! [`ComponentToolProvider`] keeps a registry of synthesized tools keyed by
//! their sanitized names and dispatches invocations to the bound callables.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::component::Component;
use crate::toolkit::builder::ComponentToolkit;
use crate::toolkit::models::{Tool, ToolDescriptor};
use crate::utils::error::{ToolkitError, ToolkitResult};

/// Handler trait for tool functionality exposed to an agent runtime
#[async_trait]
pub trait ToolProvider: Send + Sync {
    /// Lists available tools
    async fn list_tools(&self) -> ToolkitResult<Vec<ToolDescriptor>>;

    /// Calls a tool by name with keyword arguments
    async fn call_tool(&self, name: &str, arguments: &Value) -> ToolkitResult<Value>;
}

/// Provider backed by per-component toolkit synthesis
pub struct ComponentToolProvider {
    /// Map of tools by name
    tools: RwLock<HashMap<String, Tool>>,
}

impl fmt::Debug for ComponentToolProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.tools.read().map(|t| t.len()).unwrap_or(0);
        f.debug_struct("ComponentToolProvider")
            .field("tools_count", &count)
            .finish_non_exhaustive()
    }
}

impl ComponentToolProvider {
    /// Creates an empty provider
    pub fn new() -> Self {
        Self {
            tools: RwLock::new(HashMap::new()),
        }
    }

    /// Synthesizes and registers every tool a component exposes.
    ///
    /// Returns the registered tool names. A component whose toolkit fails to
    /// build registers nothing and leaves previously registered components
    /// untouched.
    pub fn register_component(&self, component: Arc<Component>) -> ToolkitResult<Vec<String>> {
        let tools = ComponentToolkit::new(component).get_tools()?;

        let mut registry = self
            .tools
            .write()
            .map_err(|_| ToolkitError::Execution("Failed to acquire tools lock".to_string()))?;

        let mut names = Vec::with_capacity(tools.len());
        for tool in tools {
            debug!("Registered tool '{}'", tool.name);
            names.push(tool.name.clone());
            registry.insert(tool.name.clone(), tool);
        }

        Ok(names)
    }

    /// Unregisters a tool by name
    pub fn unregister_tool(&self, name: &str) -> ToolkitResult<()> {
        let mut registry = self
            .tools
            .write()
            .map_err(|_| ToolkitError::Execution("Failed to acquire tools lock".to_string()))?;

        registry.remove(name);

        Ok(())
    }
}

#[async_trait]
impl ToolProvider for ComponentToolProvider {
    async fn list_tools(&self) -> ToolkitResult<Vec<ToolDescriptor>> {
        let registry = self
            .tools
            .read()
            .map_err(|_| ToolkitError::Execution("Failed to acquire tools lock".to_string()))?;

        let mut descriptors: Vec<ToolDescriptor> =
            registry.values().map(Tool::descriptor).collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(descriptors)
    }

    async fn call_tool(&self, name: &str, arguments: &Value) -> ToolkitResult<Value> {
        // Clone the tool out so the registry lock is not held across the
        // invocation; the component's own lock serializes state access.
        let tool = {
            let registry = self.tools.read().map_err(|_| {
                ToolkitError::Execution("Failed to acquire tools lock".to_string())
            })?;
            registry
                .get(name)
                .cloned()
                .ok_or_else(|| ToolkitError::NotFound(format!("Tool '{}' not found", name)))?
        };

        tool.call(arguments)
    }
}

impl Default for ComponentToolProvider {
    fn default() -> Self {
        Self::new()
    }
}
