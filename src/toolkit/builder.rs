//! Toolkit orchestration
//!
//! Walks a component's output declarations and assembles one tool per
//! qualifying output: schema, description, sanitized name, bound callable.

use std::sync::Arc;
use tracing::debug;

use crate::component::{Component, InputSpec, OutputSpec, TOOL_OUTPUT_NAME};
use crate::toolkit::binder::build_output_function;
use crate::toolkit::description::build_description;
use crate::toolkit::models::Tool;
use crate::toolkit::name::format_tool_name;
use crate::toolkit::schema::create_input_schema;
use crate::utils::error::{ToolkitError, ToolkitResult};

/// Synthesizes the tools exposed by a single component.
///
/// This is a stateless, one-shot transformation: build it, call
/// [`ComponentToolkit::get_tools`], hand the tools to the agent runtime.
/// Re-run it whenever the component's declarations change.
#[derive(Debug)]
pub struct ComponentToolkit {
    component: Arc<Component>,
}

impl ComponentToolkit {
    /// Creates a toolkit for the given component
    pub fn new(component: Arc<Component>) -> Self {
        Self { component }
    }

    /// Synthesizes one tool per qualifying output, in declaration order.
    ///
    /// The component's own pass-through [`TOOL_OUTPUT_NAME`] output is
    /// skipped; re-wrapping it would nest the component inside its own
    /// toolkit. Any malformed output aborts the whole build: an output
    /// without a method is a [`ToolkitError::Config`] error, an output whose
    /// method is not registered is [`ToolkitError::MethodNotFound`], and no
    /// partial tool list escapes either way.
    pub fn get_tools(&self) -> ToolkitResult<Vec<Tool>> {
        let input_specs = self.component.input_specs()?;
        let mut tools = Vec::new();

        for output in self.component.outputs() {
            if output.name == TOOL_OUTPUT_NAME {
                continue;
            }

            let method_name = output.method.as_deref().ok_or_else(|| {
                ToolkitError::Config(format!(
                    "Output '{}' does not have a method defined",
                    output.name
                ))
            })?;

            let method = self.component.resolve_method(method_name).ok_or_else(|| {
                ToolkitError::MethodNotFound(format!(
                    "Method '{}' is not registered on component '{}'",
                    method_name,
                    self.component.name()
                ))
            })?;

            let schema = if output.required_inputs.is_empty() {
                // Dependencies undeclared: fall back to the full input set.
                // The matching diagnostic is emitted by build_description.
                create_input_schema(&input_specs)?
            } else {
                let subset = self.select_inputs(&input_specs, output)?;
                create_input_schema(&subset)?
            };

            let name = format_tool_name(&format!(
                "{}.{}",
                self.component.name(),
                method_name
            ));
            let description =
                build_description(self.component.description(), &input_specs, output)?;
            let func = build_output_function(Arc::clone(&self.component), method);

            debug!("Synthesized tool '{}' for output '{}'", name, output.name);
            tools.push(Tool::new(name, description, schema, func));
        }

        Ok(tools)
    }

    /// Selects the input declarations an output names as its dependencies,
    /// in the order the output declares them
    fn select_inputs(
        &self,
        input_specs: &[InputSpec],
        output: &OutputSpec,
    ) -> ToolkitResult<Vec<InputSpec>> {
        output
            .required_inputs
            .iter()
            .map(|name| {
                input_specs
                    .iter()
                    .find(|i| &i.name == name)
                    .cloned()
                    .ok_or_else(|| {
                        ToolkitError::Config(format!(
                            "Output '{}' references unknown input '{}'",
                            output.name, name
                        ))
                    })
            })
            .collect()
    }
}
