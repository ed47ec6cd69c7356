//! Tool-description generation
//!
//! Builds the deterministic one-line description an agent sees for a tool:
//! the backing method's signature over the output's declared inputs, followed
//! by the component description.

use tracing::warn;

use crate::component::{InputSpec, OutputSpec};
use crate::utils::error::{ToolkitError, ToolkitResult};

/// Formats the resolved type of an input for display: the `" | "`-joined
/// union when `input_types` is declared, otherwise the fallback type.
pub(crate) fn input_type_label(input: &InputSpec) -> ToolkitResult<String> {
    if !input.input_types.is_empty() {
        if input.input_types.len() == 1 {
            return Ok(input.input_types[0].clone());
        }
        return Ok(input.input_types.join(" | "));
    }
    input.field_type.clone().ok_or_else(|| {
        ToolkitError::Config(format!(
            "Input '{}' declares neither input_types nor field_type",
            input.name
        ))
    })
}

/// Builds the description for one output of a component.
///
/// Format: `"<method>(<args>) - <description>"`, where args are
/// `"<name>: <type>"` pairs for the output's declared required inputs, sorted
/// lexicographically so the result is independent of declaration order.
///
/// An output without declared required inputs produces an empty argument
/// list; its true dependencies are unknown, so a diagnostic warning is
/// emitted and the signature stays imprecise rather than wrong.
pub fn build_description(
    description: &str,
    inputs: &[InputSpec],
    output: &OutputSpec,
) -> ToolkitResult<String> {
    if output.required_inputs.is_empty() {
        warn!(
            "Output '{}' does not have required inputs defined",
            output.name
        );
    }

    let method = output.method.as_deref().ok_or_else(|| {
        ToolkitError::Config(format!(
            "Output '{}' does not have a method defined",
            output.name
        ))
    })?;

    let args = if output.required_inputs.is_empty() {
        String::new()
    } else {
        let mut pairs = Vec::with_capacity(output.required_inputs.len());
        for input_name in &output.required_inputs {
            let input = inputs.iter().find(|i| &i.name == input_name).ok_or_else(|| {
                ToolkitError::Config(format!(
                    "Output '{}' references unknown input '{}'",
                    output.name, input_name
                ))
            })?;
            pairs.push(format!("{}: {}", input.name, input_type_label(input)?));
        }
        pairs.sort();
        pairs.join(", ")
    };

    Ok(format!("{}({}) - {}", method, args, description))
}
