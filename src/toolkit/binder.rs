//! Output binding
//!
//! Produces the callable side of a tool: a closure that applies keyword
//! arguments onto the owning component's input state and then invokes the
//! output method, all under the component's invocation lock.

use serde_json::Value;
use std::sync::Arc;

use crate::component::{Component, OutputMethod};
use crate::toolkit::models::ToolFunction;
use crate::utils::error::ToolkitError;

/// Binds a resolved output method to its component.
///
/// The returned function captures the component by shared reference, so
/// repeated invocations observe and mutate the same input state; the
/// component outlives every tool derived from it. Applying the arguments and
/// running the method happen under one exclusive lock, which keeps
/// interleaved invocations of sibling tools from trampling each other's
/// in-flight state.
pub(crate) fn build_output_function(
    component: Arc<Component>,
    method: OutputMethod,
) -> ToolFunction {
    Arc::new(move |arguments: &Value| {
        let arguments = arguments.as_object().ok_or_else(|| {
            ToolkitError::InvalidArguments(
                "Tool arguments must be a JSON object of keyword arguments".to_string(),
            )
        })?;
        component.invoke_with_inputs(arguments, &method)
    })
}
