use serde::{Deserialize, Serialize};

/// Declares a single named output of a component.
///
/// An output is backed by a method registered on the component under
/// `method`. `required_inputs` lists the inputs the output actually reads;
/// leaving it empty means the dependencies are undeclared and the synthesized
/// tool falls back to exposing the component's entire input set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Unique name of the output within its component
    pub name: String,

    /// Name of the registered method that computes this output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Names of the inputs this output depends on
    #[serde(default)]
    pub required_inputs: Vec<String>,
}

impl OutputSpec {
    /// Creates a new output declaration backed by the given method
    pub fn new(name: &str, method: &str) -> Self {
        Self {
            name: name.to_string(),
            method: Some(method.to_string()),
            required_inputs: Vec::new(),
        }
    }

    /// Creates an output declaration with no backing method
    pub fn unbound(name: &str) -> Self {
        Self {
            name: name.to_string(),
            method: None,
            required_inputs: Vec::new(),
        }
    }

    /// Declares the inputs this output depends on
    pub fn with_required_inputs(mut self, required_inputs: &[&str]) -> Self {
        self.required_inputs = required_inputs.iter().map(|n| n.to_string()).collect();
        self
    }
}
