//! # Capability Declaration Model
//!
//! A component is a declarative graph node: a set of named, typed inputs, an
//! ordered list of named outputs, and a registry of methods that compute those
//! outputs from the current input state.
//!
//! The declarations themselves are passive data ([`InputSpec`], [`OutputSpec`]).
//! [`Component`] ties them together and owns the mutable input state. Output
//! methods are registered as closures at construction time instead of being
//! resolved by name at call time, so a missing method is caught while the
//! toolkit is built rather than when an agent first invokes the tool.
//!
//! ## Usage
//!
//! ```rust
//! use component_toolkit::component::{Component, InputSpec, OutputSpec};
//! use serde_json::json;
//!
//! let component = Component::new("Calculator", "adds numbers")
//!     .with_input(InputSpec::integer("x").required())
//!     .with_input(InputSpec::integer("y").required())
//!     .with_output(OutputSpec::new("sum", "add").with_required_inputs(&["x", "y"]))
//!     .with_method("add", |state| {
//!         let x = state.value("x").and_then(|v| v.as_i64()).unwrap_or(0);
//!         let y = state.value("y").and_then(|v| v.as_i64()).unwrap_or(0);
//!         Ok(json!(x + y))
//!     });
//!
//! assert_eq!(component.name(), "Calculator");
//! assert_eq!(component.outputs().len(), 1);
//! ```

mod inputs;
mod outputs;

pub use inputs::InputSpec;
pub use outputs::OutputSpec;

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::utils::error::{ToolkitError, ToolkitResult};

/// Reserved name of a component's own pass-through "tool" output.
///
/// An output with this name is the component itself already exposed as a
/// tool; it is never re-wrapped by toolkit synthesis.
pub const TOOL_OUTPUT_NAME: &str = "component_as_tool";

/// Type for output-producing functions registered on a component
pub type OutputMethod = Arc<dyn Fn(&InputState) -> ToolkitResult<Value> + Send + Sync>;

/// The mutable input state of a component.
///
/// Holds the input declarations in declaration order; names are unique.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    inputs: Vec<InputSpec>,
}

impl InputState {
    /// Creates an empty input state
    pub fn new() -> Self {
        Self { inputs: Vec::new() }
    }

    /// Adds an input declaration, replacing any existing one with the same name
    pub fn insert(&mut self, spec: InputSpec) {
        match self.inputs.iter_mut().find(|i| i.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.inputs.push(spec),
        }
    }

    /// Looks up an input declaration by name
    pub fn get(&self, name: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|i| i.name == name)
    }

    /// Returns the current value of an input, if it exists
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name).map(|i| &i.value)
    }

    /// Sets the value of an existing input
    pub fn set_value(&mut self, name: &str, value: Value) -> ToolkitResult<()> {
        let input = self
            .inputs
            .iter_mut()
            .find(|i| i.name == name)
            .ok_or_else(|| ToolkitError::InvalidArguments(format!("Unknown input '{}'", name)))?;
        input.value = value;
        Ok(())
    }

    /// Returns the input declarations in declaration order
    pub fn specs(&self) -> &[InputSpec] {
        &self.inputs
    }

    /// Returns the number of declared inputs
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns true if no inputs are declared
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// A declarative graph node with typed inputs and method-backed outputs.
///
/// Identity (name, description, output list, method registry) is fixed after
/// construction; only input values change between invocations. The input
/// state sits behind a mutex and every tool invocation holds that mutex for
/// the whole apply-arguments/invoke-method sequence, so two tools derived
/// from the same component can never observe each other's half-applied
/// arguments.
pub struct Component {
    /// Identifier used in tool-name composition
    name: String,

    /// Free-text description used in tool descriptions
    description: String,

    /// Mutable input state, exclusive for the duration of each invocation
    state: Mutex<InputState>,

    /// Ordered output declarations
    outputs: Vec<OutputSpec>,

    /// Registry of output-producing methods by name
    methods: HashMap<String, OutputMethod>,
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("outputs", &self.outputs)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Component {
    /// Creates a new component with the given name and description
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            state: Mutex::new(InputState::new()),
            outputs: Vec::new(),
            methods: HashMap::new(),
        }
    }

    /// Adds an input declaration
    ///
    /// Only usable during construction; the state mutex is not contended yet.
    pub fn with_input(self, spec: InputSpec) -> Self {
        {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.insert(spec);
        }
        self
    }

    /// Adds an output declaration
    pub fn with_output(mut self, output: OutputSpec) -> Self {
        self.outputs.push(output);
        self
    }

    /// Registers an output-producing method under the given name
    pub fn with_method<F>(mut self, name: &str, method: F) -> Self
    where
        F: Fn(&InputState) -> ToolkitResult<Value> + Send + Sync + 'static,
    {
        self.methods.insert(name.to_string(), Arc::new(method));
        self
    }

    /// Returns the component name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the component description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the output declarations in declaration order
    pub fn outputs(&self) -> &[OutputSpec] {
        &self.outputs
    }

    /// Resolves a registered method by name
    pub fn resolve_method(&self, name: &str) -> Option<OutputMethod> {
        self.methods.get(name).cloned()
    }

    /// Returns a snapshot of the current input declarations
    pub fn input_specs(&self) -> ToolkitResult<Vec<InputSpec>> {
        let state = self
            .state
            .lock()
            .map_err(|_| ToolkitError::Execution("Input state lock poisoned".to_string()))?;
        Ok(state.specs().to_vec())
    }

    /// Sets the value of a single input.
    ///
    /// This is the entry point for the host graph-execution layer; tool
    /// invocations apply their arguments through the invocation lock instead.
    pub fn set_input(&self, name: &str, value: Value) -> ToolkitResult<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ToolkitError::Execution("Input state lock poisoned".to_string()))?;
        state.set_value(name, value)
    }

    /// Applies keyword arguments to the input state, then invokes the method.
    ///
    /// The state lock is held across the whole sequence. All argument names
    /// are checked before any value is applied, so a rejected call leaves the
    /// state exactly as it was.
    pub(crate) fn invoke_with_inputs(
        &self,
        arguments: &Map<String, Value>,
        method: &OutputMethod,
    ) -> ToolkitResult<Value> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ToolkitError::Execution("Input state lock poisoned".to_string()))?;

        for name in arguments.keys() {
            if state.get(name).is_none() {
                return Err(ToolkitError::InvalidArguments(format!(
                    "Unknown input '{}' for component '{}'",
                    name, self.name
                )));
            }
        }

        for (name, value) in arguments {
            state.set_value(name, value.clone())?;
        }

        method(&state)
    }
}
