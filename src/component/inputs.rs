use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declares a single named, typed input of a component.
///
/// The declaration carries the accepted type tags and the current bound value.
/// `input_types` is the union of accepted tags; when it is empty the single
/// `field_type` tag is the fallback. An input declaring neither is a
/// configuration error surfaced during schema synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSpec {
    /// Unique name of the input within its component
    pub name: String,

    /// Ordered union of type tags the input accepts
    #[serde(default)]
    pub input_types: Vec<String>,

    /// Fallback type tag used when `input_types` is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    /// Current bound value
    #[serde(default)]
    pub value: Value,

    /// Whether a tool invocation must supply this input
    #[serde(default)]
    pub required: bool,

    /// Presentation hint: the input holds a list of the declared type
    #[serde(default)]
    pub is_list: bool,

    /// Presentation hint: the input is edited as multiline text
    #[serde(default)]
    pub multiline: bool,

    /// Presentation hint: the input is only shown in advanced views
    #[serde(default)]
    pub advanced: bool,

    /// Human-readable help text, surfaced as the schema property description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl InputSpec {
    /// Creates a new input declaration with no type information
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            input_types: Vec::new(),
            field_type: None,
            value: Value::Null,
            required: false,
            is_list: false,
            multiline: false,
            advanced: false,
            info: None,
        }
    }

    /// Creates a text input (`str` fallback type)
    pub fn text(name: &str) -> Self {
        Self::new(name).with_field_type("str")
    }

    /// Creates an integer input (`int` fallback type)
    pub fn integer(name: &str) -> Self {
        Self::new(name).with_field_type("int")
    }

    /// Creates a boolean input (`bool` fallback type)
    pub fn boolean(name: &str) -> Self {
        Self::new(name).with_field_type("bool")
    }

    /// Sets the fallback type tag
    pub fn with_field_type(mut self, field_type: &str) -> Self {
        self.field_type = Some(field_type.to_string());
        self
    }

    /// Sets the union of accepted type tags
    pub fn with_input_types(mut self, input_types: &[&str]) -> Self {
        self.input_types = input_types.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Sets the current bound value
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    /// Marks the input as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the input as holding a list of the declared type
    pub fn as_list(mut self) -> Self {
        self.is_list = true;
        self
    }

    /// Marks the input as multiline text
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Marks the input as advanced
    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    /// Sets the help text
    pub fn with_info(mut self, info: &str) -> Self {
        self.info = Some(info.to_string());
        self
    }
}
