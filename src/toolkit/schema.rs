//! Validation-schema synthesis for tool arguments
//!
//! Turns an ordered sequence of input declarations into a structural schema:
//! one field per input, typed by the union of the input's accepted type tags
//! (or its fallback type). The schema doubles as a compiled JSON Schema
//! validator for call-time argument checking.

use jsonschema::{Draft, JSONSchema};
use serde_json::{json, Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::component::InputSpec;
use crate::utils::error::{ToolkitError, ToolkitResult};

/// One named, typed field of a synthesized schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    /// Field name, identical to the input name
    pub name: String,

    /// Resolved union of accepted type tags
    pub types: Vec<String>,

    /// Whether an invocation must supply the field
    pub required: bool,

    /// Whether the field holds a list of the declared type
    pub is_list: bool,
}

/// A structural schema describing the arguments a tool invocation accepts.
///
/// Field order mirrors the order of the input sequence the schema was
/// synthesized from. The JSON Schema document is compiled once; validation
/// reuses the compiled form on every call.
#[derive(Clone)]
pub struct InputSchema {
    fields: Vec<SchemaField>,
    document: Value,
    compiled: Arc<JSONSchema>,
}

impl fmt::Debug for InputSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputSchema")
            .field("fields", &self.fields)
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

impl InputSchema {
    /// Returns the schema fields in synthesis order
    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Returns the JSON Schema document (draft-07)
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Validates invocation arguments against the schema.
    ///
    /// Unknown field names and type mismatches are reported together as an
    /// [`ToolkitError::InvalidArguments`] with all messages joined.
    pub fn validate(&self, arguments: &Value) -> ToolkitResult<()> {
        if let Err(errors) = self.compiled.validate(arguments) {
            let messages: Vec<String> = errors.map(|e| e.to_string()).collect();
            return Err(ToolkitError::InvalidArguments(messages.join("; ")));
        }
        Ok(())
    }
}

/// Resolves the accepted type tags of an input: the declared union when
/// non-empty, otherwise the fallback `field_type`.
fn resolve_type_tags(input: &InputSpec) -> ToolkitResult<Vec<String>> {
    if !input.input_types.is_empty() {
        return Ok(input.input_types.clone());
    }
    match &input.field_type {
        Some(field_type) => Ok(vec![field_type.clone()]),
        None => Err(ToolkitError::Config(format!(
            "Input '{}' declares neither input_types nor field_type",
            input.name
        ))),
    }
}

/// Maps a declaration type tag to a JSON Schema primitive type.
///
/// Type tags are open-world strings; graph message types (`Message`, `Data`,
/// vendor types) have no JSON equivalent and return `None`, which leaves the
/// property unconstrained.
fn json_type_for(tag: &str) -> Option<&'static str> {
    match tag {
        "str" | "string" | "text" => Some("string"),
        "int" | "integer" => Some("integer"),
        "float" | "number" => Some("number"),
        "bool" | "boolean" => Some("boolean"),
        "list" | "array" => Some("array"),
        "dict" | "object" => Some("object"),
        _ => None,
    }
}

/// Builds the JSON Schema property for a single input
fn build_property(input: &InputSpec, tags: &[String]) -> Value {
    let mut property = Map::new();

    if let Some(info) = &input.info {
        property.insert("description".to_string(), json!(info));
    }

    // A union containing any tag without a JSON equivalent cannot constrain
    // the property without rejecting values the component would accept.
    let json_types: Option<Vec<&'static str>> =
        tags.iter().map(|t| json_type_for(t)).collect();

    let type_value = json_types.map(|types| {
        let mut unique: Vec<&'static str> = Vec::new();
        for t in types {
            if !unique.contains(&t) {
                unique.push(t);
            }
        }
        if unique.len() == 1 {
            json!(unique[0])
        } else {
            json!(unique)
        }
    });

    match (input.is_list, type_value) {
        (true, Some(items)) => {
            property.insert("type".to_string(), json!("array"));
            property.insert("items".to_string(), json!({ "type": items }));
        }
        (true, None) => {
            property.insert("type".to_string(), json!("array"));
        }
        (false, Some(types)) => {
            property.insert("type".to_string(), types);
        }
        (false, None) => {}
    }

    Value::Object(property)
}

/// Synthesizes a validation schema from an ordered sequence of inputs.
///
/// Each input contributes one field named after it; field order mirrors the
/// input order. Fails with [`ToolkitError::Config`] when an input declares
/// neither `input_types` nor `field_type`. No constraints beyond type are
/// synthesized; size or range limits belong to individual components.
pub fn create_input_schema(inputs: &[InputSpec]) -> ToolkitResult<InputSchema> {
    let mut fields = Vec::with_capacity(inputs.len());
    let mut properties = Map::new();
    let mut required = Vec::new();

    for input in inputs {
        let tags = resolve_type_tags(input)?;
        properties.insert(input.name.clone(), build_property(input, &tags));
        if input.required {
            required.push(input.name.clone());
        }
        fields.push(SchemaField {
            name: input.name.clone(),
            types: tags,
            required: input.required,
            is_list: input.is_list,
        });
    }

    let mut root = Map::new();
    root.insert(
        "$schema".to_string(),
        json!("http://json-schema.org/draft-07/schema#"),
    );
    root.insert("type".to_string(), json!("object"));
    root.insert("properties".to_string(), Value::Object(properties));
    root.insert("additionalProperties".to_string(), json!(false));
    if !required.is_empty() {
        root.insert("required".to_string(), json!(required));
    }
    let document = Value::Object(root);

    let compiled = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&document)
        .map_err(|e| ToolkitError::Config(format!("Failed to compile input schema: {}", e)))?;

    debug!("Synthesized input schema with {} field(s)", fields.len());

    Ok(InputSchema {
        fields,
        document,
        compiled: Arc::new(compiled),
    })
}
