// Individual cleanup rules. Each one edits a single node in place, reports
// whether it changed anything, and leaves already-clean input alone.

use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::document::{Definition, Operation, Parameter, Property};

/// Status code used when an operation declares no responses
pub const DEFAULT_RESPONSE_CODE: &str = "200";

/// Description attached to the default response
pub const DEFAULT_RESPONSE_DESCRIPTION: &str = "OK";

/// Content type declared for operations that upload files
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Generator-internal parameter metadata with no meaning in Swagger 2.0
pub const LEGACY_PARAMETER_FIELDS: [&str; 3] = ["operation_id", "access", "output"];

/// Definition carrying the known-bad property
pub const PATCHED_DEFINITION: &str = "Operation";

/// Emitted as "" on create although declared as a nested object
pub const PATCHED_PROPERTY: &str = "objective";

/// Gives an operation without responses a single `200 OK`.
pub fn ensure_responses(operation: &mut Operation) -> bool {
    if !operation.responses.is_empty() {
        return false;
    }

    operation.responses.insert(
        DEFAULT_RESPONSE_CODE.to_string(),
        json!({ "description": DEFAULT_RESPONSE_DESCRIPTION }),
    );
    true
}

/// Lifts the keys of an inline, non-`$ref` schema onto the parameter itself.
///
/// Keys already on the parameter are overwritten by the schema's values.
pub fn flatten_schema(param: &mut Parameter) -> bool {
    if param.is_reference() || param.schema().is_none() {
        return false;
    }

    let schema = match param.remove("schema") {
        Some(Value::Object(schema)) => schema,
        _ => return false,
    };

    for (key, value) in schema {
        param.insert(key, value);
    }
    // A nested "schema" key would have been copied up too
    param.remove("schema");

    true
}

/// Removes `operation_id`, `access` and `output`. Returns how many were present.
pub fn strip_legacy_fields(param: &mut Parameter) -> usize {
    LEGACY_PARAMETER_FIELDS
        .iter()
        .filter(|field| param.remove(field).is_some())
        .count()
}

/// Declares `multipart/form-data` when a file parameter is found and the
/// operation has no `consumes` of its own.
pub fn declare_multipart(consumes: &mut Option<Value>, param: &Parameter) -> bool {
    if !param.is_file() || consumes.is_some() {
        return false;
    }

    *consumes = Some(json!([MULTIPART_FORM_DATA]));
    true
}

/// Sets `required: true` when the key is missing. An explicit `false` stays.
pub fn default_required(param: &mut Parameter) -> bool {
    if param.has_required() {
        return false;
    }

    param.insert("required", Value::Bool(true));
    true
}

/// Drops `format` and `pattern` when they are empty strings.
pub fn drop_empty_constraints(property: &mut Property) -> usize {
    let mut removed = 0;

    for constraint in [&mut property.format, &mut property.pattern] {
        if constraint.as_deref() == Some("") {
            *constraint = None;
            removed += 1;
        }
    }

    removed
}

/// Deletes `objective` from the `Operation` definition if it is there.
pub fn remove_known_bad_property(definitions: &mut BTreeMap<String, Definition>) -> bool {
    definitions
        .get_mut(PATCHED_DEFINITION)
        .and_then(|definition| definition.properties.as_mut())
        .and_then(|properties| properties.remove(PATCHED_PROPERTY))
        .is_some()
}
