// This module rewrites a generated specification document into one that strict
// Swagger 2.0 consumers accept.

pub mod rules;

use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::document::{Definition, Document, PathItem};

/// Counts of the edits a normalization run made
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Operations that received the default `200` response
    pub responses_defaulted: usize,

    /// Parameters whose inline schema was lifted onto the parameter
    pub schemas_flattened: usize,

    /// `operation_id` / `access` / `output` keys removed from parameters
    pub legacy_fields_removed: usize,

    /// Operations that gained `consumes: ["multipart/form-data"]`
    pub multipart_consumes_added: usize,

    /// Parameters that gained `required: true`
    pub required_defaulted: usize,

    /// Empty `format` / `pattern` constraints removed from properties
    pub empty_constraints_removed: usize,

    /// Whether `Operation.objective` was removed from the definitions
    pub objective_removed: bool,
}

impl NormalizeReport {
    pub fn total_edits(&self) -> usize {
        self.responses_defaulted
            + self.schemas_flattened
            + self.legacy_fields_removed
            + self.multipart_consumes_added
            + self.required_defaulted
            + self.empty_constraints_removed
            + usize::from(self.objective_removed)
    }

    /// True when the document was already normalized
    pub fn is_clean(&self) -> bool {
        self.total_edits() == 0
    }
}

impl fmt::Display for NormalizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} edits (responses defaulted: {}, schemas flattened: {}, legacy fields removed: {}, \
             multipart consumes added: {}, required defaulted: {}, empty constraints removed: {}, \
             objective removed: {})",
            self.total_edits(),
            self.responses_defaulted,
            self.schemas_flattened,
            self.legacy_fields_removed,
            self.multipart_consumes_added,
            self.required_defaulted,
            self.empty_constraints_removed,
            self.objective_removed,
        )
    }
}

/// Normalize a specification document
pub fn normalize(document: Document) -> Document {
    normalize_with_report(document).0
}

/// Normalize a specification document and report what was changed
pub fn normalize_with_report(mut document: Document) -> (Document, NormalizeReport) {
    let mut report = NormalizeReport::default();

    normalize_paths(&mut document.paths, &mut report);
    normalize_definitions(&mut document.definitions, &mut report);

    report.objective_removed = rules::remove_known_bad_property(&mut document.definitions);
    if report.objective_removed {
        debug!(
            definition = rules::PATCHED_DEFINITION,
            property = rules::PATCHED_PROPERTY,
            "removed known-bad property"
        );
    } else {
        debug!(
            definition = rules::PATCHED_DEFINITION,
            property = rules::PATCHED_PROPERTY,
            "known-bad property not present"
        );
    }

    (document, report)
}

// Operation and parameter rules share one pass: the multipart rule has to see
// the parameter type after its schema was flattened.
fn normalize_paths(paths: &mut BTreeMap<String, PathItem>, report: &mut NormalizeReport) {
    for (path, item) in paths.iter_mut() {
        for (method, operation) in item.iter_mut() {
            if rules::ensure_responses(operation) {
                debug!(%path, %method, "added default response");
                report.responses_defaulted += 1;
            }

            let params = match operation.parameters.as_mut() {
                Some(params) => params,
                None => continue,
            };

            for param in params.iter_mut() {
                let name = param.name().unwrap_or("<unnamed>").to_string();

                if rules::flatten_schema(param) {
                    debug!(%path, %method, param = %name, "flattened inline schema");
                    report.schemas_flattened += 1;
                }

                let removed = rules::strip_legacy_fields(param);
                if removed > 0 {
                    debug!(%path, %method, param = %name, removed, "stripped legacy fields");
                    report.legacy_fields_removed += removed;
                }

                if rules::declare_multipart(&mut operation.consumes, param) {
                    debug!(%path, %method, param = %name, "declared multipart/form-data");
                    report.multipart_consumes_added += 1;
                }

                if rules::default_required(param) {
                    debug!(%path, %method, param = %name, "defaulted required to true");
                    report.required_defaulted += 1;
                }
            }
        }
    }
}

fn normalize_definitions(
    definitions: &mut BTreeMap<String, Definition>,
    report: &mut NormalizeReport,
) {
    for (definition, schema) in definitions.iter_mut() {
        let properties = match schema.properties.as_mut() {
            Some(properties) => properties,
            None => continue,
        };

        for (property, value) in properties.iter_mut() {
            let removed = rules::drop_empty_constraints(value);
            if removed > 0 {
                debug!(%definition, %property, removed, "dropped empty constraints");
                report.empty_constraints_removed += removed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc(value: Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    fn minimal_document() -> Document {
        doc(json!({
            "swagger": "2.0",
            "paths": {
                "/api/v2/payloads": {
                    "get": {
                        "responses": {},
                        "parameters": [
                            { "name": "file", "in": "formData", "type": "file" }
                        ]
                    }
                }
            },
            "definitions": {
                "Operation": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "objective": { "$ref": "#/definitions/Objective" }
                    }
                }
            }
        }))
    }

    #[test]
    fn test_minimal_document_end_to_end() {
        let (cleaned, report) = normalize_with_report(minimal_document());

        let expected = doc(json!({
            "swagger": "2.0",
            "paths": {
                "/api/v2/payloads": {
                    "get": {
                        "responses": { "200": { "description": "OK" } },
                        "consumes": ["multipart/form-data"],
                        "parameters": [
                            { "name": "file", "in": "formData", "type": "file", "required": true }
                        ]
                    }
                }
            },
            "definitions": {
                "Operation": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" }
                    }
                }
            }
        }));

        assert_eq!(cleaned, expected);
        assert_eq!(
            report,
            NormalizeReport {
                responses_defaulted: 1,
                multipart_consumes_added: 1,
                required_defaulted: 1,
                objective_removed: true,
                ..NormalizeReport::default()
            }
        );
        assert_eq!(report.total_edits(), 4);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(minimal_document());
        let (twice, report) = normalize_with_report(once.clone());

        assert_eq!(once, twice);
        assert!(report.is_clean());
    }

    #[test]
    fn test_file_type_from_flattened_schema_declares_multipart() {
        let cleaned = normalize(doc(json!({
            "paths": {
                "/file/upload": {
                    "post": {
                        "responses": { "200": { "description": "uploaded" } },
                        "parameters": [
                            { "name": "payload", "in": "formData", "schema": { "type": "file" } }
                        ]
                    }
                }
            }
        })));

        let op = &cleaned.paths["/file/upload"]["post"];
        assert_eq!(op.consumes, Some(json!(["multipart/form-data"])));

        let param = &op.parameters.as_ref().unwrap()[0];
        assert_eq!(param.param_type(), Some("file"));
        assert!(param.get("schema").is_none());
    }

    #[test]
    fn test_multiple_file_parameters_add_consumes_once() {
        let (cleaned, report) = normalize_with_report(doc(json!({
            "paths": {
                "/file/upload": {
                    "post": {
                        "responses": { "200": { "description": "uploaded" } },
                        "parameters": [
                            { "name": "a", "type": "file" },
                            { "name": "b", "type": "file" }
                        ]
                    }
                }
            }
        })));

        assert_eq!(report.multipart_consumes_added, 1);
        assert_eq!(
            cleaned.paths["/file/upload"]["post"].consumes,
            Some(json!(["multipart/form-data"]))
        );
    }

    #[test]
    fn test_null_responses_and_null_consumes() {
        let parsed = crate::document::parse_document(
            r#"{"paths":{"/a":{
                "get":{"responses":null},
                "post":{"responses":[],"consumes":null,"parameters":[{"name":"f","type":"file"}]}
            }}}"#,
        )
        .unwrap();

        let (cleaned, report) = normalize_with_report(parsed);
        assert_eq!(report.responses_defaulted, 2);
        assert_eq!(report.multipart_consumes_added, 0);

        let value = serde_json::to_value(&cleaned.paths["/a"]).unwrap();
        assert_eq!(value["get"]["responses"], json!({ "200": { "description": "OK" } }));
        assert_eq!(value["post"]["responses"], json!({ "200": { "description": "OK" } }));
        assert_eq!(value["post"]["consumes"], Value::Null);
        assert!(value["post"].as_object().unwrap().contains_key("consumes"));
    }

    #[test]
    fn test_operation_without_parameters() {
        let (cleaned, report) = normalize_with_report(doc(json!({
            "paths": {
                "/api/v2/health": {
                    "get": { "responses": { "200": { "description": "healthy" } } }
                }
            }
        })));

        assert!(report.is_clean());
        assert!(cleaned.paths["/api/v2/health"]["get"].parameters.is_none());
    }

    #[test]
    fn test_definitions_constraints_and_other_keys() {
        let (cleaned, report) = normalize_with_report(doc(json!({
            "definitions": {
                "Agent": {
                    "required": ["paw"],
                    "properties": {
                        "paw": { "type": "string", "pattern": "" },
                        "sleep_min": { "type": "integer", "format": "int32" },
                        "created": { "type": "string", "format": "", "pattern": "" }
                    }
                },
                "Empty": { "type": "object" }
            }
        })));

        assert_eq!(report.empty_constraints_removed, 3);
        assert!(!report.objective_removed);

        let value = serde_json::to_value(&cleaned.definitions).unwrap();
        assert_eq!(
            value,
            json!({
                "Agent": {
                    "required": ["paw"],
                    "properties": {
                        "paw": { "type": "string" },
                        "sleep_min": { "type": "integer", "format": "int32" },
                        "created": { "type": "string" }
                    }
                },
                "Empty": { "type": "object" }
            })
        );
    }

    #[test]
    fn test_report_display() {
        let report = NormalizeReport {
            schemas_flattened: 2,
            objective_removed: true,
            ..NormalizeReport::default()
        };

        let text = report.to_string();
        assert!(text.starts_with("3 edits"));
        assert!(text.contains("schemas flattened: 2"));
        assert!(text.contains("objective removed: true"));
    }
}
