use schemars::schema_for;
use serde_json::Value;

use crate::document::ResumeDocument;

/// JSON Schema for the resume document, for external consumers.
pub fn document_schema() -> Value {
    serde_json::to_value(schema_for!(ResumeDocument)).unwrap_or(Value::Null)
}
