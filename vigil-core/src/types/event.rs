//! The invocation payload: one file-changed event per run.

use serde::{Deserialize, Serialize};

/// A single edit event, ingested as one JSON object on standard input.
///
/// `tool_name` is the name of the editing tool that produced the change;
/// `file_path` is the file to audit. Unknown fields in the payload are
/// ignored so the emitting pipeline can evolve independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub tool_name: String,
    pub file_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_payload() {
        let event: AuditEvent =
            serde_json::from_str(r#"{"tool_name":"Edit","file_path":"src/a.ts"}"#).unwrap();
        assert_eq!(event.tool_name, "Edit");
        assert_eq!(event.file_path, "src/a.ts");
    }

    #[test]
    fn ignores_unknown_fields() {
        let event: AuditEvent = serde_json::from_str(
            r#"{"tool_name":"Write","file_path":"b.ts","session_id":"abc","cwd":"/tmp"}"#,
        )
        .unwrap();
        assert_eq!(event.file_path, "b.ts");
    }
}
