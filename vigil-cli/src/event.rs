//! Event ingestion: one JSON payload per invocation.

use std::io::Read;

use vigil_core::errors::ConfigError;
use vigil_core::types::AuditEvent;

/// Read and validate the event payload from a stream (normally stdin).
pub fn read_event(mut reader: impl Read) -> Result<AuditEvent, ConfigError> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|e| ConfigError::InvalidEvent(format!("cannot read payload: {e}")))?;

    let event: AuditEvent = serde_json::from_str(&raw)
        .map_err(|e| ConfigError::InvalidEvent(format!("payload is not valid JSON: {e}")))?;

    if event.file_path.is_empty() {
        return Err(ConfigError::InvalidEvent("file_path is empty".to_string()));
    }
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_payload_parses() {
        let event =
            read_event(r#"{"tool_name":"Edit","file_path":"src/a.ts"}"#.as_bytes()).unwrap();
        assert_eq!(event.tool_name, "Edit");
        assert_eq!(event.file_path, "src/a.ts");
    }

    #[test]
    fn malformed_json_is_an_invalid_event() {
        let err = read_event("not json at all".as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEvent(_)));
    }

    #[test]
    fn missing_file_path_rejected() {
        let err = read_event(r#"{"tool_name":"Edit","file_path":""}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEvent(_)));
    }

    #[test]
    fn missing_field_rejected() {
        let err = read_event(r#"{"tool_name":"Edit"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEvent(_)));
    }
}
