//! JSON formatter collaborator.

use crate::error::Result;

/// Pretty-prints a JSON document.
pub trait JsonFormatter: Send + Sync {
    fn pretty(&self, body: &str) -> Result<String>;
}

/// Two-space indented output; object keys keep their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson;

impl JsonFormatter for PrettyJson {
    fn pretty(&self, body: &str) -> Result<String> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
