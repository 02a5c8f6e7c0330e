//! MCP request parameter types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    /// `None` only when the key is absent; an explicit `null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub arguments: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_and_null_arguments_differ() {
        let absent: ToolCallParams = serde_json::from_value(json!({ "name": "t" })).unwrap();
        assert!(absent.arguments.is_none());

        let null: ToolCallParams =
            serde_json::from_value(json!({ "name": "t", "arguments": null })).unwrap();
        assert_eq!(null.arguments, Some(Value::Null));
    }
}
