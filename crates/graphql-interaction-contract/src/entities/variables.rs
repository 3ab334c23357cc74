use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GraphQLContractError;

/// GraphQL variables sent alongside a query, keyed by variable name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(Map<String, Value>);

impl Variables {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a variable, returning the previous value for that name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Variables {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Variables {
    type Error = GraphQLContractError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(GraphQLContractError::InvalidVariables(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variables_with() {
        let vars = Variables::new().with("id", "123").with("limit", 10);
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("id"), Some(&json!("123")));
        assert_eq!(vars.get("limit"), Some(&json!(10)));
    }

    #[test]
    fn test_variables_insert_overwrites() {
        let mut vars = Variables::new();
        assert!(vars.insert("id", 1).is_none());
        assert_eq!(vars.insert("id", 2), Some(json!(1)));
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn test_variables_try_from_object() {
        let vars = Variables::try_from(json!({"x": 1})).unwrap();
        assert_eq!(vars.into_value(), json!({"x": 1}));
    }

    #[test]
    fn test_variables_try_from_non_object() {
        let err = Variables::try_from(json!([1, 2])).unwrap_err();
        assert!(matches!(err, GraphQLContractError::InvalidVariables(_)));
    }

    #[test]
    fn test_empty_variables_serialize_as_object() {
        assert_eq!(serde_json::to_value(Variables::new()).unwrap(), json!({}));
    }
}
