use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::collections::BTreeMap;

#[cfg(feature = "regex")]
use crate::error::ContractError;

/// Named matchers, e.g. headers or query-string parameters
pub type MapMatcher = BTreeMap<String, Matcher>;

/// An expected value paired with the rule a contract engine uses to accept
/// observed values.
///
/// Matchers only describe expectations. Comparing them against real traffic
/// is left to the contract engine that reads the serialized interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
    /// The observed value must equal this one
    Value(Value),
    /// The observed value must have the same shape and types as the example
    Like(Value),
    /// The observed string must match `pattern`; `generate` is the example
    Term { generate: String, pattern: String },
}

impl Matcher {
    pub fn value(value: impl Into<Value>) -> Self {
        Matcher::Value(value.into())
    }

    pub fn like(example: impl Into<Value>) -> Self {
        Matcher::Like(example.into())
    }

    /// Create a regex matcher from an example string and the pattern it must satisfy
    pub fn term(generate: impl Into<String>, pattern: impl Into<String>) -> Self {
        Matcher::Term {
            generate: generate.into(),
            pattern: pattern.into(),
        }
    }

    /// Alias of [`Matcher::term`]
    pub fn regex(generate: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::term(generate, pattern)
    }

    /// The example value a mock would produce for this matcher
    pub fn example(&self) -> Value {
        match self {
            Matcher::Value(value) | Matcher::Like(value) => value.clone(),
            Matcher::Term { generate, .. } => Value::String(generate.clone()),
        }
    }

    pub fn pattern(&self) -> Option<&str> {
        match self {
            Matcher::Term { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    /// Render the matcher in the Pact v2 DSL shape
    pub fn to_value(&self) -> Value {
        match self {
            Matcher::Value(value) => value.clone(),
            Matcher::Like(example) => json!({
                "json_class": "Pact::SomethingLike",
                "contents": example,
            }),
            Matcher::Term { generate, pattern } => json!({
                "json_class": "Pact::Term",
                "data": {
                    "generate": generate,
                    "matcher": {
                        "json_class": "Regexp",
                        "o": 0,
                        "s": pattern,
                    },
                },
            }),
        }
    }

    /// Compile a term's pattern, anchored so it has to cover the whole value.
    ///
    /// Returns `Ok(None)` for matchers that carry no pattern.
    #[cfg(feature = "regex")]
    pub fn compile(&self) -> Result<Option<regex::Regex>, ContractError> {
        match self.pattern() {
            Some(pattern) => {
                let regex = regex::Regex::new(&format!("^(?:{pattern})$"))?;
                Ok(Some(regex))
            }
            None => Ok(None),
        }
    }
}

impl Serialize for Matcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl From<&str> for Matcher {
    fn from(value: &str) -> Self {
        Matcher::Value(Value::String(value.to_string()))
    }
}

impl From<String> for Matcher {
    fn from(value: String) -> Self {
        Matcher::Value(Value::String(value))
    }
}

impl From<Value> for Matcher {
    fn from(value: Value) -> Self {
        Matcher::Value(value)
    }
}
