//! Purpose: Classify JSON values into a closed set of variant kinds.
//! Exports: `ValueKind`.
//! Role: Diagnostic type names for CLI output and error messages.
//! Invariants: Numbers split into integer / unsigned integer / double.
//! Invariants: Names are stable strings; there is no "unknown" kind.
use serde_json::{Number, Value};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Int,
    UInt,
    Real,
    String,
    Bool,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(number) => number_kind(number),
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Int => "integer",
            ValueKind::UInt => "unsigned integer",
            ValueKind::Real => "double",
            ValueKind::String => "string",
            ValueKind::Bool => "boolean",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn number_kind(number: &Number) -> ValueKind {
    if number.is_i64() {
        ValueKind::Int
    } else if number.is_u64() {
        ValueKind::UInt
    } else {
        ValueKind::Real
    }
}

#[cfg(test)]
mod tests {
    use super::ValueKind;
    use serde_json::json;

    #[test]
    fn classifies_every_variant() {
        let cases = [
            (json!(null), "null"),
            (json!(-3), "integer"),
            (json!(7), "integer"),
            (json!(u64::MAX), "unsigned integer"),
            (json!(1.5), "double"),
            (json!("s"), "string"),
            (json!(true), "boolean"),
            (json!([1]), "array"),
            (json!({"a": 1}), "object"),
        ];

        for (value, name) in cases {
            assert_eq!(ValueKind::of(&value).as_str(), name, "value: {value}");
        }
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(ValueKind::UInt.to_string(), "unsigned integer");
    }
}
