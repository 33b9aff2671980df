//! Purpose: Convert small geometry records to and from JSON objects.
//! Exports: `Point`, `Vec2`, `Rect`, `ToJson`, `FromJson`, `encode`, `decode`.
//! Role: Typed accessors over `serde_json::Value` for shape-like payloads.
//! Invariants: Encoding always succeeds and emits stable key names.
//! Invariants: Decoding never fails; members that are not numbers (or booleans) decode as zero.
//! Invariants: Non-finite fields (NaN, +/-inf) encode as null and so decode back as zero.
use serde_json::{Map, Value, json};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

pub trait ToJson {
    fn to_json(&self) -> Value;
}

/// Tolerant decoding: implementations substitute zero instead of failing.
pub trait FromJson: Sized {
    fn from_json(value: &Value) -> Self;
}

pub fn encode<T: ToJson + ?Sized>(data: &T) -> Value {
    data.to_json()
}

pub fn decode<T: FromJson>(value: &Value) -> T {
    T::from_json(value)
}

impl ToJson for Point {
    fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("x".to_string(), json!(self.x));
        map.insert("y".to_string(), json!(self.y));
        map.insert("z".to_string(), json!(self.z));
        Value::Object(map)
    }
}

impl ToJson for Vec2 {
    fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("x".to_string(), json!(self.x));
        map.insert("y".to_string(), json!(self.y));
        Value::Object(map)
    }
}

impl ToJson for Rect {
    fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("x".to_string(), json!(self.x));
        map.insert("y".to_string(), json!(self.y));
        map.insert("width".to_string(), json!(self.width));
        map.insert("height".to_string(), json!(self.height));
        Value::Object(map)
    }
}

impl FromJson for Point {
    fn from_json(value: &Value) -> Self {
        Self {
            x: member(value, "x"),
            y: member(value, "y"),
            z: member(value, "z"),
        }
    }
}

impl FromJson for Vec2 {
    fn from_json(value: &Value) -> Self {
        Self {
            x: member(value, "x"),
            y: member(value, "y"),
        }
    }
}

impl FromJson for Rect {
    fn from_json(value: &Value) -> Self {
        Self {
            x: member(value, "x"),
            y: member(value, "y"),
            width: member(value, "width"),
            height: member(value, "height"),
        }
    }
}

impl FromJson for f64 {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(number) => number.as_f64().unwrap_or(0.0),
            Value::Bool(flag) => f64::from(u8::from(*flag)),
            Value::Null | Value::String(_) | Value::Array(_) | Value::Object(_) => 0.0,
        }
    }
}

impl FromJson for f32 {
    fn from_json(value: &Value) -> Self {
        f64::from_json(value) as f32
    }
}

impl FromJson for i64 {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    int
                } else if number.is_u64() {
                    i64::MAX
                } else {
                    // `as` truncates toward zero and saturates.
                    number.as_f64().map_or(0, |real| real as i64)
                }
            }
            Value::Bool(flag) => i64::from(*flag),
            Value::Null | Value::String(_) | Value::Array(_) | Value::Object(_) => 0,
        }
    }
}

impl FromJson for u64 {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(number) => {
                if let Some(uint) = number.as_u64() {
                    uint
                } else if number.is_i64() {
                    0
                } else {
                    number.as_f64().map_or(0, |real| real as u64)
                }
            }
            Value::Bool(flag) => u64::from(*flag),
            Value::Null | Value::String(_) | Value::Array(_) | Value::Object(_) => 0,
        }
    }
}

impl<T: ToJson> ToJson for [T] {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Array(items) => items.iter().map(T::from_json).collect(),
            _ => Vec::new(),
        }
    }
}

fn member(value: &Value, key: &str) -> f64 {
    value.get(key).map_or(0.0, f64::from_json)
}
