//! Purpose: Render JSON as compact or pretty text with optional ANSI colorization.
//! Exports: `render`.
//! Role: Small, pure formatter behind `Document::raw_string` and CLI emission paths.
//! Invariants: When color is disabled, compact output equals serde_json::to_string.
//! Invariants: When color is disabled, pretty output equals serde_json::to_string_pretty.
//! Invariants: ANSI escapes appear only when explicitly enabled.
use serde_json::{Map, Value};

use crate::api::WriteStyle;

const INDENT: &str = "  ";

// Conservative 8/16-color palette for broad terminal compatibility.
const COLOR_KEY: &str = "36";
const COLOR_STRING: &str = "32";
const COLOR_NUMBER: &str = "33";
const COLOR_BOOL: &str = "35";
const COLOR_NULL: &str = "39";
const COLOR_PUNCT: &str = "39";

pub fn render(value: &Value, style: WriteStyle, use_color: bool) -> String {
    if !use_color {
        let plain = match style {
            WriteStyle::Compact => serde_json::to_string(value),
            WriteStyle::Pretty => serde_json::to_string_pretty(value),
        };
        return plain.unwrap_or_else(|_| "null".to_string());
    }
    let mut writer = Writer {
        pretty: style == WriteStyle::Pretty,
        out: String::new(),
    };
    writer.value(value, 0);
    writer.out
}

// ANSI path only; plain output comes straight from serde_json.
struct Writer {
    pretty: bool,
    out: String,
}

impl Writer {
    fn value(&mut self, value: &Value, indent: usize) {
        match value {
            Value::Null => self.colored("null", COLOR_NULL),
            Value::Bool(flag) => {
                let text = if *flag { "true" } else { "false" };
                self.colored(text, COLOR_BOOL);
            }
            Value::Number(number) => self.colored(&number.to_string(), COLOR_NUMBER),
            Value::String(text) => self.colored(&encode_str(text), COLOR_STRING),
            Value::Array(items) => self.array(items, indent),
            Value::Object(map) => self.object(map, indent),
        }
    }

    fn array(&mut self, items: &[Value], indent: usize) {
        if items.is_empty() {
            self.colored("[]", COLOR_PUNCT);
            return;
        }
        self.colored("[", COLOR_PUNCT);
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                self.colored(",", COLOR_PUNCT);
            }
            self.newline(indent + 1);
            self.value(item, indent + 1);
        }
        self.newline(indent);
        self.colored("]", COLOR_PUNCT);
    }

    fn object(&mut self, map: &Map<String, Value>, indent: usize) {
        if map.is_empty() {
            self.colored("{}", COLOR_PUNCT);
            return;
        }
        self.colored("{", COLOR_PUNCT);
        for (idx, (key, value)) in map.iter().enumerate() {
            if idx > 0 {
                self.colored(",", COLOR_PUNCT);
            }
            self.newline(indent + 1);
            self.colored(&encode_str(key), COLOR_KEY);
            self.colored(":", COLOR_PUNCT);
            if self.pretty {
                self.out.push(' ');
            }
            self.value(value, indent + 1);
        }
        self.newline(indent);
        self.colored("}", COLOR_PUNCT);
    }

    fn newline(&mut self, level: usize) {
        if !self.pretty {
            return;
        }
        self.out.push('\n');
        for _ in 0..level {
            self.out.push_str(INDENT);
        }
    }

    fn colored(&mut self, text: &str, color: &str) {
        self.out.push_str("\u{1b}[");
        self.out.push_str(color);
        self.out.push('m');
        self.out.push_str(text);
        self.out.push_str("\u{1b}[0m");
    }
}

fn encode_str(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}
