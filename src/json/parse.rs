//! Purpose: Provide the internal JSON decode entrypoint and failure diagnostics.
//! Exports: `from_str`, `ParseFailureCategory`, `categorize_error`, `categorize_message`, `hint_for_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Category labels are stable strings used in user-facing hints.
//! Invariants: Hints never echo the input payload; only category, context, and position.
//! Notes: Error mapping to crate errors is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    Truncated,
    Data,
    NumericRange,
    DepthLimit,
    Encoding,
    Io,
    Unknown,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Truncated => "truncated",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Encoding => "encoding",
            ParseFailureCategory::Io => "io",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Eof => ParseFailureCategory::Truncated,
        Category::Io => ParseFailureCategory::Io,
        Category::Data => ParseFailureCategory::Data,
        Category::Syntax => match categorize_message(&err.to_string()) {
            ParseFailureCategory::Unknown => ParseFailureCategory::Syntax,
            category => category,
        },
    }
}

pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    let message = message.to_ascii_lowercase();
    if message.contains("recursion limit") {
        ParseFailureCategory::DepthLimit
    } else if message.contains("number out of range") {
        ParseFailureCategory::NumericRange
    } else if message.contains("unicode")
        || message.contains("surrogate")
        || message.contains("escape")
    {
        ParseFailureCategory::Encoding
    } else if message.contains("eof while parsing") {
        ParseFailureCategory::Truncated
    } else {
        ParseFailureCategory::Unknown
    }
}

pub(crate) fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    let category = categorize_error(err);
    format!(
        "parse category: {}; context: {context}; line {}, column {}",
        category.label(),
        err.line(),
        err.column()
    )
}
