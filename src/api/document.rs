//! Purpose: JSON document wrapper with load, parse, save, merge, and typed conversion helpers.
//! Exports: `Document`, `Loader`.
//! Role: Main library entry point; wraps `serde_json::Value` and the I/O around it.
//! Invariants: A document derefs to its value, so member reads of absent keys yield null.
//! Invariants: Load and parse failures are logged at error level and returned as `Err`.
//! Invariants: Sources beginning with http:// or https:// are fetched; all others are file paths.
#![allow(clippy::result_large_err)]

use std::fmt;
use std::fs;
use std::io;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_json::Value;

use super::remote::{RemoteFetcher, is_remote_source, normalize_source_url};
use super::{LoadOptions, WriteStyle};
use crate::core::error::{Error, ErrorKind};
use crate::core::geometry::{FromJson, ToJson};
use crate::core::kind::ValueKind;
use crate::core::merge;
use crate::json::parse;
use crate::render::render;

type ApiResult<T> = Result<T, Error>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    value: Value,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    pub fn parse(text: &str) -> ApiResult<Self> {
        parse_text(text, "document.parse").map(Self::from_value)
    }

    pub fn open(source: &str) -> ApiResult<Self> {
        Loader::default().open(source)
    }

    pub fn encode<T: ToJson + ?Sized>(data: &T) -> Self {
        Self::from_value(data.to_json())
    }

    pub fn decode<T: FromJson>(&self) -> T {
        T::from_json(&self.value)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn kind(&self) -> ValueKind {
        ValueKind::of(&self.value)
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn merge_from(&mut self, source: &Value) {
        merge::merge(&mut self.value, source);
    }

    pub fn raw_string(&self, style: WriteStyle) -> String {
        render(&self.value, style, false)
    }

    pub fn save(&self, path: impl AsRef<Path>, style: WriteStyle) -> ApiResult<()> {
        let path = path.as_ref();
        let mut text = self.raw_string(style);
        text.push('\n');
        fs::write(path, text).map_err(|err| {
            let err = io_error(err, "failed to write json", path);
            tracing::error!(path = %path.display(), error = %err, "unable to save json");
            err
        })?;
        tracing::debug!(path = %absolute_display(path), "json saved");
        Ok(())
    }
}

impl Deref for Document {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.value
    }
}

impl DerefMut for Document {
    fn deref_mut(&mut self) -> &mut Value {
        &mut self.value
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        document.value
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(text: &str) -> ApiResult<Self> {
        Self::parse(text)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if f.alternate() {
            WriteStyle::Pretty
        } else {
            WriteStyle::Compact
        };
        f.write_str(&self.raw_string(style))
    }
}

#[derive(Clone)]
pub struct Loader {
    options: LoadOptions,
    fetcher: RemoteFetcher,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(LoadOptions::default())
    }
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Loader {
    pub fn new(options: LoadOptions) -> Self {
        let fetcher = RemoteFetcher::new(&options);
        Self { options, fetcher }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn open(&self, source: &str) -> ApiResult<Document> {
        if is_remote_source(source) {
            self.open_remote(source)
        } else {
            self.open_local(source)
        }
    }

    pub fn open_local(&self, path: impl AsRef<Path>) -> ApiResult<Document> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            let err = io_error(err, "failed to read json", path);
            tracing::error!(path = %path.display(), error = %err, "unable to open json");
            err
        })?;
        let value = parse_text(&text, "document.open_local").map_err(|err| {
            tracing::error!(path = %path.display(), hint = err.hint().unwrap_or(""), "unable to parse json");
            err.with_path(path)
        })?;
        tracing::debug!(path = %path.display(), "json loaded");
        Ok(Document::from_value(value))
    }

    pub fn open_remote(&self, raw_url: &str) -> ApiResult<Document> {
        let url = normalize_source_url(raw_url)?;
        let text = self.fetcher.fetch_text(&url).map_err(|err| {
            tracing::error!(url = %url, error = %err, "unable to fetch json");
            err
        })?;
        let value = parse_text(&text, "document.open_remote").map_err(|err| {
            tracing::error!(url = %url, hint = err.hint().unwrap_or(""), "unable to parse json");
            err.with_url(url.as_str())
        })?;
        Ok(Document::from_value(value))
    }

    pub fn open_all<'a, I>(&self, sources: I) -> ApiResult<Vec<Document>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        sources.into_iter().map(|source| self.open(source)).collect()
    }
}

fn parse_text(text: &str, context: &str) -> ApiResult<Value> {
    parse::from_str::<Value>(text).map_err(|err| {
        let hint = parse::hint_for_error(&err, context);
        Error::new(ErrorKind::Parse)
            .with_message(format!("invalid json: {err}"))
            .with_hint(hint)
            .with_source(err)
    })
}

fn io_error(err: io::Error, message: &str, path: &Path) -> Error {
    let kind = match err.kind() {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        io::ErrorKind::PermissionDenied => ErrorKind::Permission,
        io::ErrorKind::InvalidData => ErrorKind::Parse,
        _ => ErrorKind::Io,
    };
    Error::new(kind)
        .with_message(message)
        .with_path(path)
        .with_source(err)
}

fn absolute_display(path: &Path) -> String {
    let absolute: PathBuf = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    absolute.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::{Document, Loader};
    use crate::api::{ErrorKind, LoadOptions, WriteStyle};
    use crate::core::geometry::{Point, Vec2};
    use serde_json::json;

    #[test]
    fn new_document_is_null() {
        let doc = Document::new();
        assert!(doc.is_null());
        assert_eq!(doc.type_name(), "null");
    }

    #[test]
    fn member_access_goes_through_deref() {
        let mut doc = Document::parse(r#"{"name":"demo"}"#).expect("parse");
        assert_eq!(doc["name"], "demo");
        assert!(doc["missing"].is_null());

        doc["count"] = json!(2);
        assert_eq!(doc.value(), &json!({"name": "demo", "count": 2}));
    }

    #[test]
    fn parse_failure_carries_hint() {
        let err = Document::parse(r#"{"a":}"#).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Parse);
        let hint = err.hint().expect("hint");
        assert!(hint.contains("parse category: syntax"));
        assert!(hint.contains("context: document.parse"));
    }

    #[test]
    fn from_str_matches_parse() {
        let doc: Document = "[1,2]".parse().expect("parse");
        assert_eq!(doc.kind().as_str(), "array");
    }

    #[test]
    fn display_uses_compact_and_alternate_pretty() {
        let doc = Document::from_value(json!({"a": [1]}));
        assert_eq!(doc.to_string(), r#"{"a":[1]}"#);
        assert_eq!(format!("{doc:#}"), "{\n  \"a\": [\n    1\n  ]\n}");
    }

    #[test]
    fn raw_string_styles() {
        let doc = Document::from_value(json!({"k": true}));
        assert_eq!(doc.raw_string(WriteStyle::Compact), r#"{"k":true}"#);
        assert_eq!(doc.raw_string(WriteStyle::Pretty), "{\n  \"k\": true\n}");
    }

    #[test]
    fn merge_from_overlays_source() {
        let mut doc = Document::from_value(json!({"a": {"x": 1}, "keep": 0}));
        doc.merge_from(&json!({"a": {"y": 2}}));
        assert_eq!(doc.value(), &json!({"a": {"x": 1, "y": 2}, "keep": 0}));
    }

    #[test]
    fn geometry_helpers_round_trip() {
        let doc = Document::encode(&Vec2::new(0.25, -8.0));
        assert_eq!(doc.decode::<Vec2>(), Vec2::new(0.25, -8.0));
        assert_eq!(doc.decode::<Point>(), Point::new(0.25, -8.0, 0.0));
    }

    #[test]
    fn open_dispatches_local_paths() {
        let loader = Loader::new(LoadOptions::default());
        let err = loader.open("definitely/not/here.json").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.path().is_some());
    }

    #[test]
    fn open_remote_rejects_bad_scheme() {
        let err = Loader::default().open_remote("ftp://example.com/a.json").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }
}
