//! Purpose: Fetch JSON document text over HTTP(S) for remote loads.
//! Exports: `RemoteFetcher`, `is_remote_source`, `normalize_source_url`.
//! Role: Blocking transport used by `Loader::open_remote`.
//! Invariants: Only http and https URLs are accepted.
//! Invariants: Non-2xx statuses map to crate error kinds; the URL is always attached.
#![allow(clippy::result_large_err)]

use crate::api::LoadOptions;
use crate::core::error::{Error, ErrorKind};
use url::Url;

type ApiResult<T> = Result<T, Error>;

#[derive(Clone)]
pub(crate) struct RemoteFetcher {
    agent: ureq::Agent,
}

impl RemoteFetcher {
    pub(crate) fn new(options: &LoadOptions) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(options.timeout)
            .user_agent(&options.user_agent)
            .build();
        Self { agent }
    }

    pub(crate) fn fetch_text(&self, url: &Url) -> ApiResult<String> {
        let response = self
            .agent
            .get(url.as_str())
            .set("Accept", "application/json")
            .call();
        match response {
            Ok(resp) => {
                tracing::debug!(url = %url, status = resp.status(), "fetched remote json");
                resp.into_string().map_err(|err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to read response body")
                        .with_url(url.as_str())
                        .with_source(err)
                })
            }
            Err(ureq::Error::Status(code, _resp)) => Err(Error::new(error_kind_from_status(code))
                .with_message(format!("remote error status {code}"))
                .with_url(url.as_str())),
            Err(ureq::Error::Transport(err)) => Err(Error::new(ErrorKind::Io)
                .with_message("request failed")
                .with_url(url.as_str())
                .with_source(err)),
        }
    }
}

pub(crate) fn is_remote_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

pub(crate) fn normalize_source_url(raw: &str) -> ApiResult<Url> {
    let url = Url::parse(raw).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("invalid url")
            .with_url(raw)
            .with_source(err)
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::new(ErrorKind::Usage)
                .with_message(format!("unsupported url scheme: {other}"))
                .with_url(raw)
                .with_hint("Use an http:// or https:// URL, or a local file path."));
        }
    }
    if url.host_str().is_none() {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("url is missing a host")
            .with_url(raw));
    }
    Ok(url)
}

fn error_kind_from_status(status: u16) -> ErrorKind {
    match status {
        401 | 403 => ErrorKind::Permission,
        404 | 410 => ErrorKind::NotFound,
        _ => ErrorKind::Remote,
    }
}

#[cfg(test)]
mod tests {
    use super::{error_kind_from_status, is_remote_source, normalize_source_url};
    use crate::core::error::ErrorKind;

    #[test]
    fn remote_sources_are_detected_by_prefix() {
        assert!(is_remote_source("http://localhost/a.json"));
        assert!(is_remote_source("https://example.com/a.json"));
        assert!(!is_remote_source("data/http://odd.json"));
        assert!(!is_remote_source("ftp://example.com/a.json"));
        assert!(!is_remote_source("./settings.json"));
    }

    #[test]
    fn normalize_accepts_http_urls() {
        let url = normalize_source_url("http://localhost:8080/doc.json?v=1").expect("url");
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.path(), "/doc.json");
    }

    #[test]
    fn normalize_rejects_other_schemes() {
        let err = normalize_source_url("file:///etc/hosts").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert_eq!(err.url(), Some("file:///etc/hosts"));

        let err = normalize_source_url("http://").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn status_mapping_is_stable() {
        assert_eq!(error_kind_from_status(404), ErrorKind::NotFound);
        assert_eq!(error_kind_from_status(403), ErrorKind::Permission);
        assert_eq!(error_kind_from_status(500), ErrorKind::Remote);
        assert_eq!(error_kind_from_status(418), ErrorKind::Remote);
    }
}
