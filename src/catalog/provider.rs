//! Catalog data sources and the fallback chain that tries them in order.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, error, info};

use crate::config::SourceConfig;
use crate::error::{CatalogError, Result};

use super::types::CatalogDocument;

/// Well-known location of the catalog document relative to a site root.
pub const DATA_PATH: &str = "data/skills.json";

/// Copy of the catalog compiled into the binary.
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/skills.json");

pub trait CatalogProvider {
    /// Short name used in logs and error reports.
    fn name(&self) -> &str;

    fn fetch(&self) -> Result<CatalogDocument>;
}

/// Fetches `<base_url>/data/skills.json` over HTTP.
pub struct RemoteProvider {
    url: String,
    client: reqwest::blocking::Client,
}

impl RemoteProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| CatalogError::Config(format!("catalog http client: {err}")))?;
        Ok(Self {
            url: data_url(base_url),
            client,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogProvider for RemoteProvider {
    fn name(&self) -> &str {
        "remote"
    }

    fn fetch(&self) -> Result<CatalogDocument> {
        debug!(url = %self.url, "fetching catalog");
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|err| CatalogError::provider(self.name(), format!("GET {}: {err}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::provider(
                self.name(),
                format!("GET {} returned {status}", self.url),
            ));
        }

        let body = response
            .text()
            .map_err(|err| CatalogError::provider(self.name(), format!("read body: {err}")))?;
        CatalogDocument::from_json(&body)
    }
}

/// Reads the document from a local JSON file.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for FileProvider {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch(&self) -> Result<CatalogDocument> {
        let raw = std::fs::read_to_string(&self.path).map_err(|err| {
            CatalogError::provider(self.name(), format!("read {}: {err}", self.path.display()))
        })?;
        CatalogDocument::from_json(&raw)
    }
}

/// Serves a document baked in at compile time.
pub struct EmbeddedProvider {
    raw: &'static str,
}

impl EmbeddedProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self::from_static(EMBEDDED_CATALOG)
    }

    #[must_use]
    pub const fn from_static(raw: &'static str) -> Self {
        Self { raw }
    }
}

impl Default for EmbeddedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for EmbeddedProvider {
    fn name(&self) -> &str {
        "embedded"
    }

    fn fetch(&self) -> Result<CatalogDocument> {
        CatalogDocument::from_json(self.raw)
    }
}

/// A document together with the provider that produced it.
#[derive(Debug)]
pub struct LoadedDocument {
    pub source: String,
    pub document: CatalogDocument,
    pub fell_back: bool,
}

/// Ordered list of providers; the first one that yields a document wins.
#[derive(Default)]
pub struct ProviderChain {
    providers: Vec<Box<dyn CatalogProvider>>,
}

impl ProviderChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, provider: impl CatalogProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Remote, then local file, then the embedded copy, each only if configured.
    pub fn from_config(source: &SourceConfig) -> Result<Self> {
        let mut chain = Self::new();
        if let Some(base_url) = &source.base_url {
            chain = chain.with(RemoteProvider::new(base_url, source.timeout)?);
        }
        if let Some(path) = &source.data_file {
            chain = chain.with(FileProvider::new(path));
        }
        if source.use_embedded {
            chain = chain.with(EmbeddedProvider::new());
        }
        Ok(chain)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn fetch(&self) -> Result<LoadedDocument> {
        if self.providers.is_empty() {
            return Err(CatalogError::DataUnavailable(
                "no data sources configured".to_string(),
            ));
        }

        let mut failures = Vec::new();
        for (index, provider) in self.providers.iter().enumerate() {
            match provider.fetch() {
                Ok(document) => {
                    if index > 0 {
                        info!(
                            source = provider.name(),
                            skipped = ?failures,
                            "using fallback catalog source"
                        );
                    }
                    debug!(
                        source = provider.name(),
                        skills = document.skills.len(),
                        "catalog document loaded"
                    );
                    return Ok(LoadedDocument {
                        source: provider.name().to_string(),
                        document,
                        fell_back: index > 0,
                    });
                }
                Err(err) => {
                    debug!(source = provider.name(), error = %err, "catalog source failed");
                    failures.push(format!("{}: {err}", provider.name()));
                }
            }
        }

        error!(attempts = failures.len(), "no usable catalog source");
        Err(CatalogError::DataUnavailable(failures.join("; ")))
    }
}

fn data_url(base_url: &str) -> String {
    format!("{}/{DATA_PATH}", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl CatalogProvider for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn fetch(&self) -> Result<CatalogDocument> {
            Err(CatalogError::provider("failing", "unreachable"))
        }
    }

    #[test]
    fn data_url_joins_base() {
        assert_eq!(data_url("https://example.com"), "https://example.com/data/skills.json");
        assert_eq!(data_url("https://example.com/site/"), "https://example.com/site/data/skills.json");
    }

    #[test]
    fn embedded_catalog_parses() {
        let doc = EmbeddedProvider::new().fetch().unwrap();
        assert!(!doc.skills.is_empty());
        assert!(!doc.categories.is_empty());
        assert!(doc.validate().is_empty(), "{:?}", doc.validate());
    }

    #[test]
    fn chain_falls_back_silently() {
        let chain = ProviderChain::new().with(Failing).with(EmbeddedProvider::new());
        let loaded = chain.fetch().unwrap();
        assert_eq!(loaded.source, "embedded");
        assert!(loaded.fell_back);
    }

    #[test]
    fn chain_prefers_first_working_source() {
        let chain = ProviderChain::new()
            .with(EmbeddedProvider::from_static(r#"{"skills": []}"#))
            .with(EmbeddedProvider::new());
        let loaded = chain.fetch().unwrap();
        assert!(!loaded.fell_back);
        assert!(loaded.document.skills.is_empty());
    }

    #[test]
    fn chain_reports_every_failure() {
        let chain = ProviderChain::new()
            .with(Failing)
            .with(EmbeddedProvider::from_static("not json"));
        let err = chain.fetch().unwrap_err();
        let CatalogError::DataUnavailable(message) = err else {
            panic!("expected DataUnavailable");
        };
        assert!(message.contains("failing"));
        assert!(message.contains("embedded"));
    }

    #[test]
    fn record_with_nulls_does_not_reject_source() {
        let chain = ProviderChain::new().with(EmbeddedProvider::from_static(
            r#"{"skills": [
                {"id": "a", "type": "built", "rating": 5, "category": "X"},
                {"id": "b", "type": "evaluated", "rating": null, "requirements": null, "category": "X"}
            ]}"#,
        ));
        let loaded = chain.fetch().unwrap();
        assert!(!loaded.fell_back);
        assert_eq!(loaded.document.skills.len(), 2);
    }

    #[test]
    fn empty_chain_is_unavailable() {
        let err = ProviderChain::new().fetch().unwrap_err();
        assert!(matches!(err, CatalogError::DataUnavailable(_)));
    }

    #[test]
    fn missing_file_fails() {
        let provider = FileProvider::new("/definitely/not/here/skills.json");
        let err = provider.fetch().unwrap_err();
        assert!(matches!(err, CatalogError::Provider { .. }));
    }

    #[test]
    fn from_config_orders_sources() {
        let source = SourceConfig {
            base_url: Some("http://127.0.0.1:9".to_string()),
            data_file: Some(PathBuf::from("skills.json")),
            timeout: Duration::from_secs(1),
            use_embedded: true,
        };
        let chain = ProviderChain::from_config(&source).unwrap();
        assert_eq!(chain.names(), vec!["remote", "file", "embedded"]);
    }
}
