//! Provider chain behaviour against a live HTTP mock.

use std::time::Duration;

use httpmock::prelude::*;

use skill_catalog::CatalogError;
use skill_catalog::catalog::{
    CatalogProvider, CatalogStore, EmbeddedProvider, FileProvider, ProviderChain, RemoteProvider,
};
use skill_catalog::test_utils::fixtures::sample_document;

fn remote(server: &MockServer) -> RemoteProvider {
    RemoteProvider::new(&server.base_url(), Duration::from_secs(5)).unwrap()
}

#[test]
fn remote_document_is_used_when_reachable() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/data/skills.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(sample_document().to_string());
    });

    let chain = ProviderChain::new()
        .with(remote(&server))
        .with(EmbeddedProvider::new());
    let store = CatalogStore::load(&chain).unwrap();

    mock.assert();
    assert_eq!(store.origin(), "remote");
    assert_eq!(store.summary_counts().total, 3);
    assert_eq!(store.meta().title, "Test Catalog");
}

#[test]
fn not_found_falls_back_to_embedded() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/skills.json");
        then.status(404);
    });

    let chain = ProviderChain::new()
        .with(remote(&server))
        .with(EmbeddedProvider::new());
    let loaded = chain.fetch().unwrap();

    assert_eq!(loaded.source, "embedded");
    assert!(loaded.fell_back);
    assert!(!loaded.document.skills.is_empty());
}

#[test]
fn malformed_body_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/skills.json");
        then.status(200).body("<html>not json</html>");
    });

    let direct = remote(&server).fetch().unwrap_err();
    assert!(matches!(direct, CatalogError::Parse(_)));

    let chain = ProviderChain::new()
        .with(remote(&server))
        .with(EmbeddedProvider::new());
    assert_eq!(chain.fetch().unwrap().source, "embedded");
}

#[test]
fn missing_skills_array_is_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/skills.json");
        then.status(200).body(r#"{"meta": {"title": "x"}, "categories": []}"#);
    });

    let err = remote(&server).fetch().unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn every_source_unusable_is_data_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/skills.json");
        then.status(500);
    });

    let chain = ProviderChain::new()
        .with(remote(&server))
        .with(FileProvider::new("/nonexistent/skills.json"));
    let err = CatalogStore::load(&chain).unwrap_err();

    assert_eq!(err.code(), "data_unavailable");
    assert!(err.is_retryable());
    let message = err.to_string();
    assert!(message.contains("remote"));
    assert!(message.contains("file"));
}

#[test]
fn trailing_slash_in_base_url_is_ignored() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/data/skills.json");
        then.status(200).body(sample_document().to_string());
    });

    let base = format!("{}/", server.base_url());
    let provider = RemoteProvider::new(&base, Duration::from_secs(5)).unwrap();
    assert!(provider.url().ends_with("/data/skills.json"));
    assert_eq!(provider.fetch().unwrap().skills.len(), 3);
    mock.assert();
}
