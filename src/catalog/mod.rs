//! Skill catalog: document model, data providers and the filtering store.
//!
//! Data flows one way: a [`ProviderChain`] yields a [`CatalogDocument`], the
//! [`CatalogStore`] takes ownership of its records and derives the visible
//! view from the active [`Selection`].

pub mod provider;
pub mod store;
pub mod types;

pub use provider::{
    CatalogProvider, DATA_PATH, EmbeddedProvider, FileProvider, LoadedDocument, ProviderChain,
    RemoteProvider,
};
pub use store::{CatalogStore, CategoryCount, Selection, SummaryCounts};
pub use types::{CatalogDocument, CatalogMeta, SkillRecord, SkillType};
