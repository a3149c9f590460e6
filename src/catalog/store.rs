use std::collections::HashSet;

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;

use super::provider::ProviderChain;
use super::types::{CatalogDocument, CatalogMeta, SkillRecord, SkillType};

/// Active category filter. An empty selection means every category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    categories: Vec<String>,
}

impl Selection {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a selection, dropping blanks and duplicates while keeping first-seen order.
    pub fn of<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories = categories
            .into_iter()
            .map(Into::into)
            .filter(|c: &String| !c.trim().is_empty())
            .unique()
            .collect();
        Self { categories }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.is_all() || self.categories.iter().any(|c| c == category)
    }

    /// Labels for the selected-filter header.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        if self.is_all() {
            vec!["All".to_string()]
        } else {
            self.categories.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub built: usize,
    pub evaluated: usize,
    pub total: usize,
}

/// Immutable record list plus the view derived from the current selection.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    meta: CatalogMeta,
    records: Vec<SkillRecord>,
    category_counts: Vec<CategoryCount>,
    summary: SummaryCounts,
    selection: Selection,
    view: Vec<SkillRecord>,
    origin: String,
}

impl CatalogStore {
    /// Load through the provider chain, falling back in order.
    pub fn load(chain: &ProviderChain) -> Result<Self> {
        let loaded = chain.fetch()?;
        let mut store = Self::from_document(loaded.document);
        store.origin = loaded.source;
        Ok(store)
    }

    #[must_use]
    pub fn from_document(document: CatalogDocument) -> Self {
        for problem in document.validate() {
            warn!(%problem, "catalog data issue");
        }

        let CatalogDocument {
            meta,
            categories,
            skills,
        } = document;

        let categories = if categories.is_empty() {
            skills.iter().map(|s| s.category.clone()).unique().collect()
        } else {
            categories
        };

        let counts = skills.iter().map(|s| s.category.as_str()).counts();
        let category_counts = categories
            .into_iter()
            .map(|category| {
                let count = counts.get(category.as_str()).copied().unwrap_or(0);
                CategoryCount { category, count }
            })
            .collect();

        let summary = SummaryCounts {
            built: skills.iter().filter(|s| s.skill_type == SkillType::Built).count(),
            evaluated: skills
                .iter()
                .filter(|s| s.skill_type == SkillType::Evaluated)
                .count(),
            total: skills.len(),
        };

        let selection = Selection::all();
        let view = derive_view(&skills, &selection);
        debug!(total = summary.total, "catalog loaded");

        Self {
            meta,
            records: skills,
            category_counts,
            summary,
            selection,
            view,
            origin: "document".to_string(),
        }
    }

    /// Replace the selection and recompute the view from scratch.
    pub fn set_selection<I, S>(&mut self, categories: I) -> &[SkillRecord]
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.apply_selection(Selection::of(categories))
    }

    pub fn apply_selection(&mut self, selection: Selection) -> &[SkillRecord] {
        self.view = derive_view(&self.records, &selection);
        debug!(
            selected = ?selection.categories(),
            count = self.view.len(),
            "selection changed"
        );
        self.selection = selection;
        &self.view
    }

    #[must_use]
    pub fn view(&self) -> &[SkillRecord] {
        &self.view
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn records(&self) -> &[SkillRecord] {
        &self.records
    }

    #[must_use]
    pub const fn meta(&self) -> &CatalogMeta {
        &self.meta
    }

    /// Name of the provider the data came from.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Per-category totals over the full list, in declared order.
    #[must_use]
    pub fn category_counts(&self) -> &[CategoryCount] {
        &self.category_counts
    }

    #[must_use]
    pub const fn summary_counts(&self) -> SummaryCounts {
        self.summary
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SkillRecord> {
        self.records.iter().find(|s| s.id == id)
    }

    /// Case-insensitive substring match over category names.
    #[must_use]
    pub fn search_categories(&self, term: &str) -> Vec<&CategoryCount> {
        let needle = term.trim().to_lowercase();
        self.category_counts
            .iter()
            .filter(|c| c.category.to_lowercase().contains(&needle))
            .collect()
    }

    /// Selected categories that no declared category matches.
    #[must_use]
    pub fn unknown_categories<'a>(&self, selection: &'a Selection) -> Vec<&'a str> {
        let known: HashSet<&str> = self
            .category_counts
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        selection
            .categories()
            .iter()
            .map(String::as_str)
            .filter(|c| !known.contains(c))
            .collect()
    }
}

/// Filter by selection, then stable-partition built before everything else.
fn derive_view(records: &[SkillRecord], selection: &Selection) -> Vec<SkillRecord> {
    let mut view: Vec<SkillRecord> = records
        .iter()
        .filter(|r| selection.contains(&r.category))
        .cloned()
        .collect();
    view.sort_by_key(|r| !r.is_built());
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: &str, skill_type: SkillType) -> SkillRecord {
        SkillRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: category.to_string(),
            skill_type,
            rating: 5.0,
            ..SkillRecord::default()
        }
    }

    fn store(records: Vec<SkillRecord>, categories: &[&str]) -> CatalogStore {
        CatalogStore::from_document(CatalogDocument {
            meta: CatalogMeta::default(),
            categories: categories.iter().map(ToString::to_string).collect(),
            skills: records,
        })
    }

    fn ids(view: &[SkillRecord]) -> Vec<&str> {
        view.iter().map(|s| s.id.as_str()).collect()
    }

    fn three() -> CatalogStore {
        store(
            vec![
                record("a1", "A", SkillType::Built),
                record("b1", "B", SkillType::Evaluated),
                record("a2", "A", SkillType::Built),
            ],
            &["A", "B"],
        )
    }

    #[test]
    fn select_single_category_keeps_source_order() {
        let mut store = three();
        assert_eq!(ids(store.set_selection(["A"])), vec!["a1", "a2"]);
    }

    #[test]
    fn empty_selection_returns_all_built_first() {
        let mut store = three();
        let empty: [&str; 0] = [];
        assert_eq!(ids(store.set_selection(empty)), vec!["a1", "a2", "b1"]);
        assert!(store.selection().is_all());
    }

    #[test]
    fn initial_view_is_all() {
        let store = three();
        assert_eq!(ids(store.view()), vec!["a1", "a2", "b1"]);
    }

    #[test]
    fn evaluated_records_keep_relative_order() {
        let mut store = store(
            vec![
                record("e1", "A", SkillType::Evaluated),
                record("b1", "A", SkillType::Built),
                record("e2", "B", SkillType::Evaluated),
                record("b2", "B", SkillType::Built),
                record("e3", "A", SkillType::Evaluated),
            ],
            &["A", "B"],
        );
        assert_eq!(ids(store.set_selection(["A", "B"])), vec!["b1", "b2", "e1", "e2", "e3"]);
        assert_eq!(ids(store.set_selection(["A"])), vec!["b1", "e1", "e3"]);
    }

    #[test]
    fn reselecting_is_idempotent() {
        let mut store = three();
        let first = store.set_selection(["B", "A"]).to_vec();
        let second = store.set_selection(["B", "A"]).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_category_yields_empty_view() {
        let mut store = three();
        assert!(store.set_selection(["Z"]).is_empty());
        let selection = Selection::of(["A", "Z"]);
        assert_eq!(store.unknown_categories(&selection), vec!["Z"]);
    }

    #[test]
    fn counts_ignore_selection() {
        let mut store = three();
        store.set_selection(["B"]);
        assert_eq!(
            store.category_counts(),
            &[
                CategoryCount { category: "A".into(), count: 2 },
                CategoryCount { category: "B".into(), count: 1 },
            ]
        );
        assert_eq!(
            store.summary_counts(),
            SummaryCounts { built: 2, evaluated: 1, total: 3 }
        );
    }

    #[test]
    fn declared_category_without_records_counts_zero() {
        let store = store(vec![record("a1", "A", SkillType::Built)], &["A", "Empty"]);
        assert_eq!(store.category_counts()[1].count, 0);
    }

    #[test]
    fn categories_derived_when_not_declared() {
        let store = store(
            vec![
                record("x", "Y", SkillType::Built),
                record("z", "X", SkillType::Built),
                record("w", "Y", SkillType::Built),
            ],
            &[],
        );
        let names: Vec<_> = store.category_counts().iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Y", "X"]);
    }

    #[test]
    fn unknown_types_count_only_toward_total() {
        let store = store(
            vec![
                record("a", "A", SkillType::Built),
                record("b", "A", SkillType::Other("draft".into())),
            ],
            &["A"],
        );
        let summary = store.summary_counts();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.built + summary.evaluated, 1);
    }

    #[test]
    fn search_categories_is_case_insensitive() {
        let store = store(vec![], &["Product & Users", "Team", "Research Tools"]);
        let hits: Vec<_> = store.search_categories("  PRODUCT ").iter().map(|c| c.category.clone()).collect();
        assert_eq!(hits, vec!["Product & Users"]);
        assert_eq!(store.search_categories("").len(), 3);
        assert!(store.search_categories("nothing").is_empty());
    }

    #[test]
    fn get_finds_by_id() {
        let store = three();
        assert_eq!(store.get("b1").map(|s| s.name.as_str()), Some("B1"));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn selection_dedups_and_tags() {
        let selection = Selection::of(["A", "B", "A", " "]);
        assert_eq!(selection.categories(), &["A", "B"]);
        assert_eq!(selection.tags(), vec!["A", "B"]);
        assert!(selection.contains("B"));
        assert!(!selection.contains("C"));

        let all = Selection::of(["", "  "]);
        assert!(all.is_all());
        assert!(all.contains("anything"));
        assert_eq!(all.tags(), vec!["All"]);
    }
}
