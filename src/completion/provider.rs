//! Candidate provider for completion suggestions
//!
//! This module provides the trait and the catalog-backed implementation for
//! fetching completion candidates: query and aggregation types, properties,
//! keywords, option values, snippets and index field names.
//!
//! Catalog lookups match the typed word as a case-insensitive prefix. Field
//! lookups match it as a case-insensitive substring, since users often
//! remember only part of a dotted field path.

use std::collections::HashSet;

use super::candidate::{Candidate, CompletionKind};
use super::catalog::{self, PropertySpec};
use super::fields::FieldData;

/// Trait for providing completion candidates
pub trait CandidateProvider: Send + Sync {
    /// Get query clause types matching the prefix
    fn query_types(&self, prefix: &str) -> Vec<Candidate>;

    /// Get aggregation types matching the prefix
    fn aggregation_types(&self, prefix: &str) -> Vec<Candidate>;

    /// Get root-level search body properties matching the prefix
    fn root_properties(&self, prefix: &str) -> Vec<Candidate>;

    /// Get bool query keywords matching the prefix
    fn bool_keywords(&self, prefix: &str) -> Vec<Candidate>;

    /// Get properties valid inside a named aggregation
    fn agg_def_properties(&self, prefix: &str) -> Vec<Candidate>;

    /// Get option keys of `owner` matching the prefix
    fn options(&self, owner: &str, names: &[&str], prefix: &str) -> Vec<Candidate>;

    /// Get enumerated values of `key` matching the prefix
    fn values(&self, key: &str, prefix: &str) -> Vec<Candidate>;

    /// Get whole-document snippets matching the prefix
    fn snippets(&self, prefix: &str, wrap: bool) -> Vec<Candidate>;

    /// Get field names containing `word`
    fn fields(&self, data: &FieldData, word: &str) -> Vec<Candidate>;
}

/// Candidate provider backed by the static catalog
#[derive(Debug, Clone)]
pub struct DslCandidateProvider {
    /// Maximum field candidates when nothing has been typed
    field_limit: usize,
}

impl DslCandidateProvider {
    /// Create a new candidate provider
    ///
    /// # Arguments
    /// * `field_limit` - Cap on field candidates for an empty word
    pub fn new(field_limit: usize) -> Self {
        Self { field_limit }
    }

    fn properties(&self, specs: &[PropertySpec], kind: CompletionKind, prefix: &str) -> Vec<Candidate> {
        specs
            .iter()
            .filter(|spec| matches_prefix(spec.name, prefix))
            .map(|spec| spec.candidate(kind))
            .collect()
    }
}

impl Default for DslCandidateProvider {
    fn default() -> Self {
        Self::new(crate::config::default_field_limit())
    }
}

impl CandidateProvider for DslCandidateProvider {
    fn query_types(&self, prefix: &str) -> Vec<Candidate> {
        catalog::query_types()
            .iter()
            .filter(|spec| matches_prefix(spec.name, prefix))
            .map(|spec| spec.candidate(CompletionKind::QueryType))
            .collect()
    }

    fn aggregation_types(&self, prefix: &str) -> Vec<Candidate> {
        catalog::aggregation_types()
            .iter()
            .filter(|spec| matches_prefix(spec.name, prefix))
            .map(|spec| spec.candidate(CompletionKind::Aggregation))
            .collect()
    }

    fn root_properties(&self, prefix: &str) -> Vec<Candidate> {
        self.properties(catalog::root_properties(), CompletionKind::Property, prefix)
    }

    fn bool_keywords(&self, prefix: &str) -> Vec<Candidate> {
        self.properties(catalog::bool_keywords(), CompletionKind::Keyword, prefix)
    }

    fn agg_def_properties(&self, prefix: &str) -> Vec<Candidate> {
        self.properties(catalog::agg_def_properties(), CompletionKind::Property, prefix)
    }

    fn options(&self, owner: &str, names: &[&str], prefix: &str) -> Vec<Candidate> {
        names
            .iter()
            .filter(|name| matches_prefix(name, prefix))
            .map(|name| catalog::option_candidate(name, owner))
            .collect()
    }

    fn values(&self, key: &str, prefix: &str) -> Vec<Candidate> {
        catalog::values_for(key)
            .unwrap_or_default()
            .iter()
            .filter(|value| matches_prefix(value, prefix))
            .map(|value| catalog::value_candidate(value, key))
            .collect()
    }

    fn snippets(&self, prefix: &str, wrap: bool) -> Vec<Candidate> {
        catalog::snippets()
            .iter()
            .filter(|snippet| matches_prefix(snippet.label, prefix))
            .map(|snippet| snippet.candidate(wrap))
            .collect()
    }

    fn fields(&self, data: &FieldData, word: &str) -> Vec<Candidate> {
        let needle = word.to_lowercase();
        let mut candidates: Vec<Candidate> = Vec::new();

        for field in data.flatten() {
            let descriptor = field.descriptor;
            let base = Candidate::apply(
                field.path.as_str(),
                CompletionKind::Field,
                format!("\"{}\"", field.path),
            )
            .with_detail(descriptor.field_type.as_str());
            let base = match &descriptor.analyzer {
                Some(analyzer) => base.with_info(format!("analyzer: {analyzer}")),
                None => base,
            };

            if descriptor.is_text() {
                let keyword = format!("{}.keyword", field.path);
                let sibling = Candidate::apply(
                    keyword.as_str(),
                    CompletionKind::Field,
                    format!("\"{keyword}\""),
                )
                .with_detail("keyword")
                .with_boost(base.boost - 1);
                candidates.push(base);
                candidates.push(sibling);
            } else {
                candidates.push(base);
            }
        }

        // Declared multi-fields may repeat a synthesized `.keyword`
        let mut seen = HashSet::new();
        candidates.retain(|c| seen.insert(c.label.clone()));
        candidates.retain(|c| needle.is_empty() || c.label.to_lowercase().contains(&needle));

        if word.is_empty() {
            candidates.truncate(self.field_limit);
        }
        candidates
    }
}

/// Case-insensitive prefix match; an empty prefix matches everything
pub fn matches_prefix(candidate: &str, prefix: &str) -> bool {
    prefix.is_empty() || candidate.to_lowercase().starts_with(&prefix.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::fields::FieldDescriptor;

    fn provider() -> DslCandidateProvider {
        DslCandidateProvider::new(30)
    }

    fn labels(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_matches_prefix() {
        assert!(matches_prefix("size", "si"));
        assert!(matches_prefix("size", "SI"));
        assert!(matches_prefix("size", ""));
        assert!(!matches_prefix("sort", "si"));
        assert!(!matches_prefix("_source", "source"));
        assert!(!matches_prefix("a", "ab"));
    }

    #[test]
    fn test_root_properties_prefix() {
        let found = provider().root_properties("si");
        let names = labels(&found);
        assert!(names.contains(&"size"));
        assert!(!names.contains(&"sort"));
    }

    #[test]
    fn test_query_types_case_insensitive() {
        let found = provider().query_types("MATCH_P");
        assert_eq!(labels(&found), vec!["match_phrase", "match_phrase_prefix"]);
        assert!(found.iter().all(|c| c.kind == CompletionKind::QueryType));
    }

    #[test]
    fn test_bool_keywords_are_keywords() {
        let found = provider().bool_keywords("mu");
        assert_eq!(labels(&found), vec!["must", "must_not"]);
        assert_eq!(found[0].kind, CompletionKind::Keyword);
    }

    #[test]
    fn test_values() {
        let found = provider().values("order", "");
        assert_eq!(labels(&found), vec!["asc", "desc"]);
        assert!(provider().values("size", "").is_empty());
    }

    #[test]
    fn test_keyword_sibling() {
        let data = FieldData::single("idx", vec![FieldDescriptor::new("title", "text")]);
        let found = provider().fields(&data, "");
        assert_eq!(labels(&found), vec!["title", "title.keyword"]);
        assert_eq!(found[1].boost, found[0].boost - 1);
        assert_eq!(found[1].apply_text(), Some("\"title.keyword\""));
    }

    #[test]
    fn test_declared_keyword_not_duplicated() {
        let data = FieldData::single(
            "idx",
            vec![
                FieldDescriptor::new("title", "text")
                    .with_fields(vec![FieldDescriptor::new("keyword", "keyword")]),
            ],
        );
        let found = provider().fields(&data, "");
        assert_eq!(labels(&found), vec!["title", "title.keyword"]);
    }

    #[test]
    fn test_fields_substring_match() {
        let data = FieldData::single(
            "idx",
            vec![
                FieldDescriptor::new("user", "object").with_fields(vec![
                    FieldDescriptor::new("name", "keyword"),
                    FieldDescriptor::new("email", "keyword"),
                ]),
                FieldDescriptor::new("hostname", "keyword"),
            ],
        );
        let found = provider().fields(&data, "NAME");
        assert_eq!(labels(&found), vec!["user.name", "hostname"]);
    }

    #[test]
    fn test_field_detail_and_info() {
        let data = FieldData::single(
            "idx",
            vec![FieldDescriptor::new("body", "text").with_analyzer("english")],
        );
        let found = provider().fields(&data, "bo");
        assert_eq!(found[0].detail.as_deref(), Some("text"));
        assert_eq!(found[0].info.as_deref(), Some("analyzer: english"));
    }

    #[test]
    fn test_field_limit_only_for_empty_word() {
        let many = (0..50)
            .map(|i| FieldDescriptor::new(format!("f{i:02}"), "long"))
            .collect();
        let data = FieldData::single("idx", many);
        assert_eq!(provider().fields(&data, "").len(), 30);
        assert_eq!(provider().fields(&data, "f").len(), 50);
    }

    #[test]
    fn test_snippet_wrapping() {
        let wrapped = provider().snippets("match-", true);
        assert_eq!(labels(&wrapped), vec!["match-all"]);
        assert!(wrapped[0].insertion.text().starts_with('{'));

        let bare = provider().snippets("match-", false);
        assert!(bare[0].insertion.text().starts_with("\"query\""));
    }

    #[test]
    fn test_options() {
        let found = provider().options("terms", &["field", "size", "order"], "s");
        assert_eq!(labels(&found), vec!["size"]);
        assert_eq!(found[0].detail.as_deref(), Some("terms option"));
    }
}
