//! Static completion catalog
//!
//! Read-only reference data for the Query DSL: query clause types,
//! aggregation types, root properties, bool keywords, per-clause options,
//! enumerated value sets and whole-document snippets. Every table is
//! `'static` and shared by all requests.
//!
//! Within a category, entries are sorted by name so equal-boost candidates
//! come out in a stable alphabetical order.

mod aggregations;
mod keywords;
mod queries;
mod snippets;

use super::candidate::{Candidate, CompletionKind};

/// Grouping of query and aggregation types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseCategory {
    /// Analyzed text queries
    FullText,
    /// Exact-value queries
    TermLevel,
    /// Queries wrapping other queries
    Compound,
    /// Nested and parent/child queries
    Joining,
    /// Geo queries
    Geo,
    /// Everything else
    Specialized,
    /// Metric aggregations
    Metric,
    /// Bucket aggregations
    Bucket,
    /// Pipeline aggregations
    Pipeline,
}

impl ClauseCategory {
    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            ClauseCategory::FullText => "full-text query",
            ClauseCategory::TermLevel => "term-level query",
            ClauseCategory::Compound => "compound query",
            ClauseCategory::Joining => "joining query",
            ClauseCategory::Geo => "geo query",
            ClauseCategory::Specialized => "specialized query",
            ClauseCategory::Metric => "metric aggregation",
            ClauseCategory::Bucket => "bucket aggregation",
            ClauseCategory::Pipeline => "pipeline aggregation",
        }
    }
}

/// Where a clause body takes a field name as a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    /// Only fixed keys, as in `multi_match`
    Fixed,
    /// Keyed by a field whose object holds the options, as in `match`
    Wrapping,
    /// A field key sits beside the options, as in `geo_distance`
    Beside,
}

/// A query clause or aggregation type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseSpec {
    pub name: &'static str,
    pub category: ClauseCategory,
    pub description: &'static str,
    /// Insertion template, including the clause key
    pub template: &'static str,
    pub required_fields: &'static [&'static str],
    pub optional_fields: &'static [&'static str],
    pub field_key: FieldKey,
    /// Options beside the field key of a [`FieldKey::Wrapping`] clause
    pub outer_fields: &'static [&'static str],
}

const fn clause(
    name: &'static str,
    category: ClauseCategory,
    description: &'static str,
    template: &'static str,
    required_fields: &'static [&'static str],
    optional_fields: &'static [&'static str],
) -> ClauseSpec {
    ClauseSpec {
        name,
        category,
        description,
        template,
        required_fields,
        optional_fields,
        field_key: FieldKey::Fixed,
        outer_fields: &[],
    }
}

impl ClauseSpec {
    /// Candidate inserting this clause
    pub fn candidate(&self, kind: CompletionKind) -> Candidate {
        Candidate::template(self.name, kind, self.template)
            .with_detail(self.category.label())
            .with_info(self.description)
    }

    const fn keyed(self, field_key: FieldKey) -> Self {
        Self { field_key, ..self }
    }

    const fn with_outer(self, outer_fields: &'static [&'static str]) -> Self {
        Self { outer_fields, ..self }
    }

    /// Whether the clause body takes a field name as a key
    pub fn keyed_by_field(&self) -> bool {
        self.field_key != FieldKey::Fixed
    }

    /// Required then optional sub-keys
    ///
    /// For a [`FieldKey::Wrapping`] clause these live inside the field object.
    pub fn options(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.required_fields
            .iter()
            .chain(self.optional_fields.iter())
            .copied()
    }
}

/// A named property with its own insertion template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
}

impl PropertySpec {
    /// Candidate inserting this property with the given kind
    pub fn candidate(&self, kind: CompletionKind) -> Candidate {
        Candidate::template(self.name, kind, self.template).with_detail(self.description)
    }
}

/// Whole-document snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub label: &'static str,
    pub detail: &'static str,
    /// Contents of the top-level object
    pub body: &'static str,
}

impl Snippet {
    /// Template of the full document, braces included
    pub fn document_template(&self) -> String {
        let indented: Vec<String> = self.body.lines().map(|line| format!("  {line}")).collect();
        format!("{{\n{}\n}}", indented.join("\n"))
    }

    /// Candidate for this snippet
    ///
    /// # Arguments
    /// * `wrap` - Insert a whole document instead of just the body
    pub fn candidate(&self, wrap: bool) -> Candidate {
        let template = if wrap {
            self.document_template()
        } else {
            self.body.to_string()
        };
        Candidate::template(self.label, CompletionKind::Snippet, template).with_detail(self.detail)
    }
}

/// Candidate for a plain option key such as `"size"` inside a clause
pub fn option_candidate(name: &str, owner: &str) -> Candidate {
    Candidate::template(name, CompletionKind::Property, format!("\"{name}\": ${{1}}"))
        .with_detail(format!("{owner} option"))
}

/// Candidate for an enumerated value
pub fn value_candidate(value: &str, key: &str) -> Candidate {
    Candidate::apply(value, CompletionKind::Value, format!("\"{value}\"")).with_detail(key)
}

/// All query clause types, by category
pub fn query_types() -> &'static [ClauseSpec] {
    queries::QUERY_TYPES
}

/// All aggregation types, by category
pub fn aggregation_types() -> &'static [ClauseSpec] {
    aggregations::AGGREGATION_TYPES
}

/// Root-level search body properties
pub fn root_properties() -> &'static [PropertySpec] {
    keywords::ROOT_PROPERTIES
}

/// Keywords valid directly inside `bool`
pub fn bool_keywords() -> &'static [PropertySpec] {
    keywords::BOOL_KEYWORDS
}

/// Extra properties valid inside a named aggregation
pub fn agg_def_properties() -> &'static [PropertySpec] {
    keywords::AGG_DEF_PROPERTIES
}

/// Options of a per-field sort object
pub fn sort_options() -> &'static [&'static str] {
    keywords::SORT_OPTIONS
}

/// Pseudo-fields accepted by `sort`
pub fn sort_special_fields() -> &'static [&'static str] {
    keywords::SORT_SPECIAL_FIELDS
}

/// Options of the `highlight` block
pub fn highlight_options() -> &'static [&'static str] {
    keywords::HIGHLIGHT_OPTIONS
}

/// Options of an object-valued `_source`
pub fn source_options() -> &'static [&'static str] {
    keywords::SOURCE_OPTIONS
}

/// Options of a suggester
pub fn suggest_options() -> &'static [&'static str] {
    keywords::SUGGEST_OPTIONS
}

/// Whole-document snippets
pub fn snippets() -> &'static [Snippet] {
    snippets::SNIPPETS
}

/// Look up a query clause type
pub fn find_query(name: &str) -> Option<&'static ClauseSpec> {
    query_types().iter().find(|spec| spec.name == name)
}

/// Look up an aggregation type
pub fn find_aggregation(name: &str) -> Option<&'static ClauseSpec> {
    aggregation_types().iter().find(|spec| spec.name == name)
}

/// Look up a query clause, then an aggregation type
pub fn find_clause(name: &str) -> Option<&'static ClauseSpec> {
    find_query(name).or_else(|| find_aggregation(name))
}

/// Whether `name` is a query clause type
pub fn is_query_clause(name: &str) -> bool {
    find_query(name).is_some()
}

/// Whether `name` is one of the bool occurrence keywords
pub fn is_bool_clause(name: &str) -> bool {
    matches!(name, "must" | "should" | "filter" | "must_not")
}

/// Whether the value of `key` names a field
pub fn is_field_value_key(key: &str) -> bool {
    keywords::FIELD_VALUE_KEYS.contains(&key)
}

/// Enumerated values registered for `key`
pub fn values_for(key: &str) -> Option<&'static [&'static str]> {
    keywords::VALUE_SETS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, values)| *values)
}

/// Whether the value of `key` is enumerated
pub fn is_value_key(key: &str) -> bool {
    values_for(key).is_some()
}

/// Whether an object under `key` holds a query
pub fn is_query_holder(key: &str) -> bool {
    keywords::QUERY_HOLDERS.contains(&key)
}

/// Whether an object under `key` holds aggregation-shaped entries
pub fn is_aggregation_holder(key: &str) -> bool {
    keywords::AGGREGATION_HOLDERS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_within_categories(specs: &[ClauseSpec]) -> bool {
        specs.windows(2).all(|pair| {
            pair[0].category != pair[1].category || pair[0].name < pair[1].name
        })
    }

    #[test]
    fn test_query_catalog_sorted() {
        assert!(sorted_within_categories(query_types()));
        assert!(sorted_within_categories(aggregation_types()));
    }

    #[test]
    fn test_flat_lists_sorted() {
        let names: Vec<&str> = root_properties().iter().map(|p| p.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);

        let labels: Vec<&str> = snippets().iter().map(|s| s.label).collect();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn test_lookups() {
        assert!(is_query_clause("match"));
        assert!(is_query_clause("bool"));
        assert!(!is_query_clause("date_histogram"));
        assert_eq!(find_aggregation("date_histogram").map(|s| s.category), Some(ClauseCategory::Bucket));
        // Query types win over aggregation types of the same name
        assert_eq!(find_clause("range").map(|s| s.category), Some(ClauseCategory::TermLevel));
        assert_eq!(find_clause("avg").map(|s| s.category), Some(ClauseCategory::Metric));
        assert!(find_clause("by_status").is_none());
    }

    #[test]
    fn test_value_sets() {
        assert_eq!(values_for("order"), Some(&["asc", "desc"][..]));
        assert_eq!(values_for("operator"), Some(&["and", "or"][..]));
        assert!(values_for("field").is_none());
        assert!(is_value_key("relation"));
        assert!(is_field_value_key("nested_path"));
        assert!(!is_field_value_key("order"));
    }

    #[test]
    fn test_bool_clause_names() {
        for name in ["must", "should", "filter", "must_not"] {
            assert!(is_bool_clause(name));
        }
        assert!(!is_bool_clause("minimum_should_match"));
    }

    #[test]
    fn test_clause_candidate() {
        let candidate = find_query("match").map(|s| s.candidate(CompletionKind::QueryType));
        let candidate = candidate.expect("match is in the catalog");
        assert_eq!(candidate.label, "match");
        assert_eq!(candidate.detail.as_deref(), Some("full-text query"));
        assert!(candidate.insertion.text().starts_with("\"match\": {"));
    }

    #[test]
    fn test_keyed_by_field() {
        let keyed = |name: &str| find_clause(name).is_some_and(|spec| spec.keyed_by_field());
        assert!(keyed("match"));
        assert!(keyed("term"));
        assert!(keyed("range"));
        assert!(keyed("geo_distance"));
        assert!(!keyed("multi_match"));
        assert!(!keyed("bool"));
        assert!(!keyed("date_histogram"));
    }

    #[test]
    fn test_field_key_placement() {
        let field_key = |name: &str| find_query(name).map(|spec| spec.field_key);
        assert_eq!(field_key("match"), Some(FieldKey::Wrapping));
        assert_eq!(field_key("terms_set"), Some(FieldKey::Wrapping));
        assert_eq!(field_key("terms"), Some(FieldKey::Beside));
        assert_eq!(field_key("geo_distance"), Some(FieldKey::Beside));
        assert_eq!(field_key("exists"), Some(FieldKey::Fixed));

        let shape = find_query("geo_shape").expect("geo_shape is in the catalog");
        assert!(shape.options().any(|option| option == "relation"));
        assert_eq!(shape.outer_fields, &["ignore_unmapped"]);

        // Aggregations name their field through a `field` key
        assert!(aggregation_types().iter().all(|spec| spec.field_key == FieldKey::Fixed));
    }

    #[test]
    fn test_clause_options_required_first() {
        let multi = find_query("multi_match").expect("multi_match is in the catalog");
        let options: Vec<&str> = multi.options().collect();
        assert_eq!(options[0], "query");
        assert!(options.contains(&"type"));
    }

    #[test]
    fn test_snippet_wrapping() {
        let snippet = &snippets()[3];
        assert_eq!(snippet.label, "match-all");
        assert_eq!(
            snippet.document_template(),
            "{\n  \"query\": {\n    \"match_all\": {}\n  }\n}"
        );
        assert_eq!(snippet.candidate(false).insertion.text(), snippet.body);
    }

    #[test]
    fn test_option_and_value_candidates() {
        let option = option_candidate("size", "terms");
        assert_eq!(option.insertion.text(), "\"size\": ${1}");
        assert_eq!(option.kind, CompletionKind::Property);

        let value = value_candidate("asc", "order");
        assert_eq!(value.apply_text(), Some("\"asc\""));
        assert_eq!(value.kind, CompletionKind::Value);
    }
}
