//! Property names, structural keywords and enumerated value sets

use super::PropertySpec;

const fn prop(name: &'static str, description: &'static str, template: &'static str) -> PropertySpec {
    PropertySpec {
        name,
        description,
        template,
    }
}

pub(super) static ROOT_PROPERTIES: &[PropertySpec] = &[
    prop("_source", "Fields returned in each hit", "\"_source\": [${1}]"),
    prop(
        "aggregations",
        "Aggregations over the matching documents",
        "\"aggregations\": {\n  \"${1:name}\": {\n    ${2}\n  }\n}",
    ),
    prop(
        "aggs",
        "Aggregations over the matching documents",
        "\"aggs\": {\n  \"${1:name}\": {\n    ${2}\n  }\n}",
    ),
    prop("collapse", "Collapse hits on a field value", "\"collapse\": {\n  \"field\": \"${1:field}\"\n}"),
    prop("docvalue_fields", "Doc values returned in each hit", "\"docvalue_fields\": [${1}]"),
    prop("explain", "Return score explanations", "\"explain\": ${1:true}"),
    prop("fields", "Fields retrieved from the mapping", "\"fields\": [${1}]"),
    prop("from", "Offset of the first hit", "\"from\": ${1:0}"),
    prop("highlight", "Highlighted snippets", "\"highlight\": {\n  \"fields\": {\n    ${1}\n  }\n}"),
    prop("indices_boost", "Per-index score boosts", "\"indices_boost\": [${1}]"),
    prop(
        "knn",
        "Approximate nearest-neighbour search",
        "\"knn\": {\n  \"field\": \"${1:field}\",\n  \"query_vector\": [${2}],\n  \"k\": ${3:10},\n  \"num_candidates\": ${4:100}\n}",
    ),
    prop("min_score", "Minimum score of returned hits", "\"min_score\": ${1:0.5}"),
    prop("pit", "Point in time to search", "\"pit\": {\n  \"id\": \"${1:id}\",\n  \"keep_alive\": \"${2:1m}\"\n}"),
    prop("post_filter", "Filter applied after aggregations", "\"post_filter\": {\n  ${1}\n}"),
    prop("profile", "Return query profiling", "\"profile\": ${1:true}"),
    prop("query", "Query selecting documents", "\"query\": {\n  ${1}\n}"),
    prop("rescore", "Rescore the top hits", "\"rescore\": {\n  \"window_size\": ${1:50},\n  \"query\": {\n    \"rescore_query\": {\n      ${2}\n    }\n  }\n}"),
    prop("runtime_mappings", "Fields computed at search time", "\"runtime_mappings\": {\n  ${1}\n}"),
    prop("script_fields", "Script-computed fields per hit", "\"script_fields\": {\n  ${1}\n}"),
    prop("search_after", "Sort values to continue after", "\"search_after\": [${1}]"),
    prop("seq_no_primary_term", "Return sequence numbers", "\"seq_no_primary_term\": ${1:true}"),
    prop("size", "Number of hits to return", "\"size\": ${1:10}"),
    prop("sort", "Sort order of hits", "\"sort\": [\n  ${1}\n]"),
    prop("stored_fields", "Stored fields returned in each hit", "\"stored_fields\": [${1}]"),
    prop("suggest", "Suggestions for the input text", "\"suggest\": {\n  ${1}\n}"),
    prop("terminate_after", "Maximum documents per shard", "\"terminate_after\": ${1:1000}"),
    prop("timeout", "Search timeout", "\"timeout\": \"${1:10s}\""),
    prop("track_scores", "Compute scores when sorting", "\"track_scores\": ${1:true}"),
    prop("track_total_hits", "Accuracy of the total hit count", "\"track_total_hits\": ${1:true}"),
    prop("version", "Return document versions", "\"version\": ${1:true}"),
];

pub(super) static BOOL_KEYWORDS: &[PropertySpec] = &[
    prop("boost", "Score multiplier", "\"boost\": ${1:1.0}"),
    prop("filter", "Must match, without scoring", "\"filter\": [\n  ${1}\n]"),
    prop("minimum_should_match", "How many should clauses must match", "\"minimum_should_match\": ${1:1}"),
    prop("must", "Must match, contributes to score", "\"must\": [\n  ${1}\n]"),
    prop("must_not", "Must not match", "\"must_not\": [\n  ${1}\n]"),
    prop("should", "Should match, contributes to score", "\"should\": [\n  ${1}\n]"),
];

pub(super) static AGG_DEF_PROPERTIES: &[PropertySpec] = &[prop(
    "aggs",
    "Sub-aggregations",
    "\"aggs\": {\n  \"${1:name}\": {\n    ${2}\n  }\n}",
)];

pub(super) static SORT_OPTIONS: &[&str] = &[
    "format",
    "missing",
    "mode",
    "nested",
    "numeric_type",
    "order",
    "unmapped_type",
];

pub(super) static SORT_SPECIAL_FIELDS: &[&str] = &["_doc", "_score"];

pub(super) static HIGHLIGHT_OPTIONS: &[&str] = &[
    "boundary_chars",
    "boundary_scanner",
    "encoder",
    "fields",
    "fragment_size",
    "fragmenter",
    "no_match_size",
    "number_of_fragments",
    "order",
    "post_tags",
    "pre_tags",
    "require_field_match",
    "tags_schema",
    "type",
];

pub(super) static SOURCE_OPTIONS: &[&str] = &["excludes", "includes"];

pub(super) static SUGGEST_OPTIONS: &[&str] = &["completion", "phrase", "term", "text"];

pub(super) static FIELD_VALUE_KEYS: &[&str] = &[
    "field",
    "path",
    "nested_path",
    "_source",
    "stored_fields",
    "docvalue_fields",
    "collapse",
];

pub(super) static VALUE_SETS: &[(&str, &[&str])] = &[
    ("order", &["asc", "desc"]),
    (
        "type",
        &[
            "best_fields",
            "bool_prefix",
            "cross_fields",
            "most_fields",
            "phrase",
            "phrase_prefix",
        ],
    ),
    ("operator", &["and", "or"]),
    ("zero_terms_query", &["all", "none"]),
    ("mode", &["avg", "max", "median", "min", "sum"]),
    ("missing", &["_first", "_last"]),
    ("execution", &["global_ordinals", "map"]),
    ("relation", &["contains", "disjoint", "intersects", "within"]),
];

/// Keys whose object value holds a query
pub(super) static QUERY_HOLDERS: &[&str] = &[
    "negative",
    "organic",
    "positive",
    "post_filter",
    "rescore_query",
];

/// Keys whose value holds aggregation-shaped entries
pub(super) static AGGREGATION_HOLDERS: &[&str] = &["sources"];
