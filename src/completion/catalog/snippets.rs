//! Whole-document snippets
//!
//! Bodies are the contents of the top-level object, without the braces.

use super::Snippet;

pub(super) static SNIPPETS: &[Snippet] = &[
    Snippet {
        label: "aggregation-only",
        detail: "Aggregations without hits",
        body: "\"size\": 0,\n\"aggs\": {\n  \"${1:by_field}\": {\n    \"terms\": {\n      \"field\": \"${2:field}\"\n    }\n  }\n}",
    },
    Snippet {
        label: "bool-query",
        detail: "Bool query with must and filter",
        body: "\"query\": {\n  \"bool\": {\n    \"must\": [\n      { \"match\": { \"${1:field}\": \"${2:text}\" } }\n    ],\n    \"filter\": [\n      { \"term\": { \"${3:field}\": \"${4:value}\" } }\n    ]\n  }\n}",
    },
    Snippet {
        label: "date-histogram",
        detail: "Counts per calendar interval",
        body: "\"size\": 0,\n\"aggs\": {\n  \"${1:over_time}\": {\n    \"date_histogram\": {\n      \"field\": \"${2:@timestamp}\",\n      \"calendar_interval\": \"${3:1d}\"\n    }\n  }\n}",
    },
    Snippet {
        label: "match-all",
        detail: "Every document",
        body: "\"query\": {\n  \"match_all\": {}\n}",
    },
    Snippet {
        label: "multi-match",
        detail: "Full-text search across fields",
        body: "\"query\": {\n  \"multi_match\": {\n    \"query\": \"${1:text}\",\n    \"fields\": [\"${2:field}\"]\n  }\n}",
    },
    Snippet {
        label: "paginated-search",
        detail: "Sorted page of results",
        body: "\"from\": ${1:0},\n\"size\": ${2:20},\n\"query\": {\n  \"match_all\": {}\n},\n\"sort\": [\n  { \"${3:field}\": { \"order\": \"${4:desc}\" } }\n]",
    },
    Snippet {
        label: "range-filter",
        detail: "Filter on a range",
        body: "\"query\": {\n  \"bool\": {\n    \"filter\": [\n      { \"range\": { \"${1:field}\": { \"gte\": ${2:from}, \"lte\": ${3:to} } } }\n    ]\n  }\n}",
    },
    Snippet {
        label: "search-with-highlight",
        detail: "Match query with highlighted fragments",
        body: "\"query\": {\n  \"match\": {\n    \"${1:field}\": \"${2:text}\"\n  }\n},\n\"highlight\": {\n  \"fields\": {\n    \"${1:field}\": {}\n  }\n}",
    },
    Snippet {
        label: "terms-aggregation",
        detail: "Top values of a field",
        body: "\"size\": 0,\n\"aggs\": {\n  \"${1:top_values}\": {\n    \"terms\": {\n      \"field\": \"${2:field}\",\n      \"size\": ${3:10}\n    }\n  }\n}",
    },
];
