//! Query clause catalog, grouped by category and sorted by name within each

use super::{ClauseCategory::*, ClauseSpec, FieldKey::{Beside, Wrapping}, clause};

pub(super) static QUERY_TYPES: &[ClauseSpec] = &[
    // Full text
    clause(
        "combined_fields",
        FullText,
        "Search several text fields as if they were one combined field",
        "\"combined_fields\": {\n  \"query\": \"${1:text}\",\n  \"fields\": [\"${2:field}\"]\n}",
        &["query", "fields"],
        &["auto_generate_synonyms_phrase_query", "minimum_should_match", "operator", "zero_terms_query"],
    ),
    clause(
        "intervals",
        FullText,
        "Match terms by their order and proximity",
        "\"intervals\": {\n  \"${1:field}\": {\n    \"match\": {\n      \"query\": \"${2:text}\"\n    }\n  }\n}",
        &[],
        &["all_of", "any_of", "fuzzy", "match", "prefix", "wildcard"],
    )
    .keyed(Wrapping),
    clause(
        "match",
        FullText,
        "Analyzed full-text match on a single field",
        "\"match\": {\n  \"${1:field}\": \"${2:text}\"\n}",
        &["query"],
        &[
            "analyzer",
            "auto_generate_synonyms_phrase_query",
            "boost",
            "fuzziness",
            "fuzzy_transpositions",
            "lenient",
            "max_expansions",
            "minimum_should_match",
            "operator",
            "prefix_length",
            "zero_terms_query",
        ],
    )
    .keyed(Wrapping),
    clause(
        "match_bool_prefix",
        FullText,
        "Match terms as a bool query, the last term as a prefix",
        "\"match_bool_prefix\": {\n  \"${1:field}\": \"${2:text}\"\n}",
        &["query"],
        &["analyzer", "fuzziness", "max_expansions", "minimum_should_match", "operator", "prefix_length"],
    )
    .keyed(Wrapping),
    clause(
        "match_phrase",
        FullText,
        "Match an exact phrase",
        "\"match_phrase\": {\n  \"${1:field}\": \"${2:phrase}\"\n}",
        &["query"],
        &["analyzer", "boost", "slop", "zero_terms_query"],
    )
    .keyed(Wrapping),
    clause(
        "match_phrase_prefix",
        FullText,
        "Match a phrase whose last term is a prefix",
        "\"match_phrase_prefix\": {\n  \"${1:field}\": \"${2:phrase}\"\n}",
        &["query"],
        &["analyzer", "max_expansions", "slop", "zero_terms_query"],
    )
    .keyed(Wrapping),
    clause(
        "multi_match",
        FullText,
        "Run a match query across several fields",
        "\"multi_match\": {\n  \"query\": \"${1:text}\",\n  \"fields\": [\"${2:field}\"]\n}",
        &["query"],
        &[
            "analyzer",
            "boost",
            "fields",
            "fuzziness",
            "lenient",
            "minimum_should_match",
            "operator",
            "slop",
            "tie_breaker",
            "type",
            "zero_terms_query",
        ],
    ),
    clause(
        "query_string",
        FullText,
        "Lucene query string syntax with operators",
        "\"query_string\": {\n  \"query\": \"${1:text}\"\n}",
        &["query"],
        &[
            "allow_leading_wildcard",
            "analyze_wildcard",
            "analyzer",
            "boost",
            "default_field",
            "default_operator",
            "fields",
            "fuzziness",
            "lenient",
            "minimum_should_match",
            "phrase_slop",
            "time_zone",
        ],
    ),
    clause(
        "simple_query_string",
        FullText,
        "Forgiving query string syntax that never fails",
        "\"simple_query_string\": {\n  \"query\": \"${1:text}\",\n  \"fields\": [\"${2:field}\"]\n}",
        &["query"],
        &["analyze_wildcard", "analyzer", "default_operator", "fields", "flags", "lenient", "minimum_should_match"],
    ),
    // Term level
    clause(
        "exists",
        TermLevel,
        "Documents that contain an indexed value for a field",
        "\"exists\": {\n  \"field\": \"${1:field}\"\n}",
        &["field"],
        &["boost"],
    ),
    clause(
        "fuzzy",
        TermLevel,
        "Terms similar to the search term by edit distance",
        "\"fuzzy\": {\n  \"${1:field}\": {\n    \"value\": \"${2:value}\"\n  }\n}",
        &["value"],
        &["fuzziness", "max_expansions", "prefix_length", "rewrite", "transpositions"],
    )
    .keyed(Wrapping),
    clause(
        "ids",
        TermLevel,
        "Documents by their IDs",
        "\"ids\": {\n  \"values\": [\"${1:id}\"]\n}",
        &["values"],
        &["boost"],
    ),
    clause(
        "prefix",
        TermLevel,
        "Terms with a given prefix",
        "\"prefix\": {\n  \"${1:field}\": {\n    \"value\": \"${2:prefix}\"\n  }\n}",
        &["value"],
        &["boost", "case_insensitive", "rewrite"],
    )
    .keyed(Wrapping),
    clause(
        "range",
        TermLevel,
        "Terms within a range",
        "\"range\": {\n  \"${1:field}\": {\n    \"gte\": ${2:from},\n    \"lte\": ${3:to}\n  }\n}",
        &[],
        &["boost", "format", "gt", "gte", "lt", "lte", "relation", "time_zone"],
    )
    .keyed(Wrapping),
    clause(
        "regexp",
        TermLevel,
        "Terms matching a regular expression",
        "\"regexp\": {\n  \"${1:field}\": {\n    \"value\": \"${2:pattern}\"\n  }\n}",
        &["value"],
        &["case_insensitive", "flags", "max_determinized_states", "rewrite"],
    )
    .keyed(Wrapping),
    clause(
        "term",
        TermLevel,
        "Exact term match on a single field",
        "\"term\": {\n  \"${1:field}\": {\n    \"value\": \"${2:value}\"\n  }\n}",
        &["value"],
        &["boost", "case_insensitive"],
    )
    .keyed(Wrapping),
    clause(
        "terms",
        TermLevel,
        "Any of several exact terms",
        "\"terms\": {\n  \"${1:field}\": [\"${2:value}\"]\n}",
        &[],
        &["boost"],
    )
    .keyed(Beside),
    clause(
        "terms_set",
        TermLevel,
        "A minimum number of exact terms",
        "\"terms_set\": {\n  \"${1:field}\": {\n    \"terms\": [\"${2:value}\"],\n    \"minimum_should_match_field\": \"${3:field}\"\n  }\n}",
        &["terms"],
        &["minimum_should_match_field", "minimum_should_match_script"],
    )
    .keyed(Wrapping),
    clause(
        "wildcard",
        TermLevel,
        "Terms matching a wildcard pattern",
        "\"wildcard\": {\n  \"${1:field}\": {\n    \"value\": \"${2:pattern}\"\n  }\n}",
        &["value"],
        &["boost", "case_insensitive", "rewrite"],
    )
    .keyed(Wrapping),
    // Compound
    clause(
        "bool",
        Compound,
        "Combine queries with boolean logic",
        "\"bool\": {\n  \"must\": [\n    ${1}\n  ]\n}",
        &[],
        &["boost", "filter", "minimum_should_match", "must", "must_not", "should"],
    ),
    clause(
        "boosting",
        Compound,
        "Demote documents matching a negative query",
        "\"boosting\": {\n  \"positive\": {\n    ${1}\n  },\n  \"negative\": {\n    ${2}\n  },\n  \"negative_boost\": ${3:0.5}\n}",
        &["positive", "negative", "negative_boost"],
        &[],
    ),
    clause(
        "constant_score",
        Compound,
        "Wrap a filter and give every hit the same score",
        "\"constant_score\": {\n  \"filter\": {\n    ${1}\n  },\n  \"boost\": ${2:1.0}\n}",
        &["filter"],
        &["boost"],
    ),
    clause(
        "dis_max",
        Compound,
        "Best score of several queries",
        "\"dis_max\": {\n  \"queries\": [\n    ${1}\n  ]\n}",
        &["queries"],
        &["tie_breaker"],
    ),
    clause(
        "function_score",
        Compound,
        "Modify scores with functions",
        "\"function_score\": {\n  \"query\": {\n    ${1}\n  },\n  \"functions\": [\n    ${2}\n  ]\n}",
        &[],
        &["boost", "boost_mode", "functions", "max_boost", "min_score", "query", "score_mode"],
    ),
    // Joining
    clause(
        "has_child",
        Joining,
        "Parents whose child documents match",
        "\"has_child\": {\n  \"type\": \"${1:child}\",\n  \"query\": {\n    ${2}\n  }\n}",
        &["type", "query"],
        &["ignore_unmapped", "inner_hits", "max_children", "min_children", "score_mode"],
    ),
    clause(
        "has_parent",
        Joining,
        "Children whose parent document matches",
        "\"has_parent\": {\n  \"parent_type\": \"${1:parent}\",\n  \"query\": {\n    ${2}\n  }\n}",
        &["parent_type", "query"],
        &["ignore_unmapped", "inner_hits", "score"],
    ),
    clause(
        "nested",
        Joining,
        "Query nested objects as separate documents",
        "\"nested\": {\n  \"path\": \"${1:path}\",\n  \"query\": {\n    ${2}\n  }\n}",
        &["path", "query"],
        &["ignore_unmapped", "inner_hits", "score_mode"],
    ),
    clause(
        "parent_id",
        Joining,
        "Children of a specific parent",
        "\"parent_id\": {\n  \"type\": \"${1:child}\",\n  \"id\": \"${2:id}\"\n}",
        &["type", "id"],
        &["ignore_unmapped"],
    ),
    // Geo
    clause(
        "geo_bounding_box",
        Geo,
        "Points inside a bounding box",
        "\"geo_bounding_box\": {\n  \"${1:field}\": {\n    \"top_left\": ${2:point},\n    \"bottom_right\": ${3:point}\n  }\n}",
        &[],
        &["bottom_left", "bottom_right", "top_left", "top_right", "wkt"],
    )
    .keyed(Wrapping)
    .with_outer(&["ignore_unmapped", "validation_method"]),
    clause(
        "geo_distance",
        Geo,
        "Points within a distance of a point",
        "\"geo_distance\": {\n  \"distance\": \"${1:10km}\",\n  \"${2:field}\": ${3:point}\n}",
        &["distance"],
        &["distance_type", "ignore_unmapped", "validation_method"],
    )
    .keyed(Beside),
    clause(
        "geo_polygon",
        Geo,
        "Points inside a polygon",
        "\"geo_polygon\": {\n  \"${1:field}\": {\n    \"points\": [${2}]\n  }\n}",
        &["points"],
        &[],
    )
    .keyed(Wrapping)
    .with_outer(&["ignore_unmapped", "validation_method"]),
    clause(
        "geo_shape",
        Geo,
        "Shapes related to a query shape",
        "\"geo_shape\": {\n  \"${1:field}\": {\n    \"shape\": ${2:shape},\n    \"relation\": \"${3:intersects}\"\n  }\n}",
        &["shape"],
        &["indexed_shape", "relation"],
    )
    .keyed(Wrapping)
    .with_outer(&["ignore_unmapped"]),
    // Specialized
    clause(
        "distance_feature",
        Specialized,
        "Boost documents closer to an origin date or point",
        "\"distance_feature\": {\n  \"field\": \"${1:field}\",\n  \"origin\": \"${2:now}\",\n  \"pivot\": \"${3:7d}\"\n}",
        &["field", "origin", "pivot"],
        &["boost"],
    ),
    clause(
        "match_all",
        Specialized,
        "Every document",
        "\"match_all\": {}",
        &[],
        &["boost"],
    ),
    clause(
        "match_none",
        Specialized,
        "No documents",
        "\"match_none\": {}",
        &[],
        &[],
    ),
    clause(
        "more_like_this",
        Specialized,
        "Documents similar to given text or documents",
        "\"more_like_this\": {\n  \"fields\": [\"${1:field}\"],\n  \"like\": \"${2:text}\"\n}",
        &["like"],
        &["fields", "max_query_terms", "min_doc_freq", "min_term_freq", "minimum_should_match", "unlike"],
    ),
    clause(
        "percolate",
        Specialized,
        "Stored queries matching a document",
        "\"percolate\": {\n  \"field\": \"${1:field}\",\n  \"document\": {\n    ${2}\n  }\n}",
        &["field"],
        &["document", "documents", "id", "index"],
    ),
    clause(
        "pinned",
        Specialized,
        "Promote chosen documents above organic results",
        "\"pinned\": {\n  \"ids\": [\"${1:id}\"],\n  \"organic\": {\n    ${2}\n  }\n}",
        &["organic"],
        &["docs", "ids"],
    ),
    clause(
        "rank_feature",
        Specialized,
        "Boost by a numeric rank feature",
        "\"rank_feature\": {\n  \"field\": \"${1:field}\"\n}",
        &["field"],
        &["boost", "linear", "log", "saturation", "sigmoid"],
    ),
    clause(
        "script",
        Specialized,
        "Filter with a script",
        "\"script\": {\n  \"script\": {\n    \"source\": \"${1:source}\"\n  }\n}",
        &["script"],
        &["boost"],
    ),
    clause(
        "script_score",
        Specialized,
        "Compute the score with a script",
        "\"script_score\": {\n  \"query\": {\n    ${1}\n  },\n  \"script\": {\n    \"source\": \"${2:_score}\"\n  }\n}",
        &["query", "script"],
        &["boost", "min_score"],
    ),
    clause(
        "wrapper",
        Specialized,
        "Base64-encoded query",
        "\"wrapper\": {\n  \"query\": \"${1:base64}\"\n}",
        &["query"],
        &[],
    ),
];
