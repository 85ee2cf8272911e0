//! Aggregation catalog, grouped by category and sorted by name within each

use super::{ClauseCategory::*, ClauseSpec, clause};

const FIELD_METRIC: &[&str] = &["field"];
const FIELD_METRIC_OPTIONS: &[&str] = &["format", "missing", "script"];
const BUCKETS_PATH: &[&str] = &["buckets_path"];
const BUCKET_PIPELINE_OPTIONS: &[&str] = &["format", "gap_policy"];

pub(super) static AGGREGATION_TYPES: &[ClauseSpec] = &[
    // Metric
    clause(
        "avg",
        Metric,
        "Average of a numeric field",
        "\"avg\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        FIELD_METRIC_OPTIONS,
    ),
    clause(
        "cardinality",
        Metric,
        "Approximate count of distinct values",
        "\"cardinality\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        &["missing", "precision_threshold", "script"],
    ),
    clause(
        "extended_stats",
        Metric,
        "Stats plus variance and standard deviation",
        "\"extended_stats\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        &["missing", "script", "sigma"],
    ),
    clause(
        "geo_bounds",
        Metric,
        "Bounding box of geo points",
        "\"geo_bounds\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        &["wrap_longitude"],
    ),
    clause(
        "geo_centroid",
        Metric,
        "Centroid of geo points",
        "\"geo_centroid\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        &[],
    ),
    clause(
        "max",
        Metric,
        "Maximum of a numeric field",
        "\"max\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        FIELD_METRIC_OPTIONS,
    ),
    clause(
        "median_absolute_deviation",
        Metric,
        "Robust measure of variability",
        "\"median_absolute_deviation\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        &["compression", "missing", "script"],
    ),
    clause(
        "min",
        Metric,
        "Minimum of a numeric field",
        "\"min\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        FIELD_METRIC_OPTIONS,
    ),
    clause(
        "percentile_ranks",
        Metric,
        "Percentile rank of given values",
        "\"percentile_ranks\": {\n  \"field\": \"${1:field}\",\n  \"values\": [${2}]\n}",
        &["field", "values"],
        &["hdr", "keyed", "missing", "script"],
    ),
    clause(
        "percentiles",
        Metric,
        "Values at given percentiles",
        "\"percentiles\": {\n  \"field\": \"${1:field}\",\n  \"percents\": [${2:50, 95, 99}]\n}",
        FIELD_METRIC,
        &["hdr", "keyed", "missing", "percents", "script", "tdigest"],
    ),
    clause(
        "scripted_metric",
        Metric,
        "Metric computed by scripts",
        "\"scripted_metric\": {\n  \"init_script\": \"${1}\",\n  \"map_script\": \"${2}\",\n  \"combine_script\": \"${3}\",\n  \"reduce_script\": \"${4}\"\n}",
        &["map_script", "combine_script", "reduce_script"],
        &["init_script", "params"],
    ),
    clause(
        "stats",
        Metric,
        "Count, min, max, avg and sum",
        "\"stats\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        FIELD_METRIC_OPTIONS,
    ),
    clause(
        "sum",
        Metric,
        "Sum of a numeric field",
        "\"sum\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        FIELD_METRIC_OPTIONS,
    ),
    clause(
        "top_hits",
        Metric,
        "Top matching documents per bucket",
        "\"top_hits\": {\n  \"size\": ${1:1}\n}",
        &[],
        &["_source", "from", "highlight", "size", "sort"],
    ),
    clause(
        "value_count",
        Metric,
        "Number of values",
        "\"value_count\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        &["script"],
    ),
    clause(
        "weighted_avg",
        Metric,
        "Average weighted by another field",
        "\"weighted_avg\": {\n  \"value\": {\n    \"field\": \"${1:field}\"\n  },\n  \"weight\": {\n    \"field\": \"${2:field}\"\n  }\n}",
        &["value", "weight"],
        &["format", "value_type"],
    ),
    // Bucket
    clause(
        "adjacency_matrix",
        Bucket,
        "Buckets for every pair of intersecting filters",
        "\"adjacency_matrix\": {\n  \"filters\": {\n    \"${1:name}\": {\n      ${2}\n    }\n  }\n}",
        &["filters"],
        &["separator"],
    ),
    clause(
        "auto_date_histogram",
        Bucket,
        "Date histogram with automatic interval",
        "\"auto_date_histogram\": {\n  \"field\": \"${1:field}\",\n  \"buckets\": ${2:10}\n}",
        FIELD_METRIC,
        &["buckets", "format", "minimum_interval", "missing", "time_zone"],
    ),
    clause(
        "composite",
        Bucket,
        "Paginate buckets from several sources",
        "\"composite\": {\n  \"sources\": [\n    {\n      \"${1:name}\": {\n        \"terms\": {\n          \"field\": \"${2:field}\"\n        }\n      }\n    }\n  ]\n}",
        &["sources"],
        &["after", "size"],
    ),
    clause(
        "date_histogram",
        Bucket,
        "Buckets by date interval",
        "\"date_histogram\": {\n  \"field\": \"${1:field}\",\n  \"calendar_interval\": \"${2:1d}\"\n}",
        FIELD_METRIC,
        &[
            "calendar_interval",
            "extended_bounds",
            "fixed_interval",
            "format",
            "hard_bounds",
            "keyed",
            "min_doc_count",
            "missing",
            "offset",
            "order",
            "time_zone",
        ],
    ),
    clause(
        "date_range",
        Bucket,
        "Buckets by date ranges",
        "\"date_range\": {\n  \"field\": \"${1:field}\",\n  \"ranges\": [\n    { \"to\": \"${2:now}\" }\n  ]\n}",
        &["field", "ranges"],
        &["format", "keyed", "missing", "time_zone"],
    ),
    clause(
        "diversified_sampler",
        Bucket,
        "Sample top documents with diversity",
        "\"diversified_sampler\": {\n  \"shard_size\": ${1:200},\n  \"field\": \"${2:field}\"\n}",
        &[],
        &["execution_hint", "field", "max_docs_per_value", "shard_size"],
    ),
    clause(
        "filter",
        Bucket,
        "Single bucket of documents matching a query",
        "\"filter\": {\n  ${1}\n}",
        &[],
        &[],
    ),
    clause(
        "filters",
        Bucket,
        "One bucket per named query",
        "\"filters\": {\n  \"filters\": {\n    \"${1:name}\": {\n      ${2}\n    }\n  }\n}",
        &["filters"],
        &["keyed", "other_bucket", "other_bucket_key"],
    ),
    clause(
        "geo_distance",
        Bucket,
        "Buckets by distance rings from an origin",
        "\"geo_distance\": {\n  \"field\": \"${1:field}\",\n  \"origin\": \"${2:point}\",\n  \"ranges\": [\n    { \"to\": ${3:100} }\n  ]\n}",
        &["field", "origin", "ranges"],
        &["distance_type", "keyed", "unit"],
    ),
    clause(
        "geohash_grid",
        Bucket,
        "Buckets by geohash cell",
        "\"geohash_grid\": {\n  \"field\": \"${1:field}\",\n  \"precision\": ${2:5}\n}",
        FIELD_METRIC,
        &["bounds", "precision", "shard_size", "size"],
    ),
    clause(
        "global",
        Bucket,
        "All documents regardless of the query",
        "\"global\": {}",
        &[],
        &[],
    ),
    clause(
        "histogram",
        Bucket,
        "Buckets by numeric interval",
        "\"histogram\": {\n  \"field\": \"${1:field}\",\n  \"interval\": ${2:10}\n}",
        &["field", "interval"],
        &["extended_bounds", "hard_bounds", "keyed", "min_doc_count", "missing", "offset", "order"],
    ),
    clause(
        "ip_range",
        Bucket,
        "Buckets by IP ranges",
        "\"ip_range\": {\n  \"field\": \"${1:field}\",\n  \"ranges\": [\n    { \"mask\": \"${2:10.0.0.0/8}\" }\n  ]\n}",
        &["field", "ranges"],
        &["keyed"],
    ),
    clause(
        "missing",
        Bucket,
        "Documents without a value",
        "\"missing\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        &[],
    ),
    clause(
        "nested",
        Bucket,
        "Aggregate nested documents",
        "\"nested\": {\n  \"path\": \"${1:path}\"\n}",
        &["path"],
        &[],
    ),
    clause(
        "range",
        Bucket,
        "Buckets by numeric ranges",
        "\"range\": {\n  \"field\": \"${1:field}\",\n  \"ranges\": [\n    { \"to\": ${2:100} },\n    { \"from\": ${2:100} }\n  ]\n}",
        &["field", "ranges"],
        &["keyed", "missing", "script"],
    ),
    clause(
        "rare_terms",
        Bucket,
        "Buckets for infrequent terms",
        "\"rare_terms\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        &["exclude", "include", "max_doc_count", "missing", "precision"],
    ),
    clause(
        "reverse_nested",
        Bucket,
        "Join back from nested documents to their parents",
        "\"reverse_nested\": {}",
        &[],
        &["path"],
    ),
    clause(
        "sampler",
        Bucket,
        "Sample top-scoring documents",
        "\"sampler\": {\n  \"shard_size\": ${1:200}\n}",
        &[],
        &["shard_size"],
    ),
    clause(
        "significant_terms",
        Bucket,
        "Unusually frequent terms in the result set",
        "\"significant_terms\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        &["background_filter", "exclude", "include", "min_doc_count", "shard_size", "size"],
    ),
    clause(
        "significant_text",
        Bucket,
        "Unusually frequent terms in free text",
        "\"significant_text\": {\n  \"field\": \"${1:field}\"\n}",
        FIELD_METRIC,
        &["filter_duplicate_text", "min_doc_count", "size", "source_fields"],
    ),
    clause(
        "terms",
        Bucket,
        "Buckets per unique value",
        "\"terms\": {\n  \"field\": \"${1:field}\",\n  \"size\": ${2:10}\n}",
        FIELD_METRIC,
        &[
            "collect_mode",
            "exclude",
            "execution_hint",
            "include",
            "min_doc_count",
            "missing",
            "order",
            "script",
            "shard_size",
            "show_term_doc_count_error",
            "size",
        ],
    ),
    clause(
        "variable_width_histogram",
        Bucket,
        "Histogram with dynamic bucket widths",
        "\"variable_width_histogram\": {\n  \"field\": \"${1:field}\",\n  \"buckets\": ${2:10}\n}",
        FIELD_METRIC,
        &["buckets", "initial_buffer", "shard_size"],
    ),
    // Pipeline
    clause(
        "avg_bucket",
        Pipeline,
        "Average of a sibling metric across buckets",
        "\"avg_bucket\": {\n  \"buckets_path\": \"${1:path}\"\n}",
        BUCKETS_PATH,
        BUCKET_PIPELINE_OPTIONS,
    ),
    clause(
        "bucket_script",
        Pipeline,
        "Per-bucket script over other metrics",
        "\"bucket_script\": {\n  \"buckets_path\": {\n    \"${1:var}\": \"${2:path}\"\n  },\n  \"script\": \"${3:params.var}\"\n}",
        &["buckets_path", "script"],
        BUCKET_PIPELINE_OPTIONS,
    ),
    clause(
        "bucket_selector",
        Pipeline,
        "Keep buckets where a script is true",
        "\"bucket_selector\": {\n  \"buckets_path\": {\n    \"${1:var}\": \"${2:path}\"\n  },\n  \"script\": \"${3:params.var > 0}\"\n}",
        &["buckets_path", "script"],
        &["gap_policy"],
    ),
    clause(
        "bucket_sort",
        Pipeline,
        "Sort and truncate parent buckets",
        "\"bucket_sort\": {\n  \"sort\": [${1}],\n  \"size\": ${2:10}\n}",
        &[],
        &["from", "gap_policy", "size", "sort"],
    ),
    clause(
        "cumulative_sum",
        Pipeline,
        "Running total of a metric",
        "\"cumulative_sum\": {\n  \"buckets_path\": \"${1:path}\"\n}",
        BUCKETS_PATH,
        &["format"],
    ),
    clause(
        "derivative",
        Pipeline,
        "Change of a metric between buckets",
        "\"derivative\": {\n  \"buckets_path\": \"${1:path}\"\n}",
        BUCKETS_PATH,
        &["format", "gap_policy", "unit"],
    ),
    clause(
        "max_bucket",
        Pipeline,
        "Bucket with the maximum metric",
        "\"max_bucket\": {\n  \"buckets_path\": \"${1:path}\"\n}",
        BUCKETS_PATH,
        BUCKET_PIPELINE_OPTIONS,
    ),
    clause(
        "min_bucket",
        Pipeline,
        "Bucket with the minimum metric",
        "\"min_bucket\": {\n  \"buckets_path\": \"${1:path}\"\n}",
        BUCKETS_PATH,
        BUCKET_PIPELINE_OPTIONS,
    ),
    clause(
        "moving_fn",
        Pipeline,
        "Script over a sliding window of buckets",
        "\"moving_fn\": {\n  \"buckets_path\": \"${1:path}\",\n  \"window\": ${2:10},\n  \"script\": \"${3:MovingFunctions.unweightedAvg(values)}\"\n}",
        &["buckets_path", "window", "script"],
        &["gap_policy", "shift"],
    ),
    clause(
        "percentiles_bucket",
        Pipeline,
        "Percentiles of a sibling metric",
        "\"percentiles_bucket\": {\n  \"buckets_path\": \"${1:path}\"\n}",
        BUCKETS_PATH,
        &["format", "gap_policy", "keyed", "percents"],
    ),
    clause(
        "serial_diff",
        Pipeline,
        "Difference between a bucket and one lagged behind",
        "\"serial_diff\": {\n  \"buckets_path\": \"${1:path}\",\n  \"lag\": ${2:1}\n}",
        BUCKETS_PATH,
        &["format", "gap_policy", "lag"],
    ),
    clause(
        "stats_bucket",
        Pipeline,
        "Stats of a sibling metric",
        "\"stats_bucket\": {\n  \"buckets_path\": \"${1:path}\"\n}",
        BUCKETS_PATH,
        BUCKET_PIPELINE_OPTIONS,
    ),
    clause(
        "sum_bucket",
        Pipeline,
        "Sum of a sibling metric",
        "\"sum_bucket\": {\n  \"buckets_path\": \"${1:path}\"\n}",
        BUCKETS_PATH,
        BUCKET_PIPELINE_OPTIONS,
    ),
];
