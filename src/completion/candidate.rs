//! Completion candidates and results
//!
//! Candidates are plain values. Ranking depends only on `boost`, which is
//! derived from the candidate's [`CompletionKind`].

use serde::Serialize;

/// Closed set of candidate kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionKind {
    /// Query clause type (`match`, `term`, ...)
    QueryType,
    /// Aggregation type (`terms`, `avg`, ...)
    Aggregation,
    /// Object property (root properties, clause options)
    Property,
    /// Index field name
    Field,
    /// Structural keyword (`must`, `should`, ...)
    Keyword,
    /// Whole-document snippet
    Snippet,
    /// Enumerated option value
    Value,
}

impl CompletionKind {
    /// Ranking weight of the kind
    ///
    /// Ordering: query type > aggregation > property > field > keyword >
    /// snippet > value.
    pub fn boost(self) -> i32 {
        match self {
            CompletionKind::QueryType => 60,
            CompletionKind::Aggregation => 50,
            CompletionKind::Property => 40,
            CompletionKind::Field => 30,
            CompletionKind::Keyword => 20,
            CompletionKind::Snippet => 10,
            CompletionKind::Value => 0,
        }
    }
}

/// What gets inserted when a candidate is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Insertion {
    /// Literal text
    Apply(String),
    /// Snippet with `${n:default}` placeholders, expanded by the editor
    Template(String),
}

impl Insertion {
    /// Raw insertion text
    pub fn text(&self) -> &str {
        match self {
            Insertion::Apply(text) | Insertion::Template(text) => text,
        }
    }
}

/// One completion suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Display and match text
    pub label: String,

    /// Candidate kind
    #[serde(rename = "type")]
    pub kind: CompletionKind,

    /// Short detail shown beside the label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Longer documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    /// Relative ranking weight
    pub boost: i32,

    /// Text to insert
    #[serde(flatten)]
    pub insertion: Insertion,
}

impl Candidate {
    /// Create a candidate that inserts `apply` literally
    pub fn apply(label: impl Into<String>, kind: CompletionKind, apply: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            info: None,
            boost: kind.boost(),
            insertion: Insertion::Apply(apply.into()),
        }
    }

    /// Create a candidate that inserts a placeholder template
    pub fn template(
        label: impl Into<String>,
        kind: CompletionKind,
        template: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            info: None,
            boost: kind.boost(),
            insertion: Insertion::Template(template.into()),
        }
    }

    /// Attach a detail string
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach documentation
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// Override the boost
    pub fn with_boost(mut self, boost: i32) -> Self {
        self.boost = boost;
        self
    }

    /// Literal insertion text, if this is not a template
    pub fn apply_text(&self) -> Option<&str> {
        match &self.insertion {
            Insertion::Apply(text) => Some(text),
            Insertion::Template(_) => None,
        }
    }
}

/// Completion answer for one request
///
/// Offsets count characters. Outside strings `from` is the cursor minus the
/// length of the typed word. Inside a string the range also takes in the
/// opening quote before the word and a closing quote right after the cursor,
/// so `from` sits one character earlier and `to` may sit one later. Field
/// and value candidates carry their own quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    /// Start of the replaced range
    pub from: usize,

    /// End of the replaced range
    pub to: usize,

    /// Candidates ordered by descending boost
    pub options: Vec<Candidate>,
}

impl CompletionResult {
    /// Labels of the options, in order
    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|c| c.label.as_str()).collect()
    }

    /// Find an option by label
    pub fn find(&self, label: &str) -> Option<&Candidate> {
        self.options.iter().find(|c| c.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boost_ordering() {
        let kinds = [
            CompletionKind::QueryType,
            CompletionKind::Aggregation,
            CompletionKind::Property,
            CompletionKind::Field,
            CompletionKind::Keyword,
            CompletionKind::Snippet,
            CompletionKind::Value,
        ];
        for pair in kinds.windows(2) {
            assert!(pair[0].boost() > pair[1].boost(), "{:?} vs {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_candidate_serialization() {
        let candidate = Candidate::apply("status", CompletionKind::Field, "\"status\"")
            .with_detail("keyword");
        let json = serde_json::to_value(&candidate).unwrap();

        assert_eq!(json["label"], "status");
        assert_eq!(json["type"], "field");
        assert_eq!(json["detail"], "keyword");
        assert_eq!(json["apply"], "\"status\"");
        assert_eq!(json["boost"], 30);
        assert!(json.get("info").is_none());
        assert!(json.get("template").is_none());
    }

    #[test]
    fn test_template_serialization() {
        let candidate = Candidate::template("match", CompletionKind::QueryType, "\"match\": {$0}");
        let json = serde_json::to_value(&candidate).unwrap();

        assert_eq!(json["type"], "query_type");
        assert_eq!(json["template"], "\"match\": {$0}");
        assert!(candidate.apply_text().is_none());
    }

    #[test]
    fn test_result_helpers() {
        let result = CompletionResult {
            from: 3,
            to: 3,
            options: vec![
                Candidate::apply("asc", CompletionKind::Value, "\"asc\""),
                Candidate::apply("desc", CompletionKind::Value, "\"desc\""),
            ],
        };
        assert_eq!(result.labels(), vec!["asc", "desc"]);
        assert_eq!(result.find("desc").and_then(|c| c.apply_text()), Some("\"desc\""));
        assert!(result.find("up").is_none());
    }
}
