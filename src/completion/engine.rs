//! Completion engine - orchestrates the completion flow
//!
//! This module ties the completion components together: scanning,
//! classification, candidate lookup, suppression and ranking.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use super::candidate::{Candidate, CompletionResult};
use super::catalog::{self, ClauseSpec, FieldKey};
use super::context::{ContextType, EsContext};
use super::fields::FieldData;
use super::provider::{CandidateProvider, DslCandidateProvider};
use crate::config::CompletionConfig;

/// Main completion engine
///
/// Holds no per-request state and can be shared across threads.
#[derive(Clone)]
pub struct CompletionEngine {
    /// Candidate provider for fetching suggestions
    provider: Arc<dyn CandidateProvider>,
    /// Typed characters needed before snippets show up unprompted
    snippet_min_prefix: usize,
}

impl CompletionEngine {
    /// Create a new completion engine backed by the static catalog
    ///
    /// # Arguments
    /// * `config` - Completion settings
    pub fn new(config: &CompletionConfig) -> Self {
        Self::with_provider(Arc::new(DslCandidateProvider::new(config.field_limit)), config)
    }

    /// Create a completion engine with a custom provider
    ///
    /// # Arguments
    /// * `provider` - Candidate provider for fetching suggestions
    /// * `config` - Completion settings
    pub fn with_provider(provider: Arc<dyn CandidateProvider>, config: &CompletionConfig) -> Self {
        Self {
            provider,
            snippet_min_prefix: config.snippet_min_prefix,
        }
    }

    /// Complete the document at the given cursor position
    ///
    /// # Arguments
    /// * `text` - Full document text
    /// * `cursor` - Cursor position in characters
    /// * `explicit` - Whether the user asked for completions
    /// * `fields` - Field mapping snapshot for this request
    ///
    /// # Returns
    /// * `Option<CompletionResult>` - `None` when there is nothing to suggest
    pub fn complete(
        &self,
        text: &str,
        cursor: usize,
        explicit: bool,
        fields: &FieldData,
    ) -> Option<CompletionResult> {
        // 1. Scan and classify
        let context = EsContext::build(text, cursor);
        debug!(
            "Completion context: {} path={:?} key={:?} word={:?}",
            context.kind.as_str(),
            context.path,
            context.current_key,
            context.current_word
        );

        // 2. Inside a string only values are completed unprompted
        let completes_value = matches!(context.kind, ContextType::FieldValue | ContextType::Value);
        if context.in_string && !explicit && !completes_value {
            debug!("Suppressed: cursor inside a string");
            return None;
        }

        // 3. Fetch candidates based on context
        let mut options = self.fetch_candidates(&context, explicit, fields);

        // 4. Nothing to show for automatic requests
        if options.is_empty() && !explicit {
            debug!("Suppressed: no candidates");
            return None;
        }

        // 5. Rank, keeping catalog order for equal boosts
        options.sort_by(|a, b| b.boost.cmp(&a.boost));
        let mut seen = HashSet::new();
        options.retain(|c| seen.insert((c.label.clone(), c.kind)));

        let (from, to) = replace_range(text, &context);
        debug!("Returning {} candidates for {}..{}", options.len(), from, to);

        Some(CompletionResult { from, to, options })
    }

    /// Fetch candidates based on completion context
    fn fetch_candidates(&self, context: &EsContext, explicit: bool, fields: &FieldData) -> Vec<Candidate> {
        let word = context.current_word.as_str();
        let parent = context.parent_key.as_deref().unwrap_or_default();
        let provider = &self.provider;

        match context.kind {
            ContextType::Root if context.after_colon => match context.current_key.as_deref() {
                Some(key) if catalog::is_field_value_key(key) => provider.fields(fields, word),
                Some(key) => provider.values(key, word),
                None => Vec::new(),
            },
            ContextType::Root => {
                let mut candidates = provider.root_properties(word);
                if explicit || word.chars().count() >= self.snippet_min_prefix {
                    // Nothing opened yet: insert a whole document
                    candidates.extend(provider.snippets(word, context.depth == 0));
                }
                candidates
            }
            _ if context.after_colon
                && !matches!(
                    context.kind,
                    ContextType::FieldValue
                        | ContextType::Value
                        | ContextType::Source
                        | ContextType::Unknown
                ) =>
            {
                Vec::new()
            }
            ContextType::Query | ContextType::BoolClause => {
                if let Some(candidates) = self.field_clause_candidates(&context.path, word, fields) {
                    return candidates;
                }
                let mut candidates = provider.query_types(word);
                if let Some(clause) = catalog::find_query(parent) {
                    candidates.extend(self.clause_options(clause, word));
                }
                candidates
            }
            ContextType::Bool => provider.bool_keywords(word),
            ContextType::Aggs => provider.aggregation_types(word),
            ContextType::AggDef => {
                let mut candidates = provider.aggregation_types(word);
                candidates.extend(provider.agg_def_properties(word));
                if let Some(agg) = catalog::find_aggregation(parent) {
                    candidates.extend(self.clause_options(agg, word));
                }
                candidates
            }
            ContextType::Sort if parent == "sort" => {
                let mut candidates = provider.fields(fields, word);
                candidates.extend(provider.options("sort", catalog::sort_special_fields(), word));
                candidates
            }
            ContextType::Sort => provider.options("sort", catalog::sort_options(), word),
            ContextType::Highlight if parent == "fields" => provider.fields(fields, word),
            ContextType::Highlight => provider.options("highlight", catalog::highlight_options(), word),
            ContextType::Source if context.after_colon || context.in_array => {
                provider.fields(fields, word)
            }
            ContextType::Source => provider.options("_source", catalog::source_options(), word),
            ContextType::Suggest => provider.options("suggest", catalog::suggest_options(), word),
            ContextType::FieldValue => provider.fields(fields, word),
            ContextType::Value => match context.current_key.as_deref() {
                Some(key) => provider.values(key, word),
                None => Vec::new(),
            },
            ContextType::Unknown if context.after_colon => provider.fields(fields, word),
            ContextType::Unknown => {
                if let Some(candidates) = self.field_clause_candidates(&context.path, word, fields) {
                    return candidates;
                }
                let mut candidates = Vec::new();
                if catalog::is_query_holder(parent) {
                    candidates.extend(provider.query_types(word));
                }
                if catalog::is_aggregation_holder(parent) {
                    candidates.extend(provider.aggregation_types(word));
                }
                let enclosing = context
                    .path
                    .iter()
                    .rev()
                    .find_map(|segment| catalog::find_clause(segment));
                if let Some(clause) = enclosing {
                    candidates.extend(self.clause_options(clause, word));
                }
                candidates
            }
        }
    }

    /// Candidates inside a query clause keyed by field names
    ///
    /// Directly under the clause, field names come first along with the
    /// options that sit beside them. Inside the object under a field name of
    /// a wrapping clause, as in `match.title`, the clause options apply.
    fn field_clause_candidates(&self, path: &[String], word: &str, fields: &FieldData) -> Option<Vec<Candidate>> {
        let (parent, ancestors) = path.split_last()?;

        let wrapping = ancestors
            .last()
            .and_then(|segment| catalog::find_query(segment))
            .filter(|clause| clause.field_key == FieldKey::Wrapping);
        if let Some(clause) = wrapping {
            return Some(self.clause_options(clause, word));
        }

        let clause = catalog::find_query(parent).filter(|clause| clause.keyed_by_field())?;
        let mut candidates = self.provider.fields(fields, word);
        match clause.field_key {
            FieldKey::Wrapping => {
                candidates.extend(self.provider.options(clause.name, clause.outer_fields, word));
            }
            FieldKey::Beside | FieldKey::Fixed => candidates.extend(self.clause_options(clause, word)),
        }
        Some(candidates)
    }

    fn clause_options(&self, clause: &ClauseSpec, word: &str) -> Vec<Candidate> {
        let names: Vec<&str> = clause.options().collect();
        self.provider.options(clause.name, &names, word)
    }
}

impl Default for CompletionEngine {
    fn default() -> Self {
        Self::new(&CompletionConfig::default())
    }
}

/// Character range the accepted candidate replaces.
///
/// Inside an open string the range also covers the opening quote directly
/// before the word and a closing quote directly after the cursor, since
/// field and value candidates insert their own quotes.
fn replace_range(text: &str, context: &EsContext) -> (usize, usize) {
    let mut from = context.word_start();
    let mut to = context.cursor_pos;

    if context.in_string {
        if text[..context.word_start_byte()].ends_with('"') {
            from -= 1;
        }
        if text[context.cursor_byte..].starts_with('"') {
            to += 1;
        }
    }

    (from, to)
}
