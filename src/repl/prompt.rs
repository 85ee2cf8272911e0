//! Custom prompt implementation for the esquery shell

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt showing how many mapped fields feed completion
pub struct QueryPrompt {
    /// Number of distinct field paths loaded
    field_count: usize,
}

impl QueryPrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `field_count` - Number of distinct field paths loaded
    ///
    /// # Returns
    /// * `Self` - New prompt
    pub fn new(field_count: usize) -> Self {
        Self { field_count }
    }

    /// Update the field count after a mapping is (re)loaded
    pub fn set_field_count(&mut self, field_count: usize) {
        self.field_count = field_count;
    }
}

impl Default for QueryPrompt {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Prompt for QueryPrompt {
    /// Render the left prompt (main prompt)
    fn render_prompt_left(&self) -> Cow<'_, str> {
        match self.field_count {
            0 => "esquery> ".into(),
            1 => "esquery [1 field]> ".into(),
            n => format!("esquery [{n} fields]> ").into(),
        }
    }

    /// Render the right prompt (empty in our case)
    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    /// Render the prompt indicator (already part of the left prompt)
    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    /// Render the multiline prompt indicator
    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    /// Render the history search prompt
    ///
    /// # Arguments
    /// * `history_search` - History search state
    ///
    /// # Returns
    /// * `Cow<str>` - History search prompt
    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}
