//! Normalized topic entries.
//!
//! Converts a [`RawTopicData`] record into a [`NormalizedEntry`] with every
//! default applied. Normalization is total: missing or empty fields fall
//! back to safe values and never produce an error.

use schooldesk_shared::RawTopicData;

/// Prompt used when a topic needs details but does not define its own prompt.
pub const DEFAULT_DETAILS_PROMPT: &str =
    "Уточните, пожалуйста, детали обращения: кабинет, номер компьютера и ваше имя.";

/// A topic ready for rendering. Built per render call and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    /// Display title, empty when the raw record has none.
    pub title: String,
    /// Non-empty step templates in original order.
    pub steps: Vec<String>,
    /// Commands in original order.
    pub commands: Vec<String>,
    /// Escalation note, `None` when absent or empty.
    pub escalate_text: Option<String>,
    /// Whether details are required before the full answer.
    pub needs_details: bool,
    /// Prompt for requesting details.
    pub details_prompt: String,
}

impl NormalizedEntry {
    /// Apply defaults to a raw record.
    ///
    /// - absent title → empty string
    /// - absent steps/commands → empty; `null` and empty steps are dropped
    /// - absent or empty escalation text → `None`
    /// - absent `needs_details` → `false`
    /// - absent details prompt → [`DEFAULT_DETAILS_PROMPT`]
    pub fn normalize(raw: &RawTopicData) -> Self {
        let steps = raw
            .steps
            .iter()
            .flatten()
            .flatten()
            .filter(|step| !step.is_empty())
            .cloned()
            .collect();

        Self {
            title: raw.title.clone().unwrap_or_default(),
            steps,
            commands: raw.commands.clone().unwrap_or_default(),
            escalate_text: raw.escalate_text.clone().filter(|text| !text.is_empty()),
            needs_details: raw.needs_details.unwrap_or(false),
            details_prompt: raw
                .details_prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_DETAILS_PROMPT.to_string()),
        }
    }
}

impl From<&RawTopicData> for NormalizedEntry {
    fn from(raw: &RawTopicData) -> Self {
        Self::normalize(raw)
    }
}
