//! Raw knowledge base records as they appear in topic files.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RawTopicData
// ---------------------------------------------------------------------------

/// Topic data exactly as supplied by a knowledge store.
///
/// Every field is optional: the renderer applies defaults during
/// normalization instead of rejecting incomplete records. Steps may contain
/// `null` (JSON) or empty strings; both are dropped when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTopicData {
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Ordered step templates; `{details}` is the only placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Option<String>>>,
    /// Ordered shell commands, each rendered as a fenced code block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<String>>,
    /// Trailing note about filing a formal request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalate_text: Option<String>,
    /// Whether the full answer requires caller-supplied details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_details: Option<bool>,
    /// Prompt shown when details are required but missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_prompt: Option<String>,
}

// ---------------------------------------------------------------------------
// TopicRecord
// ---------------------------------------------------------------------------

/// A single `[[topics]]` entry in a knowledge base file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    /// Topic identifier used on the command line (e.g. `wifi`).
    pub id: String,
    /// The topic payload, flattened next to `id`.
    #[serde(flatten)]
    pub data: RawTopicData,
}

/// Root structure of a knowledge base file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseFile {
    /// Topics in display order.
    #[serde(default)]
    pub topics: Vec<TopicRecord>,
}
