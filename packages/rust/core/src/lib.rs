//! Response normalization and rendering for SchoolDesk.
//!
//! Looks up a topic in a [`KnowledgeStore`](schooldesk_knowledge::KnowledgeStore),
//! normalizes the raw record and formats the final answer text.

pub mod entry;
pub mod renderer;

pub use entry::{DEFAULT_DETAILS_PROMPT, NormalizedEntry};
pub use renderer::{ResponseRenderer, UNKNOWN_TOPIC_PROMPT};
