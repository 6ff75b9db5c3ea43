//! Knowledge store for SchoolDesk.
//!
//! Holds the read-only mapping from topic id to raw topic data. The renderer
//! only needs [`KnowledgeStore`]: lookup by key and iteration in definition
//! order. [`KnowledgeBase`] is the ordered implementation backed by a topic
//! file (TOML or JSON) or by the topics embedded in the binary.

mod lint;
mod loader;

use schooldesk_shared::RawTopicData;

pub use lint::{SUPPORTED_PLACEHOLDER, unknown_placeholders};

/// Read access to a collection of topics.
pub trait KnowledgeStore {
    /// Look up a topic by its identifier.
    fn get(&self, topic: &str) -> Option<&RawTopicData>;

    /// Iterate over all topics in definition order.
    fn entries(&self) -> impl Iterator<Item = (&str, &RawTopicData)>;
}

/// Ordered, immutable collection of topics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    topics: Vec<(String, RawTopicData)>,
}

impl KnowledgeBase {
    /// Build a knowledge base from `(id, data)` pairs, keeping their order.
    ///
    /// A repeated id replaces the data of the first occurrence in place, so
    /// ids stay unique. File loading rejects duplicates instead.
    pub fn from_topics<I, K>(topics: I) -> Self
    where
        I: IntoIterator<Item = (K, RawTopicData)>,
        K: Into<String>,
    {
        let mut kb = Self::default();
        for (id, data) in topics {
            let id = id.into();
            match kb.topics.iter_mut().find(|(existing, _)| *existing == id) {
                Some((_, slot)) => *slot = data,
                None => kb.topics.push((id, data)),
            }
        }
        kb
    }

    /// Number of topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether the knowledge base has no topics.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl KnowledgeStore for KnowledgeBase {
    fn get(&self, topic: &str) -> Option<&RawTopicData> {
        self.topics
            .iter()
            .find(|(id, _)| id == topic)
            .map(|(_, data)| data)
    }

    fn entries(&self) -> impl Iterator<Item = (&str, &RawTopicData)> {
        self.topics.iter().map(|(id, data)| (id.as_str(), data))
    }
}
