//! Knowledge base file loading.
//!
//! Topic files are TOML or JSON with a `topics` array; array order becomes
//! the store order. Loading validates ids and warns about step templates
//! that use placeholders the renderer does not substitute.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use schooldesk_shared::{KnowledgeBaseFile, Result, SchoolDeskError};

use crate::KnowledgeBase;
use crate::lint::unknown_placeholders;

/// Topics shipped with the binary.
const BUILTIN_TOPICS: &str = include_str!("../data/knowledge_base.toml");

impl KnowledgeBase {
    /// The built-in school IT topics.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_TOPICS)
            .map_err(|e| SchoolDeskError::parse(format!("built-in knowledge base: {e}")))
    }

    /// Parse a knowledge base from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: KnowledgeBaseFile =
            toml::from_str(content).map_err(|e| SchoolDeskError::parse(e.to_string()))?;
        Self::from_file(file)
    }

    /// Parse a knowledge base from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: KnowledgeBaseFile =
            serde_json::from_str(content).map_err(|e| SchoolDeskError::parse(e.to_string()))?;
        Self::from_file(file)
    }

    /// Load a knowledge base from disk. `.json` files are read as JSON,
    /// everything else as TOML.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SchoolDeskError::io(path, e))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        let kb = parsed.map_err(|e| match e {
            SchoolDeskError::Parse { message } => {
                SchoolDeskError::parse(format!("failed to parse {}: {message}", path.display()))
            }
            other => other,
        })?;

        info!(topics = kb.len(), "loaded knowledge base");
        Ok(kb)
    }

    fn from_file(file: KnowledgeBaseFile) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &file.topics {
            if record.id.trim().is_empty() {
                return Err(SchoolDeskError::validation("topic id must not be empty"));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(SchoolDeskError::validation(format!(
                    "duplicate topic id '{}'",
                    record.id
                )));
            }
        }

        for record in &file.topics {
            let steps = record.data.steps.iter().flatten().flatten();
            for (index, step) in steps.enumerate() {
                for name in unknown_placeholders(step) {
                    warn!(
                        topic = %record.id,
                        step = index + 1,
                        placeholder = name,
                        "step uses an unsupported placeholder; it will be printed as-is"
                    );
                }
            }
        }

        debug!(topics = file.topics.len(), "knowledge base validated");

        Ok(Self {
            topics: file
                .topics
                .into_iter()
                .map(|record| (record.id, record.data))
                .collect(),
        })
    }
}
