//! Shared types, error model, and configuration for SchoolDesk.
//!
//! This crate is the foundation depended on by all other SchoolDesk crates.
//! It provides:
//! - [`SchoolDeskError`], the unified error type
//! - Knowledge base records ([`RawTopicData`], [`TopicRecord`], [`KnowledgeBaseFile`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, AssistantConfig, DEFAULT_GREETING, config_dir, config_file_path, load_config,
    load_config_from,
};
pub use error::{Result, SchoolDeskError};
pub use types::{KnowledgeBaseFile, RawTopicData, TopicRecord};
