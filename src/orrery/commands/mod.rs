use crate::config::OrreryConfig;
use crate::error::OrreryError;
use crate::index::{DisplayBody, DisplayIndex};
use crate::model::{CelestialBody, Direction, Field};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod edit;
pub mod list;
pub mod load;
pub mod persist;
pub mod remove;
pub mod reset;
pub mod sort;

#[derive(Debug, Clone)]
pub struct OrreryPaths {
    /// Directory holding `config.json` and the backing file.
    pub data_dir: PathBuf,
}

impl OrreryPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_bodies: Vec<CelestialBody>,
    pub listed_bodies: Vec<DisplayBody>,
    pub sorted: Option<(Field, Direction)>,
    pub config: Option<OrreryConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_bodies(mut self, bodies: Vec<CelestialBody>) -> Self {
        self.affected_bodies = bodies;
        self
    }

    pub fn with_listed_bodies(mut self, bodies: Vec<DisplayBody>) -> Self {
        self.listed_bodies = bodies;
        self
    }

    pub fn with_sorted(mut self, field: Field, direction: Direction) -> Self {
        self.sorted = Some((field, direction));
        self
    }

    pub fn with_config(mut self, config: OrreryConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Rewrites a positional index error in terms of the index the user typed.
pub(crate) fn at_display_index(err: OrreryError, index: DisplayIndex) -> OrreryError {
    match err {
        OrreryError::Index { len, .. } => OrreryError::Index {
            index: index.value(),
            len,
        },
        other => other,
    }
}
