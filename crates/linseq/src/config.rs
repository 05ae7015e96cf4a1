//! Sequence configuration, validation, and error types.
//!
//! [`SequenceConfig`] is the builder-input for constructing an
//! [`AnySequence`](crate::AnySequence). [`validate()`](SequenceConfig::validate)
//! checks the per-implementation settings before anything is allocated.

use std::error::Error;
use std::fmt;

use linseq_arena::ArenaConfig;
use linseq_list::ArrayConfig;

use crate::any::AnySequence;
use crate::kind::SequenceKind;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while reading or validating a [`SequenceConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The implementation name matches no [`SequenceKind`].
    UnknownKind {
        /// The name as given.
        name: String,
    },
    /// `array.initial_capacity` is zero; doubling could never grow it.
    ZeroInitialCapacity,
    /// `array.max_capacity` is below `array.initial_capacity`.
    CapacityBelowInitial {
        /// Configured starting capacity.
        initial: usize,
        /// Configured ceiling.
        max: usize,
    },
    /// `arena.max_nodes` is zero; a linked sequence could hold nothing.
    ZeroNodeBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind { name } => write!(
                f,
                "unknown sequence kind '{name}' (expected array, singly-linked, sentinel-linked or doubly-linked)"
            ),
            Self::ZeroInitialCapacity => write!(f, "array initial capacity must be at least 1"),
            Self::CapacityBelowInitial { initial, max } => write!(
                f,
                "array max capacity {max} is below initial capacity {initial}"
            ),
            Self::ZeroNodeBudget => write!(f, "arena node budget must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── SequenceConfig ─────────────────────────────────────────────────

/// Everything needed to build one sequence.
///
/// Only the settings for the selected `kind` are validated and used: an
/// array sequence ignores `arena`, a linked sequence ignores `array`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Which implementation to build.
    pub kind: SequenceKind,
    /// Buffer settings for [`SequenceKind::Array`].
    pub array: ArrayConfig,
    /// Node storage settings for the linked kinds.
    pub arena: ArenaConfig,
}

impl SequenceConfig {
    /// Default settings for `kind`.
    pub fn new(kind: SequenceKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Default settings for the kind named `name`.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(name.parse()?))
    }

    /// Check the settings that apply to `kind`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.kind {
            SequenceKind::Array => {
                let ArrayConfig {
                    initial_capacity,
                    max_capacity,
                } = self.array;
                if initial_capacity == 0 {
                    return Err(ConfigError::ZeroInitialCapacity);
                }
                if max_capacity < initial_capacity {
                    return Err(ConfigError::CapacityBelowInitial {
                        initial: initial_capacity,
                        max: max_capacity,
                    });
                }
            }
            SequenceKind::SinglyLinked
            | SequenceKind::SentinelLinked
            | SequenceKind::DoublyLinked => {
                if self.arena.max_nodes == 0 {
                    return Err(ConfigError::ZeroNodeBudget);
                }
            }
        }
        Ok(())
    }

    /// Validate, then build an empty sequence.
    pub fn build<T>(&self) -> Result<AnySequence<T>, ConfigError> {
        self.validate()?;
        Ok(AnySequence::with_config(self))
    }
}
