//! Name-based selection of a sequence implementation.

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Which concrete sequence to build.
///
/// Parsed from configuration values. The canonical names are `array`,
/// `singly-linked`, `sentinel-linked` and `doubly-linked`; the older
/// property-file spellings `arraylist`, `single`, `dummyhead` and `double`
/// are accepted too. Matching ignores case and surrounding whitespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// [`ArraySequence`](linseq_list::ArraySequence).
    #[default]
    Array,
    /// [`SinglyLinkedSequence`](linseq_list::SinglyLinkedSequence).
    SinglyLinked,
    /// [`SentinelLinkedSequence`](linseq_list::SentinelLinkedSequence).
    SentinelLinked,
    /// [`DoublyLinkedSequence`](linseq_list::DoublyLinkedSequence).
    DoublyLinked,
}

impl SequenceKind {
    /// Every kind, in declaration order.
    pub const ALL: [SequenceKind; 4] = [
        Self::Array,
        Self::SinglyLinked,
        Self::SentinelLinked,
        Self::DoublyLinked,
    ];

    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::SinglyLinked => "singly-linked",
            Self::SentinelLinked => "sentinel-linked",
            Self::DoublyLinked => "doubly-linked",
        }
    }

    /// Whether the kind keeps its elements in linked nodes.
    pub fn is_linked(self) -> bool {
        !matches!(self, Self::Array)
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SequenceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" | "arraylist" => Ok(Self::Array),
            "singly-linked" | "single" => Ok(Self::SinglyLinked),
            "sentinel-linked" | "dummyhead" => Ok(Self::SentinelLinked),
            "doubly-linked" | "double" => Ok(Self::DoublyLinked),
            _ => Err(ConfigError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}
