//! Runtime-selected sequence.
//!
//! [`AnySequence`] wraps one of the four implementations in an enum and
//! forwards every contract operation to it. Callers that only learn the
//! implementation from configuration hold an `AnySequence<T>` and never
//! name a concrete type.

use linseq_core::{SeqError, Sequence};
use linseq_list::{
    ArraySequence, DoublyLinkedSequence, SentinelLinkedSequence, SinglyLinkedSequence,
};

use crate::config::SequenceConfig;
use crate::kind::SequenceKind;

/// One of the four sequence implementations, chosen at runtime.
#[derive(Clone, Debug)]
pub enum AnySequence<T> {
    /// Resizable array.
    Array(ArraySequence<T>),
    /// Singly linked with head and tail.
    SinglyLinked(SinglyLinkedSequence<T>),
    /// Singly linked behind a dummy node.
    SentinelLinked(SentinelLinkedSequence<T>),
    /// Doubly linked.
    DoublyLinked(DoublyLinkedSequence<T>),
}

impl<T> AnySequence<T> {
    /// Empty sequence of `kind` with default settings.
    pub fn new(kind: SequenceKind) -> Self {
        Self::with_config(&SequenceConfig::new(kind))
    }

    /// Empty sequence built from `config` without validating it.
    ///
    /// Use [`SequenceConfig::build`] to reject bad settings first.
    pub fn with_config(config: &SequenceConfig) -> Self {
        tracing::debug!(kind = %config.kind, "building sequence");
        match config.kind {
            SequenceKind::Array => Self::Array(ArraySequence::with_config(config.array.clone())),
            SequenceKind::SinglyLinked => {
                Self::SinglyLinked(SinglyLinkedSequence::with_config(config.arena.clone()))
            }
            SequenceKind::SentinelLinked => {
                Self::SentinelLinked(SentinelLinkedSequence::with_config(config.arena.clone()))
            }
            SequenceKind::DoublyLinked => {
                Self::DoublyLinked(DoublyLinkedSequence::with_config(config.arena.clone()))
            }
        }
    }

    /// Which implementation is inside.
    pub fn kind(&self) -> SequenceKind {
        match self {
            Self::Array(_) => SequenceKind::Array,
            Self::SinglyLinked(_) => SequenceKind::SinglyLinked,
            Self::SentinelLinked(_) => SequenceKind::SentinelLinked,
            Self::DoublyLinked(_) => SequenceKind::DoublyLinked,
        }
    }

    /// Borrow the wrapped implementation as a trait object.
    pub fn as_dyn(&self) -> &dyn Sequence<T> {
        match self {
            Self::Array(s) => s,
            Self::SinglyLinked(s) => s,
            Self::SentinelLinked(s) => s,
            Self::DoublyLinked(s) => s,
        }
    }

    /// Mutably borrow the wrapped implementation as a trait object.
    pub fn as_dyn_mut(&mut self) -> &mut dyn Sequence<T> {
        match self {
            Self::Array(s) => s,
            Self::SinglyLinked(s) => s,
            Self::SentinelLinked(s) => s,
            Self::DoublyLinked(s) => s,
        }
    }
}

impl<T: 'static> AnySequence<T> {
    /// Move the wrapped implementation into a box.
    pub fn into_boxed(self) -> Box<dyn Sequence<T>> {
        match self {
            Self::Array(s) => Box::new(s),
            Self::SinglyLinked(s) => Box::new(s),
            Self::SentinelLinked(s) => Box::new(s),
            Self::DoublyLinked(s) => Box::new(s),
        }
    }
}

impl<T> Default for AnySequence<T> {
    fn default() -> Self {
        Self::new(SequenceKind::default())
    }
}

impl<T> Sequence<T> for AnySequence<T> {
    fn append(&mut self, element: T) -> bool {
        self.as_dyn_mut().append(element)
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), SeqError> {
        self.as_dyn_mut().insert(index, element)
    }

    fn get(&self, index: usize) -> Result<&T, SeqError> {
        self.as_dyn().get(index)
    }

    fn remove(&mut self, index: usize) -> Result<T, SeqError> {
        self.as_dyn_mut().remove(index)
    }

    fn size(&self) -> usize {
        self.as_dyn().size()
    }
}
