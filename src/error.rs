//! Typed fault reporting for the codec's programmer-misuse conditions.
//!
//! Every other fault class the codec recognizes — "not yet decoded" and
//! upstream hash collisions — is not an error at all; see the module docs on
//! [`crate::decoder`].

use thiserror::Error;

/// Programmer-misuse faults recognized by this crate.
///
/// None of these are reachable through ordinary protocol progress; each
/// indicates the caller violated an invariant documented on the offending
/// method.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RibltError {
    /// [`crate::sketch::Sketch::subtract`] was called with a sketch of a
    /// different length than `self`.
    #[error("cannot subtract sketches of different lengths: {self_len} != {other_len}")]
    SketchLengthMismatch {
        /// Length of `self`.
        self_len: usize,
        /// Length of the sketch passed to `subtract`.
        other_len: usize,
    },

    /// A symbol was added to an [`crate::encoder::Encoder`] after it had
    /// already produced at least one coded symbol.
    #[error("cannot add a symbol to an encoder that has already produced coded symbols")]
    EncoderAlreadyProducing,

    /// A symbol was added to a [`crate::decoder::Decoder`]'s own a-priori
    /// window whose hash was already present in that window.
    #[error("duplicate source symbol added to decoder's own window (hash {hash:#018x})")]
    DuplicateSymbol {
        /// The hash of the duplicate symbol.
        hash: u64,
    },
}
