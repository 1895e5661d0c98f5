//! # riblt
//!
//! Rateless Invertible Bloom Lookup Table (Rateless IBLT) — a set-reconciliation
//! codec. Two parties, each holding a set of fixed-size source symbols, can
//! compute the symmetric difference of their sets with communication roughly
//! linear in the size of that difference (asymptotic coefficient ≈1.35),
//! without either party knowing the difference size in advance.
//!
//! ## Crate structure
//!
//! - [`symbol`] — the `Symbol` trait and `HashedSymbol`, the abelian-group
//!   abstraction every source-symbol type must implement
//! - [`coded_symbol`] — `CodedSymbol`, the `(sum, count, checksum)` triple
//! - [`mapping`] — the random mapping generator from a symbol hash to a lazy
//!   infinite sequence of coded-symbol indices
//! - [`window`] — the coding window: a heap-ordered set of source symbols
//!   folded into the coded-symbol stream
//! - [`encoder`] — incremental encoder producing the infinite coded-symbol
//!   sequence
//! - [`decoder`] — peeling decoder recovering the symmetric difference
//! - [`sketch`] — fixed-length random-access variant of the encoder
//! - [`error`] — typed fault reporting for programmer-misuse conditions
//!
//! The transport that carries coded symbols, the application's choice of hash
//! function, and wire serialization are all out of scope for this crate — see
//! the module docs on [`symbol`] and [`coded_symbol`] for the exact boundary.

pub mod coded_symbol;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod mapping;
pub mod sketch;
pub mod symbol;
pub mod window;

pub use coded_symbol::CodedSymbol;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::RibltError;
pub use sketch::Sketch;
pub use symbol::{HashedSymbol, Symbol};
