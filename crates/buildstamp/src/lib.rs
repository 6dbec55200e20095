//! Build-time property snapshot code generation.
//!
//! A build script hands this crate a raw mapping of string properties plus
//! a pair of timestamps captured at the start of the run; the crate turns
//! them into a deterministic, compilable Rust source unit that the built
//! crate can `include!` and query at runtime.
//!
//! The flow is two sequential steps:
//!
//! 1. [`PropertySnapshot::normalize`] sorts the raw mapping into a stable,
//!    duplicate-free snapshot.
//! 2. [`SourceEmitter::emit`] renders the snapshot and timestamps into a
//!    [`GeneratedUnit`], which the caller writes to its sink.
//!
//! The crate reads no ambient state itself: what gets captured, when
//! generation runs, and where the text lands are all the caller's business.

mod escape;

pub mod emitter;
pub mod snapshot;
pub mod timestamp;

pub use emitter::{GeneratedUnit, SourceEmitter};
pub use snapshot::PropertySnapshot;
pub use timestamp::TimestampPair;

use std::io;

use thiserror::Error;

/// Result type for fallible buildstamp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced to the caller.
///
/// Snapshot normalization and text emission are total over string input,
/// so the only failure mode is the destination sink. A partially written
/// artifact would break the consuming build, which is why sink failures
/// are propagated as-is and never retried or swallowed.
#[derive(Debug, Error)]
pub enum Error {
    /// Opening, writing, or flushing the destination sink failed.
    #[error("artifact write failed")]
    ArtifactWrite(#[from] io::Error),
}
