//! Diamond ABI Merger
//!
//! Build-time aggregation of compiled contract ABIs for diamond
//! (multi-facet) contracts:
//!
//! - **Artifact loading**: Read per-unit compiler artifacts from the output
//!   directory (`out/<Unit>.sol/<Unit>.json` layout)
//! - **Fragment collection**: Concatenate ABI fragments across units in a
//!   caller-supplied order
//! - **Deduplication**: First-wins reduction on the (`name`, `type`)
//!   identity key — overloads sharing both collapse to the earliest
//!   declaration, see [`fragment::IdentityKey`]
//! - **Artifact output**: Deterministic JSON artifact for client generation
//!   and facet routing
//!
//! See [`merge::merge`] for the whole pipeline in one call.

pub mod args;
pub mod artifact;
pub mod error;
pub mod fragment;
pub mod merge;
pub mod output;

pub use artifact::{ArtifactStore, CompiledArtifact};
pub use error::MergeError;
pub use fragment::{AbiFragment, IdentityKey};
pub use merge::{collect, deduplicate, merge};
pub use output::write_merged;
