//! Record merging: identity matching against the sample mapping, flat record
//! emission, and aggregate summary statistics.

use thiserror::Error;

pub mod engine;
pub mod summary;

pub use engine::{merge, MappingLookup, MergeOutput};
pub use summary::MergeSummary;

#[derive(Error, Debug)]
pub enum MergeError {
    /// Raised only when every input source yielded zero records. One empty
    /// source degrades gracefully; all of them empty aborts the run.
    #[error("no input data: all sources yielded zero records")]
    NoData,
}
