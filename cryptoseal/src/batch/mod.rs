mod run;
mod scan;

pub use run::{BatchError, BatchItem, BatchReport, Outcome, run_batch};
pub use scan::ExtensionFilter;

/// The direction of one batch run, fixed for its whole duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Turn eligible plaintext files into envelopes.
    Seal,
    /// Turn envelopes back into plaintext files.
    Unseal,
}
