pub mod envelope;

pub use envelope::{EnvelopeError, seal_bytes, unseal_bytes};
