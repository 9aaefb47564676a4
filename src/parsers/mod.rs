pub mod nexrain;
pub mod types;

pub use nexrain::{normalize, Nexrain};
pub use types::{Normalizer, RawPayload, RawRecord, Sample};
