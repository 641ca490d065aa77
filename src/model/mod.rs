pub mod extraction;

pub use extraction::{ExtractionOverride, OverrideParseError, merged_config};
