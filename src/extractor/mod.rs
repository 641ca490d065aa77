pub mod registry;

pub use registry::{ExtractorDescriptor, ExtractorRegistry};
