pub mod cli;
pub mod context;
pub mod engine;
pub mod extractor;
pub mod home;
pub mod logger;
pub mod model;
