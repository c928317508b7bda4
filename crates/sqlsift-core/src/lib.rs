pub mod characterize;
pub mod config;
pub mod engine;
pub mod errors;
pub mod features;
pub mod model;
pub mod normalize;
pub mod report;
pub mod snapshot;
