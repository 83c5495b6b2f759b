pub mod catalog;
pub mod enricher;

pub use catalog::{RunSummary, StarPipeline};
pub use enricher::Enricher;
