pub(crate) mod export;
pub(crate) mod extraction;

pub use export::ExportService;
pub use extraction::{ExtractionOptions, ExtractionService};
