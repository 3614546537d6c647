mod clients;
mod scrapers;
mod storage;

pub use clients::images::ImageClient;
pub use scrapers::{
    get_extractor, listing::scan_candidates, ExtractedFields, FieldExtractor, Selectors,
    DEFAULT_PROVIDER,
};
pub use storage::csv_store::CsvLedger;
