mod csv_source;
mod dataset_cache;

pub use csv_source::CsvSource;
pub use dataset_cache::{DatasetCache, LoadFailure};
