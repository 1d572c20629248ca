pub mod error;
pub mod ingest;
pub mod model;
pub mod report;
pub mod scotland;
pub mod source;
