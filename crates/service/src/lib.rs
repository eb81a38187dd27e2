//! Service layer for the portal.
//!
//! Centralizes business logic between the HTTP/CLI surfaces and
//! storage/search: NotFound mapping, limit capping, the ETL orchestration.

mod error;
mod ingest_service;
mod item_service;
mod search_service;

pub use error::ServiceError;
pub use ingest_service::IngestService;
pub use item_service::{ItemPage, ItemService};
pub use search_service::SearchService;
