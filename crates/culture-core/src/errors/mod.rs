//! Error handling for the gap engine.
//! One error enum per subsystem, `thiserror` only.
//!
//! The engine operations themselves are total and never return these;
//! they guard the edges where data enters the system (profiles, catalog, config).

pub mod catalog_error;
pub mod config_error;
pub mod culture_error;
pub mod profile_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use culture_error::{CultureError, CultureResult};
pub use profile_error::ProfileError;
