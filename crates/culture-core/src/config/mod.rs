//! Configuration for the gap engine and its collaborators.
//!
//! Only working-set policy and observability are configurable. Gap
//! thresholds, the action-plan cap and the severity bands are constants.

pub mod culture_config;
pub mod defaults;
pub mod observability_config;
pub mod profile_config;

pub use culture_config::CultureConfig;
pub use observability_config::ObservabilityConfig;
pub use profile_config::ProfileConfig;
