//! Tenant configuration loading and access.
//!
//! This module reads a tenant's YAML configuration directory (shifts,
//! policies, salary components, roster, leaves, holidays) and exposes the
//! lookups the controllers and core operations need.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::TenantConfigLoader;
//!
//! let config = TenantConfigLoader::load("./config/acme").unwrap();
//! println!("Loaded tenant: {}", config.tenant().name);
//! ```

mod loader;
mod types;

pub use loader::TenantConfigLoader;
pub use types::{
    ComponentsFile, EmployeesFile, HolidaysFile, LeavesFile, PoliciesFile, ShiftsFile,
    TenantConfig, TenantFile, TenantMetadata,
};
