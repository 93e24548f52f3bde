//! # Squad Stats
//!
//! Soccer player statistics: efficiency metrics, rankings and team reports.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (player records, categories, reports)
//! - **transform**: Collection transforms (map, filters, reduce, compose, lazy stats)
//! - **calculate**: Statistics and derived metrics computation
//! - **roster**: Seed roster and the owned roster state
//! - **fetch**: Team catalog, remote roster source and fallback loading
//! - **report**: Dashboard assembly
//! - **render**: Text and HTML output
//! - **export**: JSON export of roster and analysis
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod export;
pub mod fetch;
pub mod models;
pub mod render;
pub mod report;
pub mod roster;
pub mod selfcheck;
pub mod transform;

pub use models::*;
