//! # EcoScan Common Library
//!
//! Shared code for the EcoScan services including:
//! - Product and scan records returned by the HTTP API
//! - Configuration loading
//! - Database schema declaration
//! - Common error type

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{Alternative, Product, ScanResult, ScoreBreakdown, Suggestion, SustainabilityTier};
