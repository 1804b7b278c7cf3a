//! Shared configuration for Cambio.
//!
//! This crate provides the configuration types consumed by the binaries:
//! server bind settings and the rate-table source path.

pub mod config;

pub use config::AppConfig;
