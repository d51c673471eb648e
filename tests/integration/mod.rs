//! Integration test suite for dockgen
//!
//! End-to-end tests that run the `dockgen` binary against temporary project
//! directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **determinism**: byte-identical regeneration and exact recipe text
//! - **generate**: matrix output, filters, dry-run, check and failure policy
//! - **init**: manifest creation
//! - **list**: catalog listing in text and JSON
//! - **validate**: manifest validation and error reporting

#[path = "../common/mod.rs"]
mod common;

mod determinism;
mod generate;
mod init;
mod list;
mod validate;
