//! Integration test suite for sls-deps
//!
//! These tests run the compiled `sls-deps` binary against throwaway projects.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **create**: Scaffolding shared dependencies
//! - **attach**: Recording dependencies in function manifests
//! - **install**: Copying shared dependencies into functions
//! - **scenario**: The full create, attach, install workflow
//! - **cli**: Help, version and global flag handling

#[path = "../common/mod.rs"]
mod common;

mod attach;
mod cli;
mod create;
mod install;
mod scenario;
