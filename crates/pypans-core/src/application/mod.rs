//! Application layer for pypans.
//!
//! This layer contains:
//! - **Services**: the content rewriter, skeleton and meta builders, and the
//!   `Project` orchestrator
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer performs all workspace mutation through ports.
//! Catalog data, stub text, and the substitution policy live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ContentRewriter, MetaBuilder, Phase, PhaseReport, Project, SkeletonBuilder, WorkspaceLayout,
};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
