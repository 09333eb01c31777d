//! Infrastructure adapters for pypans.
//!
//! This crate implements the ports defined in `pypans-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod runtime;
pub mod template_root;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use runtime::{FALLBACK_PYTHON_VERSION, probe_python_version, resolve_python_version};
pub use template_root::{TEMPLATES_DIR_ENV, TemplateRootNotFound, TemplateRootSources};
