//! Domain and application layers of pypans.
//!
//! A run turns a [`domain::ProjectDescriptor`] (package name plus owner
//! identity) into three groups of files in a workspace directory:
//!
//! - **package**: `<name>/__init__.py` and `<name>/__main__.py`
//! - **tests**: the `tests/` package with its helper modules
//! - **meta**: catalog files copied from the template root with placeholders
//!   filled in, plus the root module `<name>.py`
//!
//! Layers, from the inside out:
//!
//! ```text
//! domain       catalog, descriptor, placeholders, stub text   (pure)
//! application  Project -> SkeletonBuilder / MetaBuilder
//!                      -> ContentRewriter                     (services)
//!              Filesystem                                     (port)
//! adapters     LocalFilesystem, MemoryFilesystem              (pypans-adapters)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pypans_core::prelude::*;
//!
//! # fn run(filesystem: Arc<dyn Filesystem>) -> PansResult<()> {
//! let owner = Identity::new("Ada Lovelace", "ada@example.com")?;
//! let descriptor = ProjectDescriptor::new("bomber", owner)?;
//!
//! let project = Project::new(
//!     descriptor,
//!     WorkspaceLayout::new(".", "/usr/share/pypans/templates"),
//!     Ambient::capture("3.11.4"),
//!     filesystem,
//! );
//!
//! project.build_package()?;
//! project.build_tests()?;
//! project.build_meta()?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Phase, PhaseReport, Project, WorkspaceLayout, ports::Filesystem,
    };
    pub use crate::domain::{
        Ambient, CATALOG, Identity, Placeholder, ProjectDescriptor, TemplateEntry, TemplateKind,
        TokenMap,
    };
    pub use crate::error::{PansError, PansResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
