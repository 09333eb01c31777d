//! Core domain layer for pypans.
//!
//! Pure data and text generation: the template catalog, the project
//! descriptor, placeholder tokens, generated stubs, and the fixed
//! substitution policy. Nothing here touches the filesystem; all I/O goes
//! through the ports in `crate::application`.

pub mod ambient;
pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod placeholder;
pub mod stubs;
pub mod substitution;

pub use ambient::Ambient;
pub use catalog::{CATALOG, TemplateEntry, TemplateKind};
pub use descriptor::{Identity, ProjectDescriptor, TESTS_PACKAGE};
pub use error::{DomainError, ErrorCategory};
pub use placeholder::{Placeholder, TokenMap, residual_placeholders};
pub use substitution::Substitution;
