//! Application services (use case orchestrators).

pub mod meta;
pub mod project;
pub mod report;
pub mod rewriter;
pub mod skeleton;

pub use meta::MetaBuilder;
pub use project::{Project, WorkspaceLayout};
pub use report::{Phase, PhaseReport};
pub use rewriter::ContentRewriter;
pub use skeleton::SkeletonBuilder;
