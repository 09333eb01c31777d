//! Project Orchestrator - the three build phases behind one descriptor.
//!
//! Phases are independent public operations. Nothing enforces their order;
//! a realistic caller runs package → tests → meta so that the existing
//! directory check fires before any template is copied.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::Filesystem,
        services::{
            MetaBuilder, SkeletonBuilder,
            report::{Phase, PhaseReport},
        },
    },
    domain::{Ambient, ProjectDescriptor},
    error::PansResult,
};

/// Where a build reads templates from and writes the project to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    /// Directory the project is generated into.
    pub root: PathBuf,
    /// Directory holding the shipped template catalog.
    pub template_root: PathBuf,
}

impl WorkspaceLayout {
    pub fn new(root: impl Into<PathBuf>, template_root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            template_root: template_root.into(),
        }
    }
}

/// A project being generated.
///
/// Holds only the descriptor and the injected collaborators; every phase
/// delegates to the skeleton or meta builder.
pub struct Project {
    descriptor: ProjectDescriptor,
    template_root: PathBuf,
    skeleton: SkeletonBuilder,
    meta: MetaBuilder,
}

impl Project {
    pub fn new(
        descriptor: ProjectDescriptor,
        layout: WorkspaceLayout,
        ambient: Ambient,
        filesystem: Arc<dyn Filesystem>,
    ) -> Self {
        Self {
            skeleton: SkeletonBuilder::new(Arc::clone(&filesystem), &layout.root, ambient.clone()),
            meta: MetaBuilder::new(filesystem, &layout.root, ambient),
            template_root: layout.template_root,
            descriptor,
        }
    }

    pub fn descriptor(&self) -> &ProjectDescriptor {
        &self.descriptor
    }

    /// Create the application package and its entrypoint.
    #[instrument(skip_all, fields(project = %self.descriptor.name()))]
    pub fn build_package(&self) -> PansResult<PhaseReport> {
        let mut report = PhaseReport::new(Phase::Package);
        self.skeleton.init_package(&self.descriptor, &mut report)?;
        self.skeleton.make_entrypoint(&self.descriptor, &mut report)?;
        info!(files = report.len(), "package built");
        Ok(report)
    }

    /// Create the tests package and its helpers.
    #[instrument(skip_all, fields(project = %self.descriptor.name()))]
    pub fn build_tests(&self) -> PansResult<PhaseReport> {
        let mut report = PhaseReport::new(Phase::Tests);
        self.skeleton.init_tests(&self.descriptor, &mut report)?;
        self.skeleton.make_test_helpers(&self.descriptor, &mut report)?;
        info!(files = report.len(), "tests built");
        Ok(report)
    }

    /// Copy and rewrite the template catalog.
    #[instrument(skip_all, fields(project = %self.descriptor.name()))]
    pub fn build_meta(&self) -> PansResult<PhaseReport> {
        let mut report = PhaseReport::new(Phase::Meta);
        self.meta
            .materialize(&self.descriptor, &self.template_root, &mut report)?;
        info!(files = report.len(), "meta built");
        Ok(report)
    }

    /// Run one phase by name.
    pub fn build(&self, phase: Phase) -> PansResult<PhaseReport> {
        match phase {
            Phase::Package => self.build_package(),
            Phase::Tests => self.build_tests(),
            Phase::Meta => self.build_meta(),
        }
    }

    /// Run all phases in order, stopping at the first failure.
    ///
    /// Completed phases are not undone.
    pub fn build_all(&self) -> PansResult<Vec<PhaseReport>> {
        Phase::ALL.into_iter().map(|phase| self.build(phase)).collect()
    }
}
