//! Skeleton Builder - package and test package directories with stubs.
//!
//! The package directory check is the main guard of the whole tool: a build
//! never merges into, or overwrites, an existing project directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::{ContentRewriter, report::PhaseReport},
    },
    domain::{Ambient, ProjectDescriptor, TESTS_PACKAGE, stubs},
    error::PansResult,
};

/// Creates the application and tests packages under a workspace root.
pub struct SkeletonBuilder {
    filesystem: Arc<dyn Filesystem>,
    rewriter: ContentRewriter,
    root: PathBuf,
    ambient: Ambient,
}

impl SkeletonBuilder {
    pub fn new(filesystem: Arc<dyn Filesystem>, root: impl Into<PathBuf>, ambient: Ambient) -> Self {
        Self {
            rewriter: ContentRewriter::new(Arc::clone(&filesystem)),
            filesystem,
            root: root.into(),
            ambient,
        }
    }

    /// Create `<name>/` with its `__init__.py`.
    ///
    /// Fails with `DirectoryExists` before writing anything if `<name>/` is
    /// already present.
    #[instrument(skip_all, fields(package = %descriptor.name()))]
    pub fn init_package(
        &self,
        descriptor: &ProjectDescriptor,
        report: &mut PhaseReport,
    ) -> PansResult<()> {
        let package = Path::new(descriptor.name());
        self.create_package_dir(package, report)?;

        let stub = stubs::package_init(descriptor, &self.ambient);
        self.write_stub(&package.join(stub.file_name), &stub.content, report)
    }

    /// Write `<name>/__main__.py`.
    pub fn make_entrypoint(
        &self,
        descriptor: &ProjectDescriptor,
        report: &mut PhaseReport,
    ) -> PansResult<()> {
        let stub = stubs::entrypoint(descriptor);
        let path = Path::new(descriptor.name()).join(stub.file_name);
        self.write_stub(&path, &stub.content, report)
    }

    /// Create `tests/` with its `__init__.py`.
    #[instrument(skip_all, fields(package = TESTS_PACKAGE))]
    pub fn init_tests(
        &self,
        descriptor: &ProjectDescriptor,
        report: &mut PhaseReport,
    ) -> PansResult<()> {
        let package = Path::new(TESTS_PACKAGE);
        self.create_package_dir(package, report)?;

        let stub = stubs::tests_init(descriptor);
        self.write_stub(&package.join(stub.file_name), &stub.content, report)
    }

    /// Write the markers, fixtures, and sample test into `tests/`.
    pub fn make_test_helpers(
        &self,
        descriptor: &ProjectDescriptor,
        report: &mut PhaseReport,
    ) -> PansResult<()> {
        for stub in stubs::test_helpers(descriptor) {
            let path = Path::new(TESTS_PACKAGE).join(stub.file_name);
            self.write_stub(&path, &stub.content, report)?;
        }
        Ok(())
    }

    fn create_package_dir(&self, relative: &Path, report: &mut PhaseReport) -> PansResult<()> {
        let path = self.root.join(relative);
        if self.filesystem.exists(&path) {
            return Err(ApplicationError::DirectoryExists { path }.into());
        }
        self.filesystem.create_dir(&path)?;
        debug!(path = %path.display(), "package directory created");
        report.record(relative);
        Ok(())
    }

    fn write_stub(&self, relative: &Path, content: &str, report: &mut PhaseReport) -> PansResult<()> {
        self.rewriter
            .append_or_create(&self.root.join(relative), content)?;
        report.record(relative);
        Ok(())
    }
}
