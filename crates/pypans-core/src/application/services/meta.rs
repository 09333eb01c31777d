//! Meta Builder - catalog copy followed by placeholder substitution.
//!
//! Materialization runs in three steps:
//! 1. Copy every catalog entry from the template root, in catalog order
//! 2. Rewrite the copied files named by the substitution plan
//! 3. Mark executable templates and write the root entrypoint module
//!
//! No rollback: a missing template aborts the copy loop and leaves every
//! earlier entry on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::{ContentRewriter, report::PhaseReport},
    },
    domain::{Ambient, ProjectDescriptor, TemplateEntry, catalog, stubs, substitution},
    error::PansResult,
};

/// Copies the template catalog into a workspace and rewrites it.
pub struct MetaBuilder {
    filesystem: Arc<dyn Filesystem>,
    rewriter: ContentRewriter,
    root: PathBuf,
    ambient: Ambient,
}

impl MetaBuilder {
    pub fn new(filesystem: Arc<dyn Filesystem>, root: impl Into<PathBuf>, ambient: Ambient) -> Self {
        Self {
            rewriter: ContentRewriter::new(Arc::clone(&filesystem)),
            filesystem,
            root: root.into(),
            ambient,
        }
    }

    /// Copy the catalog from `source_root` and apply the substitution plan.
    #[instrument(skip_all, fields(source = %source_root.display()))]
    pub fn materialize(
        &self,
        descriptor: &ProjectDescriptor,
        source_root: &Path,
        report: &mut PhaseReport,
    ) -> PansResult<()> {
        for entry in catalog::entries() {
            self.copy_entry(entry, source_root, report)?;
        }
        info!(count = catalog::entries().len(), "template catalog copied");

        for rewrite in substitution::plan(descriptor, &self.ambient) {
            let path = self.root.join(rewrite.template.relative_path());
            debug!(template = %rewrite.template, tokens = rewrite.tokens.len(), "rewriting");
            self.rewriter.apply(&path, &rewrite.tokens)?;
        }

        for entry in catalog::entries().iter().filter(|e| e.kind.is_executable()) {
            self.filesystem
                .set_permissions(&self.root.join(entry.relative_path), true)?;
        }

        let module = PathBuf::from(format!("{}.py", descriptor.name()));
        self.rewriter
            .append_or_create(&self.root.join(&module), &stubs::root_module(descriptor))?;
        report.record(module);

        Ok(())
    }

    fn copy_entry(
        &self,
        entry: &TemplateEntry,
        source_root: &Path,
        report: &mut PhaseReport,
    ) -> PansResult<()> {
        let source = source_root.join(entry.relative_path);
        if !self.filesystem.exists(&source) {
            return Err(ApplicationError::TemplateSourceMissing {
                template: entry.kind,
                path: source,
            }
            .into());
        }

        self.filesystem
            .copy_file(&source, &self.root.join(entry.relative_path))?;
        report.record(entry.relative_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::NaiveDate;

    use super::*;
    use crate::{
        application::{ports::MockFilesystem, services::report::Phase},
        domain::{CATALOG, Identity, TemplateKind},
        error::PansError,
    };

    fn bomber() -> ProjectDescriptor {
        ProjectDescriptor::new(
            "bomber",
            Identity::new("Ada Lovelace", "ada@example.com").unwrap(),
        )
        .unwrap()
    }

    fn builder(fs: MockFilesystem) -> MetaBuilder {
        let ambient = Ambient::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(), "3.11.4");
        MetaBuilder::new(Arc::new(fs), "/work", ambient)
    }

    #[test]
    fn missing_source_stops_the_copy_loop() {
        let copied = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&copied);

        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| !p.ends_with("LICENSE.md"));
        fs.expect_copy_file().returning(move |_, to| {
            sink.lock().unwrap().push(to.to_path_buf());
            Ok(())
        });
        fs.expect_write_file().never();
        fs.expect_append_file().never();

        let mut report = PhaseReport::new(Phase::Meta);
        let err = builder(fs)
            .materialize(&bomber(), Path::new("/opt/templates"), &mut report)
            .unwrap_err();

        assert_eq!(
            err,
            PansError::Application(ApplicationError::TemplateSourceMissing {
                template: TemplateKind::License,
                path: PathBuf::from("/opt/templates/LICENSE.md"),
            })
        );

        let license_at = CATALOG
            .iter()
            .position(|e| e.kind == TemplateKind::License)
            .unwrap();
        assert_eq!(copied.lock().unwrap().len(), license_at);
        assert_eq!(report.len(), license_at);
    }

    #[test]
    fn copy_failure_is_reported_with_path() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_copy_file().times(1).returning(|_, to| {
            Err(ApplicationError::FileAccess {
                path: to.to_path_buf(),
                reason: "read-only filesystem".into(),
            }
            .into())
        });

        let mut report = PhaseReport::new(Phase::Meta);
        let err = builder(fs)
            .materialize(&bomber(), Path::new("/opt/templates"), &mut report)
            .unwrap_err();
        assert!(err.to_string().contains("/work/.flake8"));
    }

    #[test]
    fn analyser_is_marked_executable_after_rewrite() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_copy_file().returning(|_, _| Ok(()));
        fs.expect_read_to_string().returning(|_| Ok(String::new()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_set_permissions()
            .withf(|p, executable| p == Path::new("/work/analyse-source-code.sh") && *executable)
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_append_file()
            .withf(|p, _| p == Path::new("/work/bomber.py"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut report = PhaseReport::new(Phase::Meta);
        builder(fs)
            .materialize(&bomber(), Path::new("/opt/templates"), &mut report)
            .unwrap();

        assert_eq!(report.len(), CATALOG.len() + 1);
        assert_eq!(report.created.last(), Some(&PathBuf::from("bomber.py")));
    }
}
