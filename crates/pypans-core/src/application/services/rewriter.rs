//! Content Rewriter - literal find/replace over whole files.
//!
//! Each call reads the full file into memory, replaces every occurrence of
//! one token and truncates-and-rewrites the file. Calls on the same file are
//! sequential: each sees the previous call's output.
//!
//! There is no write-to-temp-then-rename step. A crash between truncate and
//! write leaves a truncated file on disk.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::TokenMap,
    error::PansResult,
};

/// Stateless rewriter bound to a filesystem port.
#[derive(Clone)]
pub struct ContentRewriter {
    filesystem: Arc<dyn Filesystem>,
}

impl ContentRewriter {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Replace every literal occurrence of `token` in the file at `path`.
    ///
    /// An empty token matches nothing and leaves the file untouched.
    #[instrument(skip_all, fields(path = %path.display(), token))]
    pub fn replace_in(&self, path: &Path, token: &str, replacement: &str) -> PansResult<()> {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        if token.is_empty() {
            debug!("empty token, nothing to rewrite");
            return Ok(());
        }

        let content = self.filesystem.read_to_string(path)?;
        let occurrences = content.matches(token).count();
        debug!(occurrences, "rewriting token");

        self.filesystem
            .write_file(path, &content.replace(token, replacement))
    }

    /// Apply every mapping of `tokens` to the file, one rewrite per token.
    pub fn apply(&self, path: &Path, tokens: &TokenMap) -> PansResult<()> {
        for (placeholder, value) in tokens.iter() {
            self.replace_in(path, placeholder.token(), value)?;
        }
        Ok(())
    }

    /// Create the file with `content`, or append to it if it exists.
    ///
    /// Used for generated stubs only, never for copied templates.
    pub fn append_or_create(&self, path: &Path, content: &str) -> PansResult<()> {
        self.filesystem.append_file(path, content)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{
        application::ports::MockFilesystem,
        domain::Placeholder,
        error::PansError,
    };

    fn rewriter(mock: MockFilesystem) -> ContentRewriter {
        ContentRewriter::new(Arc::new(mock))
    }

    #[test]
    fn replaces_every_occurrence_and_rewrites() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok("<package> and <package>".into()));
        fs.expect_write_file()
            .withf(|path, content| path == Path::new("README.md") && content == "bomber and bomber")
            .times(1)
            .returning(|_, _| Ok(()));

        rewriter(fs)
            .replace_in(Path::new("README.md"), "<package>", "bomber")
            .unwrap();
    }

    #[test]
    fn absent_token_writes_identical_bytes() {
        let original = "line one\r\nline two <kept>\n";
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(move |_| Ok(original.to_string()));
        fs.expect_write_file()
            .withf(move |_, content| content == original)
            .times(1)
            .returning(|_, _| Ok(()));

        rewriter(fs)
            .replace_in(Path::new("a.txt"), "<package>", "bomber")
            .unwrap();
    }

    #[test]
    fn empty_token_leaves_file_untouched() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();

        rewriter(fs)
            .replace_in(Path::new("a.txt"), "", "bomber")
            .unwrap();
    }

    #[test]
    fn missing_file_is_not_found() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();

        let err = rewriter(fs)
            .replace_in(Path::new("gone.md"), "<package>", "x")
            .unwrap_err();
        assert_eq!(
            err,
            PansError::Application(ApplicationError::FileNotFound {
                path: PathBuf::from("gone.md")
            })
        );
    }

    #[test]
    fn read_failure_propagates_without_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string().returning(|p| {
            Err(ApplicationError::FileAccess {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let err = rewriter(fs)
            .replace_in(Path::new("locked.md"), "<package>", "x")
            .unwrap_err();
        assert!(err.to_string().contains("locked.md"));
    }

    #[test]
    fn apply_runs_one_rewrite_per_token() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string().returning(|_| Ok("x".into()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let tokens = TokenMap::new()
            .with(Placeholder::Username, "Ada")
            .with(Placeholder::Email, "ada@example.com");
        rewriter(fs).apply(Path::new("AUTHORS.md"), &tokens).unwrap();
    }

    #[test]
    fn append_or_create_delegates_to_append() {
        let mut fs = MockFilesystem::new();
        fs.expect_append_file()
            .withf(|path, content| {
                path == Path::new("bomber.py") && content == "from bomber import app\n"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        rewriter(fs)
            .append_or_create(Path::new("bomber.py"), "from bomber import app\n")
            .unwrap();
    }
}
