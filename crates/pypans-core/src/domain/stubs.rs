//! Generated (not copied) source stubs.
//!
//! Pure text generation. Values are interpolated literally; the operator's
//! input is trusted and never escaped.

use crate::domain::{
    ambient::{Ambient, INITIAL_PACKAGE_VERSION},
    descriptor::{ProjectDescriptor, TESTS_PACKAGE},
};

/// A stub file: path relative to its package directory, plus content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stub {
    pub file_name: &'static str,
    pub content: String,
}

/// `<name>/__init__.py` with author and version metadata.
pub fn package_init(descriptor: &ProjectDescriptor, ambient: &Ambient) -> Stub {
    let name = descriptor.name();
    let owner = descriptor.owner();
    Stub {
        file_name: "__init__.py",
        content: format!(
            "\"\"\"Package contains a set of interfaces to operate `{name}` application.\"\"\"\n\n\
             __author__: str = \"{author}\"\n\
             __email__: str = \"{email}\"\n\
             __license__: str = \"MIT\"\n\
             __copyright__: str = f\"Copyright {year}, {{__author__}}\"\n\
             __version__: str = \"{version}\"\n\n\
             app = None\n",
            author = owner.display_name(),
            email = owner.email(),
            year = ambient.year(),
            version = INITIAL_PACKAGE_VERSION,
        ),
    }
}

/// `<name>/__main__.py` with a `main` stub and a direct-execution guard.
pub fn entrypoint(descriptor: &ProjectDescriptor) -> Stub {
    let name = descriptor.name();
    Stub {
        file_name: "__main__.py",
        content: format!(
            "\"\"\"Represents executable entrypoint for `{name}` application.\"\"\"\n\n\n\
             def main() -> None:\n    \
             \"\"\"Runs `{name}` application.\"\"\"\n\n    \
             pass\n\n\n\
             if __name__ == \"__main__\":\n    \
             main()\n"
        ),
    }
}

/// `tests/__init__.py`.
pub fn tests_init(descriptor: &ProjectDescriptor) -> Stub {
    Stub {
        file_name: "__init__.py",
        content: format!(
            "\"\"\"Package contains a set of interfaces to test `{}` application.\"\"\"\n",
            descriptor.name()
        ),
    }
}

/// The fixed trio of test helpers: markers, fixtures, and a sample test.
pub fn test_helpers(descriptor: &ProjectDescriptor) -> [Stub; 3] {
    [
        Stub {
            file_name: "markers.py",
            content: "# flake8: noqa\n\
                      import _pytest.mark\n\
                      import pytest\n\n\
                      unit: _pytest.mark.MarkDecorator = pytest.mark.unit\n"
                .to_string(),
        },
        Stub {
            file_name: "conftest.py",
            content: format!(
                "# flake8: noqa\n\
                 \"\"\"Fixtures shared by `{}` tests.\"\"\"\n\
                 from _pytest.config.argparsing import Parser\n\
                 from _pytest.fixtures import SubRequest\n\
                 import pytest\n",
                descriptor.name()
            ),
        },
        Stub {
            file_name: "test_sample.py",
            content: format!(
                "# flake8: noqa\n\
                 import pytest\n\
                 from {tests}.markers import unit\n\n\
                 pytestmark = unit\n\n\n\
                 def test_me() -> None:\n    \
                 assert True\n",
                tests = TESTS_PACKAGE
            ),
        },
    ]
}

/// Content of `<name>.py` at the workspace root, re-exporting the
/// application object.
pub fn root_module(descriptor: &ProjectDescriptor) -> String {
    format!(
        "# flake8: noqa\n\
         \"\"\"Module contains entrypoint interfaces for an application.\"\"\"\n\n\
         from {} import app\n",
        descriptor.name()
    )
}
