//! Nodes of the import graph.
//!
//! A [`Source`] is a file on disk named by its canonical location. An
//! [`External`] is a package-style specifier (`react`, `lodash/fp`) that is
//! never resolved to a file. Traversal treats both uniformly through
//! [`Node`].

use log::trace;
use std::fs;

use crate::{canonical::canonical, constants::SEPARATOR, error::Result, parser::imports_for};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Source(Source),
    External(External),
}

impl Node {
    pub fn location(&self) -> &str {
        match self {
            Node::Source(src) => src.location(),
            Node::External(ext) => ext.location(),
        }
    }

    pub fn exists(&self) -> bool {
        match self {
            Node::Source(src) => src.exists(),
            Node::External(_) => false,
        }
    }

    /// Raw import specifiers of this node, in order of occurrence.
    pub fn dependencies(&self) -> Result<Vec<String>> {
        match self {
            Node::Source(src) => src.dependencies(),
            Node::External(_) => Ok(Vec::new()),
        }
    }

    /// Resolves a raw import specifier found in this node.
    pub fn to(&self, request: &str) -> Node {
        match self {
            Node::Source(src) => src.to(request),
            Node::External(ext) => ext.to(request),
        }
    }
}

/// A file identified by its canonical location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    location: String,
    path: String,
    name: String,
    base_name: String,
    suffix: String,
}

impl Source {
    pub fn new(location: &str) -> Self {
        let location = canonical(location);
        let last_slash = location.rfind(SEPARATOR);
        let last_dot = location.rfind('.');

        let (path, name) = match last_slash {
            Some(idx) => (location[..idx].to_string(), location[idx..].to_string()),
            None => (String::new(), location.clone()),
        };

        // A dot marks an extension only inside the final segment, and not as
        // the first character of a dotfile name
        let name_start = last_slash.map_or(0, |slash| slash + 1);
        let extension_dot = last_dot.filter(|&dot| dot > name_start);
        let (base_name, suffix) = match extension_dot {
            Some(dot) => (location[..dot].to_string(), location[dot..].to_string()),
            None => (location.clone(), String::new()),
        };

        Source { location, path, name, base_name, suffix }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Containing directory; empty for a bare file name.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// File name including its leading separator.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Checked against the filesystem on every call.
    pub fn exists(&self) -> bool {
        fs::metadata(&self.location).is_ok_and(|m| m.is_file())
    }

    pub fn dependencies(&self) -> Result<Vec<String>> {
        let specs = imports_for(&self.location)?;
        Ok(specs.into_iter().map(|s| s.request).collect())
    }

    pub fn to(&self, request: &str) -> Node {
        if request.starts_with(SEPARATOR) {
            trace!("Resolving '{}' as absolute", request);
            Node::Source(Source::new(request))
        } else if request.starts_with('.') {
            trace!("Resolving '{}' relative to '{}'", request, self.path);
            // A bare file name has no directory to join onto
            let joined = if self.name.starts_with(SEPARATOR) {
                format!("{}{SEPARATOR}{}", self.path, request)
            } else {
                request.to_string()
            };
            Node::Source(Source::new(&joined))
        } else {
            trace!("Treating '{}' as external", request);
            Node::External(External::new(self.clone(), request))
        }
    }
}

/// A package-style import that never resolves to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct External {
    dependent: Source,
    location: String,
}

impl External {
    pub fn new(dependent: Source, location: &str) -> Self {
        External { dependent, location: location.to_string() }
    }

    /// The raw specifier, verbatim.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The last real file on the path to this external.
    pub fn dependent(&self) -> &Source {
        &self.dependent
    }

    /// Externals have no directory of their own, so resolution continues
    /// from the source that referenced them.
    pub fn to(&self, request: &str) -> Node {
        self.dependent.to(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn location(path: &Path) -> String {
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_source_derived_attributes() {
        let src = Source::new("src/./app/../lib/util.js");
        assert_eq!(src.location(), "src/lib/util.js");
        assert_eq!(src.path(), "src/lib");
        assert_eq!(src.name(), "/util.js");
        assert_eq!(src.base_name(), "src/lib/util");
        assert_eq!(src.suffix(), ".js");
    }

    #[test]
    fn test_source_dot_in_directory_is_not_a_suffix() {
        let src = Source::new("v1.2/Makefile");
        assert_eq!(src.suffix(), "");
        assert_eq!(src.base_name(), "v1.2/Makefile");
    }

    #[test]
    fn test_source_dotfile() {
        let src = Source::new("config/.eslintrc");
        assert_eq!(src.name(), "/.eslintrc");
        assert_eq!(src.suffix(), "");
        assert_eq!(src.base_name(), "config/.eslintrc");

        let src = Source::new("config/.eslintrc.js");
        assert_eq!(src.suffix(), ".js");
        assert_eq!(src.base_name(), "config/.eslintrc");
    }

    #[test]
    fn test_source_without_directory() {
        let src = Source::new("main.js");
        assert_eq!(src.path(), "");
        assert_eq!(src.name(), "main.js");
        assert_eq!(src.base_name(), "main");
        assert_eq!(src.suffix(), ".js");
    }

    #[test]
    fn test_to_relative() {
        let src = Source::new("src/app/main.js");
        assert_eq!(src.to("./util.js").location(), "src/app/util.js");
        assert_eq!(src.to("../shared/x.js").location(), "src/shared/x.js");
    }

    #[test]
    fn test_to_relative_from_bare_file() {
        let src = Source::new("main.js");
        assert_eq!(src.to("./lib.js").location(), "lib.js");
        assert_eq!(src.to("../lib.js").location(), "../lib.js");
    }

    #[test]
    fn test_to_relative_from_filesystem_root() {
        let src = Source::new("/main.js");
        assert_eq!(src.path(), "");
        assert_eq!(src.to("./lib.js").location(), "/lib.js");
    }

    #[test]
    fn test_to_absolute() {
        let src = Source::new("src/main.js");
        let node = src.to("/opt/lib/../x.js");
        assert!(matches!(node, Node::Source(_)));
        assert_eq!(node.location(), "/opt/x.js");
    }

    #[test]
    fn test_to_external() {
        let src = Source::new("src/main.js");
        let node = src.to("lodash/fp.js");
        match &node {
            Node::External(ext) => {
                assert_eq!(ext.location(), "lodash/fp.js");
                assert_eq!(ext.dependent().location(), "src/main.js");
            }
            Node::Source(_) => panic!("expected an external node"),
        }
        assert!(!node.exists());
        assert!(node.dependencies().unwrap().is_empty());
    }

    #[test]
    fn test_external_delegates_to_dependent() {
        let src = Source::new("src/app/main.js");
        let ext = src.to("react");
        assert_eq!(ext.to("./sibling.js").location(), "src/app/sibling.js");
        assert!(matches!(ext.to("other"), Node::External(_)));
    }

    #[test]
    fn test_exists_checks_regular_files() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(temp_dir.path(), "src/a.js", "");
        assert!(Source::new(&location(&file)).exists());
        assert!(!Source::new(&location(&temp_dir.path().join("src"))).exists());
        assert!(!Source::new(&location(&temp_dir.path().join("missing.js"))).exists());
    }

    #[test]
    fn test_exists_is_not_cached() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(temp_dir.path(), "a.js", "");
        let src = Source::new(&location(&file));
        assert!(src.exists());
        fs::remove_file(&file).unwrap();
        assert!(!src.exists());
    }

    #[test]
    fn test_dependencies_returns_raw_specifiers() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(
            temp_dir.path(),
            "main.js",
            "import a from './a';\nimport React from 'react';\nimport b from './a';",
        );
        let deps = Source::new(&location(&file)).dependencies().unwrap();
        assert_eq!(deps, vec!["./a", "react", "./a"]);
    }

    #[test]
    fn test_dependencies_of_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let src = Source::new(&location(&temp_dir.path().join("gone.js")));
        assert!(src.dependencies().is_err());
    }
}
