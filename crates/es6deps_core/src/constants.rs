//! Constants shared by path handling and import resolution.

/// Path separator used in locations and import specifiers
pub const SEPARATOR: char = '/';

/// Suffix appended to import specifiers that do not already carry it
pub const DEFAULT_SUFFIX: &str = ".js";

pub(crate) const CURRENT_DIR: &str = ".";
pub(crate) const PARENT_DIR: &str = "..";
