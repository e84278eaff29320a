use indexmap::IndexSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    pub request: String,
    pub kind: SpecKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    /// `import x from '...'` and side-effect imports
    Static,
    /// `export { x } from '...'` and `export * from '...'`
    ReExport,
    /// `import('...')` with a string literal argument
    Dynamic,
}

/// A set of canonical paths that iterates in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet(IndexSet<String>);

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path, returning `false` if it was already present.
    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        self.0.insert(path.into())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Extend<String> for DependencySet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<String> for DependencySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        DependencySet(iter.into_iter().collect())
    }
}

impl IntoIterator for DependencySet {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
