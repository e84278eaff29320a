use anyhow::{Context, Result};
use es6deps_core::{DependencySet, Source, Walker, canonical, join};
use log::{debug, trace};

/// Rewrites resolved paths from `base` onto `root` for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graft {
    pub base: String,
    pub root: String,
    /// Drop the original paths, keeping only the grafted ones
    pub replace: bool,
}

impl Graft {
    /// Paths outside `base` are grafted whole.
    pub fn apply(&self, path: &str) -> String {
        let stem = path.strip_prefix(self.base.as_str()).unwrap_or(path);
        canonical(&join(&self.root, stem))
    }

    pub fn rewrite(&self, deps: &DependencySet) -> DependencySet {
        let mut out = DependencySet::new();
        for path in deps.iter() {
            if !self.replace {
                out.insert(path);
            }
            let grafted = self.apply(path);
            trace!("Grafted {} -> {}", path, grafted);
            out.insert(grafted);
        }
        out
    }
}

/// Walks every entry file and unions the reachable sources.
///
/// Each entry is joined onto `root` before resolution and walked with a
/// fresh walk state. The first unreadable source fails the whole build.
pub fn build_dependency_set(
    files: &[String],
    root: &str,
    walker: &Walker,
    graft: Option<&Graft>,
) -> Result<DependencySet> {
    let mut deps = DependencySet::new();

    for file in files {
        let start = Source::new(&join(root, file));
        let reached = walker
            .walk(&start)
            .with_context(|| format!("Failed to resolve dependencies of {}", start.location()))?;
        debug!("{} reaches {} sources", start.location(), reached.len());
        deps.extend(reached);
    }

    Ok(match graft {
        Some(graft) => graft.rewrite(&deps),
        None => deps,
    })
}
