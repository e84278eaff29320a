use log::{debug, trace};
use std::collections::HashSet;

use crate::{
    constants::DEFAULT_SUFFIX,
    error::Result,
    node::{Node, Source},
    types::DependencySet,
};

/// Computes the transitive closure of existing sources reachable from
/// `start`, including `start` itself, using the default `.js` suffix.
pub fn walk(start: &Source) -> Result<DependencySet> {
    Walker::default().walk(start)
}

/// Depth-first import graph traversal.
///
/// Each raw specifier gets the walker's suffix appended unless it already
/// ends with it. Only nodes that exist on disk are entered. A location on
/// the current recursion stack is never re-entered, which makes circular
/// imports terminate; a location whose subgraph has already been walked is
/// not walked again. The first failure to read a source aborts the walk.
#[derive(Debug, Clone)]
pub struct Walker {
    suffix: String,
}

impl Default for Walker {
    fn default() -> Self {
        Walker::new(DEFAULT_SUFFIX)
    }
}

#[derive(Default)]
struct WalkState {
    on_stack: HashSet<String>,
    finished: HashSet<String>,
    reached: DependencySet,
}

impl Walker {
    pub fn new(suffix: impl Into<String>) -> Self {
        Walker { suffix: suffix.into() }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn walk(&self, start: &Source) -> Result<DependencySet> {
        debug!("Walking imports from {}", start.location());
        let mut state = WalkState::default();
        self.visit(&Node::Source(start.clone()), &mut state)?;
        debug!("Reached {} sources from {}", state.reached.len(), start.location());
        Ok(state.reached)
    }

    fn visit(&self, node: &Node, state: &mut WalkState) -> Result<()> {
        let location = node.location().to_string();
        trace!("Visiting {}", location);
        state.on_stack.insert(location.clone());
        state.reached.insert(location.clone());

        for dep in node.dependencies()? {
            let request = self.with_suffix(&dep);
            let next = node.to(&request);
            if !next.exists() {
                trace!("Skipping '{}' from {}: no such source", request, location);
                continue;
            }
            if state.on_stack.contains(next.location()) {
                trace!("Cycle back to {} from {}", next.location(), location);
                continue;
            }
            if state.finished.contains(next.location()) {
                trace!("Already walked {}", next.location());
                continue;
            }
            self.visit(&next, state)?;
        }

        state.on_stack.remove(&location);
        state.finished.insert(location);
        Ok(())
    }

    fn with_suffix(&self, request: &str) -> String {
        if request.ends_with(&self.suffix) {
            request.to_string()
        } else {
            format!("{request}{}", self.suffix)
        }
    }
}
