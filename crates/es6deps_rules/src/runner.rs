use anyhow::Result;
use es6deps_core::{DependencySet, Walker};
use log::{debug, info, warn};

use crate::{builder::build_dependency_set, config::Config};

/// Resolves the dependency set described by `cfg`.
pub fn run(cfg: &Config) -> Result<DependencySet> {
    info!("Resolving dependencies of {} entry files", cfg.files.len());
    debug!("Config: root={:?}, base={:?}, graft={:?}", cfg.root, cfg.base, cfg.graft);

    if cfg.files.is_empty() {
        warn!("No entry files given, the dependency set is empty");
    }

    let walker = Walker::new(cfg.suffix.as_str());
    let graft = cfg.graft();
    let deps = build_dependency_set(&cfg.files, &cfg.root, &walker, graft.as_ref())?;

    info!("Resolved {} dependencies", deps.len());
    Ok(deps)
}
