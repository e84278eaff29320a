use clap::Parser;
use es6deps_core::{DEFAULT_SUFFIX, canonical};
use log::{debug, warn};

use crate::{builder::Graft, types::OutputMode};

#[derive(Debug, Clone, Parser)]
#[command(name = "es6deps")]
#[command(about = "Generate Makefile dependency rules for ES modules")]
pub struct Config {
    /// The Makefile target(s)
    #[arg(short = 't', long = "target", value_name = "NAME")]
    pub targets: Vec<String>,

    /// Print the dependencies only
    #[arg(long)]
    pub no_target: bool,

    /// Path to prefix to the arguments
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub root: String,

    /// Base path for determining the stem
    #[arg(short, long, value_name = "PATH")]
    pub base: Option<String>,

    /// Replace the base paths of the dependencies
    #[arg(short, long, value_name = "PATH")]
    pub graft: Option<String>,

    /// Do not include the real dependency paths. Only applicable when grafting.
    #[arg(long)]
    pub no_append: bool,

    /// Suffix appended to import specifiers that do not end with it
    #[arg(long, value_name = "EXT", default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Entry files, relative to the root
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

impl Config {
    /// `--no-target` wins over `--target`; `None` when neither was given.
    pub fn output_mode(&self) -> Option<OutputMode<'_>> {
        if self.no_target {
            Some(OutputMode::DependenciesOnly)
        } else if !self.targets.is_empty() {
            Some(OutputMode::Rules(&self.targets))
        } else {
            None
        }
    }

    /// The canonical stem base, defaulting to the current directory.
    pub fn base(&self) -> String {
        canonical(self.base.as_deref().unwrap_or("./"))
    }

    pub fn graft(&self) -> Option<Graft> {
        match &self.graft {
            Some(root) => {
                let graft = Graft { base: self.base(), root: root.clone(), replace: self.no_append };
                debug!("Grafting '{}' onto '{}'", graft.base, graft.root);
                Some(graft)
            }
            None => {
                if self.no_append {
                    warn!("--no-append has no effect without --graft");
                }
                None
            }
        }
    }
}
