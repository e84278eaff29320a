use std::io::{self, Write};

use es6deps_core::DependencySet;
use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Backslash-escapes whitespace and backslashes so a path survives being
/// space-joined into a Makefile prerequisite list.
pub fn quote(path: &str) -> String {
    let mut quoted = String::with_capacity(path.len());
    for c in path.chars() {
        if c.is_whitespace() || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted
}

/// Writes one `target: deps...` line per target.
pub fn write_rules<W: Write>(
    writer: &mut W,
    targets: &[String],
    deps: &DependencySet,
) -> io::Result<()> {
    debug!("Writing rules for {} targets with {} dependencies", targets.len(), deps.len());
    let prerequisites = deps.iter().map(quote).collect::<Vec<_>>().join(" ");
    for target in targets {
        writeln!(writer, "{}: {}", target, prerequisites)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the dependency set as a JSON object mapping each path to `true`.
pub fn write_dependencies<W: Write>(writer: &mut W, deps: &DependencySet) -> io::Result<()> {
    debug!("Writing {} dependencies", deps.len());
    serde_json::to_writer_pretty(&mut *writer, &DependencyMap(deps))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

struct DependencyMap<'a>(&'a DependencySet);

impl Serialize for DependencyMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for path in self.0.iter() {
            map.serialize_entry(path, &true)?;
        }
        map.end()
    }
}
