/// What the command prints once dependencies are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode<'a> {
    /// The dependency map alone, without any rule
    DependenciesOnly,
    /// One `target: deps...` line per target name
    Rules(&'a [String]),
}
