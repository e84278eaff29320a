use log::{debug, trace, warn};
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_ast_visit::{Visit, walk};
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::{fs, path::Path};

use crate::{
    error::{Error, Result},
    types::{SpecKind, Specifier},
};

/// Reads the file at `location` and extracts its import specifiers.
pub fn imports_for(location: &str) -> Result<Vec<Specifier>> {
    trace!("Reading file for imports: {}", location);
    let src = fs::read_to_string(location)
        .map_err(|source| Error::UnreadableFile { location: location.to_string(), source })?;
    Ok(parse_imports(Path::new(location), &src))
}

/// Extracts import specifiers from source text, in order of occurrence.
///
/// The file name only selects the dialect (JSX, TypeScript). Syntax errors
/// are logged and whatever the parser recovered is still scanned.
pub fn parse_imports(file: &Path, src: &str) -> Vec<Specifier> {
    let st = source_type_for(file);
    let allocator = Allocator::default();
    let ParserReturn { program, errors, .. } = OxcParser::new(&allocator, src, st).parse();
    if !errors.is_empty() {
        warn!("{} syntax error(s) in {}, imports may be incomplete", errors.len(), file.display());
    }

    let mut collector = ImportCollector { file, specs: Vec::new() };
    collector.visit_program(&program);
    let specs = collector.specs;

    debug!("Found {} import specifiers in {}", specs.len(), file.display());
    specs
}

/// Collects specifiers from every import site in the AST, nested ones
/// included, in traversal (source) order.
struct ImportCollector<'f> {
    file: &'f Path,
    specs: Vec<Specifier>,
}

impl ImportCollector<'_> {
    fn push(&mut self, request: &str, kind: SpecKind) {
        trace!("Found {:?} import: '{}' in {}", kind, request, self.file.display());
        self.specs.push(Specifier { request: request.to_string(), kind });
    }
}

impl<'a> Visit<'a> for ImportCollector<'_> {
    fn visit_import_declaration(&mut self, it: &ImportDeclaration<'a>) {
        self.push(&it.source.value, SpecKind::Static);
    }

    fn visit_export_named_declaration(&mut self, it: &ExportNamedDeclaration<'a>) {
        if let Some(source) = &it.source {
            self.push(&source.value, SpecKind::ReExport);
        }
        // export function f() { return import('./x'); }
        walk::walk_export_named_declaration(self, it);
    }

    fn visit_export_all_declaration(&mut self, it: &ExportAllDeclaration<'a>) {
        self.push(&it.source.value, SpecKind::ReExport);
    }

    fn visit_import_expression(&mut self, it: &ImportExpression<'a>) {
        // Computed specifiers cannot be followed statically
        if let Expression::StringLiteral(sl) = &it.source {
            self.push(&sl.value, SpecKind::Dynamic);
        }
        walk::walk_import_expression(self, it);
    }
}

fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    SourceType::default()
        .with_module(true)
        .with_jsx(matches!(ext, Some("tsx") | Some("jsx") | Some("js")))
        .with_typescript(matches!(ext, Some("ts") | Some("tsx") | Some("mts") | Some("cts")))
}
