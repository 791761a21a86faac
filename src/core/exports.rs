//! "Does file X export a type named Y?"
//!
//! The checker only depends on the [`ExportLookup`] trait. Two implementations:
//!
//! - [`TextualExportLookup`]: looks for the literal text `export interface <Name>`.
//!   Fast and dumb: a match inside a comment counts, a `type` alias does not,
//!   and `FooVariables` also matches `export interface FooVariablesInput`.
//!   This mirrors what GraphQL code generators emit and is the default.
//! - [`StructuralExportLookup`]: parses the file and inspects its exported
//!   `interface` / `type` declarations and local `export { .. }` lists.
//!
//! Neither caches: every call reads the file again.

use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use swc_common::SourceMap;
use swc_ecma_ast::{Decl, ExportSpecifier, Module, ModuleDecl, ModuleExportName, ModuleItem};

use crate::config::ExportLookupKind;
use crate::core::parsers::tsx::parse_source;

pub trait ExportLookup: Send + Sync {
    /// Whether the file at `path` exports a type named `name`.
    ///
    /// Errors when the file cannot be read (or parsed, for structural lookups).
    fn exports_type(&self, path: &Path, name: &str) -> Result<bool>;
}

/// Build the lookup selected in the configuration.
pub fn export_lookup_for(kind: ExportLookupKind) -> Box<dyn ExportLookup> {
    match kind {
        ExportLookupKind::Textual => Box::new(TextualExportLookup),
        ExportLookupKind::Structural => Box::new(StructuralExportLookup),
    }
}

fn read_target(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextualExportLookup;

impl ExportLookup for TextualExportLookup {
    fn exports_type(&self, path: &Path, name: &str) -> Result<bool> {
        let text = read_target(path)?;
        Ok(contains_interface_export(&text, name))
    }
}

/// Substring test for `export interface <name>`.
pub fn contains_interface_export(text: &str, name: &str) -> bool {
    text.contains(&format!("export interface {}", name))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralExportLookup;

impl ExportLookup for StructuralExportLookup {
    fn exports_type(&self, path: &Path, name: &str) -> Result<bool> {
        let text = read_target(path)?;
        let path_str = path.to_string_lossy();
        let parsed = parse_source(text, &path_str, Arc::new(SourceMap::default()))?;
        Ok(module_exports_type(&parsed.module, name))
    }
}

/// Exported `interface`/`type` declarations, plus `export { Name }` lists
/// without a `from` clause. Re-exports from other modules are not followed.
pub fn module_exports_type(module: &Module, name: &str) -> bool {
    module.body.iter().any(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => match &export.decl {
            Decl::TsInterface(decl) => &*decl.id.sym == name,
            Decl::TsTypeAlias(decl) => &*decl.id.sym == name,
            _ => false,
        },
        ModuleItem::ModuleDecl(ModuleDecl::ExportNamed(named)) if named.src.is_none() => {
            named.specifiers.iter().any(|specifier| match specifier {
                ExportSpecifier::Named(spec) => {
                    let exported = spec.exported.as_ref().unwrap_or(&spec.orig);
                    export_name_is(exported, name)
                }
                _ => false,
            })
        }
        _ => false,
    })
}

fn export_name_is(export_name: &ModuleExportName, name: &str) -> bool {
    match export_name {
        ModuleExportName::Ident(ident) => &*ident.sym == name,
        ModuleExportName::Str(s) => s.value.as_str() == Some(name),
    }
}
