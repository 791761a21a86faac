//! Top-level import collection.
//!
//! Only direct `import { A, B as C } from "..."` specifiers are considered.
//! Default and namespace imports are skipped because a type can only be
//! matched against a named binding.

use swc_ecma_ast::{ImportDecl, ImportSpecifier, Module, ModuleDecl, ModuleExportName, ModuleItem};

/// Import statement information for one named binding.
///
/// ```typescript
/// import { RunsQuery as Runs } from "./types/RunsQuery";
/// // local_name: "Runs", imported_name: "RunsQuery", module_path: "./types/RunsQuery"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportInfo {
    /// Local name in the importing file.
    pub local_name: String,
    /// Original name in the imported module.
    pub imported_name: String,
    /// Import source path, as written.
    pub module_path: String,
}

/// All named imports of a single file, in document order.
pub type FileImports = Vec<ImportInfo>;

/// Collect the named imports of every top-level import declaration.
pub fn collect_imports(module: &Module) -> FileImports {
    let mut imports = FileImports::new();
    for item in &module.body {
        if let ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) = item {
            collect_import(decl, &mut imports);
        }
    }
    imports
}

fn collect_import(node: &ImportDecl, imports: &mut FileImports) {
    let Some(module_path) = node.src.value.as_str() else {
        return;
    };

    for specifier in &node.specifiers {
        if let ImportSpecifier::Named(named) = specifier {
            let local_name = named.local.sym.to_string();
            let imported_name = named
                .imported
                .as_ref()
                .map(|i| match i {
                    ModuleExportName::Ident(ident) => ident.sym.to_string(),
                    ModuleExportName::Str(s) => s.value.to_string_lossy().to_string(),
                })
                .unwrap_or_else(|| local_name.clone());

            imports.push(ImportInfo {
                local_name,
                imported_name,
                module_path: module_path.to_string(),
            });
        }
    }
}

/// Find the first import whose local binding is `local_name`.
pub fn find_import<'a>(imports: &'a FileImports, local_name: &str) -> Option<&'a ImportInfo> {
    imports.iter().find(|import| import.local_name == local_name)
}
