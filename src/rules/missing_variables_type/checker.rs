use std::path::{Path, PathBuf};

use swc_common::SourceMap;
use swc_ecma_ast::{CallExpr, Callee, Expr, TsEntityName, TsType, TsTypeRef};
use swc_ecma_visit::{Visit, VisitWith};

use crate::{
    config::Config,
    core::{
        SourceContext,
        collect::{FileImports, find_import},
        exports::ExportLookup,
        resolve::resolve_target_path,
    },
    issues::{MissingVariablesTypeIssue, ResolutionFailure, ResolutionWarning},
};

/// Name of a bare identifier callee (`useQuery(..)`), `None` for member
/// calls, `super(..)` and `import(..)`.
pub fn hook_name(call: &CallExpr) -> Option<&str> {
    match &call.callee {
        Callee::Expr(expr) => match &**expr {
            Expr::Ident(ident) => Some(ident.sym.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// Identifier of a plain named type reference.
///
/// `Foo` yields `"Foo"`; `A.Foo`, `Foo<T>`, `A | B`, `{ .. }` and literal
/// types yield `None`.
pub fn simple_type_name(ty: &TsType) -> Option<&str> {
    match ty {
        TsType::TsTypeRef(TsTypeRef {
            type_name: TsEntityName::Ident(ident),
            type_params: None,
            ..
        }) => Some(ident.sym.as_str()),
        _ => None,
    }
}

/// Visits every call expression of a file and checks hook calls.
///
/// Each call site is evaluated on its own: a failure to resolve one
/// never affects its siblings.
pub struct MissingVariablesTypeChecker<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    imports: &'a FileImports,
    config: &'a Config,
    export_lookup: &'a dyn ExportLookup,
    pub issues: Vec<MissingVariablesTypeIssue>,
    pub warnings: Vec<ResolutionWarning>,
}

impl<'a> MissingVariablesTypeChecker<'a> {
    pub fn new(
        file_path: &'a str,
        source_map: &'a SourceMap,
        imports: &'a FileImports,
        config: &'a Config,
        export_lookup: &'a dyn ExportLookup,
    ) -> Self {
        Self {
            file_path,
            source_map,
            imports,
            config,
            export_lookup,
            issues: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn is_hook(&self, name: &str) -> bool {
        self.config.hooks.iter().any(|hook| hook == name)
    }

    fn check_call(&mut self, call: &CallExpr) {
        let Some(hook) = hook_name(call) else {
            return;
        };
        if !self.is_hook(hook) {
            return;
        }

        let Some(type_args) = &call.type_args else {
            return;
        };
        let mut params = type_args.params.iter();

        let Some(result_type) = params.next().and_then(|ty| simple_type_name(ty)) else {
            return;
        };
        if !result_type.ends_with(self.config.result_suffix.as_str()) {
            return;
        }

        let variables_type = format!("{}{}", result_type, self.config.variables_suffix);

        let target = match self.resolve_target(result_type) {
            Ok(target) => target,
            Err(failure) => {
                self.warn(call, failure);
                return;
            }
        };

        match self.export_lookup.exports_type(&target, &variables_type) {
            Ok(true) => {}
            Ok(false) => return,
            Err(err) => {
                self.warn(
                    call,
                    ResolutionFailure::UnreadableTarget {
                        path: target.display().to_string(),
                        error: err.root_cause().to_string(),
                    },
                );
                return;
            }
        }

        let found = match params.next() {
            None => None,
            Some(ty) => match simple_type_name(ty) {
                Some(name) if name == variables_type => return,
                Some(name) => Some(name.to_string()),
                // Inline or composite shapes are accepted as written.
                None => return,
            },
        };

        self.issues.push(MissingVariablesTypeIssue {
            context: SourceContext::from_span(self.file_path, self.source_map, call.span),
            hook: hook.to_string(),
            result_type: result_type.to_string(),
            variables_type,
            found,
            target_path: target.display().to_string(),
        });
    }

    fn resolve_target(&self, result_type: &str) -> Result<PathBuf, ResolutionFailure> {
        let import =
            find_import(self.imports, result_type).ok_or_else(|| ResolutionFailure::MissingImport {
                type_name: result_type.to_string(),
            })?;

        resolve_target_path(
            Path::new(self.file_path),
            &import.module_path,
            &self.config.target_extension,
        )
        .ok_or_else(|| ResolutionFailure::NonRelativeImport {
            type_name: result_type.to_string(),
            imported_name: import.imported_name.clone(),
            module_path: import.module_path.clone(),
        })
    }

    fn warn(&mut self, call: &CallExpr, failure: ResolutionFailure) {
        self.warnings.push(ResolutionWarning {
            context: SourceContext::from_span(self.file_path, self.source_map, call.span),
            failure,
        });
    }
}

impl Visit for MissingVariablesTypeChecker<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.check_call(node);
        node.visit_children_with(self);
    }
}
