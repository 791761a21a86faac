//! Resolution of an import source to the file that should declare the
//! variables type.
//!
//! The target is always `<directory of current file>/<import source><extension>`.
//! There is no extension probing, no `index` fallback and no alias mapping:
//! generated GraphQL types live next to their query under a fixed name.

use std::{
    ffi::OsStr,
    path::{Component, Path, PathBuf},
};

/// True for `./x`, `../x`, `.` and `..`.
pub fn is_relative_import(import_path: &str) -> bool {
    import_path == "."
        || import_path == ".."
        || import_path.starts_with("./")
        || import_path.starts_with("../")
}

/// Resolve `import_path` against the directory of `current_file`.
///
/// Returns `None` for bare module specifiers (`@apollo/client`, `~/types`).
/// `.` and `..` segments are folded lexically; the filesystem is not touched.
pub fn resolve_target_path(
    current_file: &Path,
    import_path: &str,
    extension: &str,
) -> Option<PathBuf> {
    if !is_relative_import(import_path) {
        return None;
    }

    let base_dir = current_file.parent().unwrap_or(Path::new(""));
    let relative = format!("{}{}", import_path, extension);

    let mut parts: Vec<Component<'_>> = base_dir.components().collect();
    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(Component::ParentDir),
            },
            name => parts.push(Component::Normal(OsStr::new(name))),
        }
    }

    Some(parts.iter().collect())
}
