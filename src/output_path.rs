use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::direction::{default_extension, Direction, WEBP_EXTENSION};

const COPY_MARKER: &str = " (copy)";

/// Works out where the converted file is written.
///
/// A user-supplied name with an extension is taken verbatim, one without gets
/// the target extension appended. Without a user-supplied name the source
/// extension is swapped for the target one, and if that file already exists a
/// single ` (copy)` rename is applied. The renamed path is not checked again.
pub fn resolve_output_path(
    source: &Path,
    user_out: Option<&Path>,
    direction: Direction,
    target_extension: Option<&str>,
) -> PathBuf {
    let extension = match direction {
        Direction::ToWebp => WEBP_EXTENSION,
        Direction::FromWebp => target_extension.unwrap_or(default_extension()),
    };

    match user_out.filter(|out| !out.as_os_str().is_empty()) {
        Some(out) if out.extension().is_some() => out.to_path_buf(),
        Some(out) => append_extension(out, extension),
        None => {
            let out = source.with_extension(extension);
            if out.exists() {
                copy_name(&out)
            } else {
                out
            }
        }
    }
}

fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

fn copy_name(path: &Path) -> PathBuf {
    let mut name = path.file_stem().map(OsString::from).unwrap_or_default();
    name.push(COPY_MARKER);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}
