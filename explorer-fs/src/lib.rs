//! Shared filesystem helpers built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::warn;
use std::io;

/// Open a UTF-8 file path using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open a UTF-8 directory path using ambient authority.
pub fn open_utf8_dir(path: &Utf8Path) -> io::Result<fs_utf8::Dir> {
    fs_utf8::Dir::open_ambient_dir(path, ambient_authority())
}

/// Return whether a path exists and is a directory using capability-based IO.
pub fn dir_is_dir(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let Some(name) = path.file_name() else {
        // Roots and `..` have no file name; opening them is the only check.
        return open_utf8_dir(path).map(|_| true);
    };
    let dir = open_utf8_dir(parent)?;
    dir.metadata(name).map(|meta| meta.is_dir())
}

/// List the `*.json` files directly inside `dir`, sorted by name.
///
/// Symlinks are followed, so a link to a regular file counts as a file.
/// Subdirectories and other files are skipped; entries whose names are not
/// valid UTF-8 are skipped with a warning.
pub fn json_files_in_dir(dir: &Utf8Path) -> io::Result<Vec<Utf8PathBuf>> {
    let handle = open_utf8_dir(dir)?;
    let mut files = Vec::new();
    for entry in handle.entries()? {
        let entry = entry?;
        let name = match entry.file_name() {
            Ok(name) => name,
            Err(err) => {
                warn!("skipping entry in {dir} with an unreadable name: {err}");
                continue;
            }
        };
        if Utf8Path::new(&name).extension() != Some("json") {
            continue;
        }
        let path = dir.join(&name);
        let file_type = entry.file_type()?;
        let is_file = if file_type.is_symlink() {
            link_target_is_file(&path)?
        } else {
            file_type.is_file()
        };
        if is_file {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

// Links may point outside `dir`, so they are resolved with ambient authority.
fn link_target_is_file(path: &Utf8Path) -> io::Result<bool> {
    match open_utf8_file(path) {
        Ok(file) => Ok(file.metadata()?.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("skipping dangling link {path}");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}
