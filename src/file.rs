// src/file.rs

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

/// Sibling scratch path: `<name>.tmp` next to `path`.
pub fn temp_sibling(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write through a scratch file, then rename over `path`.
/// A failed write leaves the previous file untouched.
pub fn write_replacing<E, F>(path: &Path, write: F) -> Result<(), E>
where
    E: From<io::Error>,
    F: FnOnce(&Path) -> Result<(), E>,
{
    ensure_parent(path)?;
    let tmp = temp_sibling(path);
    if let Err(e) = write(&tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

/// UTF-8 text file, parent directories created.
pub fn write_text(path: &Path, contents: &str) -> io::Result<()> {
    ensure_parent(path)?;
    fs::write(path, contents)
}
