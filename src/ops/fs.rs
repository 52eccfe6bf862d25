use std::cmp::Ordering;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::command::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// Transient product of the list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Every operation except `create` requires its first path to exist before
/// anything is touched.
pub(crate) fn ensure_exists(path: &Path) -> Result<(), CommandError> {
    if path.exists() {
        Ok(())
    } else {
        Err(CommandError::OperationFailed)
    }
}

/// Creates an empty file. Fails if the path already exists; the existing
/// contents are never touched.
pub fn create(path: &Path) -> Result<(), CommandError> {
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    Ok(())
}

/// Deletes a file, or a directory tree recursively.
pub fn remove(path: &Path) -> Result<(), CommandError> {
    ensure_exists(path)?;
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Renames a path in place. The target is not checked; platform rename
/// semantics decide what happens when it already exists.
pub fn rename(from: &Path, to: &Path) -> Result<(), CommandError> {
    ensure_exists(from)?;
    fs::rename(from, to)?;
    Ok(())
}

/// Streams bytes from source to destination and returns once the last
/// byte has been written.
pub fn copy(src: &Path, dst: &Path) -> Result<(), CommandError> {
    ensure_exists(src)?;
    let mut from = fs::File::open(src)?;
    let mut to = fs::File::create(dst)?;
    io::copy(&mut from, &mut to)?;
    Ok(())
}

/// Copy, then unlink the source. The unlink runs only after the copy has
/// fully completed, so a failed or partial copy leaves the source intact.
pub fn move_path(src: &Path, dst: &Path) -> Result<(), CommandError> {
    copy(src, dst)?;
    remove(src)
}

/// Streams file contents to standard output; resolves when the stream ends.
pub fn read_to_stdout(path: &Path) -> Result<(), CommandError> {
    ensure_exists(path)?;
    let mut file = fs::File::open(path)?;
    let mut stdout = io::stdout().lock();
    io::copy(&mut file, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Reads a directory into sorted entries: directories first, then files,
/// each group ordered case-insensitively by name. Entries that are neither
/// regular files nor directories are omitted.
pub fn list_entries(path: &Path) -> Result<Vec<DirEntry>, CommandError> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if file_type.is_dir() {
            dirs.push(name);
        } else if file_type.is_file() {
            files.push(name);
        }
    }

    dirs.sort_by(|a, b| compare_names(a, b));
    files.sort_by(|a, b| compare_names(a, b));

    let mut entries = Vec::with_capacity(dirs.len() + files.len());
    entries.extend(dirs.into_iter().map(|name| DirEntry {
        name,
        kind: EntryKind::Directory,
    }));
    entries.extend(files.into_iter().map(|name| DirEntry {
        name,
        kind: EntryKind::File,
    }));
    Ok(entries)
}

pub fn list(path: &Path) -> Result<(), CommandError> {
    for entry in list_entries(path)? {
        match entry.kind {
            EntryKind::Directory => println!("{} directory", entry.name),
            EntryKind::File => println!("{} file", entry.name),
        }
    }
    Ok(())
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn change_dir(path: &Path) -> Result<(), CommandError> {
    ensure_exists(path)?;
    env::set_current_dir(path)?;
    Ok(())
}

/// Where `up` should land: `None` when the walk is pinned at home or at
/// the filesystem root.
pub fn up_target(current: &Path, home: &Path) -> Option<PathBuf> {
    if current == home {
        return None;
    }
    current.parent().map(Path::to_path_buf)
}

pub fn go_up(home: &Path) -> Result<(), CommandError> {
    let current = env::current_dir()?;
    if let Some(parent) = up_target(&current, home) {
        env::set_current_dir(parent)?;
    }
    Ok(())
}
