use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rgit_hash::ObjectId;
use rgit_object::ObjectType;
use rgit_odb::ObjectDatabase;

use crate::IndexError;

/// rgit ignores its own repo directory and, for interop with real-world
/// working copies, a plain `.git` as well.
pub fn is_ignored(path: &Path) -> bool {
    path.components().any(|c| {
        let c = c.as_os_str();
        c == ".rgit" || c == ".git"
    })
}

/// Walk `root`, hashing every non-ignored file as a blob (writing it to
/// the object store along the way) and returning the resulting
/// path -> oid map. Mirrors the working directory, not the index.
pub fn get_working_tree(root: &Path, odb: &ObjectDatabase) -> Result<BTreeMap<String, ObjectId>, IndexError> {
    let mut out = BTreeMap::new();
    walk(root, root, odb, &mut out)?;
    Ok(out)
}

fn walk(
    root: &Path,
    dir: &Path,
    odb: &ObjectDatabase,
    out: &mut BTreeMap<String, ObjectId>,
) -> Result<(), IndexError> {
    if is_ignored(dir.strip_prefix(root).unwrap_or(dir)) {
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(&path);
        if is_ignored(relative) {
            continue;
        }
        if path.is_dir() {
            walk(root, &path, odb, out)?;
        } else if path.is_file() {
            let content = fs::read(&path)?;
            let oid = odb.hash_object(ObjectType::Blob, &content)?;
            out.insert(to_repo_path(relative), oid);
        }
    }
    Ok(())
}

fn to_repo_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Stage `paths` (files or directories, walked recursively) by hashing
/// their current on-disk content into the object store and recording the
/// resulting oids at their repo-relative paths.
pub fn add(
    root: &Path,
    paths: &[PathBuf],
    odb: &ObjectDatabase,
    index: &mut crate::Index,
) -> Result<(), IndexError> {
    for path in paths {
        let absolute = if path.is_absolute() { path.clone() } else { root.join(path) };
        if !absolute.exists() {
            return Err(IndexError::PathNotFound(path.clone()));
        }
        if absolute.is_file() {
            add_file(root, &absolute, odb, index)?;
        } else if absolute.is_dir() {
            add_dir(root, &absolute, odb, index)?;
        } else {
            return Err(IndexError::UnsupportedPath(path.clone()));
        }
    }
    Ok(())
}

fn add_file(root: &Path, path: &Path, odb: &ObjectDatabase, index: &mut crate::Index) -> Result<(), IndexError> {
    let content = fs::read(path)?;
    let oid = odb.hash_object(ObjectType::Blob, &content)?;
    let relative = path.strip_prefix(root).unwrap_or(path);
    index.set(to_repo_path(relative), oid);
    Ok(())
}

fn add_dir(root: &Path, dir: &Path, odb: &ObjectDatabase, index: &mut crate::Index) -> Result<(), IndexError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(&path);
        if is_ignored(relative) {
            continue;
        }
        if path.is_dir() {
            add_dir(root, &path, odb, index)?;
        } else if path.is_file() {
            add_file(root, &path, odb, index)?;
        }
    }
    Ok(())
}

/// Remove every non-ignored file and directory under `root`, bottom-up,
/// leaving directories behind that still hold ignored files (they can't
/// be removed, so they're simply skipped).
pub fn empty_current_dir(root: &Path) -> Result<(), IndexError> {
    remove_contents(root, root)
}

fn remove_contents(root: &Path, dir: &Path) -> Result<(), IndexError> {
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(&path);
        if is_ignored(relative) {
            continue;
        }
        if path.is_dir() {
            subdirs.push(path);
        } else if path.is_file() {
            fs::remove_file(&path)?;
        }
    }
    for subdir in subdirs {
        remove_contents(root, &subdir)?;
        let _ = fs::remove_dir(&subdir);
    }
    Ok(())
}

/// Materialize `tree` (a flattened path -> oid map) into the working
/// directory, first clearing it out.
pub fn write_cwd(
    root: &Path,
    tree: &BTreeMap<String, ObjectId>,
    odb: &ObjectDatabase,
) -> Result<(), IndexError> {
    empty_current_dir(root)?;
    for (path, oid) in tree {
        let target = root.join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let (_, content) = odb.get_object_content(oid, Some(ObjectType::Blob))?;
        fs::write(target, content)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Index;
    use tempfile::TempDir;

    fn odb(dir: &Path) -> ObjectDatabase {
        let odb = ObjectDatabase::open(dir.join("objects"));
        odb.create().unwrap();
        odb
    }

    #[test]
    fn ignores_rgit_and_git_directories() {
        assert!(is_ignored(Path::new(".rgit/objects/abc")));
        assert!(is_ignored(Path::new(".git/HEAD")));
        assert!(!is_ignored(Path::new("src/lib.rs")));
    }

    #[test]
    fn add_file_stages_it_under_its_relative_path() {
        let dir = TempDir::new().unwrap();
        let odb = odb(dir.path());
        fs::write(dir.path().join("a.txt"), b"hello").unwrap();

        let mut index = Index::new();
        add(dir.path(), &[PathBuf::from("a.txt")], &odb, &mut index).unwrap();
        assert!(index.get("a.txt").is_some());
    }

    #[test]
    fn add_dir_recurses_and_skips_rgit() {
        let dir = TempDir::new().unwrap();
        let odb = odb(dir.path());
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/lib.rs"), b"fn main() {}").unwrap();
        fs::create_dir_all(dir.path().join(".rgit")).unwrap();
        fs::write(dir.path().join(".rgit/HEAD"), b"ref: refs/heads/master").unwrap();

        let mut index = Index::new();
        add(dir.path(), &[PathBuf::from(".")], &odb, &mut index).unwrap();
        assert!(index.get("src/lib.rs").is_some());
        assert!(index.iter().all(|(path, _)| !path.contains(".rgit")));
    }

    #[test]
    fn write_cwd_materializes_tracked_files_and_clears_stale_ones() {
        let dir = TempDir::new().unwrap();
        let odb = odb(dir.path());
        fs::write(dir.path().join("stale.txt"), b"old").unwrap();

        let oid = odb.hash_object(ObjectType::Blob, b"new content").unwrap();
        let mut tree = BTreeMap::new();
        tree.insert("fresh.txt".to_string(), oid);

        write_cwd(dir.path(), &tree, &odb).unwrap();

        assert!(!dir.path().join("stale.txt").exists());
        assert_eq!(fs::read(dir.path().join("fresh.txt")).unwrap(), b"new content");
    }
}
