use std::collections::BTreeMap;

use rgit_hash::ObjectId;
use rgit_object::{EntryKind, ObjectType, Tree, TreeEntry};
use rgit_odb::ObjectDatabase;

use crate::{Index, IndexError};

enum Node {
    Blob(ObjectId),
    Tree(BTreeMap<String, Node>),
}

/// Build the nested directory structure implied by the index's flat
/// paths, then recursively hash it bottom-up into tree objects.
pub fn write_tree(index: &Index, odb: &ObjectDatabase) -> Result<ObjectId, IndexError> {
    let mut root: BTreeMap<String, Node> = BTreeMap::new();
    for (path, oid) in index.iter() {
        insert_path(&mut root, path, oid);
    }
    write_tree_from_dict(&root, odb)
}

fn insert_path(root: &mut BTreeMap<String, Node>, path: &str, oid: ObjectId) {
    let mut components = path.split('/').peekable();
    let mut cur = root;
    while let Some(component) = components.next() {
        if components.peek().is_none() {
            cur.insert(component.to_string(), Node::Blob(oid));
        } else {
            let entry = cur
                .entry(component.to_string())
                .or_insert_with(|| Node::Tree(BTreeMap::new()));
            cur = match entry {
                Node::Tree(children) => children,
                Node::Blob(_) => unreachable!("path component collides with a staged file"),
            };
        }
    }
}

fn write_tree_from_dict(dict: &BTreeMap<String, Node>, odb: &ObjectDatabase) -> Result<ObjectId, IndexError> {
    let mut entries = Vec::with_capacity(dict.len());
    for (name, node) in dict {
        let (kind, oid) = match node {
            Node::Blob(oid) => (EntryKind::Blob, *oid),
            Node::Tree(children) => (EntryKind::Tree, write_tree_from_dict(children, odb)?),
        };
        entries.push(TreeEntry {
            kind,
            oid,
            name: name.clone(),
        });
    }
    let tree = Tree::new(entries)?;
    let oid = odb.hash_object(ObjectType::Tree, &tree.serialize())?;
    Ok(oid)
}

/// Flatten a tree object (recursively) into a path -> oid map of blobs.
pub fn get_tree(odb: &ObjectDatabase, oid: ObjectId) -> Result<BTreeMap<String, ObjectId>, IndexError> {
    let mut out = BTreeMap::new();
    collect_tree(odb, oid, "", &mut out)?;
    Ok(out)
}

fn collect_tree(
    odb: &ObjectDatabase,
    oid: ObjectId,
    base_path: &str,
    out: &mut BTreeMap<String, ObjectId>,
) -> Result<(), IndexError> {
    let (_, payload) = odb.get_object_content(&oid, Some(ObjectType::Tree))?;
    let tree = Tree::parse(&payload)?;
    for entry in tree.entries() {
        let child_path = if base_path.is_empty() {
            entry.name.clone()
        } else {
            format!("{base_path}/{}", entry.name)
        };
        match entry.kind {
            EntryKind::Blob => {
                out.insert(child_path, entry.oid);
            }
            EntryKind::Tree => {
                collect_tree(odb, entry.oid, &child_path, out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn odb() -> (TempDir, ObjectDatabase) {
        let dir = TempDir::new().unwrap();
        let odb = ObjectDatabase::open(dir.path().join("objects"));
        odb.create().unwrap();
        (dir, odb)
    }

    #[test]
    fn write_then_get_tree_roundtrips_nested_paths() {
        let (_dir, odb) = odb();
        let mut index = Index::new();
        let a = odb.hash_object(ObjectType::Blob, b"a").unwrap();
        let b = odb.hash_object(ObjectType::Blob, b"b").unwrap();
        index.set("README.md", a);
        index.set("src/lib.rs", b);

        let tree_oid = write_tree(&index, &odb).unwrap();
        let flattened = get_tree(&odb, tree_oid).unwrap();

        assert_eq!(flattened.get("README.md"), Some(&a));
        assert_eq!(flattened.get("src/lib.rs"), Some(&b));
        assert_eq!(flattened.len(), 2);
    }

    #[test]
    fn identical_index_contents_produce_identical_tree_oid() {
        let (_dir, odb) = odb();
        let blob = odb.hash_object(ObjectType::Blob, b"x").unwrap();

        let mut first = Index::new();
        first.set("a", blob);
        first.set("b", blob);

        let mut second = Index::new();
        second.set("b", blob);
        second.set("a", blob);

        assert_eq!(write_tree(&first, &odb).unwrap(), write_tree(&second, &odb).unwrap());
    }

    #[test]
    fn empty_index_produces_empty_tree() {
        let (_dir, odb) = odb();
        let index = Index::new();
        let oid = write_tree(&index, &odb).unwrap();
        assert_eq!(get_tree(&odb, oid).unwrap().len(), 0);
    }
}
