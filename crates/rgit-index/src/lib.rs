//! The staging index, the tree codec built on top of it, and
//! working-tree materialization.

mod error;
mod index;
mod tree_codec;
mod working_tree;

pub use error::IndexError;
pub use index::{with_index, Index};
pub use tree_codec::{get_tree, write_tree};
pub use working_tree::{add, empty_current_dir, get_working_tree, is_ignored, write_cwd};

use std::path::Path;

use rgit_hash::ObjectId;
use rgit_odb::ObjectDatabase;

/// Clear the index and repopulate it from `oid`'s tree, optionally
/// materializing the result into the working directory.
pub fn read_tree(
    index_path: &Path,
    root: &Path,
    odb: &ObjectDatabase,
    oid: ObjectId,
    update_cwd: bool,
) -> Result<(), IndexError> {
    let flattened = get_tree(odb, oid)?;
    with_index(index_path, |index| {
        index.clear();
        index.replace_all(flattened.clone());
    })?;
    if update_cwd {
        write_cwd(root, &flattened, odb)?;
    }
    Ok(())
}
