//! File recipes: reading lines, copying, and directory traversal

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use termtree::Tree;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::errors::{CookbookError, CookbookResult};

/// Read a UTF-8 file into lines, without line terminators.
#[instrument(level = "debug")]
pub fn read_lines(path: &Path) -> CookbookResult<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| CookbookError::io(format!("read {}", path.display()), e))?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Lazy line stream; the file stays open until the iterator is dropped.
pub fn lines(path: &Path) -> CookbookResult<impl Iterator<Item = CookbookResult<String>>> {
    let file = File::open(path)
        .map_err(|e| CookbookError::io(format!("open {}", path.display()), e))?;
    let display = path.display().to_string();
    Ok(BufReader::new(file)
        .lines()
        .map(move |line| line.map_err(|e| CookbookError::io(format!("read line from {}", display), e))))
}

/// Byte-for-byte copy, replacing an existing target. Returns bytes copied.
#[instrument(level = "debug")]
pub fn copy_file(from: &Path, to: &Path) -> CookbookResult<u64> {
    fs::copy(from, to).map_err(|e| {
        CookbookError::io(format!("copy {} -> {}", from.display(), to.display()), e)
    })
}

/// All paths below `root` with children before their parent; `root` comes last.
#[instrument(level = "debug")]
pub fn post_order_traversal(root: &Path) -> CookbookResult<Vec<PathBuf>> {
    WalkDir::new(root)
        .contents_first(true)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| walk_entry(root, entry))
        .collect()
}

/// Lazy pre-order walk; `root` comes first.
pub fn walk(root: &Path) -> impl Iterator<Item = CookbookResult<PathBuf>> + '_ {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(move |entry| walk_entry(root, entry))
}

fn walk_entry(
    root: &Path,
    entry: Result<walkdir::DirEntry, walkdir::Error>,
) -> CookbookResult<PathBuf> {
    entry
        .map(walkdir::DirEntry::into_path)
        .map_err(|source| CookbookError::Walk {
            root: root.to_path_buf(),
            source,
        })
}

/// Directory tree for display, entries sorted by file name.
pub fn render_tree(root: &Path) -> CookbookResult<Tree<String>> {
    let label = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    let mut tree = Tree::new(label);

    if root.is_dir() {
        let mut children = fs::read_dir(root)
            .map_err(|e| CookbookError::io(format!("read dir {}", root.display()), e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CookbookError::io(format!("read dir {}", root.display()), e))?;
        children.sort();
        for child in children {
            tree.push(render_tree(&child)?);
        }
    }
    Ok(tree)
}
