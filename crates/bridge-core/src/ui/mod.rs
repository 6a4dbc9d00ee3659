//! Adaptadores de UI: árbol de vista con callbacks y su variante sobre el
//! sistema de archivos.

pub mod fs_tree;
pub mod tree;

pub use fs_tree::fs_tree;
pub use tree::{NodeCallback, TreeCallbacks, TreeEvent, TreeNode, TreeViewAdapter};
