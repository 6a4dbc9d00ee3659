//! Árbol de sistema de archivos de carga perezosa sobre `TreeViewAdapter`:
//! los hijos de un directorio se leen la primera vez que se expande.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::warn;

use super::tree::{TreeCallbacks, TreeNode, TreeViewAdapter};
use crate::host::{HostEnum, HostMap, HostTimestamp, HostValue};

/// Payload de un nodo: `{path, kind, size, modified}`.
fn entry_payload(path: &Path) -> HostMap {
    let payload = HostMap::tagged("fs-entry");
    payload.set("path", path.display().to_string());
    match fs::metadata(path) {
        Ok(meta) => {
            let kind = if meta.is_dir() { "DIRECTORY" } else { "FILE" };
            payload.set("kind", HostValue::object(HostEnum::new("EntryKind", kind)));
            payload.set("size", meta.len());
            if let Ok(modified) = meta.modified() {
                payload.set("modified", HostValue::object(HostTimestamp(DateTime::<Utc>::from(modified))));
            }
        }
        Err(e) => warn!("fs_tree:metadata path={} err={e}", path.display()),
    }
    payload
}

fn node_for(path: &Path) -> Rc<TreeNode> {
    let label = path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
    TreeNode::new(label, Rc::new(entry_payload(path)))
}

fn node_path(node: &TreeNode) -> Option<PathBuf> {
    let payload = node.payload().as_object()?;
    let map = payload.as_any().downcast_ref::<HostMap>()?;
    map.get_value("path")
       .and_then(|v| v.as_str().map(PathBuf::from))
}

/// Carga los hijos de un directorio (ordenados por nombre) si aún no se hizo.
fn load_children(node: &Rc<TreeNode>) {
    if node.is_loaded() {
        return;
    }
    node.mark_loaded();
    let Some(path) = node_path(node) else { return };
    if !path.is_dir() {
        return;
    }
    let entries = match fs::read_dir(&path) {
        Ok(rd) => rd,
        Err(e) => {
            warn!("fs_tree:read_dir path={} err={e}", path.display());
            return;
        }
    };
    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    paths.sort();
    for p in paths {
        node.add_child(node_for(&p));
    }
}

/// Adaptador sobre `root`; `extra` se encadena después de la carga perezosa.
pub fn fs_tree(root: &Path, extra: TreeCallbacks) -> TreeViewAdapter {
    let mut user_expand = extra.on_expand;
    let callbacks = TreeCallbacks { on_expand: Some(Box::new(move |node: &Rc<TreeNode>| {
                                        load_children(node);
                                        if let Some(cb) = user_expand.as_mut() {
                                            cb(node);
                                        }
                                    })),
                                    on_collapse: extra.on_collapse,
                                    on_select: extra.on_select };
    TreeViewAdapter::new(node_for(root), callbacks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::{serialize, ConverterRegistry};
    use serde_json::json;

    #[test]
    fn expanding_reads_directory_lazily() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("inner.txt"), b"hi").unwrap();
        fs::write(dir.path().join("a.txt"), b"hello").unwrap();

        let mut view = fs_tree(dir.path(), TreeCallbacks::new());
        assert!(view.root().children().is_empty());
        view.expand_to(1).unwrap();
        let labels: Vec<String> = view.root().children().iter().map(|c| c.label().to_string()).collect();
        assert_eq!(labels, vec!["a.txt".to_string(), "sub".to_string()]);
        assert!(view.root().find(&[1]).unwrap().children().is_empty());

        view.expand_to(2).unwrap();
        let inner = view.root().find(&[1, 0]).unwrap();
        assert_eq!(inner.label(), "inner.txt");

        let out = serialize(&HostValue::from(inner), &ConverterRegistry::with_defaults(), 3).unwrap();
        assert_eq!(out["payload"]["kind"], json!("EntryKind.FILE"));
        assert_eq!(out["payload"]["size"], json!(2));
    }
}
