//! Árbol de vista con callbacks etiquetados.
//!
//! En lugar de una jerarquía de clases del toolkit (item de árbol con
//! subclases anónimas para cada evento), el comportamiento se describe con un
//! registro de callbacks opcionales (`TreeCallbacks`) y un adaptador que
//! enruta eventos (`TreeViewAdapter`). Los nodos se direccionan por ruta de
//! índices de hijos desde la raíz (`[]` = raíz, `[0, 2]` = tercer hijo del
//! primer hijo).

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;

use crate::errors::BridgeError;
use crate::host::{HostList, HostMapping, HostObject, HostValue};

pub struct TreeNode {
    label: String,
    payload: HostValue,
    children: RefCell<Vec<Rc<TreeNode>>>,
    parent: RefCell<Weak<TreeNode>>,
    expanded: Cell<bool>,
    loaded: Cell<bool>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>, payload: impl Into<HostValue>) -> Rc<Self> {
        Rc::new(Self { label: label.into(),
                       payload: payload.into(),
                       children: RefCell::new(Vec::new()),
                       parent: RefCell::new(Weak::new()),
                       expanded: Cell::new(false),
                       loaded: Cell::new(false) })
    }

    pub fn add_child(self: &Rc<Self>, child: Rc<TreeNode>) {
        *child.parent.borrow_mut() = Rc::downgrade(self);
        self.children.borrow_mut().push(child);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn payload(&self) -> &HostValue {
        &self.payload
    }

    pub fn children(&self) -> Vec<Rc<TreeNode>> {
        self.children.borrow().clone()
    }

    pub fn parent(&self) -> Option<Rc<TreeNode>> {
        self.parent.borrow().upgrade()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    /// Marca de carga perezosa: el callback de expansión la usa para no
    /// volver a poblar hijos.
    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    pub fn mark_loaded(&self) {
        self.loaded.set(true);
    }

    /// Nodo en `path` relativo a `self`.
    pub fn find(self: &Rc<Self>, path: &[usize]) -> Option<Rc<TreeNode>> {
        let mut current = self.clone();
        for &i in path {
            let next = current.children.borrow().get(i).cloned()?;
            current = next;
        }
        Some(current)
    }
}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
         .field("label", &self.label)
         .field("children", &self.children.borrow().len())
         .field("expanded", &self.expanded.get())
         .finish_non_exhaustive()
    }
}

impl HostObject for TreeNode {
    fn type_tag(&self) -> &str {
        "tree-node"
    }

    fn as_mapping(&self) -> Option<&dyn HostMapping> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn display(&self) -> String {
        self.label.clone()
    }
}

/// `parent` sólo aparece si existe; al serializar desde la raíz apunta a un
/// ancestro y se resuelve como `"<circular>"`.
impl HostMapping for TreeNode {
    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = ["label", "expanded", "payload", "children"].iter().map(|k| k.to_string()).collect();
        if self.parent().is_some() {
            keys.push("parent".to_string());
        }
        keys
    }

    fn get(&self, key: &str) -> Result<HostValue, String> {
        match key {
            "label" => Ok(HostValue::from(self.label.as_str())),
            "expanded" => Ok(HostValue::Bool(self.is_expanded())),
            "payload" => Ok(self.payload.clone()),
            "children" => {
                let list: HostList = self.children().into_iter().collect();
                Ok(HostValue::object(list))
            }
            "parent" => self.parent().map(HostValue::from).ok_or_else(|| "detached node".to_string()),
            other => Err(format!("no such key: {other}")),
        }
    }
}

pub type NodeCallback = Box<dyn FnMut(&Rc<TreeNode>)>;

/// Registro de callbacks; los ausentes se ignoran.
#[derive(Default)]
pub struct TreeCallbacks {
    pub on_expand: Option<NodeCallback>,
    pub on_collapse: Option<NodeCallback>,
    pub on_select: Option<NodeCallback>,
}

impl TreeCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expand<F: FnMut(&Rc<TreeNode>) + 'static>(mut self, f: F) -> Self {
        self.on_expand = Some(Box::new(f));
        self
    }

    pub fn with_collapse<F: FnMut(&Rc<TreeNode>) + 'static>(mut self, f: F) -> Self {
        self.on_collapse = Some(Box::new(f));
        self
    }

    pub fn with_select<F: FnMut(&Rc<TreeNode>) + 'static>(mut self, f: F) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    Expand(Vec<usize>),
    Collapse(Vec<usize>),
    Select(Vec<usize>),
}

impl TreeEvent {
    pub fn path(&self) -> &[usize] {
        match self {
            TreeEvent::Expand(p) | TreeEvent::Collapse(p) | TreeEvent::Select(p) => p,
        }
    }
}

pub struct TreeViewAdapter {
    root: Rc<TreeNode>,
    callbacks: TreeCallbacks,
    selected: Option<Vec<usize>>,
}

impl TreeViewAdapter {
    pub fn new(root: Rc<TreeNode>, callbacks: TreeCallbacks) -> Self {
        Self { root, callbacks, selected: None }
    }

    pub fn root(&self) -> &Rc<TreeNode> {
        &self.root
    }

    pub fn selected(&self) -> Option<&[usize]> {
        self.selected.as_deref()
    }

    /// Aplica el evento al nodo y llama al callback correspondiente.
    /// Expandir un nodo ya expandido (o colapsar uno colapsado) no repite el callback.
    pub fn dispatch(&mut self, event: TreeEvent) -> Result<Rc<TreeNode>, BridgeError> {
        let node = self.root
                       .find(event.path())
                       .ok_or_else(|| BridgeError::UnknownNode(event.path().to_vec()))?;
        debug!("tree:dispatch event={:?} label={}", event, node.label());
        match event {
            TreeEvent::Expand(_) => {
                if !node.expanded.replace(true) {
                    if let Some(cb) = self.callbacks.on_expand.as_mut() {
                        cb(&node);
                    }
                }
            }
            TreeEvent::Collapse(_) => {
                if node.expanded.replace(false) {
                    if let Some(cb) = self.callbacks.on_collapse.as_mut() {
                        cb(&node);
                    }
                }
            }
            TreeEvent::Select(path) => {
                self.selected = Some(path);
                if let Some(cb) = self.callbacks.on_select.as_mut() {
                    cb(&node);
                }
            }
        }
        Ok(node)
    }

    /// Expande desde la raíz hasta `depth` niveles (la raíz cuenta como 1).
    pub fn expand_to(&mut self, depth: usize) -> Result<(), BridgeError> {
        self.expand_from(Vec::new(), depth)
    }

    fn expand_from(&mut self, path: Vec<usize>, depth: usize) -> Result<(), BridgeError> {
        if depth == 0 {
            return Ok(());
        }
        let node = self.dispatch(TreeEvent::Expand(path.clone()))?;
        for i in 0..node.children().len() {
            let mut child_path = path.clone();
            child_path.push(i);
            self.expand_from(child_path, depth - 1)?;
        }
        Ok(())
    }
}
