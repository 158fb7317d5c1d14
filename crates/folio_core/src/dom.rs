//! Transient document model
//!
//! A generational slab of element nodes. Slots are pooled and reused; a
//! handle to a removed node goes stale instead of aliasing whatever is
//! spawned into its slot later. Reads through a stale handle come back
//! empty and writes are no-ops, which is what makes timed removals (the
//! particle cleanup in particular) idempotent.

use crate::selector::SelectorList;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Handle to a document node.
///
/// Cheap to copy and safe to hold across removals: the generation is
/// checked on every access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

/// Errors from structural document mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("node handle is stale (the node was removed)")]
    StaleNode,
    #[error("appending here would make a node an ancestor of itself")]
    CycleDetected,
}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    attrs: BTreeMap<String, String>,
    text: String,
    offset_top: f32,
    offset_height: f32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// The page document: a tree of elements with classes, inline styles,
/// attributes, text, and the static offset geometry layout would have
/// produced.
#[derive(Debug)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
    id_index: HashMap<String, NodeId>,
}

impl Document {
    /// Create a document containing only the root element.
    pub fn new() -> Self {
        let root_node = Node {
            tag: "html".to_string(),
            ..Node::default()
        };
        let root = NodeId {
            index: 0,
            generation: 0,
        };
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(root_node),
            }],
            free: Vec::new(),
            root,
            id_index: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|s| s.node.is_some()).count()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }

    /// True while the handle refers to a node that has not been removed.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// True when the node is alive and connected to the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.node(current).and_then(|n| n.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Create a detached element. Append it to give it a place in the tree.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let node = Node {
            tag: tag.to_string(),
            ..Node::default()
        };
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        if !self.is_alive(parent) || !self.is_alive(child) {
            return Err(DocumentError::StaleNode);
        }
        // Walking up from `parent` must not reach `child`.
        let mut current = Some(parent);
        while let Some(node) = current {
            if node == child {
                return Err(DocumentError::CycleDetected);
            }
            current = self.node(node).and_then(|n| n.parent);
        }
        if let Some(old_parent) = self.node(child).and_then(|n| n.parent) {
            if let Some(n) = self.node_mut(old_parent) {
                n.children.retain(|&c| c != child);
            }
        }
        if let Some(n) = self.node_mut(child) {
            n.parent = Some(parent);
        }
        if let Some(n) = self.node_mut(parent) {
            n.children.push(child);
        }
        Ok(())
    }

    /// Remove a node and its subtree. Returns false (and does nothing) for
    /// stale handles and for the root, so a second removal of the same node
    /// is a harmless no-op.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root || !self.is_alive(id) {
            return false;
        }
        if let Some(parent) = self.node(id).and_then(|n| n.parent) {
            if let Some(n) = self.node_mut(parent) {
                n.children.retain(|&c| c != id);
            }
        }
        self.free_subtree(id);
        true
    }

    fn free_subtree(&mut self, id: NodeId) {
        let children = match self.node(id) {
            Some(n) => n.children.clone(),
            None => return,
        };
        for child in children {
            self.free_subtree(child);
        }
        let slot = &mut self.slots[id.index as usize];
        if let Some(node) = slot.node.take() {
            if let Some(node_id) = node.id {
                if self.id_index.get(&node_id) == Some(&id) {
                    self.id_index.remove(&node_id);
                }
            }
        }
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
    }

    /// True when `node` is `ancestor` itself or sits anywhere below it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return self.is_alive(ancestor);
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.tag.as_str())
    }

    // --- identifiers -------------------------------------------------------

    /// Assign the element's id. The first element registered under an id
    /// keeps the lookup slot, matching document-order lookup semantics.
    pub fn set_id(&mut self, id: NodeId, value: &str) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        if let Some(old) = self.node(id).and_then(|n| n.id.clone()) {
            if self.id_index.get(&old) == Some(&id) {
                self.id_index.remove(&old);
            }
        }
        if let Some(n) = self.node_mut(id) {
            n.id = Some(value.to_string());
        }
        self.id_index.entry(value.to_string()).or_insert(id);
        true
    }

    pub fn id_of(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.id.as_deref())
    }

    /// Plain lookup with no diagnostics; the resolver layer adds the warning.
    pub fn element_by_id(&self, value: &str) -> Option<NodeId> {
        let id = *self.id_index.get(value)?;
        self.is_alive(id).then_some(id)
    }

    // --- classes -----------------------------------------------------------

    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        match self.node_mut(id) {
            Some(n) => {
                if !n.classes.iter().any(|c| c == class) {
                    n.classes.push(class.to_string());
                }
                true
            }
            None => false,
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        match self.node_mut(id) {
            Some(n) => {
                n.classes.retain(|c| c != class);
                true
            }
            None => false,
        }
    }

    /// Toggle a class token; returns the state after the call.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class)
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id)
            .map(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.node(id).map(|n| n.classes.as_slice()).unwrap_or(&[])
    }

    // --- inline styles -----------------------------------------------------

    pub fn set_style(&mut self, id: NodeId, property: &str, value: impl Into<String>) -> bool {
        match self.node_mut(id) {
            Some(n) => {
                n.styles.insert(property.to_string(), value.into());
                true
            }
            None => false,
        }
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.node(id)?.styles.get(property).map(String::as_str)
    }

    pub fn clear_style(&mut self, id: NodeId, property: &str) -> bool {
        match self.node_mut(id) {
            Some(n) => n.styles.remove(property).is_some(),
            None => false,
        }
    }

    // --- attributes --------------------------------------------------------

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> bool {
        match self.node_mut(id) {
            Some(n) => {
                n.attrs.insert(name.to_string(), value.into());
                true
            }
            None => false,
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)?.attrs.get(name).map(String::as_str)
    }

    // --- text --------------------------------------------------------------

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.text.as_str())
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        match self.node_mut(id) {
            Some(n) => {
                n.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn append_text(&mut self, id: NodeId, suffix: &str) -> bool {
        match self.node_mut(id) {
            Some(n) => {
                n.text.push_str(suffix);
                true
            }
            None => false,
        }
    }

    // --- geometry ----------------------------------------------------------

    /// Record the vertical box layout would have given this element.
    pub fn set_offsets(&mut self, id: NodeId, top: f32, height: f32) -> bool {
        match self.node_mut(id) {
            Some(n) => {
                n.offset_top = top;
                n.offset_height = height;
                true
            }
            None => false,
        }
    }

    pub fn offset_top(&self, id: NodeId) -> f32 {
        self.node(id).map(|n| n.offset_top).unwrap_or(0.0)
    }

    pub fn offset_height(&self, id: NodeId) -> f32 {
        self.node(id).map(|n| n.offset_height).unwrap_or(0.0)
    }

    // --- queries -----------------------------------------------------------

    /// All attached elements matching the selector list, in document order.
    pub fn query_all(&self, selectors: &SelectorList) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if selectors.matches(self, id) {
                out.push(id);
            }
            for &child in self.children(id).iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// First attached element matching the selector list, in document order.
    pub fn query_first(&self, selectors: &SelectorList) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if selectors.matches(self, id) {
                return Some(id);
            }
            for &child in self.children(id).iter().rev() {
                stack.push(child);
            }
        }
        None
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
