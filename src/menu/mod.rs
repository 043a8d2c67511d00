//! The short-code menu tree and its path interpreter.
//!
//! The channel is stateless: every request carries the full selector history
//! (`"1*2"`), so a request is answered by resolving that path from the root.
//! There is no session store. A node's id is the `*`-joined selector path that
//! reaches it, which makes the id both primary key and address.

mod definition;
mod tree_render;

use std::collections::HashMap;
use std::fmt;

use crate::error::{ConfigError, MenuError};
use crate::models::Topic;

pub use definition::{branch, builtin_menu, leaf, MenuItem};
pub use tree_render::render_tree;

/// Id of the root node. Every other id is derived from its selector path.
pub const ROOT_ID: &str = "root";

/// Deepest selector path a menu may define.
pub const MAX_DEPTH: usize = 4;

pub const PATH_DELIMITER: char = '*';

/// A node in the menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub id: String,
    /// Text the parent lists for this node.
    pub label: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Navigational node: shows a prompt and waits for another selector.
    Branch {
        prompt: String,
        options: Vec<MenuOption>,
    },
    /// Leaf node: ends the session with the topic's content.
    Terminal { topic: Topic },
}

/// A selector offered by a branch and the node it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub selector: char,
    pub child: String,
}

impl MenuOption {
    fn matches(&self, segment: &str) -> bool {
        let mut chars = segment.chars();
        chars.next() == Some(self.selector) && chars.next().is_none()
    }
}

impl MenuNode {
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal { .. })
    }

    pub fn topic(&self) -> Option<Topic> {
        match self.kind {
            NodeKind::Terminal { topic } => Some(topic),
            NodeKind::Branch { .. } => None,
        }
    }

    pub fn prompt(&self) -> &str {
        match &self.kind {
            NodeKind::Branch { prompt, .. } => prompt,
            NodeKind::Terminal { .. } => &self.label,
        }
    }

    pub fn options(&self) -> &[MenuOption] {
        match &self.kind {
            NodeKind::Branch { options, .. } => options,
            NodeKind::Terminal { .. } => &[],
        }
    }

    /// The selector path that reaches this node.
    pub fn path(&self) -> SelectionPath {
        if self.id == ROOT_ID {
            SelectionPath::default()
        } else {
            SelectionPath::parse(&self.id)
        }
    }
}

/// The selectors of one request, in order. Empty means "show the root".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    selectors: Vec<String>,
}

impl SelectionPath {
    /// Split raw request text on [`PATH_DELIMITER`].
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            selectors: text
                .split(PATH_DELIMITER)
                .map(|s| s.trim().to_string())
                .collect(),
        }
    }

    pub fn push(&mut self, selector: impl Into<String>) {
        self.selectors.push(selector.into());
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }
}

impl fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for selector in &self.selectors {
            if !first {
                write!(f, "{}", PATH_DELIMITER)?;
            }
            f.write_str(selector)?;
            first = false;
        }
        Ok(())
    }
}

/// Where a session stands after its path has been resolved.
///
/// `Terminal` and `Invalid` end the exchange. `Root` and `Branch` expect the
/// client to resend the path extended by one selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState<'a> {
    Root(&'a MenuNode),
    Branch(&'a MenuNode),
    Terminal(&'a MenuNode),
    Invalid(MenuError),
}

impl SessionState<'_> {
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Terminal(_) | Self::Invalid(_))
    }
}

/// Immutable menu tree, built once at startup.
#[derive(Debug, Clone)]
pub struct MenuTree {
    root: MenuNode,
    nodes: HashMap<String, MenuNode>,
}

impl MenuTree {
    /// Build a tree from a definition, deriving node ids from selector paths.
    pub fn build(definition: MenuItem) -> Result<Self, ConfigError> {
        let MenuItem::Branch {
            label,
            prompt,
            children,
        } = definition
        else {
            return Err(ConfigError::RootNotBranch);
        };

        let mut nodes = HashMap::new();
        let options = insert_children(&mut nodes, ROOT_ID, &[], children)?;

        let root = MenuNode {
            id: ROOT_ID.to_string(),
            label,
            kind: NodeKind::Branch { prompt, options },
        };

        tracing::debug!("Built menu tree with {} nodes", nodes.len() + 1);
        Ok(Self { root, nodes })
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        Self::build(builtin_menu())
    }

    pub fn root(&self) -> &MenuNode {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&MenuNode> {
        if id == ROOT_ID {
            Some(&self.root)
        } else {
            self.nodes.get(id)
        }
    }

    /// Every node, root first. Order of the rest is unspecified.
    pub fn nodes(&self) -> impl Iterator<Item = &MenuNode> {
        std::iter::once(&self.root).chain(self.nodes.values())
    }

    /// Children of `node` in option order, paired with their selectors.
    pub fn children<'a>(&'a self, node: &'a MenuNode) -> impl Iterator<Item = (char, &'a MenuNode)> {
        node.options()
            .iter()
            .filter_map(|o| self.get(&o.child).map(|child| (o.selector, child)))
    }

    /// Walk `path` from the root one selector at a time.
    ///
    /// Fails on the first selector the current node does not offer, including
    /// any selector after a terminal node. A path that stops on a branch is
    /// not an error.
    pub fn resolve(&self, path: &SelectionPath) -> Result<&MenuNode, MenuError> {
        let mut node = &self.root;

        for segment in path.iter() {
            let current = node;
            node = current
                .options()
                .iter()
                .find(|o| o.matches(segment))
                .and_then(|o| self.get(&o.child))
                .ok_or_else(|| MenuError::InvalidSelector {
                    node: current.id.clone(),
                    selector: segment.to_string(),
                })?;
        }

        Ok(node)
    }

    pub fn session_state(&self, path: &SelectionPath) -> SessionState<'_> {
        match self.resolve(path) {
            Ok(node) if node.id == ROOT_ID => SessionState::Root(node),
            Ok(node) if node.is_terminal() => SessionState::Terminal(node),
            Ok(node) => SessionState::Branch(node),
            Err(e) => SessionState::Invalid(e),
        }
    }
}

fn node_id(path: &[char]) -> String {
    path.iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(&PATH_DELIMITER.to_string())
}

fn insert_children(
    nodes: &mut HashMap<String, MenuNode>,
    parent_id: &str,
    parent_path: &[char],
    children: Vec<(char, MenuItem)>,
) -> Result<Vec<MenuOption>, ConfigError> {
    if children.is_empty() {
        return Err(ConfigError::EmptyBranch(parent_id.to_string()));
    }

    let mut options: Vec<MenuOption> = Vec::with_capacity(children.len());

    for (selector, item) in children {
        if !selector.is_ascii_digit() {
            return Err(ConfigError::BadSelector {
                node: parent_id.to_string(),
                selector,
            });
        }
        if options.iter().any(|o| o.selector == selector) {
            return Err(ConfigError::DuplicateSelector {
                node: parent_id.to_string(),
                selector,
            });
        }

        let mut path = parent_path.to_vec();
        path.push(selector);
        let id = node_id(&path);

        if path.len() > MAX_DEPTH {
            return Err(ConfigError::TooDeep {
                node: id,
                depth: path.len(),
                limit: MAX_DEPTH,
            });
        }

        let node = match item {
            MenuItem::Leaf { label, topic } => MenuNode {
                id: id.clone(),
                label,
                kind: NodeKind::Terminal { topic },
            },
            MenuItem::Branch {
                label,
                prompt,
                children,
            } => {
                let options = insert_children(nodes, &id, &path, children)?;
                MenuNode {
                    id: id.clone(),
                    label,
                    kind: NodeKind::Branch { prompt, options },
                }
            }
        };

        nodes.insert(id.clone(), node);
        options.push(MenuOption {
            selector,
            child: id,
        });
    }

    Ok(options)
}
