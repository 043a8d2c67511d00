//! ASCII rendering of a menu tree, for operators.

use super::{MenuNode, MenuTree};

const BRANCH: char = '○';
const TERMINAL: char = '●';

/// Render the whole menu with selectors, labels and terminal topics.
///
/// Example output:
/// ```text
/// Welcome to FieldLine
/// ├── ○ 1 Agriculture Info
/// │   ├── ● 1 Weather Forecast [weather]
/// │   └── ● 2 Market Prices [prices]
/// └── ● 0 Exit [goodbye]
/// ```
pub fn render_tree(tree: &MenuTree) -> String {
    let root = tree.root();
    let mut output = String::new();
    output.push_str(root.prompt());
    output.push('\n');

    let children: Vec<_> = tree.children(root).collect();
    for (i, (selector, child)) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        render_node(&mut output, tree, child, *selector, "", is_last);
    }
    output
}

fn render_node(
    output: &mut String,
    tree: &MenuTree,
    node: &MenuNode,
    selector: char,
    prefix: &str,
    is_last: bool,
) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(branch);

    match node.topic() {
        Some(topic) => {
            output.push_str(&format!("{} {} {} [{}]", TERMINAL, selector, node.label, topic));
        }
        None => {
            output.push_str(&format!("{} {} {}", BRANCH, selector, node.label));
        }
    }
    output.push('\n');

    let continuation = if is_last { "    " } else { "│   " };
    let child_prefix = format!("{}{}", prefix, continuation);

    let children: Vec<_> = tree.children(node).collect();
    for (i, (selector, child)) in children.iter().enumerate() {
        let child_is_last = i == children.len() - 1;
        render_node(output, tree, child, *selector, &child_prefix, child_is_last);
    }
}
