//! Tree Engine
//!
//! Pure snapshot functions over the node forest. Every mutation takes the
//! previous snapshot by reference and returns a rebuilt `Vec<TreeNode>`;
//! unknown ids and invalid moves return an equivalent snapshot unchanged.

use crate::models::TreeNode;

/// Where a dragged node lands relative to the drop target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
    Inside,
}

/// Find a node anywhere in the forest by id
pub fn find_node<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(children) = &node.children {
            if let Some(found) = find_node(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Rebuild the forest with `update` applied to the matching node.
/// Unchanged siblings are cloned as-is.
pub fn update_node(
    nodes: &[TreeNode],
    id: &str,
    update: &dyn Fn(TreeNode) -> TreeNode,
) -> Vec<TreeNode> {
    nodes
        .iter()
        .map(|node| {
            if node.id == id {
                update(node.clone())
            } else if let Some(children) = &node.children {
                TreeNode {
                    children: Some(update_node(children, id, update)),
                    ..node.clone()
                }
            } else {
                node.clone()
            }
        })
        .collect()
}

/// Detach a node (with its whole subtree) from the forest, returning the
/// rebuilt forest and the detached node if it was found
pub fn take_node(nodes: &[TreeNode], id: &str) -> (Vec<TreeNode>, Option<TreeNode>) {
    let mut taken = None;
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.id == id {
            taken = Some(node.clone());
            continue;
        }
        if taken.is_none() {
            if let Some(children) = &node.children {
                let (rebuilt, inner) = take_node(children, id);
                if inner.is_some() {
                    taken = inner;
                    out.push(TreeNode {
                        children: Some(rebuilt),
                        ..node.clone()
                    });
                    continue;
                }
            }
        }
        out.push(node.clone());
    }
    (out, taken)
}

/// Remove a node and its entire subtree
pub fn remove_node(nodes: &[TreeNode], id: &str) -> Vec<TreeNode> {
    take_node(nodes, id).0
}

/// Append a child under the given parent, creating the child list if
/// absent. The parent no longer counts as having unloaded children.
pub fn add_child(nodes: &[TreeNode], parent_id: &str, child: TreeNode) -> Vec<TreeNode> {
    update_node(nodes, parent_id, &|mut parent| {
        let mut children = parent.children.take().unwrap_or_default();
        children.push(child.clone());
        parent.children = Some(children);
        parent.has_unloaded_children = false;
        parent
    })
}

/// Replace a node's label. Blank labels (after trimming) leave the
/// snapshot unchanged.
pub fn edit_label(nodes: &[TreeNode], id: &str, new_label: &str) -> Vec<TreeNode> {
    let trimmed = new_label.trim();
    if trimmed.is_empty() {
        return nodes.to_vec();
    }
    let label = trimmed.to_string();
    update_node(nodes, id, &move |mut node| {
        node.label = label.clone();
        node
    })
}

/// Flip a node's expanded flag in place
pub fn toggle_expanded(nodes: &[TreeNode], id: &str) -> Vec<TreeNode> {
    update_node(nodes, id, &|mut node| {
        node.is_expanded = !node.is_expanded;
        node
    })
}

/// Apply a resolved lazy fetch. Only taken when the node still has no
/// children and is still flagged unloaded; stale resolutions (node
/// deleted, or children arrived some other way in the meantime) are
/// discarded.
pub fn attach_loaded_children(
    nodes: &[TreeNode],
    id: &str,
    children: Vec<TreeNode>,
) -> Vec<TreeNode> {
    update_node(nodes, id, &move |mut node| {
        if node.children.is_none() && node.has_unloaded_children {
            node.children = Some(children.clone());
            node.is_expanded = true;
            node.has_unloaded_children = false;
        }
        node
    })
}

/// Does `id` name the given node or anything below it?
pub fn subtree_contains(node: &TreeNode, id: &str) -> bool {
    if node.id == id {
        return true;
    }
    node.children
        .as_deref()
        .is_some_and(|children| children.iter().any(|child| subtree_contains(child, id)))
}

/// Total number of nodes in the forest
pub fn node_count(nodes: &[TreeNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + node.children.as_deref().map_or(0, node_count))
        .sum()
}

/// Relocate a node (and its subtree) next to or under the target.
///
/// Rejected without change when the target is the dragged node itself or
/// sits inside the dragged subtree (the move would orphan the subtree),
/// or when either id is missing. The node is detached first and then
/// spliced back in, so a valid move never copies or drops nodes.
pub fn move_node(
    nodes: &[TreeNode],
    dragged_id: &str,
    target_id: &str,
    position: DropPosition,
) -> Vec<TreeNode> {
    if dragged_id == target_id {
        return nodes.to_vec();
    }
    match find_node(nodes, dragged_id) {
        Some(dragged) if subtree_contains(dragged, target_id) => return nodes.to_vec(),
        Some(_) => {}
        None => return nodes.to_vec(),
    }
    if find_node(nodes, target_id).is_none() {
        return nodes.to_vec();
    }

    let (detached, taken) = take_node(nodes, dragged_id);
    let Some(node) = taken else {
        return nodes.to_vec();
    };

    match position {
        DropPosition::Inside => add_child(&detached, target_id, node),
        DropPosition::Before | DropPosition::After => {
            let mut pending = Some(node);
            insert_beside(&detached, target_id, position, &mut pending)
        }
    }
}

/// Splice `pending` immediately before/after the target within the
/// sequence that contains it
fn insert_beside(
    nodes: &[TreeNode],
    target_id: &str,
    position: DropPosition,
    pending: &mut Option<TreeNode>,
) -> Vec<TreeNode> {
    if let Some(index) = nodes.iter().position(|node| node.id == target_id) {
        let mut out = nodes.to_vec();
        if let Some(node) = pending.take() {
            let at = match position {
                DropPosition::Before => index,
                _ => index + 1,
            };
            out.insert(at, node);
        }
        return out;
    }
    nodes
        .iter()
        .map(|node| {
            if pending.is_some() {
                if let Some(children) = &node.children {
                    return TreeNode {
                        children: Some(insert_beside(children, target_id, position, pending)),
                        ..node.clone()
                    };
                }
            }
            node.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str) -> TreeNode {
        TreeNode::new(id, format!("Node {id}"))
    }

    fn branch(id: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode {
            children: Some(children),
            ..leaf(id)
        }
    }

    /// 1
    /// ├── 1-1
    /// │   └── 1-1-1
    /// └── 1-2
    /// 2
    fn sample_forest() -> Vec<TreeNode> {
        vec![
            branch(
                "1",
                vec![branch("1-1", vec![leaf("1-1-1")]), leaf("1-2")],
            ),
            leaf("2"),
        ]
    }

    fn ids_at_root(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn find_node_descends_into_children() {
        let forest = sample_forest();
        assert_eq!(find_node(&forest, "1-1-1").map(|n| n.id.as_str()), Some("1-1-1"));
        assert!(find_node(&forest, "missing").is_none());
    }

    #[test]
    fn remove_node_drops_whole_subtree() {
        let forest = sample_forest();
        let after = remove_node(&forest, "1-1");
        assert!(find_node(&after, "1-1").is_none());
        assert!(find_node(&after, "1-1-1").is_none());
        assert_eq!(node_count(&after), node_count(&forest) - 2);
    }

    #[test]
    fn remove_node_with_unknown_id_changes_nothing() {
        let forest = sample_forest();
        assert_eq!(remove_node(&forest, "nope"), forest);
    }

    #[test]
    fn add_child_creates_list_and_clears_unloaded_flag() {
        let mut root = leaf("1");
        root.has_unloaded_children = true;
        let after = add_child(&[root], "1", leaf("1-x"));
        let parent = find_node(&after, "1").unwrap();
        assert!(!parent.has_unloaded_children);
        assert_eq!(
            parent.children.as_deref().map(ids_at_root),
            Some(vec!["1-x"])
        );
    }

    #[test]
    fn add_child_under_unknown_parent_is_a_no_op() {
        let forest = sample_forest();
        let before = node_count(&forest);
        let after = add_child(&forest, "ghost", leaf("ghost-1"));
        assert_eq!(node_count(&after), before);
        assert_eq!(after, forest);
    }

    #[test]
    fn edit_label_trims_and_ignores_blank() {
        let forest = sample_forest();
        let renamed = edit_label(&forest, "1-2", "  Renamed  ");
        assert_eq!(find_node(&renamed, "1-2").unwrap().label, "Renamed");

        let unchanged = edit_label(&forest, "1-2", "   ");
        assert_eq!(unchanged, forest);
    }

    #[test]
    fn toggle_expanded_flips_only_the_named_node() {
        let forest = sample_forest();
        let after = toggle_expanded(&forest, "1-1");
        assert!(find_node(&after, "1-1").unwrap().is_expanded);
        assert!(!find_node(&after, "1").unwrap().is_expanded);
        assert!(!find_node(&after, "1-1-1").unwrap().is_expanded);
    }

    #[test]
    fn attach_loaded_children_expands_and_clears_flag() {
        let mut root = leaf("1");
        root.has_unloaded_children = true;
        let after = attach_loaded_children(&[root], "1", vec![leaf("1-1"), leaf("1-2")]);
        let node = find_node(&after, "1").unwrap();
        assert!(node.is_expanded);
        assert!(!node.has_unloaded_children);
        assert_eq!(node.children.as_deref().map(ids_at_root), Some(vec!["1-1", "1-2"]));
    }

    #[test]
    fn attach_loaded_children_discards_stale_resolution() {
        // Children already arrived via add_child before the fetch resolved
        let mut root = leaf("1");
        root.has_unloaded_children = true;
        let forest = add_child(&[root], "1", leaf("1-manual"));
        let after = attach_loaded_children(&forest, "1", vec![leaf("1-1")]);
        assert_eq!(after, forest);
    }

    #[test]
    fn move_inside_appends_as_last_child() {
        let forest = sample_forest();
        let after = move_node(&forest, "2", "1-1", DropPosition::Inside);
        assert_eq!(node_count(&after), node_count(&forest));
        let parent = find_node(&after, "1-1").unwrap();
        assert_eq!(
            parent.children.as_deref().map(ids_at_root),
            Some(vec!["1-1-1", "2"])
        );
        assert_eq!(ids_at_root(&after), vec!["1"]);
    }

    #[test]
    fn move_before_and_after_splice_next_to_target() {
        let forest = sample_forest();

        let after = move_node(&forest, "2", "1-1", DropPosition::Before);
        let root = find_node(&after, "1").unwrap();
        assert_eq!(
            root.children.as_deref().map(ids_at_root),
            Some(vec!["2", "1-1", "1-2"])
        );

        let after = move_node(&forest, "2", "1-1", DropPosition::After);
        let root = find_node(&after, "1").unwrap();
        assert_eq!(
            root.children.as_deref().map(ids_at_root),
            Some(vec!["1-1", "2", "1-2"])
        );
        assert_eq!(node_count(&after), node_count(&forest));
    }

    #[test]
    fn move_reorders_siblings_within_one_parent() {
        let forest = sample_forest();
        let after = move_node(&forest, "1-2", "1-1", DropPosition::Before);
        let root = find_node(&after, "1").unwrap();
        assert_eq!(
            root.children.as_deref().map(ids_at_root),
            Some(vec!["1-2", "1-1"])
        );
    }

    #[test]
    fn move_onto_itself_is_rejected() {
        let forest = sample_forest();
        assert_eq!(move_node(&forest, "1-1", "1-1", DropPosition::Inside), forest);
    }

    #[test]
    fn move_into_own_descendant_is_rejected() {
        let forest = sample_forest();
        assert_eq!(move_node(&forest, "1", "1-1-1", DropPosition::Inside), forest);
        assert_eq!(move_node(&forest, "1-1", "1-1-1", DropPosition::After), forest);
    }

    #[test]
    fn move_with_missing_ids_is_rejected() {
        let forest = sample_forest();
        assert_eq!(move_node(&forest, "ghost", "1", DropPosition::Inside), forest);
        assert_eq!(move_node(&forest, "1-2", "ghost", DropPosition::Inside), forest);
    }

    #[test]
    fn move_inside_clears_target_unloaded_flag() {
        let mut target = leaf("2");
        target.has_unloaded_children = true;
        let forest = vec![leaf("1"), target];
        let after = move_node(&forest, "1", "2", DropPosition::Inside);
        let parent = find_node(&after, "2").unwrap();
        assert!(!parent.has_unloaded_children);
        assert_eq!(parent.children.as_deref().map(ids_at_root), Some(vec!["1"]));
    }

    #[test]
    fn subtree_contains_matches_self_and_descendants() {
        let forest = sample_forest();
        let root = find_node(&forest, "1").unwrap();
        assert!(subtree_contains(root, "1"));
        assert!(subtree_contains(root, "1-1-1"));
        assert!(!subtree_contains(root, "2"));
    }
}
