//! Tree View Component
//!
//! Owns the tree snapshot and drag state, and exposes the tree
//! operations to the node rows via context.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TreeNodeItem;
use crate::loader;
use crate::models::{initial_tree, TreeNode, DEFAULT_NODE_LABEL};
use crate::tree::{self, DropPosition};

/// Tree widget signals and operations, provided via context
#[derive(Clone, Copy)]
pub struct TreeCtx {
    tree: ReadSignal<Vec<TreeNode>>,
    set_tree: WriteSignal<Vec<TreeNode>>,
    /// Id of the node currently being dragged
    pub dragged: ReadSignal<Option<String>>,
    set_dragged: WriteSignal<Option<String>>,
    /// Node ids with a child fetch in flight
    loading: ReadSignal<HashSet<String>>,
    set_loading: WriteSignal<HashSet<String>>,
}

impl TreeCtx {
    /// Expand or collapse a node. First expansion of a node with an
    /// unloaded subtree fetches the children; repeated toggles while the
    /// fetch is in flight are ignored, and a resolution that no longer
    /// applies is discarded by the engine.
    pub fn toggle(&self, node_id: &str) {
        let needs_fetch = {
            let snapshot = self.tree.get_untracked();
            match tree::find_node(&snapshot, node_id) {
                Some(node) => {
                    !node.is_expanded && node.has_unloaded_children && node.children.is_none()
                }
                None => return,
            }
        };

        if needs_fetch {
            if self.loading.get_untracked().contains(node_id) {
                return;
            }
            let id = node_id.to_string();
            self.set_loading.update(|pending| {
                pending.insert(id.clone());
            });
            let ctx = *self;
            spawn_local(async move {
                let children = loader::load_children(&id).await;
                ctx.set_loading.update(|pending| {
                    pending.remove(&id);
                });
                ctx.set_tree
                    .update(|nodes| *nodes = tree::attach_loaded_children(nodes, &id, children));
            });
        } else {
            self.set_tree
                .update(|nodes| *nodes = tree::toggle_expanded(nodes, node_id));
        }
    }

    /// Append a fresh child under the parent
    pub fn add_child(&self, parent_id: &str) {
        let child = TreeNode::new(
            format!("{parent_id}-{}", loader::timestamp_ms()),
            DEFAULT_NODE_LABEL,
        );
        self.set_tree
            .update(|nodes| *nodes = tree::add_child(nodes, parent_id, child));
    }

    /// Delete a node and its subtree, behind a confirmation prompt
    pub fn delete(&self, node_id: &str) {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(
                    "Are you sure you want to delete this node and all its children?",
                )
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        self.set_tree
            .update(|nodes| *nodes = tree::remove_node(nodes, node_id));
    }

    /// Rename a node; blank labels are ignored by the engine
    pub fn edit_label(&self, node_id: &str, new_label: &str) {
        self.set_tree
            .update(|nodes| *nodes = tree::edit_label(nodes, node_id, new_label));
    }

    pub fn start_drag(&self, node_id: String) {
        self.set_dragged.set(Some(node_id));
    }

    /// Commit a drop onto the target node
    pub fn drop_on(&self, target_id: &str, position: DropPosition) {
        let Some(dragged_id) = self.dragged.get_untracked() else {
            return;
        };
        self.set_dragged.set(None);
        web_sys::console::log_1(
            &format!("[DND] Drop: dragged={dragged_id}, target={target_id}, position={position:?}")
                .into(),
        );
        self.set_tree
            .update(|nodes| *nodes = tree::move_node(nodes, &dragged_id, target_id, position));
    }

    /// Is a child fetch in flight for this node?
    pub fn is_loading(&self, node_id: &str) -> bool {
        self.loading.get().contains(node_id)
    }
}

/// Tree widget: header plus the recursively rendered forest
#[component]
pub fn TreeView(on_back: Callback<()>) -> impl IntoView {
    let (tree, set_tree) = signal(initial_tree());
    let (dragged, set_dragged) = signal(None::<String>);
    let (loading, set_loading) = signal(HashSet::<String>::new());

    let ctx = TreeCtx {
        tree,
        set_tree,
        dragged,
        set_dragged,
        loading,
        set_loading,
    };
    provide_context(ctx);

    view! {
        <div class="tree-view-container">
            <div class="tree-view-header">
                <button class="back-button" on:click=move |_| on_back.run(())>
                    "← Back"
                </button>
                <h1>"Tree View Component"</h1>
            </div>

            <div class="tree-view-content">
                {move || {
                    tree.get()
                        .into_iter()
                        .map(|node| view! { <TreeNodeItem node=node level=0 /> })
                        .collect_view()
                }}
            </div>

            <p class="tree-count">
                {move || format!("{} nodes", tree::node_count(&tree.get()))}
            </p>
        </div>
    }
}
