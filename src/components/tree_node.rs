//! Tree Node Component
//!
//! A single row of the tree, rendered recursively for expanded
//! children. Returns `AnyView` so the recursion stays type-erased.

use leptos::html::Div;
use leptos::prelude::*;
use web_sys::{DragEvent, KeyboardEvent};

use crate::components::TreeCtx;
use crate::models::TreeNode;
use crate::tree::DropPosition;

#[component]
pub fn TreeNodeItem(node: TreeNode, level: usize) -> AnyView {
    let ctx = use_context::<TreeCtx>().expect("TreeCtx should be provided");

    let id = node.id.clone();
    let label = node.label.clone();
    let is_expanded = node.is_expanded;
    let has_children = node.children.as_ref().is_some_and(|c| !c.is_empty());
    let can_expand = has_children || node.has_unloaded_children;

    // Icon letter follows the depth encoded in the id segments
    let depth = node.id.split('-').count();
    let icon = match depth {
        1 => "A",
        2 => "B",
        _ => "C",
    };
    let icon_class = if depth == 1 {
        "node-icon node-icon-blue"
    } else {
        "node-icon node-icon-green"
    };

    let (editing, set_editing) = signal(false);
    let (edit_value, set_edit_value) = signal(node.label.clone());
    let (drag_over, set_drag_over) = signal(None::<DropPosition>);
    let node_ref = NodeRef::<Div>::new();

    let submit_edit = {
        let id = id.clone();
        move || {
            ctx.edit_label(&id, &edit_value.get_untracked());
            set_editing.set(false);
        }
    };

    let on_dragstart = {
        let id = id.clone();
        move |_: DragEvent| ctx.start_drag(id.clone())
    };

    // Pointer position within the row decides before/after/inside
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let Some(el) = node_ref.get() else { return };
        let rect = el.get_bounding_client_rect();
        let y = ev.client_y() as f64 - rect.top();
        let height = rect.height();
        let position = if y < height * 0.25 {
            DropPosition::Before
        } else if y > height * 0.75 {
            DropPosition::After
        } else {
            DropPosition::Inside
        };
        set_drag_over.set(Some(position));
    };

    let on_drop = {
        let id = id.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            if let Some(position) = drag_over.get_untracked() {
                ctx.drop_on(&id, position);
            }
            set_drag_over.set(None);
        }
    };

    let row_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("tree-node");
            match drag_over.get() {
                Some(DropPosition::Before) => c.push_str(" drag-over-before"),
                Some(DropPosition::After) => c.push_str(" drag-over-after"),
                Some(DropPosition::Inside) => c.push_str(" drag-over-inside"),
                None => {}
            }
            if ctx.dragged.get().as_deref() == Some(id.as_str()) {
                c.push_str(" dragging");
            }
            c
        }
    };

    let expand_glyph = {
        let id = id.clone();
        move || {
            if ctx.is_loading(&id) {
                "…"
            } else if is_expanded {
                "▼"
            } else {
                "▶"
            }
        }
    };

    let toggle_id = id.clone();
    let add_id = id.clone();
    let delete_id = id.clone();
    let edit_seed = label.clone();

    view! {
        <div class="tree-node-wrapper">
            <div
                node_ref=node_ref
                class=row_class
                draggable="true"
                style=format!("margin-left: {}px;", level * 24)
                on:dragstart=on_dragstart
                on:dragover=on_dragover
                on:dragleave=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_over.set(None);
                }
                on:drop=on_drop
            >
                <div class="tree-node-content">
                    <div class="tree-node-left">
                        {if can_expand {
                            view! {
                                <button class="expand-button" on:click=move |_| ctx.toggle(&toggle_id)>
                                    {expand_glyph}
                                </button>
                            }
                                .into_any()
                        } else {
                            view! { <span class="expand-placeholder"></span> }.into_any()
                        }}

                        <div class=icon_class>{icon}</div>

                        {
                            let label = label.clone();
                            let submit_blur = submit_edit.clone();
                            let submit_key = submit_edit.clone();
                            move || {
                                if editing.get() {
                                    let submit_blur = submit_blur.clone();
                                    let submit_key = submit_key.clone();
                                    let reset_label = label.clone();
                                    view! {
                                        <input
                                            type="text"
                                            class="node-edit-input"
                                            prop:value=move || edit_value.get()
                                            on:input=move |ev| set_edit_value.set(event_target_value(&ev))
                                            on:blur=move |_| submit_blur()
                                            on:keydown=move |ev: KeyboardEvent| {
                                                if ev.key() == "Enter" {
                                                    submit_key();
                                                } else if ev.key() == "Escape" {
                                                    set_edit_value.set(reset_label.clone());
                                                    set_editing.set(false);
                                                }
                                            }
                                            autofocus
                                        />
                                    }
                                        .into_any()
                                } else {
                                    let shown = label.clone();
                                    let seed = label.clone();
                                    view! {
                                        <span
                                            class="node-label"
                                            on:dblclick=move |_| {
                                                set_edit_value.set(seed.clone());
                                                set_editing.set(true);
                                            }
                                        >
                                            {shown}
                                        </span>
                                    }
                                        .into_any()
                                }
                            }
                        }
                    </div>

                    <div class="tree-node-actions">
                        <button
                            class="action-button edit-button"
                            title="Edit node"
                            on:click=move |_| {
                                set_edit_value.set(edit_seed.clone());
                                set_editing.set(true);
                            }
                        >
                            "✎"
                        </button>
                        <button
                            class="action-button add-button"
                            title="Add child node"
                            on:click=move |_| ctx.add_child(&add_id)
                        >
                            "+"
                        </button>
                        <button
                            class="action-button delete-button"
                            title="Delete node"
                            on:click=move |_| ctx.delete(&delete_id)
                        >
                            "×"
                        </button>
                    </div>
                </div>
            </div>

            {(is_expanded && has_children).then(|| {
                let children = node.children.clone().unwrap_or_default();
                view! {
                    <div class="tree-node-children">
                        {children
                            .into_iter()
                            .map(|child| view! { <TreeNodeItem node=child level=level + 1 /> })
                            .collect_view()}
                    </div>
                }
            })}
        </div>
    }
    .into_any()
}
