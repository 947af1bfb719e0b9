//! Kanban Card Component
//!
//! A draggable card with inline title editing. As a drop target the
//! card resolves insert-before vs insert-after by comparing the pointer
//! against its vertical midpoint.

use leptos::html::Div;
use leptos::prelude::*;
use web_sys::{DragEvent, KeyboardEvent};

use crate::components::BoardCtx;
use crate::models::{Card, ColumnId};

/// Which half of the card the pointer is hovering
#[derive(Clone, Copy, Debug, PartialEq)]
enum DragHalf {
    Top,
    Bottom,
}

#[component]
pub fn KanbanCard(card: Card, column_id: ColumnId, index: usize) -> impl IntoView {
    let ctx = use_context::<BoardCtx>().expect("BoardCtx should be provided");

    let id = card.id.clone();
    let title = card.title.clone();

    let (editing, set_editing) = signal(false);
    let (edit_value, set_edit_value) = signal(card.title.clone());
    let (drag_over, set_drag_over) = signal(None::<DragHalf>);
    let card_ref = NodeRef::<Div>::new();

    let submit_edit = {
        let id = id.clone();
        move || {
            ctx.edit_card(column_id, &id, &edit_value.get_untracked());
            set_editing.set(false);
        }
    };

    let on_dragstart = {
        let id = id.clone();
        move |_: DragEvent| ctx.start_drag(id.clone(), column_id)
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let Some(el) = card_ref.get() else { return };
        let rect = el.get_bounding_client_rect();
        let y = ev.client_y() as f64 - rect.top();
        let half = if y < rect.height() / 2.0 {
            DragHalf::Top
        } else {
            DragHalf::Bottom
        };
        set_drag_over.set(Some(half));
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let target_index = match drag_over.get_untracked() {
            Some(DragHalf::Bottom) => index + 1,
            _ => index,
        };
        ctx.drop_on(column_id, Some(target_index));
        set_drag_over.set(None);
    };

    let card_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("kanban-card");
            match drag_over.get() {
                Some(DragHalf::Top) => c.push_str(" drag-over-top"),
                Some(DragHalf::Bottom) => c.push_str(" drag-over-bottom"),
                None => {}
            }
            if ctx.dragged.get().is_some_and(|d| d.card_id == id) {
                c.push_str(" dragging");
            }
            c
        }
    };

    let delete_id = id.clone();
    let reset_title = title.clone();
    let edit_seed = title.clone();

    view! {
        <div
            node_ref=card_ref
            class=card_class
            draggable=move || if editing.get() { "false" } else { "true" }
            on:dragstart=on_dragstart
            on:dragend=move |_| ctx.end_drag()
            on:dragover=on_dragover
            on:dragleave=move |_| set_drag_over.set(None)
            on:drop=on_drop
        >
            {
                let submit_blur = submit_edit.clone();
                let submit_key = submit_edit.clone();
                move || {
                    if editing.get() {
                        let submit_blur = submit_blur.clone();
                        let submit_key = submit_key.clone();
                        let reset_title = reset_title.clone();
                        view! {
                            <textarea
                                class="card-edit-input"
                                rows=3
                                prop:value=move || edit_value.get()
                                on:input=move |ev| set_edit_value.set(event_target_value(&ev))
                                on:blur=move |_| submit_blur()
                                on:keydown=move |ev: KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        submit_key();
                                    } else if ev.key() == "Escape" {
                                        set_edit_value.set(reset_title.clone());
                                        set_editing.set(false);
                                    }
                                }
                                autofocus
                            ></textarea>
                        }
                            .into_any()
                    } else {
                        let shown = title.clone();
                        let seed = edit_seed.clone();
                        let delete_id = delete_id.clone();
                        view! {
                            <div
                                class="card-content"
                                on:dblclick=move |_| {
                                    set_edit_value.set(seed.clone());
                                    set_editing.set(true);
                                }
                            >
                                <p class="card-title">{shown}</p>
                            </div>
                            <button
                                class="card-delete-button"
                                title="Delete card"
                                on:click=move |_| ctx.delete_card(column_id, &delete_id)
                            >
                                "×"
                            </button>
                        }
                            .into_any()
                    }
                }
            }
        </div>
    }
}
