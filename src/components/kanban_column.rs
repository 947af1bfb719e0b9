//! Kanban Column Component
//!
//! A single column: header, add-card buttons, and the card list.
//! The column body is a drop target that appends at the end.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::components::{BoardCtx, KanbanCard};
use crate::models::{Column, ColumnId};

#[component]
pub fn KanbanColumn(column: Column) -> impl IntoView {
    let ctx = use_context::<BoardCtx>().expect("BoardCtx should be provided");

    let (is_drag_over, set_is_drag_over) = signal(false);

    let column_id = column.id;
    let card_count = column.cards.len();
    let color_class = match column_id {
        ColumnId::Todo => "column-blue",
        ColumnId::InProgress => "column-orange",
        ColumnId::Done => "column-green",
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_drag_over.set(true);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_drag_over.set(false);
        ctx.drop_on(column_id, None);
    };

    let column_class = move || {
        if is_drag_over.get() {
            "kanban-column drag-over"
        } else {
            "kanban-column"
        }
    };

    view! {
        <div
            class=column_class
            on:dragover=on_dragover
            on:dragleave=move |_| set_is_drag_over.set(false)
            on:drop=on_drop
        >
            <div class=format!("column-header {color_class}")>
                <h2 class="column-title">
                    {column.title.clone()} <span class="card-count">{card_count}</span>
                </h2>
                <button
                    class="add-column-button"
                    title="Add card"
                    on:click=move |_| ctx.open_add_modal(column_id)
                >
                    "+"
                </button>
            </div>

            <div class="column-content">
                <button class="add-card-button" on:click=move |_| ctx.open_add_modal(column_id)>
                    "+ Add Card"
                </button>

                <div class="cards-list">
                    {column
                        .cards
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(index, card)| {
                            view! { <KanbanCard card=card column_id=column_id index=index /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
