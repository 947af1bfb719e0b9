//! Kanban Board Component
//!
//! Owns the columns snapshot, the dragged card, and the add-card modal
//! target; exposes the board operations to columns and cards via
//! context.

use leptos::prelude::*;

use crate::board;
use crate::components::{AddCardModal, KanbanColumn};
use crate::loader;
use crate::models::{initial_board, Column, ColumnId};

/// The card currently being dragged and where it came from
#[derive(Clone, Debug, PartialEq)]
pub struct DraggedCard {
    pub card_id: String,
    pub source: ColumnId,
}

/// Board widget signals and operations, provided via context
#[derive(Clone, Copy)]
pub struct BoardCtx {
    set_columns: WriteSignal<Vec<Column>>,
    pub dragged: ReadSignal<Option<DraggedCard>>,
    set_dragged: WriteSignal<Option<DraggedCard>>,
    set_modal_target: WriteSignal<Option<ColumnId>>,
}

impl BoardCtx {
    pub fn open_add_modal(&self, column_id: ColumnId) {
        self.set_modal_target.set(Some(column_id));
    }

    pub fn close_add_modal(&self) {
        self.set_modal_target.set(None);
    }

    /// Append a new card with a fresh timestamp id; blank titles are
    /// ignored by the engine
    pub fn add_card(&self, column_id: ColumnId, title: &str) {
        let id = format!("card-{}", loader::timestamp_ms());
        self.set_columns
            .update(|cols| *cols = board::add_card(cols, column_id, &id, title));
    }

    pub fn delete_card(&self, column_id: ColumnId, card_id: &str) {
        self.set_columns
            .update(|cols| *cols = board::delete_card(cols, column_id, card_id));
    }

    pub fn edit_card(&self, column_id: ColumnId, card_id: &str, new_title: &str) {
        self.set_columns
            .update(|cols| *cols = board::edit_card(cols, column_id, card_id, new_title));
    }

    pub fn start_drag(&self, card_id: String, source: ColumnId) {
        self.set_dragged.set(Some(DraggedCard { card_id, source }));
    }

    pub fn end_drag(&self) {
        self.set_dragged.set(None);
    }

    /// Commit a drop into the target column. `target_index` comes from
    /// the hovered card's midpoint; `None` appends at the end.
    pub fn drop_on(&self, target: ColumnId, target_index: Option<usize>) {
        let Some(dragged) = self.dragged.get_untracked() else {
            return;
        };
        self.set_dragged.set(None);
        web_sys::console::log_1(
            &format!(
                "[DND] Drop: card={}, source={}, target={}, index={target_index:?}",
                dragged.card_id,
                dragged.source.as_str(),
                target.as_str()
            )
            .into(),
        );
        self.set_columns.update(|cols| {
            *cols = board::move_card(cols, &dragged.card_id, dragged.source, target, target_index)
        });
    }
}

/// Board widget: header plus the three fixed columns
#[component]
pub fn KanbanBoard(on_back: Callback<()>) -> impl IntoView {
    let (columns, set_columns) = signal(initial_board());
    let (dragged, set_dragged) = signal(None::<DraggedCard>);
    let (modal_target, set_modal_target) = signal(None::<ColumnId>);

    let ctx = BoardCtx {
        set_columns,
        dragged,
        set_dragged,
        set_modal_target,
    };
    provide_context(ctx);

    view! {
        <div class="kanban-board-container">
            <div class="kanban-board-header">
                <button class="back-button" on:click=move |_| on_back.run(())>
                    "← Back"
                </button>
                <h1>"Kanban Board"</h1>
            </div>

            <div class="kanban-board">
                <For
                    each=move || columns.get()
                    key=|col| {
                        // Key over every rendered field so edits and moves
                        // re-render the column
                        (
                            col.id,
                            col.cards
                                .iter()
                                .map(|card| (card.id.clone(), card.title.clone()))
                                .collect::<Vec<_>>(),
                        )
                    }
                    children=move |col| view! { <KanbanColumn column=col /> }
                />
            </div>

            <p class="board-count">
                {move || format!("{} cards", board::card_count(&columns.get()))}
            </p>

            {move || modal_target.get().map(|column_id| view! { <AddCardModal column_id=column_id /> })}
        </div>
    }
}
