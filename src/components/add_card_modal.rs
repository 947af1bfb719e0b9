//! Add Card Modal Component
//!
//! Overlay dialog for creating a card in a given column. Enter submits,
//! Escape or clicking the overlay cancels.

use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::components::BoardCtx;
use crate::models::ColumnId;

#[component]
pub fn AddCardModal(column_id: ColumnId) -> impl IntoView {
    let ctx = use_context::<BoardCtx>().expect("BoardCtx should be provided");

    let (title, set_title) = signal(String::new());

    let submit = move || {
        let value = title.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        ctx.add_card(column_id, &value);
        ctx.close_add_modal();
    };
    let submit_key = submit.clone();

    view! {
        <div class="modal-overlay" on:click=move |_| ctx.close_add_modal()>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add New Card"</h2>
                <input
                    type="text"
                    class="modal-input"
                    placeholder="Enter card title..."
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit_key();
                        } else if ev.key() == "Escape" {
                            ctx.close_add_modal();
                        }
                    }
                    autofocus
                />
                <div class="modal-actions">
                    <button class="modal-button cancel-button" on:click=move |_| ctx.close_add_modal()>
                        "Cancel"
                    </button>
                    <button class="modal-button submit-button" on:click=move |_| submit()>
                        "Add Card"
                    </button>
                </div>
            </div>
        </div>
    }
}
