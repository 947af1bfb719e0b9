//! Widget Demo App
//!
//! View shell: switches between the home page and the two widgets.
//! The widgets share no state; each owns its snapshot locally.

use leptos::prelude::*;

use crate::components::{HomePage, KanbanBoard, TreeView};

/// Which screen is mounted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Tree,
    Kanban,
}

#[component]
pub fn App() -> impl IntoView {
    let (current_view, set_current_view) = signal(View::Home);

    let go_home = Callback::new(move |_: ()| set_current_view.set(View::Home));
    let select_view = Callback::new(move |view: View| set_current_view.set(view));

    view! {
        <div class="app">
            {move || match current_view.get() {
                View::Tree => view! { <TreeView on_back=go_home /> }.into_any(),
                View::Kanban => view! { <KanbanBoard on_back=go_home /> }.into_any(),
                View::Home => view! { <HomePage on_select=select_view /> }.into_any(),
            }}
        </div>
    }
}
