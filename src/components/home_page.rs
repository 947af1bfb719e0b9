//! Home Page Component
//!
//! Landing page with one selection card per widget.

use leptos::prelude::*;

use crate::app::View;

#[component]
pub fn HomePage(on_select: Callback<View>) -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="home-container">
                <h1 class="home-title">"Smart Todo Management"</h1>
                <p class="home-subtitle">"Choose a component to explore"</p>

                <div class="card-container">
                    <div class="selection-card" on:click=move |_| on_select.run(View::Tree)>
                        <div class="card-icon tree-icon">"🌳"</div>
                        <h2 class="card-title">"Tree View Component"</h2>
                        <p class="card-description">
                            "Hierarchical tree structure with expand/collapse, drag & drop, \
                             lazy loading, and inline editing capabilities."
                        </p>
                        <button class="card-button">"Explore Tree View"</button>
                    </div>

                    <div class="selection-card" on:click=move |_| on_select.run(View::Kanban)>
                        <div class="card-icon kanban-icon">"📋"</div>
                        <h2 class="card-title">"Kanban Board"</h2>
                        <p class="card-description">
                            "Project management board with drag & drop cards, \
                             multiple columns, and inline editing features."
                        </p>
                        <button class="card-button">"Explore Kanban Board"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
