//! UI Components
//!
//! Leptos components for the two widgets and the home page.

mod home_page;
mod tree_view;
mod tree_node;
mod kanban_board;
mod kanban_column;
mod kanban_card;
mod add_card_modal;

pub use home_page::HomePage;
pub use tree_view::{TreeCtx, TreeView};
pub use tree_node::TreeNodeItem;
pub use kanban_board::{BoardCtx, DraggedCard, KanbanBoard};
pub use kanban_column::KanbanColumn;
pub use kanban_card::KanbanCard;
pub use add_card_modal::AddCardModal;
