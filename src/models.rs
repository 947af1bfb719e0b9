//! Frontend Models
//!
//! Domain data structures for the tree and board widgets, plus seed data.

use serde::{Deserialize, Serialize};

/// Default label given to freshly created and lazily loaded nodes
pub const DEFAULT_NODE_LABEL: &str = "Level A";

/// A node in the tree widget.
///
/// Ids encode the ancestry path as "-"-joined segments ("1-2-1" is a
/// grandchild of "1"). `children: None` together with
/// `has_unloaded_children: true` means the subtree has to be fetched
/// before the node can expand for the first time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    pub is_expanded: bool,
    pub has_unloaded_children: bool,
}

impl TreeNode {
    /// A fresh leaf node with nothing below it
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: None,
            is_expanded: false,
            has_unloaded_children: false,
        }
    }
}

/// A card on the kanban board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Card {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
        }
    }
}

/// The fixed set of board columns. Columns are never created or
/// destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

    pub fn title(self) -> &'static str {
        match self {
            ColumnId::Todo => "Todo",
            ColumnId::InProgress => "In Progress",
            ColumnId::Done => "Done",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnId::Todo => "todo",
            ColumnId::InProgress => "in-progress",
            ColumnId::Done => "done",
        }
    }
}

/// An ordered bucket of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub cards: Vec<Card>,
}

/// Initial tree: a single root with an unloaded subtree
pub fn initial_tree() -> Vec<TreeNode> {
    vec![TreeNode {
        id: "1".to_string(),
        label: DEFAULT_NODE_LABEL.to_string(),
        children: None,
        is_expanded: false,
        has_unloaded_children: true,
    }]
}

/// Initial board: the three fixed columns with demo cards
pub fn initial_board() -> Vec<Column> {
    vec![
        Column {
            id: ColumnId::Todo,
            title: ColumnId::Todo.title().to_string(),
            cards: vec![
                Card::new("1", "Create initial project plan"),
                Card::new("2", "Design landing page"),
                Card::new("3", "Review codebase structure"),
            ],
        },
        Column {
            id: ColumnId::InProgress,
            title: ColumnId::InProgress.title().to_string(),
            cards: vec![
                Card::new("4", "Implement authentication"),
                Card::new("5", "Set up database schema"),
                Card::new("6", "Fix navbar bugs"),
            ],
        },
        Column {
            id: ColumnId::Done,
            title: ColumnId::Done.title().to_string(),
            cards: vec![
                Card::new("7", "Organize project repository"),
                Card::new("8", "Write API documentation"),
            ],
        },
    ]
}
