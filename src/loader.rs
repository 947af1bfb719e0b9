//! Lazy Child Loader
//!
//! Simulated backend fetch for the tree widget. Always succeeds after a
//! fixed delay and returns freshly generated demo children keyed under
//! the parent id.

use gloo_timers::future::TimeoutFuture;

use crate::models::{TreeNode, DEFAULT_NODE_LABEL};

/// Simulated network latency
const LOAD_DELAY_MS: u32 = 500;

/// Fetch the children of a node. Produces 2-5 children with ids
/// `{parent}-1`, `{parent}-2`, ... each with a ~70% chance of carrying
/// further unloaded children.
pub async fn load_children(parent_id: &str) -> Vec<TreeNode> {
    TimeoutFuture::new(LOAD_DELAY_MS).await;

    let count = (js_sys::Math::random() * 4.0).floor() as usize + 2;
    (1..=count)
        .map(|i| TreeNode {
            id: format!("{parent_id}-{i}"),
            label: DEFAULT_NODE_LABEL.to_string(),
            children: None,
            is_expanded: false,
            has_unloaded_children: js_sys::Math::random() > 0.3,
        })
        .collect()
}

/// Millisecond timestamp used to mint unique ids for user-created nodes
/// and cards
pub fn timestamp_ms() -> u64 {
    js_sys::Date::now() as u64
}
