//! Board Engine
//!
//! Pure snapshot functions over the fixed column set. Mutations rebuild
//! the `Vec<Column>`; missing cards, unknown columns, and blank titles
//! all leave the snapshot unchanged.

use crate::models::{Card, Column, ColumnId};

/// Append a new card to a column. Blank titles (after trimming) are
/// ignored.
pub fn add_card(columns: &[Column], column_id: ColumnId, id: &str, title: &str) -> Vec<Column> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return columns.to_vec();
    }
    columns
        .iter()
        .map(|col| {
            if col.id == column_id {
                let mut cards = col.cards.clone();
                cards.push(Card::new(id, trimmed));
                Column {
                    cards,
                    ..col.clone()
                }
            } else {
                col.clone()
            }
        })
        .collect()
}

/// Remove a card from a column
pub fn delete_card(columns: &[Column], column_id: ColumnId, card_id: &str) -> Vec<Column> {
    columns
        .iter()
        .map(|col| {
            if col.id == column_id {
                Column {
                    cards: col.cards.iter().filter(|c| c.id != card_id).cloned().collect(),
                    ..col.clone()
                }
            } else {
                col.clone()
            }
        })
        .collect()
}

/// Replace a card's title in place. Blank titles are ignored.
pub fn edit_card(
    columns: &[Column],
    column_id: ColumnId,
    card_id: &str,
    new_title: &str,
) -> Vec<Column> {
    let trimmed = new_title.trim();
    if trimmed.is_empty() {
        return columns.to_vec();
    }
    columns
        .iter()
        .map(|col| {
            if col.id == column_id {
                Column {
                    cards: col
                        .cards
                        .iter()
                        .map(|card| {
                            if card.id == card_id {
                                Card {
                                    title: trimmed.to_string(),
                                    ..card.clone()
                                }
                            } else {
                                card.clone()
                            }
                        })
                        .collect(),
                    ..col.clone()
                }
            } else {
                col.clone()
            }
        })
        .collect()
}

/// Move a card between or within columns.
///
/// Same source and target is a reorder: the card is removed and
/// reinserted at `target_index` within the already-filtered sequence.
/// Across columns the card leaves the source sequence and lands in the
/// target at `target_index`. A missing index means "append"; oversized
/// indices are clamped to the end.
pub fn move_card(
    columns: &[Column],
    card_id: &str,
    source: ColumnId,
    target: ColumnId,
    target_index: Option<usize>,
) -> Vec<Column> {
    let Some(card) = columns
        .iter()
        .find(|col| col.id == source)
        .and_then(|col| col.cards.iter().find(|c| c.id == card_id))
        .cloned()
    else {
        return columns.to_vec();
    };

    columns
        .iter()
        .map(|col| {
            if source == target {
                if col.id != target {
                    return col.clone();
                }
                let mut cards: Vec<Card> =
                    col.cards.iter().filter(|c| c.id != card_id).cloned().collect();
                let at = target_index.unwrap_or(cards.len()).min(cards.len());
                cards.insert(at, card.clone());
                Column {
                    cards,
                    ..col.clone()
                }
            } else if col.id == source {
                Column {
                    cards: col.cards.iter().filter(|c| c.id != card_id).cloned().collect(),
                    ..col.clone()
                }
            } else if col.id == target {
                let mut cards = col.cards.clone();
                let at = target_index.unwrap_or(cards.len()).min(cards.len());
                cards.insert(at, card.clone());
                Column {
                    cards,
                    ..col.clone()
                }
            } else {
                col.clone()
            }
        })
        .collect()
}

/// Total number of cards across all columns
pub fn card_count(columns: &[Column]) -> usize {
    columns.iter().map(|col| col.cards.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::initial_board;

    fn column(id: ColumnId, cards: &[(&str, &str)]) -> Column {
        Column {
            id,
            title: id.title().to_string(),
            cards: cards.iter().map(|(id, title)| Card::new(*id, *title)).collect(),
        }
    }

    fn board() -> Vec<Column> {
        vec![
            column(ColumnId::Todo, &[("a", "A"), ("b", "B")]),
            column(ColumnId::InProgress, &[("c", "C")]),
            column(ColumnId::Done, &[]),
        ]
    }

    fn card_ids(columns: &[Column], id: ColumnId) -> Vec<&str> {
        columns
            .iter()
            .find(|col| col.id == id)
            .map(|col| col.cards.iter().map(|c| c.id.as_str()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn add_card_appends_trimmed_title() {
        let after = add_card(&board(), ColumnId::Done, "x", "  New task  ");
        assert_eq!(card_ids(&after, ColumnId::Done), vec!["x"]);
        assert_eq!(after[2].cards[0].title, "New task");
    }

    #[test]
    fn add_card_with_blank_title_is_a_no_op() {
        let before = board();
        assert_eq!(add_card(&before, ColumnId::Todo, "x", "   "), before);
    }

    #[test]
    fn delete_card_removes_only_the_matching_card() {
        let after = delete_card(&board(), ColumnId::Todo, "a");
        assert_eq!(card_ids(&after, ColumnId::Todo), vec!["b"]);
        assert_eq!(card_count(&after), card_count(&board()) - 1);
    }

    #[test]
    fn delete_card_in_wrong_column_changes_nothing() {
        let before = board();
        assert_eq!(delete_card(&before, ColumnId::Done, "a"), before);
    }

    #[test]
    fn edit_card_replaces_title_in_place() {
        let after = edit_card(&board(), ColumnId::InProgress, "c", "Renamed");
        assert_eq!(after[1].cards[0].title, "Renamed");
        assert_eq!(card_ids(&after, ColumnId::InProgress), vec!["c"]);
    }

    #[test]
    fn edit_card_with_blank_title_keeps_old_title() {
        let before = board();
        assert_eq!(edit_card(&before, ColumnId::Todo, "a", "  "), before);
    }

    #[test]
    fn same_column_move_reorders_without_changing_the_set() {
        // todo=[A,B], move A to index 1 -> [B,A]
        let after = move_card(&board(), "a", ColumnId::Todo, ColumnId::Todo, Some(1));
        assert_eq!(card_ids(&after, ColumnId::Todo), vec!["b", "a"]);
        assert_eq!(card_count(&after), card_count(&board()));
    }

    #[test]
    fn same_column_move_defaults_to_end() {
        let after = move_card(&board(), "a", ColumnId::Todo, ColumnId::Todo, None);
        assert_eq!(card_ids(&after, ColumnId::Todo), vec!["b", "a"]);
    }

    #[test]
    fn cross_column_move_transfers_exactly_one_card() {
        let before = board();
        let after = move_card(&before, "a", ColumnId::Todo, ColumnId::InProgress, Some(0));
        assert_eq!(card_ids(&after, ColumnId::Todo), vec!["b"]);
        assert_eq!(card_ids(&after, ColumnId::InProgress), vec!["a", "c"]);
        assert_eq!(card_count(&after), card_count(&before));
    }

    #[test]
    fn cross_column_move_clamps_oversized_index() {
        let after = move_card(&board(), "a", ColumnId::Todo, ColumnId::Done, Some(99));
        assert_eq!(card_ids(&after, ColumnId::Done), vec!["a"]);
    }

    #[test]
    fn move_of_unknown_card_is_a_no_op() {
        let before = board();
        assert_eq!(
            move_card(&before, "ghost", ColumnId::Todo, ColumnId::Done, None),
            before
        );
        // Card exists but not in the claimed source column
        assert_eq!(
            move_card(&before, "c", ColumnId::Todo, ColumnId::Done, None),
            before
        );
    }

    #[test]
    fn initial_board_has_the_three_fixed_columns() {
        let columns = initial_board();
        let ids: Vec<ColumnId> = columns.iter().map(|col| col.id).collect();
        assert_eq!(ids, ColumnId::ALL);
        assert_eq!(card_count(&columns), 8);
    }
}
