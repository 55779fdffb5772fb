//! Ordering primitives for columns and rows.
//!
//! These operate on plain slices/vectors so they can be tested without a
//! table. Every function is a no-op when the move would leave the list.

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Towards index 0 (left for columns, up for rows).
    Back,
    /// Towards the end (right for columns, down for rows).
    Forward,
}

/// Swap the item at `index` with its neighbour in direction `step`.
///
/// Returns the item's new index, or `None` when `index` or the neighbour is
/// out of bounds.
pub fn swap_adjacent<T>(items: &mut [T], index: usize, step: Step) -> Option<usize> {
    if index >= items.len() {
        return None;
    }
    let target = match step {
        Step::Back => index.checked_sub(1)?,
        Step::Forward => index + 1,
    };
    if target >= items.len() {
        return None;
    }
    items.swap(index, target);
    Some(target)
}

/// Move a block of rows one step past their neighbour.
///
/// `order` is the current row order. `acting` is the row the action was
/// invoked on; `in_block` says which rows travel with it (it must hold for
/// `acting`). The block keeps its relative order and is re-inserted as a
/// contiguous run immediately before (`Step::Back`) or after
/// (`Step::Forward`) the nearest row beyond `acting` that is not part of the
/// block.
///
/// Returns the whole block in order, or an empty vector when there is no
/// such neighbour. Block members already on the near side of the anchor are
/// included even if their index does not change.
pub fn move_block<K, F>(order: &mut Vec<K>, acting: &K, step: Step, in_block: F) -> Vec<K>
where
    K: Clone + PartialEq,
    F: Fn(&K) -> bool,
{
    let Some(acting_index) = order.iter().position(|k| k == acting) else {
        return Vec::new();
    };

    let anchor = match step {
        Step::Back => order[..acting_index]
            .iter()
            .rev()
            .find(|k| !in_block(k))
            .cloned(),
        Step::Forward => order[acting_index + 1..]
            .iter()
            .find(|k| !in_block(k))
            .cloned(),
    };
    let Some(anchor) = anchor else {
        return Vec::new();
    };

    let (block, mut rest): (Vec<K>, Vec<K>) = order.drain(..).partition(|k| in_block(k));

    // The anchor is never in the block, so it is always found in `rest`.
    let anchor_index = rest.iter().position(|k| *k == anchor).unwrap_or(0);
    let insert_at = match step {
        Step::Back => anchor_index,
        Step::Forward => anchor_index + 1,
    };
    let tail = rest.split_off(insert_at);
    rest.extend(block.iter().cloned());
    rest.extend(tail);
    *order = rest;
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_right_then_left_restores() {
        let mut columns = vec!["A", "B", "C"];
        assert_eq!(swap_adjacent(&mut columns, 0, Step::Forward), Some(1));
        assert_eq!(columns, vec!["B", "A", "C"]);
        assert_eq!(swap_adjacent(&mut columns, 1, Step::Back), Some(0));
        assert_eq!(columns, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_swap_at_edges_is_noop() {
        let mut columns = vec!["A", "B", "C"];
        assert_eq!(swap_adjacent(&mut columns, 0, Step::Back), None);
        assert_eq!(swap_adjacent(&mut columns, 2, Step::Forward), None);
        assert_eq!(swap_adjacent(&mut columns, 7, Step::Back), None);
        assert_eq!(columns, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_move_single_row_up_and_down() {
        let mut rows = vec![1, 2, 3];
        assert_eq!(move_block(&mut rows, &2, Step::Back, |k| *k == 2), vec![2]);
        assert_eq!(rows, vec![2, 1, 3]);
        assert_eq!(move_block(&mut rows, &2, Step::Forward, |k| *k == 2), vec![2]);
        assert_eq!(rows, vec![1, 2, 3]);
    }

    #[test]
    fn test_move_first_up_and_last_down_are_noops() {
        let mut rows = vec![1, 2, 3];
        assert!(move_block(&mut rows, &1, Step::Back, |k| *k == 1).is_empty());
        assert!(move_block(&mut rows, &3, Step::Forward, |k| *k == 3).is_empty());
        assert_eq!(rows, vec![1, 2, 3]);
    }

    #[test]
    fn test_scattered_block_gathers_above_neighbour() {
        let mut rows = vec![1, 2, 3];
        let selected = |k: &i32| *k == 1 || *k == 3;
        assert_eq!(move_block(&mut rows, &3, Step::Back, selected), vec![1, 3]);
        assert_eq!(rows, vec![1, 3, 2]);
    }

    #[test]
    fn test_contiguous_block_moves_down() {
        let mut rows = vec![1, 2, 3, 4];
        let selected = |k: &i32| *k == 1 || *k == 2;
        assert_eq!(move_block(&mut rows, &1, Step::Forward, selected), vec![1, 2]);
        assert_eq!(rows, vec![3, 1, 2, 4]);
    }
}
