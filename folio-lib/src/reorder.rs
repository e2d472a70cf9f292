//! Row reordering from drag gestures.
//!
//! Every input device reduces to the same operation: move one key to the
//! position currently held by another. Pointer and touch sensors report a
//! [`DragEnd`]; the keyboard sensor picks the neighbouring row with
//! [`step_target`].

/// A finished drag: the dragged row and the row it was dropped on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd<K> {
    pub active: K,
    /// `None` when dropped outside any row.
    pub over: Option<K>,
}

impl<K> DragEnd<K> {
    pub fn new(active: K, over: Option<K>) -> Self {
        Self { active, over }
    }
}

/// Keyboard reorder step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardMove {
    Up,
    Down,
}

/// Returns `order` with `dragged` moved to `target`'s position.
///
/// Single-element move, not a swap: rows between the two positions shift by
/// one and every other relative order is kept. If the keys are equal, or
/// either is missing, `order` is returned unchanged.
///
/// # Example
///
/// ```
/// use folio_lib::reorder::reorder;
///
/// assert_eq!(reorder(&[1, 2, 3, 4], &4, &2), vec![1, 4, 2, 3]);
/// assert_eq!(reorder(&[1, 2, 3, 4], &1, &3), vec![2, 3, 1, 4]);
/// ```
pub fn reorder<K: Clone + PartialEq>(order: &[K], dragged: &K, target: &K) -> Vec<K> {
    let mut out = order.to_vec();
    if let Some((from, to)) = positions(order, dragged, target) {
        move_item(&mut out, from, to);
    }
    out
}

/// Returns the key a keyboard step should drop `key` onto.
///
/// `None` at either end of `order` or when `key` is missing.
pub fn step_target<K: Clone + PartialEq>(order: &[K], key: &K, step: KeyboardMove) -> Option<K> {
    let index = order.iter().position(|k| k == key)?;
    let target = match step {
        KeyboardMove::Up => index.checked_sub(1)?,
        KeyboardMove::Down => index + 1,
    };
    order.get(target).cloned()
}

/// Resolves the `(from, to)` indices of a move, or `None` for a no-op.
pub(crate) fn positions<K: PartialEq>(order: &[K], dragged: &K, target: &K) -> Option<(usize, usize)> {
    if dragged == target {
        return None;
    }
    let from = order.iter().position(|k| k == dragged)?;
    let to = order.iter().position(|k| k == target)?;
    Some((from, to))
}

/// Moves the element at `from` so it ends up at index `to`.
pub(crate) fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}
