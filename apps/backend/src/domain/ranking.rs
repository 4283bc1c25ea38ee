//! Ranking recomputation shared by every player store.

use crate::entities::players;

/// Anything that carries points and a ranking position.
pub trait Ranked {
    fn points(&self) -> i32;
    fn set_position(&mut self, position: i32);
}

impl Ranked for players::Model {
    fn points(&self) -> i32 {
        self.points
    }

    fn set_position(&mut self, position: i32) {
        self.rank = position;
    }
}

/// Sort by points descending and assign positions `1..=n`.
///
/// The sort is stable, so equal points keep the caller's order (stores pass
/// rows in insertion order).
pub fn rerank<T: Ranked>(items: &mut [T]) {
    items.sort_by(|a, b| b.points().cmp(&a.points()));
    for (i, item) in items.iter_mut().enumerate() {
        item.set_position(i as i32 + 1);
    }
}
