use std::sync::atomic::{AtomicU32, Ordering};

const UNSET: u32 = 0;

/// Single-assignment cell for the winning player's id. The first
/// successful `claim` wins the compare-and-set; every later or concurrent
/// claim is a silent no-op. Player ids start at 1, so 0 marks "unset".
#[derive(Debug, Default)]
pub struct WinnerCell {
    cell: AtomicU32,
}

impl WinnerCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id` only if no winner has been recorded yet. Returns
    /// whether this call was the one that decided the game.
    pub fn claim(&self, id: u32) -> bool {
        debug_assert_ne!(id, UNSET);
        self.cell
            .compare_exchange(UNSET, id, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn get(&self) -> Option<u32> {
        match self.cell.load(Ordering::Acquire) {
            UNSET => None,
            id => Some(id),
        }
    }

    pub fn is_decided(&self) -> bool {
        self.get().is_some()
    }
}
