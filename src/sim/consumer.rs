use std::sync::Arc;
use std::thread;

use super::belt::ConveyorBelt;
use crate::delay::DelayBounds;

/// The register side of the checkout line: drains belt slots round by round,
/// blocking whenever no item is ready.
pub struct Consumer {
    belt: Arc<ConveyorBelt>,
    delay: DelayBounds,
}

impl Consumer {
    pub fn new(belt: Arc<ConveyorBelt>, delay: DelayBounds) -> Self {
        Self { belt, delay }
    }

    /// Runs every round to completion. Returns every consumed value in
    /// consumption order, which callers can check against the producer's
    /// sequence.
    ///
    /// Releasing the round gate once per drained round is what lets the
    /// producer enter its next round; the permits for items themselves are
    /// returned one by one as slots free up.
    pub fn run(self) -> Vec<u64> {
        let total = self.belt.rounds() as usize * self.belt.items_per_round();
        let mut consumed = Vec::with_capacity(total);
        for round in 1..=self.belt.rounds() {
            println!("\t\t[consumer] round {round} start");
            for index in 0..self.belt.items_per_round() {
                self.belt.ready_items().acquire();
                let value = self.belt.take(index);
                thread::sleep(self.delay.sample());
                println!("\t\t[consumer] slot {index} -> {value}");
                self.belt.free_slots().release();
                consumed.push(value);
            }
            self.belt.round_gate().release();
        }
        consumed
    }
}
