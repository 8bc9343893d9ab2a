use std::sync::Arc;
use std::thread;

use super::belt::ConveyorBelt;
use crate::delay::DelayBounds;

/// The customer side of the checkout line: fills belt slots round by round,
/// blocking whenever the belt is full.
///
/// The item counter is owned by the producer and is never reset between
/// rounds, so values form one monotone sequence across the whole run.
pub struct Producer {
    belt: Arc<ConveyorBelt>,
    delay: DelayBounds,
    sequence: u64,
}

impl Producer {
    pub fn new(belt: Arc<ConveyorBelt>, delay: DelayBounds) -> Self {
        Self {
            belt,
            delay,
            sequence: 0,
        }
    }

    /// Runs every round to completion. Returns the total number of items
    /// produced, which is also the last sequence value written.
    ///
    /// The round gate keeps rounds strictly ordered: round N+1 does not start
    /// until the consumer has fully drained round N.
    pub fn run(mut self) -> u64 {
        for round in 1..=self.belt.rounds() {
            println!("[producer] round {round} start");
            for index in 0..self.belt.items_per_round() {
                self.belt.free_slots().acquire();
                thread::sleep(self.delay.sample());
                self.sequence += 1;
                self.belt.put(index, self.sequence);
                println!("[producer] slot {index} <- {}", self.sequence);
                self.belt.ready_items().release();
            }
            self.belt.round_gate().acquire();
        }
        self.sequence
    }
}
