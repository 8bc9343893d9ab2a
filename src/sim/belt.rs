use std::io;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_utils::CachePadded;

use super::semaphore::Semaphore;
use crate::delay::random_between;

/// Sizing of the conveyor belt and the run built on top of it.
///
/// `items_per_round` must not exceed `capacity`: the tasks address slots by
/// direct per-round index, with no wraparound, so the item index doubles as
/// the slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeltParams {
    pub capacity: usize,
    pub rounds: u32,
    pub items_per_round: usize,
}

impl BeltParams {
    pub fn new(capacity: usize, rounds: u32, items_per_round: usize) -> io::Result<Self> {
        if capacity == 0 || rounds == 0 || items_per_round == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "belt parameters must be positive \
                     (capacity: {capacity}, rounds: {rounds}, items per round: {items_per_round})"
                ),
            ));
        }
        if items_per_round > capacity {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "items per round ({items_per_round}) exceeds belt capacity ({capacity}); \
                     slots are addressed by item index within a round"
                ),
            ));
        }
        Ok(Self {
            capacity,
            rounds,
            items_per_round,
        })
    }

    /// Draws a random run shape: capacity in `[5, 15)`, rounds in `[1, 10)`,
    /// items per round in `[1, 20)` clamped to the drawn capacity so the
    /// result always validates.
    pub fn random() -> Self {
        let capacity = random_between(5, 15) as usize;
        let rounds = random_between(1, 10) as u32;
        let items_per_round = (random_between(1, 20) as usize).min(capacity);
        Self {
            capacity,
            rounds,
            items_per_round,
        }
    }
}

/// The belt both tasks share: a fixed slot array plus the three permit
/// counters that make up the whole synchronization protocol.
///
/// ### Concurrency design
/// - **`free_slots`** starts at `capacity`; the producer takes a permit before
///   writing a slot, the consumer returns one after reading it.
/// - **`ready_items`** starts at 0; the producer releases one per published
///   item, the consumer takes one before reading.
/// - **`round_gate`** starts at 0; the consumer releases it once per fully
///   drained round, and the producer takes it before moving to the next round.
///
/// No lock guards the slots themselves. The permit accounting guarantees the
/// two tasks never touch the same index between a matching produce/consume,
/// and the Release store / Acquire load pair carries the value across threads.
pub struct ConveyorBelt {
    slots: Box<[AtomicU64]>,
    rounds: u32,
    items_per_round: usize,
    free_slots: CachePadded<Semaphore>,
    ready_items: CachePadded<Semaphore>,
    round_gate: CachePadded<Semaphore>,
}

impl ConveyorBelt {
    pub fn new(params: BeltParams) -> Self {
        let slots = (0..params.capacity)
            .map(|_| AtomicU64::new(0))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            slots,
            rounds: params.rounds,
            items_per_round: params.items_per_round,
            free_slots: CachePadded::new(Semaphore::new(params.capacity)),
            ready_items: CachePadded::new(Semaphore::new(0)),
            round_gate: CachePadded::new(Semaphore::new(0)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn items_per_round(&self) -> usize {
        self.items_per_round
    }

    /// Publishes `value` into the slot at `index`.
    /// Caller must hold a `free_slots` permit covering this write.
    pub fn put(&self, index: usize, value: u64) {
        self.slots[index].store(value, Ordering::Release);
    }

    /// Reads the slot at `index`.
    /// Caller must hold a `ready_items` permit covering this read.
    pub fn take(&self, index: usize) -> u64 {
        self.slots[index].load(Ordering::Acquire)
    }

    pub fn free_slots(&self) -> &Semaphore {
        &self.free_slots
    }

    pub fn ready_items(&self) -> &Semaphore {
        &self.ready_items
    }

    pub fn round_gate(&self) -> &Semaphore {
        &self.round_gate
    }
}
