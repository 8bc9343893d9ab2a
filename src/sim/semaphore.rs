use parking_lot::{Condvar, Mutex};

/// A counting semaphore built on a mutex-guarded permit count and a condvar.
///
/// `acquire` suspends the calling thread on the condvar until a permit is
/// available; there is no busy-waiting. `release` wakes at most one waiter.
/// The count can never go negative by construction.
pub struct Semaphore {
    permits: Mutex<usize>,
    available: Condvar,
}

impl Semaphore {
    pub fn new(initial: usize) -> Self {
        Self {
            permits: Mutex::new(initial),
            available: Condvar::new(),
        }
    }

    /// Blocks until the permit count is positive, then takes one permit.
    pub fn acquire(&self) {
        let mut permits = self.permits.lock();
        // Spurious wakeups are fine; the count is rechecked on every wake.
        while *permits == 0 {
            self.available.wait(&mut permits);
        }
        *permits -= 1;
    }

    /// Takes a permit if one is available right now.
    /// Returns `false` without blocking otherwise.
    pub fn try_acquire(&self) -> bool {
        let mut permits = self.permits.lock();
        if *permits == 0 {
            return false;
        }
        *permits -= 1;
        true
    }

    /// Returns one permit and wakes a single blocked `acquire`, if any.
    pub fn release(&self) {
        let mut permits = self.permits.lock();
        *permits += 1;
        drop(permits);
        self.available.notify_one();
    }

    /// Current permit count. Snapshot only; stale as soon as it is returned.
    pub fn permits(&self) -> usize {
        *self.permits.lock()
    }
}
