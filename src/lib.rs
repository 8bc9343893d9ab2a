// Module layout: one file per concern, re-exports for stable paths.
pub mod sim {
    pub mod belt;
    pub mod consumer;
    pub mod producer;
    pub mod semaphore;
    pub use belt::{BeltParams, ConveyorBelt}; // re-export for stable path
    pub use consumer::Consumer;
    pub use producer::Producer;
    pub use semaphore::Semaphore;
}

pub mod config;
pub mod delay;
