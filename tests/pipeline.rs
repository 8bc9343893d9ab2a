use checkout_sim::delay::DelayBounds;
use checkout_sim::sim::{BeltParams, Consumer, ConveyorBelt, Producer};
use std::sync::Arc;
use std::thread;

const NO_DELAY: DelayBounds = DelayBounds { min_ms: 0, max_ms: 0 };

fn run_pipeline(params: BeltParams, customer: DelayBounds, register: DelayBounds) -> (u64, Vec<u64>, Arc<ConveyorBelt>) {
    let belt = Arc::new(ConveyorBelt::new(params));

    let producer = Producer::new(Arc::clone(&belt), customer);
    let producer = thread::Builder::new()
        .name("producer".into())
        .spawn(move || producer.run())
        .unwrap();

    let consumer = Consumer::new(Arc::clone(&belt), register);
    let consumer = thread::Builder::new()
        .name("consumer".into())
        .spawn(move || consumer.run())
        .unwrap();

    let produced = producer.join().unwrap();
    let consumed = consumer.join().unwrap();
    (produced, consumed, belt)
}

#[test]
fn single_round_reads_back_exact_sequence() {
    let params = BeltParams::new(5, 1, 5).unwrap();
    let (produced, consumed, _) = run_pipeline(params, NO_DELAY, NO_DELAY);

    assert_eq!(produced, 5);
    assert_eq!(consumed, vec![1, 2, 3, 4, 5]);
}

#[test]
fn sequence_is_monotone_across_rounds() {
    // The producer's counter is never reset, so three rounds of four items
    // must come out as one unbroken run of 1..=12.
    let params = BeltParams::new(4, 3, 4).unwrap();
    let (produced, consumed, _) = run_pipeline(params, NO_DELAY, NO_DELAY);

    assert_eq!(produced, 12);
    assert_eq!(consumed, (1..=12).collect::<Vec<u64>>());
}

#[test]
fn partial_belt_usage() {
    let params = BeltParams::new(10, 2, 3).unwrap();
    let (produced, consumed, _) = run_pipeline(params, NO_DELAY, NO_DELAY);

    assert_eq!(produced, 6);
    assert_eq!(consumed, (1..=6).collect::<Vec<u64>>());
}

#[test]
fn counts_balance_after_run() {
    let params = BeltParams::new(6, 4, 6).unwrap();
    let (produced, consumed, belt) = run_pipeline(params, NO_DELAY, NO_DELAY);

    assert_eq!(produced, 24);
    assert_eq!(consumed.len(), 24);

    // Every permit returned home: the belt is empty, fully writable, and no
    // round release is left unmatched.
    assert_eq!(belt.free_slots().permits(), belt.capacity());
    assert_eq!(belt.ready_items().permits(), 0);
    assert_eq!(belt.round_gate().permits(), 0);
}

#[test]
fn terminates_with_jittered_delays() {
    // Uneven service times on both sides; the permit protocol alone must
    // keep the run deadlock-free and in order.
    let params = BeltParams::new(5, 3, 5).unwrap();
    let customer = DelayBounds::new(0, 3);
    let register = DelayBounds::new(1, 4);
    let (produced, consumed, _) = run_pipeline(params, customer, register);

    assert_eq!(produced, 15);
    assert_eq!(consumed, (1..=15).collect::<Vec<u64>>());
}

#[test]
fn slow_consumer_backpressures_producer() {
    // Belt smaller than the round: the producer must block on free slots
    // mid-round and still finish in order.
    let params = BeltParams::new(2, 2, 2).unwrap();
    let register = DelayBounds::new(5, 6);
    let (produced, consumed, _) = run_pipeline(params, NO_DELAY, register);

    assert_eq!(produced, 4);
    assert_eq!(consumed, (1..=4).collect::<Vec<u64>>());
}
