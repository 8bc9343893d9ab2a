use std::env;
use std::process;
use std::sync::Arc;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use checkout_sim::config::{SimConfig, USAGE_ARGS};
use checkout_sim::sim::{BeltParams, Consumer, ConveyorBelt, Producer};

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = match SimConfig::from_args(&args[1..]) {
        Ok(config) => config,
        Err(_) => {
            eprintln!("Usage: {} {USAGE_ARGS}", args[0]);
            process::exit(1);
        }
    };

    // Seed once at startup; the run shape below depends on it.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    fastrand::seed(seed);

    let params = BeltParams::random();
    println!("rounds: {}", params.rounds);
    println!("belt capacity: {}", params.capacity);
    println!("items per round: {}", params.items_per_round);

    let belt = Arc::new(ConveyorBelt::new(params));
    let start = Instant::now();

    let producer = Producer::new(Arc::clone(&belt), config.customer_delay);
    let producer = match thread::Builder::new()
        .name("producer".into())
        .spawn(move || producer.run())
    {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("error: cannot create producer: {e}");
            process::exit(1);
        }
    };

    let consumer = Consumer::new(Arc::clone(&belt), config.register_delay);
    let consumer = match thread::Builder::new()
        .name("consumer".into())
        .spawn(move || consumer.run())
    {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("error: cannot create consumer: {e}");
            process::exit(1);
        }
    };

    let produced = match producer.join() {
        Ok(total) => total,
        Err(_) => {
            eprintln!("error: producer panicked");
            process::exit(1);
        }
    };
    let consumed = match consumer.join() {
        Ok(values) => values,
        Err(_) => {
            eprintln!("error: consumer panicked");
            process::exit(1);
        }
    };

    println!("produced {produced} items, consumed {}", consumed.len());
    println!("execution time: {:.9}s", start.elapsed().as_secs_f64());
}
