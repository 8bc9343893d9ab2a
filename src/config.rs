use std::io;

use crate::delay::DelayBounds;

/// Argument order expected after the program name.
pub const USAGE_ARGS: &str =
    "<min_customer_delay_ms> <max_customer_delay_ms> <min_register_delay_ms> <max_register_delay_ms>";

/// Delay configuration supplied on the command line: one pair of bounds for
/// the customer (producer) and one for the register (consumer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub customer_delay: DelayBounds,
    pub register_delay: DelayBounds,
}

impl SimConfig {
    /// Builds the configuration from the arguments after the program name.
    /// Exactly four are required; anything else is an `InvalidInput` error.
    ///
    /// Parsing is lenient: a non-numeric argument degrades to zero rather
    /// than failing the run.
    pub fn from_args(args: &[String]) -> io::Result<Self> {
        if args.len() != 4 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("expected 4 delay bounds, got {}", args.len()),
            ));
        }
        let ms = |arg: &String| arg.parse::<i64>().unwrap_or(0);
        Ok(Self {
            customer_delay: DelayBounds::new(ms(&args[0]), ms(&args[1])),
            register_delay: DelayBounds::new(ms(&args[2]), ms(&args[3])),
        })
    }
}
