//! # Product Id Generation
//!
//! Node-partitioned identifiers built from a millisecond timestamp, a node id and a
//! per-millisecond sequence. One [`IdGenerator`] is built per node and shared by
//! every caller on that node (usually behind an `Arc`).
//!
//! An id is composed as
//!
//! ```text
//! ((now - EPOCH_MILLIS) % TIME_WINDOW_MILLIS) + BASE_ID + node_id * MAX_SEQUENCE + sequence
//! ```
//!
//! The timestamp term folds into a 15 minute window, so every id falls in
//! `[BASE_ID, BASE_ID + TIME_WINDOW_MILLIS + MAX_NODES * MAX_SEQUENCE + MAX_SEQUENCE)`.
//!
//! ```rust
//! use product_inventory::id_gen::{IdGenerator, ManualClock, BASE_ID, EPOCH_MILLIS};
//!
//! let clock = ManualClock::new(EPOCH_MILLIS + 42);
//! let generator = IdGenerator::with_clock(1, clock).unwrap();
//!
//! assert_eq!(generator.generate_id().unwrap(), 42 + BASE_ID + 9999);
//! assert_eq!(generator.generate_id().unwrap(), 42 + BASE_ID + 9999 + 1);
//! ```

mod clock;
mod error;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ClockError, ConfigError};

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

/// Number of distinct node ids; valid ids are `0..MAX_NODES`.
pub const MAX_NODES: i64 = 10;
/// Ids per node per millisecond. Also the width of each node's sub-range.
pub const MAX_SEQUENCE: i64 = 9999;
/// Offset above every id handed out by other sources.
pub const BASE_ID: i64 = 100_000;
/// 2022-01-01T00:00:00Z in Unix milliseconds.
pub const EPOCH_MILLIS: i64 = 1_640_995_200_000;
/// Width of the folded timestamp term (15 minutes).
pub const TIME_WINDOW_MILLIS: i64 = 900_000;

#[derive(Debug, Default)]
struct GeneratorState {
    /// `None` until the first id is minted.
    last_timestamp: Option<i64>,
    sequence: i64,
}

/// Mints product ids for one node.
///
/// Every call runs its whole read-modify-write under one mutex, including the
/// busy-wait when a millisecond's sequence space runs out, so concurrent callers
/// are strictly serialized and never see a half-updated state.
#[derive(Debug)]
pub struct IdGenerator<C: Clock = SystemClock> {
    node_id: i64,
    clock: C,
    state: Mutex<GeneratorState>,
}

impl IdGenerator {
    /// Creates a generator for `node_id` reading the system clock.
    pub fn new(node_id: i64) -> Result<Self, ConfigError> {
        Self::with_clock(node_id, SystemClock)
    }
}

impl<C: Clock> IdGenerator<C> {
    /// Creates a generator for `node_id` reading time from `clock`.
    pub fn with_clock(node_id: i64, clock: C) -> Result<Self, ConfigError> {
        if !(0..MAX_NODES).contains(&node_id) {
            return Err(ConfigError::InvalidNodeId { node_id });
        }
        Ok(Self {
            node_id,
            clock,
            state: Mutex::new(GeneratorState::default()),
        })
    }

    pub fn node_id(&self) -> i64 {
        self.node_id
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Timestamp of the most recently minted id, `None` before the first one.
    pub fn last_timestamp(&self) -> Option<i64> {
        self.lock().last_timestamp
    }

    /// Mints the next id.
    ///
    /// Fails with [`ClockError`] when the clock reads earlier than the last minted
    /// timestamp; nothing is changed in that case and later calls proceed once the
    /// clock has recovered.
    pub fn generate_id(&self) -> Result<i64, ClockError> {
        let mut state = self.lock();
        let mut now = self.clock.now_millis();

        match state.last_timestamp {
            Some(last) if now < last => {
                warn!(node_id = self.node_id, now, last, "Clock moved backwards");
                return Err(ClockError { now, last });
            }
            Some(last) if now == last => {
                state.sequence = (state.sequence + 1) % MAX_SEQUENCE;
                if state.sequence == 0 {
                    debug!(node_id = self.node_id, last, "Sequence exhausted, waiting for next millisecond");
                    now = self.wait_past(last);
                }
            }
            _ => state.sequence = 0,
        }

        state.last_timestamp = Some(now);
        Ok(((now - EPOCH_MILLIS) % TIME_WINDOW_MILLIS)
            + BASE_ID
            + self.node_id * MAX_SEQUENCE
            + state.sequence)
    }

    /// Spins until the clock reads strictly later than `last`.
    fn wait_past(&self, last: i64) -> i64 {
        loop {
            let now = self.clock.now_millis();
            if now > last {
                return now;
            }
            std::hint::spin_loop();
        }
    }

    fn lock(&self) -> MutexGuard<'_, GeneratorState> {
        // Every intermediate state is a valid one, so poisoning is ignored.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Mints product ids without exposing the clock type.
///
/// The product actor receives its generator as an `Arc<dyn IdSource>`.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> Result<i64, ClockError>;
}

impl<C: Clock> IdSource for IdGenerator<C> {
    fn next_id(&self) -> Result<i64, ClockError> {
        self.generate_id()
    }
}
