use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use product_inventory::id_gen::{
    ClockError, ConfigError, IdGenerator, ManualClock, BASE_ID, EPOCH_MILLIS, MAX_NODES,
    MAX_SEQUENCE, TIME_WINDOW_MILLIS,
};

const T0: i64 = EPOCH_MILLIS + 123_456;

fn shared_clock(millis: i64) -> Arc<ManualClock> {
    Arc::new(ManualClock::new(millis))
}

#[test]
fn test_sequential_ids_are_unique() {
    let generator = IdGenerator::with_clock(4, ManualClock::new(T0)).unwrap();

    let ids: HashSet<i64> = (0..5_000).map(|_| generator.generate_id().unwrap()).collect();
    assert_eq!(ids.len(), 5_000);
}

#[test]
fn test_concurrent_callers_get_distinct_ids() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 600;

    let generator = IdGenerator::with_clock(1, ManualClock::new(T0)).unwrap();

    let ids: Vec<i64> = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| generator.generate_id().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        workers
            .into_iter()
            .flat_map(|w| w.join().unwrap())
            .collect()
    });

    let total = THREADS * PER_THREAD;
    let unique: HashSet<i64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), total);

    // One millisecond, one node: exactly the sequence values 0..total were handed out.
    let first = (T0 - EPOCH_MILLIS) % TIME_WINDOW_MILLIS + BASE_ID + MAX_SEQUENCE;
    let expected: HashSet<i64> = (first..first + total as i64).collect();
    assert_eq!(unique, expected);
}

#[test]
fn test_last_timestamp_never_decreases_on_the_system_clock() {
    let generator = IdGenerator::new(0).unwrap();
    let mut previous = None;

    for _ in 0..2_000 {
        generator.generate_id().unwrap();
        let current = generator.last_timestamp();
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_ids_stay_in_band() {
    let upper = BASE_ID + TIME_WINDOW_MILLIS + MAX_NODES * MAX_SEQUENCE + MAX_SEQUENCE;

    for node_id in 0..MAX_NODES {
        let generator = IdGenerator::new(node_id).unwrap();
        for _ in 0..500 {
            let id = generator.generate_id().unwrap();
            assert!((BASE_ID..upper).contains(&id), "{id} out of band for node {node_id}");
        }
    }

    // The last millisecond of a window at the highest node and sequence.
    let clock = shared_clock(EPOCH_MILLIS + TIME_WINDOW_MILLIS - 1);
    let generator = IdGenerator::with_clock(MAX_NODES - 1, Arc::clone(&clock)).unwrap();
    let mut last = 0;
    for _ in 0..MAX_SEQUENCE {
        last = generator.generate_id().unwrap();
    }
    assert_eq!(
        last,
        BASE_ID + TIME_WINDOW_MILLIS - 1 + (MAX_NODES - 1) * MAX_SEQUENCE + MAX_SEQUENCE - 1
    );
    assert!(last < upper);
}

#[test]
fn test_nodes_are_offset_by_their_sub_range() {
    let clock = shared_clock(T0);
    let node_a = IdGenerator::with_clock(7, Arc::clone(&clock)).unwrap();
    let node_b = IdGenerator::with_clock(2, Arc::clone(&clock)).unwrap();

    for _ in 0..25 {
        let a = node_a.generate_id().unwrap();
        let b = node_b.generate_id().unwrap();
        assert_eq!(a - b, (7 - 2) * MAX_SEQUENCE);
    }
}

#[test]
fn test_node_id_bounds() {
    assert!(matches!(
        IdGenerator::new(-1),
        Err(ConfigError::InvalidNodeId { node_id: -1 })
    ));
    assert!(matches!(
        IdGenerator::new(MAX_NODES),
        Err(ConfigError::InvalidNodeId { node_id }) if node_id == MAX_NODES
    ));
    assert!(IdGenerator::new(0).is_ok());
    assert!(IdGenerator::new(MAX_NODES - 1).is_ok());
}

#[test]
fn test_clock_regression_fails_once_then_recovers() {
    let clock = shared_clock(T0);
    let generator = IdGenerator::with_clock(0, Arc::clone(&clock)).unwrap();
    generator.generate_id().unwrap();

    clock.set(T0 - 3);
    assert_eq!(
        generator.generate_id(),
        Err(ClockError {
            now: T0 - 3,
            last: T0
        })
    );
    assert_eq!(generator.last_timestamp(), Some(T0));

    clock.set(T0 + 1);
    let id = generator.generate_id().unwrap();
    assert_eq!(id, (T0 + 1 - EPOCH_MILLIS) % TIME_WINDOW_MILLIS + BASE_ID);
    assert_eq!(generator.last_timestamp(), Some(T0 + 1));
}

#[test]
fn test_sequence_rollover_waits_for_the_next_millisecond() {
    let clock = shared_clock(T0);
    let generator = IdGenerator::with_clock(3, Arc::clone(&clock)).unwrap();
    let base = (T0 - EPOCH_MILLIS) % TIME_WINDOW_MILLIS + BASE_ID + 3 * MAX_SEQUENCE;

    let burst: Vec<i64> = (0..MAX_SEQUENCE)
        .map(|_| generator.generate_id().unwrap())
        .collect();
    let expected: Vec<i64> = (0..MAX_SEQUENCE).map(|seq| base + seq).collect();
    assert_eq!(burst, expected);

    thread::scope(|s| {
        let waiting = s.spawn(|| generator.generate_id());

        thread::sleep(Duration::from_millis(50));
        let blocked = !waiting.is_finished();

        clock.advance(1);
        let id = waiting.join().unwrap().unwrap();
        assert!(blocked, "exhausted sequence must wait for the clock");
        assert_eq!(id, base + 1);
    });
    assert_eq!(generator.last_timestamp(), Some(T0 + 1));
}
