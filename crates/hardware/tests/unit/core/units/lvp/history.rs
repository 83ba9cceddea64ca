//! History Queue Tests.
//!
//! Verifies FIFO ordering, targeted lookup, and rollback semantics for the
//! per-thread in-flight load history.

use o3sim_core::core::units::lvp::HistoryEntry;
use o3sim_core::core::units::lvp::history::HistoryQueue;

fn predicted(seq_num: u64, value: u64) -> HistoryEntry {
    HistoryEntry {
        seq_num,
        pc: 0x1000 + seq_num * 4,
        tid: 0,
        predicted_value: value,
        predicted: true,
    }
}

fn unpredicted(seq_num: u64) -> HistoryEntry {
    HistoryEntry {
        seq_num,
        pc: 0x1000 + seq_num * 4,
        tid: 0,
        predicted_value: 0,
        predicted: false,
    }
}

// ══════════════════════════════════════════════════════════
// 1. FIFO ordering
// ══════════════════════════════════════════════════════════

#[test]
fn new_queue_is_empty() {
    let q = HistoryQueue::new();
    assert!(q.is_empty());
    assert_eq!(q.len(), 0);
    assert!(q.front().is_none());
}

#[test]
fn entries_commit_in_dispatch_order() {
    let mut q = HistoryQueue::new();
    q.push(predicted(1, 0xA));
    q.push(predicted(2, 0xB));
    q.push(predicted(3, 0xC));

    assert_eq!(q.len(), 3);
    assert_eq!(q.pop_front().map(|e| e.seq_num), Some(1));
    assert_eq!(q.pop_front().map(|e| e.seq_num), Some(2));
    assert_eq!(q.pop_front().map(|e| e.seq_num), Some(3));
    assert!(q.is_empty());
}

#[test]
fn front_peeks_without_removing() {
    let mut q = HistoryQueue::new();
    q.push(predicted(9, 0xF));
    assert_eq!(q.front().map(|e| e.seq_num), Some(9));
    assert_eq!(q.len(), 1, "Peeking must not pop");
}

// ══════════════════════════════════════════════════════════
// 2. Targeted lookup
// ══════════════════════════════════════════════════════════

#[test]
fn find_predicted_returns_the_matching_entry() {
    let mut q = HistoryQueue::new();
    q.push(predicted(4, 0x11));
    q.push(predicted(5, 0x22));

    let found = q.find_predicted(5);
    assert_eq!(found.map(|e| e.predicted_value), Some(0x22));
}

#[test]
fn find_predicted_skips_unpredicted_entries() {
    let mut q = HistoryQueue::new();
    q.push(unpredicted(6));
    assert!(
        q.find_predicted(6).is_none(),
        "A tracked-but-unpredicted load has nothing to check"
    );
}

#[test]
fn find_predicted_misses_unknown_seq_nums() {
    let mut q = HistoryQueue::new();
    q.push(predicted(7, 0x33));
    assert!(q.find_predicted(8).is_none());
}

// ══════════════════════════════════════════════════════════
// 3. Rollback
// ══════════════════════════════════════════════════════════

#[test]
fn squash_drops_everything_younger_than_the_rollback_point() {
    let mut q = HistoryQueue::new();
    q.push(predicted(10, 0xA));
    q.push(predicted(11, 0xB));
    q.push(predicted(12, 0xC));

    assert_eq!(q.squash_after(10), 2);
    assert_eq!(q.len(), 1);
    assert_eq!(q.front().map(|e| e.seq_num), Some(10));
}

#[test]
fn squash_boundary_entry_survives() {
    let mut q = HistoryQueue::new();
    q.push(predicted(20, 0xA));
    q.push(predicted(21, 0xB));

    assert_eq!(q.squash_after(21), 0, "Nothing is younger than 21");
    assert_eq!(q.len(), 2);
}

#[test]
fn squash_can_empty_the_queue() {
    let mut q = HistoryQueue::new();
    q.push(predicted(30, 0xA));
    q.push(predicted(31, 0xB));

    assert_eq!(q.squash_after(0), 2);
    assert!(q.is_empty());
}

#[test]
fn squash_on_empty_queue_is_a_no_op() {
    let mut q = HistoryQueue::new();
    assert_eq!(q.squash_after(100), 0);
}

#[test]
fn interleaved_commit_and_squash() {
    // Dispatch 1..=5, commit 1 and 2, then roll back to 3.
    let mut q = HistoryQueue::new();
    for seq in 1..=5 {
        q.push(predicted(seq, seq));
    }
    assert_eq!(q.pop_front().map(|e| e.seq_num), Some(1));
    assert_eq!(q.pop_front().map(|e| e.seq_num), Some(2));

    assert_eq!(q.squash_after(3), 2);
    assert_eq!(q.len(), 1);
    assert_eq!(q.front().map(|e| e.seq_num), Some(3));
}
