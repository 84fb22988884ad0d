//! Incoming garbage queue: cancelling and materializing.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use stacker_core::Board;

/// One incoming attack, waiting `time` placements before it lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarbageEntry {
    pub col: u8,
    pub amount: u8,
    pub time: u8,
}

impl GarbageEntry {
    pub fn new(col: u8, amount: u8, time: u8) -> Self {
        Self { col, amount, time }
    }
}

/// Net `sent` against queued garbage, oldest first. Returns what is left to send.
pub fn cancel(queue: &mut VecDeque<GarbageEntry>, mut sent: u16) -> u16 {
    while sent > 0 {
        let Some(front) = queue.front_mut() else {
            break;
        };
        if front.amount as u16 > sent {
            front.amount -= sent as u8;
            sent = 0;
        } else {
            sent -= front.amount as u16;
            queue.pop_front();
        }
    }
    sent
}

/// Insert every entry whose countdown has reached zero, oldest first.
/// Returns the number of rows inserted.
pub fn materialize(queue: &mut VecDeque<GarbageEntry>, board: &mut Board) -> u16 {
    let mut inserted = 0;
    queue.retain(|entry| {
        if entry.time == 0 {
            board.insert_garbage(entry.amount, entry.col as usize);
            inserted += entry.amount as u16;
            false
        } else {
            true
        }
    });
    inserted
}

/// Count every waiting entry down by one placement.
pub fn tick(queue: &mut VecDeque<GarbageEntry>) {
    for entry in queue.iter_mut() {
        entry.time = entry.time.saturating_sub(1);
    }
}
