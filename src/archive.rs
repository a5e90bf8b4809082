use std::{collections::VecDeque, sync::Mutex};

use dashmap::DashMap;
use uuid::Uuid;

use crate::models::PuzzleResult;

/// Recently generated puzzles, kept so a later issue can print the solution.
/// Once full, the oldest puzzle is evicted to make room.
pub struct PuzzleArchive {
    puzzles: DashMap<Uuid, PuzzleResult>,
    /// Insertion order, oldest first. Held across the whole insert so the
    /// cap is never exceeded by concurrent requests.
    order: Mutex<VecDeque<Uuid>>,
    limit: usize,
}

impl PuzzleArchive {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            puzzles: DashMap::new(),
            order: Mutex::new(VecDeque::with_capacity(limit)),
            limit,
        }
    }

    pub fn insert(&self, puzzle: PuzzleResult) {
        let mut order = self.order.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        while order.len() >= self.limit {
            let Some(oldest) = order.pop_front() else {
                break;
            };
            self.puzzles.remove(&oldest);
            tracing::debug!("Evicted puzzle {} from archive", oldest);
        }

        order.push_back(puzzle.id);
        self.puzzles.insert(puzzle.id, puzzle);
    }

    pub fn get(&self, id: &Uuid) -> Option<PuzzleResult> {
        self.puzzles.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}
