//! Chunk generation scheduler
//!
//! Tracks the generation state of every chunk and queues ungenerated
//! chunks around a point of interest. The queue is drained cooperatively,
//! one chunk per step, so generation spreads across many host ticks
//! instead of blocking for the full queue length.

use std::collections::VecDeque;

/// Generation state of one chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChunkState {
    /// Never requested
    #[default]
    Unseen,
    /// Waiting in the generation queue
    Queued,
    /// Tiles filled, field maps discarded
    Generated,
}

pub struct ChunkScheduler {
    chunks_x: usize,
    chunks_y: usize,
    states: Vec<ChunkState>,
    queue: VecDeque<(usize, usize)>,
    draining: bool,
}

impl ChunkScheduler {
    pub fn new(cols: usize, rows: usize, chunk_size: usize) -> Self {
        let chunks_x = (cols + chunk_size - 1) / chunk_size;
        let chunks_y = (rows + chunk_size - 1) / chunk_size;
        Self {
            chunks_x,
            chunks_y,
            states: vec![ChunkState::Unseen; chunks_x * chunks_y],
            queue: VecDeque::new(),
            draining: false,
        }
    }

    pub fn chunks_x(&self) -> usize {
        self.chunks_x
    }

    pub fn chunks_y(&self) -> usize {
        self.chunks_y
    }

    fn index(&self, chunk_x: usize, chunk_y: usize) -> usize {
        chunk_y * self.chunks_x + chunk_x
    }

    fn in_world(&self, chunk_x: i64, chunk_y: i64) -> bool {
        chunk_x >= 0
            && chunk_y >= 0
            && chunk_x < self.chunks_x as i64
            && chunk_y < self.chunks_y as i64
    }

    /// State of a chunk, `Unseen` outside the world.
    pub fn state(&self, chunk_x: i64, chunk_y: i64) -> ChunkState {
        if !self.in_world(chunk_x, chunk_y) {
            return ChunkState::Unseen;
        }
        self.states[self.index(chunk_x as usize, chunk_y as usize)]
    }

    pub fn is_generated(&self, chunk_x: i64, chunk_y: i64) -> bool {
        self.state(chunk_x, chunk_y) == ChunkState::Generated
    }

    pub fn generated_count(&self) -> usize {
        self.states.iter().filter(|s| **s == ChunkState::Generated).count()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_draining(&self) -> bool {
        self.draining
    }

    /// Queue every `Unseen` chunk in the `(2r+1)^2` square around a center
    /// chunk. Chunks outside the world (negative coordinates included) are
    /// skipped; chunks already queued or generated are never re-enqueued.
    /// Starts a drain if none is in progress. Returns how many chunks were
    /// newly queued.
    pub fn request_around(&mut self, center_x: i64, center_y: i64, radius: i64) -> usize {
        let mut queued = 0;
        for chunk_y in (center_y - radius)..=(center_y + radius) {
            for chunk_x in (center_x - radius)..=(center_x + radius) {
                if !self.in_world(chunk_x, chunk_y) {
                    continue;
                }
                if self.enqueue(chunk_x as usize, chunk_y as usize) {
                    queued += 1;
                }
            }
        }
        if queued > 0 {
            self.draining = true;
        }
        queued
    }

    /// Legacy whole-world entry point: queue every chunk in the grid up
    /// front and rely on the same drain loop.
    pub fn request_all(&mut self) -> usize {
        let mut queued = 0;
        for chunk_y in 0..self.chunks_y {
            for chunk_x in 0..self.chunks_x {
                if self.enqueue(chunk_x, chunk_y) {
                    queued += 1;
                }
            }
        }
        if queued > 0 {
            self.draining = true;
        }
        queued
    }

    fn enqueue(&mut self, chunk_x: usize, chunk_y: usize) -> bool {
        let idx = self.index(chunk_x, chunk_y);
        if self.states[idx] != ChunkState::Unseen {
            return false;
        }
        self.states[idx] = ChunkState::Queued;
        self.queue.push_back((chunk_x, chunk_y));
        true
    }

    /// Pop the next queued chunk, FIFO.
    pub fn pop(&mut self) -> Option<(usize, usize)> {
        self.queue.pop_front()
    }

    pub fn mark_generated(&mut self, chunk_x: usize, chunk_y: usize) {
        let idx = self.index(chunk_x, chunk_y);
        self.states[idx] = ChunkState::Generated;
    }

    /// True exactly once per drain-to-empty cycle, when the queue has
    /// emptied while a drain was in progress.
    pub fn take_drain_complete(&mut self) -> bool {
        if self.draining && self.queue.is_empty() {
            self.draining = false;
            return true;
        }
        false
    }
}
