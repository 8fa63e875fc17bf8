use std::collections::{HashMap, VecDeque};

use super::Interface;

/// Bus that records every write and serves scripted reads
pub struct TestBus {
    writes: Vec<(u16, u8)>,
    reads: HashMap<u16, VecDeque<u8>>,
}

impl Interface for TestBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.reads
            .get_mut(&addr)
            .and_then(|queue| queue.pop_front())
            .unwrap_or(0)
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.writes.push((addr, data));
    }
}

impl TestBus {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            reads: HashMap::new(),
        }
    }

    pub fn queue_reads(&mut self, addr: u16, data: &[u8]) {
        self.reads
            .entry(addr)
            .or_default()
            .extend(data.iter().copied());
    }

    pub fn reads_left(&self, addr: u16) -> usize {
        self.reads.get(&addr).map_or(0, |queue| queue.len())
    }

    pub fn writes(&self) -> &[(u16, u8)] {
        &self.writes
    }
}
