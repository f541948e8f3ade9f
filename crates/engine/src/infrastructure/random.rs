//! Random implementations.

use crate::infrastructure::ports::RandomPort;

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Fixed random for testing.
#[cfg(test)]
pub struct FixedRandom(pub i32);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_range(&self, _min: i32, _max: i32) -> i32 {
        self.0
    }
}

/// Replays a script of values, then repeats the last one.
#[cfg(test)]
pub struct SequenceRandom {
    values: std::sync::Mutex<std::collections::VecDeque<i32>>,
    last: std::sync::atomic::AtomicI32,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: std::sync::Mutex::new(values.into_iter().collect()),
            last: std::sync::atomic::AtomicI32::new(1),
        }
    }
}

#[cfg(test)]
impl RandomPort for SequenceRandom {
    fn gen_range(&self, _min: i32, _max: i32) -> i32 {
        use std::sync::atomic::Ordering;
        let next = self.values.lock().unwrap().pop_front();
        match next {
            Some(value) => {
                self.last.store(value, Ordering::SeqCst);
                value
            }
            None => self.last.load(Ordering::SeqCst),
        }
    }
}
