use crate::geo::interface::RandomSource;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Replays a fixed sequence of draws, wrapping around at the end.
pub struct RandomSourceFixed {
    values: Vec<f64>,
    next: AtomicUsize,
}

impl RandomSourceFixed {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty());
        Self {
            values,
            next: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for RandomSourceFixed {
    fn unit(&self) -> f64 {
        let index = self.next.fetch_add(1, Ordering::SeqCst);
        self.values[index % self.values.len()]
    }
}
