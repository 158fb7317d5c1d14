//! Ring buffer for rolling averages

use std::time::Duration;

pub struct RingBuffer<T> {
    samples: Vec<T>,
    capacity: usize,
    head: usize,
}

impl<T: Clone + Default> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    pub fn push(&mut self, sample: T) {
        if self.samples.len() < self.capacity {
            self.samples.push(sample);
        } else {
            self.samples[self.head] = sample;
        }
        self.head = (self.head + 1) % self.capacity;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// Specialize for Duration (tick timing)
impl RingBuffer<Duration> {
    pub fn average(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }

        let sum: Duration = self.samples.iter().sum();
        sum / self.samples.len() as u32
    }

    pub fn min_max(&self) -> (Duration, Duration) {
        if self.samples.is_empty() {
            return (Duration::ZERO, Duration::ZERO);
        }

        let min = *self.samples.iter().min().unwrap();
        let max = *self.samples.iter().max().unwrap();
        (min, max)
    }
}

// Specialize for f64
impl RingBuffer<f64> {
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }

        let sum: f64 = self.samples.iter().sum();
        sum / self.samples.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_average_wraps() {
        let mut buffer = RingBuffer::new(4);

        for ms in [4u64, 8, 12, 16] {
            buffer.push(Duration::from_millis(ms));
        }
        assert_eq!(buffer.average(), Duration::from_millis(10));

        // Oldest sample (4ms) falls out
        buffer.push(Duration::from_millis(24));
        assert_eq!(buffer.average(), Duration::from_millis(15));
        assert_eq!(buffer.len(), 4);
    }

    #[test]
    fn test_empty_buffer_is_zero() {
        let buffer: RingBuffer<Duration> = RingBuffer::new(8);
        assert!(buffer.is_empty());
        assert_eq!(buffer.average(), Duration::ZERO);
        assert_eq!(buffer.min_max(), (Duration::ZERO, Duration::ZERO));
    }

    #[test]
    fn test_min_max_tracks_extremes() {
        let mut buffer = RingBuffer::new(3);
        buffer.push(Duration::from_millis(7));
        buffer.push(Duration::from_millis(2));
        buffer.push(Duration::from_millis(5));
        assert_eq!(
            buffer.min_max(),
            (Duration::from_millis(2), Duration::from_millis(7))
        );
    }
}
