use std::time::Duration;

pub const OFFER_INTERVAL: Duration = Duration::from_secs(3);

pub const OFFER_IMAGES: [&str; 5] = [
    "https://picsum.photos/seed/offer1/800/400",
    "https://picsum.photos/seed/offer2/800/400",
    "https://picsum.photos/seed/offer3/800/400",
    "https://picsum.photos/seed/offer4/800/400",
    "https://picsum.photos/seed/offer5/800/400",
];

/// Auto-advancing slide index. Elapsed time is fed in by the caller.
#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    len: usize,
    elapsed: Duration,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            elapsed: Duration::ZERO,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advances one slide per full interval that has passed.
    pub fn tick(&mut self, delta: Duration) {
        if self.len == 0 {
            return;
        }
        self.elapsed += delta;
        while self.elapsed >= OFFER_INTERVAL {
            self.elapsed -= OFFER_INTERVAL;
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Manual selection restarts the interval.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
            self.elapsed = Duration::ZERO;
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(OFFER_IMAGES.len())
    }
}
