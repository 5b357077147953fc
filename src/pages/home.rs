//! Home page hero carousel.

use std::time::Duration;

/// Auto-advance period
pub const SLIDE_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub caption: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        title: "Manage Your Vendors",
        caption: "Keep every supplier's details in one place.",
    },
    Slide {
        title: "Track Contracts",
        caption: "See what is active, expiring, or already expired.",
    },
    Slide {
        title: "Measure Performance",
        caption: "Ratings and spending at a glance.",
    },
];

/// Slide position with wrap-around in both directions
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jump to `index`, wrapping out-of-range values
    pub fn go_to(&mut self, index: isize) -> usize {
        if self.len > 0 {
            self.current = index.rem_euclid(self.len as isize) as usize;
        }
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current as isize + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.current as isize - 1)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current == index
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(SLIDES.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.go_to(7), 1);
        assert!(carousel.is_active(1));
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.next(), 0);
        assert!(carousel.is_empty());
    }
}
