//! Scroll-driven presentation: the nav style flag and reveal-on-scroll.

/// Whether the nav bar should carry its "scrolled" style at `offset_y`.
#[must_use]
pub fn nav_is_scrolled(offset_y: f64, threshold_px: f64) -> bool {
    offset_y > threshold_px
}

/// Tracks which reveal targets have been shown. Reveals are one-way: once an
/// element has intersected the viewport it stays visible for the page's life.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(targets: usize) -> Self {
        Self {
            revealed: vec![false; targets],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, target: usize) -> bool {
        self.revealed.get(target).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|shown| **shown).count()
    }

    /// Record an intersection report. Returns `true` only for the first
    /// intersecting report of a target, i.e. when the caller should mark it.
    pub fn observe(&mut self, target: usize, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.revealed.get_mut(target) {
            Some(shown) if !*shown => {
                *shown = true;
                log::debug!("reveal: target {target}");
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_flag_is_strictly_above_threshold() {
        assert!(!nav_is_scrolled(0.0, 10.0));
        assert!(!nav_is_scrolled(10.0, 10.0));
        assert!(nav_is_scrolled(10.5, 10.0));
        assert!(nav_is_scrolled(800.0, 10.0));
    }

    #[test]
    fn reveal_is_one_way() {
        let mut tracker = RevealTracker::new(3);
        assert!(!tracker.observe(1, false));
        assert!(tracker.observe(1, true));
        assert!(!tracker.observe(1, true));
        assert!(!tracker.observe(1, false));
        assert!(tracker.is_revealed(1));
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(4, true));
        assert!(!tracker.is_revealed(4));
        assert!(RevealTracker::default().is_empty());
    }
}
