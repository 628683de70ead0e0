//! Non-blocking debouncer for one active-low input line.
//!
//! The line is sampled once per tick and each sample stands for the
//! millisecond it starts.  A raw change is confirmed on the tick that
//! completes the debounce window, so a hold of exactly the window counts;
//! anything shorter is treated as contact bounce and dropped without an
//! event.

/// Direction of a confirmed transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Line went active (button pushed down).
    Pressed,
    /// Line went inactive (button let go).
    Released,
}

/// A confirmed edge, stamped with the time the raw level first changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub edge: Edge,
    pub at_ms: u64,
}

/// Timestamp-based debouncer.
#[derive(Clone, Debug)]
pub struct Debouncer {
    window_ms: u64,
    /// Last confirmed level (`true` = active).
    stable: bool,
    /// When the raw level started to differ from `stable`.
    changed_at: Option<u64>,
}

impl Debouncer {
    /// Create a debouncer that starts in the released state.
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            stable: false,
            changed_at: None,
        }
    }

    /// Last confirmed level.
    pub fn is_active(&self) -> bool {
        self.stable
    }

    /// `true` while a raw change is waiting out the debounce window.
    pub fn is_settling(&self) -> bool {
        self.changed_at.is_some()
    }

    /// Feed one raw sample taken at `now_ms`.
    ///
    /// Returns a [`Transition`] on the tick where a change has held for
    /// at least the window, counting the sample at `now_ms`.  A change
    /// that reverts earlier is forgotten.
    pub fn update(&mut self, active: bool, now_ms: u64) -> Option<Transition> {
        if active == self.stable {
            self.changed_at = None;
            return None;
        }

        let since = *self.changed_at.get_or_insert(now_ms);
        if held_ms(since, now_ms) < self.window_ms {
            return None;
        }

        self.stable = active;
        self.changed_at = None;
        let edge = if active { Edge::Pressed } else { Edge::Released };
        Some(Transition { edge, at_ms: since })
    }
}

/// Time covered by the samples from `since` through `now_ms` inclusive.
pub(crate) fn held_ms(since: u64, now_ms: u64) -> u64 {
    now_ms.saturating_sub(since).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hold `level` on every tick in `from..to`, collecting confirmed edges.
    fn hold(d: &mut Debouncer, level: bool, from: u64, to: u64) -> heapless::Vec<Transition, 8> {
        let mut out = heapless::Vec::new();
        for t in from..to {
            if let Some(tr) = d.update(level, t) {
                out.push(tr).unwrap();
            }
        }
        out
    }

    #[test]
    fn bounce_shorter_than_window_is_ignored() {
        let mut d = Debouncer::new(50);
        assert!(hold(&mut d, true, 0, 49).is_empty());
        assert!(hold(&mut d, false, 49, 300).is_empty());
        assert!(!d.is_active());
        assert!(!d.is_settling());
    }

    #[test]
    fn press_confirmed_after_window_with_start_time() {
        let mut d = Debouncer::new(50);
        assert!(hold(&mut d, false, 0, 10).is_empty());
        let edges = hold(&mut d, true, 10, 100);
        assert_eq!(
            edges.as_slice(),
            &[Transition {
                edge: Edge::Pressed,
                at_ms: 10
            }]
        );
        assert!(d.is_active());
    }

    #[test]
    fn release_confirmed_once() {
        let mut d = Debouncer::new(50);
        hold(&mut d, true, 0, 100);
        let edges = hold(&mut d, false, 100, 400);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].edge, Edge::Released);
        assert_eq!(edges[0].at_ms, 100);
    }

    #[test]
    fn hold_of_exactly_the_window_is_confirmed() {
        let mut d = Debouncer::new(50);
        // Samples 0..=49 cover 50 ms; the 50th one confirms.
        let edges = hold(&mut d, true, 0, 50);
        assert_eq!(
            edges.as_slice(),
            &[Transition {
                edge: Edge::Pressed,
                at_ms: 0
            }]
        );
        let edges = hold(&mut d, false, 50, 100);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].at_ms, 50);
    }

    #[test]
    fn chatter_restarts_the_window() {
        let mut d = Debouncer::new(50);
        // 30 ms down, 5 ms up, then held: the window restarts at 35.
        assert!(hold(&mut d, true, 0, 30).is_empty());
        assert!(hold(&mut d, false, 30, 35).is_empty());
        let edges = hold(&mut d, true, 35, 120);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].at_ms, 35);
    }

    #[test]
    fn zero_window_confirms_immediately() {
        let mut d = Debouncer::new(0);
        let tr = d.update(true, 7).unwrap();
        assert_eq!(tr.edge, Edge::Pressed);
        assert_eq!(tr.at_ms, 7);
    }

    #[test]
    fn settling_flag_tracks_pending_change() {
        let mut d = Debouncer::new(20);
        d.update(true, 0);
        assert!(d.is_settling());
        d.update(true, 18);
        assert!(d.is_settling());
        d.update(true, 19);
        assert!(!d.is_settling());
        assert!(d.is_active());
    }
}
