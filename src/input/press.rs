//! Press-duration classification on top of the debouncer.
//!
//! A press session opens on a confirmed press and closes on the
//! confirmed release.  While the line is held, the session fires one
//! long-press event once the hold time reaches the threshold; the
//! release then reports the whole session as short or long.

use super::debounce::{held_ms, Debouncer, Edge, Transition};

/// Classification of a finished press session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    Short,
    Long,
}

/// Events produced by a [`Button`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressEvent {
    /// Press confirmed; `at_ms` is when the line first went active.
    Pressed { at_ms: u64 },
    /// Hold time reached the long-press threshold. At most once per session;
    /// `at_ms` is press start plus the threshold.
    LongPress { at_ms: u64 },
    /// Press confirmed released.
    Released { kind: PressKind, held_ms: u64 },
}

#[derive(Clone, Copy, Debug)]
struct Session {
    started_ms: u64,
    long_press_fired: bool,
}

/// Tracks the open press session and decides short vs long.
#[derive(Clone, Debug)]
pub struct PressClassifier {
    long_press_ms: u64,
    session: Option<Session>,
}

impl PressClassifier {
    pub const fn new(long_press_ms: u64) -> Self {
        Self {
            long_press_ms,
            session: None,
        }
    }

    /// Open or close a session from a confirmed debouncer edge.
    pub fn on_transition(&mut self, transition: Transition) -> Option<PressEvent> {
        match transition.edge {
            Edge::Pressed => {
                self.session = Some(Session {
                    started_ms: transition.at_ms,
                    long_press_fired: false,
                });
                Some(PressEvent::Pressed {
                    at_ms: transition.at_ms,
                })
            }
            Edge::Released => {
                let session = self.session.take()?;
                let held_ms = transition.at_ms.saturating_sub(session.started_ms);
                // A hold of exactly the debounce window is never polled.
                let kind = if session.long_press_fired || held_ms >= self.long_press_ms {
                    PressKind::Long
                } else {
                    PressKind::Short
                };
                Some(PressEvent::Released { kind, held_ms })
            }
        }
    }

    /// Check the hold time of the open session. Call only while held.
    pub fn poll_held(&mut self, now_ms: u64) -> Option<PressEvent> {
        let session = self.session.as_mut()?;
        if session.long_press_fired || held_ms(session.started_ms, now_ms) < self.long_press_ms {
            return None;
        }
        session.long_press_fired = true;
        Some(PressEvent::LongPress {
            at_ms: session.started_ms.saturating_add(self.long_press_ms),
        })
    }

    /// `true` while a press session is open.
    pub fn in_session(&self) -> bool {
        self.session.is_some()
    }
}

/// One physical button: debouncer plus press classifier.
#[derive(Clone, Debug)]
pub struct Button {
    debouncer: Debouncer,
    classifier: PressClassifier,
}

impl Button {
    pub const fn new(debounce_ms: u64, long_press_ms: u64) -> Self {
        Self {
            debouncer: Debouncer::new(debounce_ms),
            classifier: PressClassifier::new(long_press_ms),
        }
    }

    /// Feed one raw sample (`active` = pin reads low) taken at `now_ms`.
    pub fn update(&mut self, active: bool, now_ms: u64) -> Option<PressEvent> {
        if let Some(transition) = self.debouncer.update(active, now_ms) {
            return self.classifier.on_transition(transition);
        }
        // Only time the hold while the raw line still agrees it is down.
        if self.debouncer.is_active() && !self.debouncer.is_settling() {
            return self.classifier.poll_held(now_ms);
        }
        None
    }

    pub fn in_session(&self) -> bool {
        self.classifier.in_session()
    }
}
