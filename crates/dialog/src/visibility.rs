//! Open/close sequencing state.
//!
//! The dialog is never just "open or closed": both directions run a timed
//! transition, so the machine distinguishes the two settled phases from the
//! two transitional ones. Every accepted `request_*` bumps an epoch; a
//! transition's completion callback must present the epoch it was started
//! with, which lets a superseded animation finish late without clobbering
//! whatever sequence replaced it.

/// Where the dialog currently is in its show/hide cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

impl Phase {
    /// True from the moment opening starts until the exit transition has
    /// fully completed. The element stays in the layout for all of it.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Phase::Closed)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct VisibilityMachine {
    phase: Phase,
    epoch: u64,
}

impl VisibilityMachine {
    pub fn new() -> Self {
        Self {
            phase: Phase::Closed,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start the show sequence. Returns the epoch of the new sequence, or
    /// `None` when the call is coalesced (already opening or open).
    ///
    /// Opening while the exit transition is still running supersedes it: the
    /// pending hide step will fail its epoch check and must not fire.
    pub fn request_open(&mut self) -> Option<u64> {
        match self.phase {
            Phase::Closed | Phase::Closing => {
                self.phase = Phase::Opening;
                self.epoch += 1;
                Some(self.epoch)
            }
            Phase::Opening | Phase::Open => None,
        }
    }

    /// Start the hide sequence. Returns the epoch of the new sequence, or
    /// `None` when the call is coalesced (already closing or closed).
    pub fn request_close(&mut self) -> Option<u64> {
        match self.phase {
            Phase::Open | Phase::Opening => {
                self.phase = Phase::Closing;
                self.epoch += 1;
                Some(self.epoch)
            }
            Phase::Closing | Phase::Closed => None,
        }
    }

    /// Complete the transition started under `epoch`. Returns `false` when
    /// the epoch is stale, i.e. the sequence was superseded while its
    /// animation was still running; the caller must then skip its
    /// side effects (hiding the element, concealing the backdrop).
    pub fn settle(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        match self.phase {
            Phase::Opening => {
                self.phase = Phase::Open;
                true
            }
            Phase::Closing => {
                self.phase = Phase::Closed;
                true
            }
            Phase::Open | Phase::Closed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_settle() {
        let mut m = VisibilityMachine::new();
        assert_eq!(m.phase(), Phase::Closed);
        let epoch = m.request_open().unwrap();
        assert_eq!(m.phase(), Phase::Opening);
        assert!(m.settle(epoch));
        assert_eq!(m.phase(), Phase::Open);
    }

    #[test]
    fn close_then_settle() {
        let mut m = VisibilityMachine::new();
        let open = m.request_open().unwrap();
        m.settle(open);
        let close = m.request_close().unwrap();
        assert_eq!(m.phase(), Phase::Closing);
        assert!(m.settle(close));
        assert_eq!(m.phase(), Phase::Closed);
    }

    #[test]
    fn duplicate_requests_are_coalesced() {
        let mut m = VisibilityMachine::new();
        let epoch = m.request_open().unwrap();
        assert!(m.request_open().is_none());
        m.settle(epoch);
        assert!(m.request_open().is_none());

        let epoch = m.request_close().unwrap();
        assert!(m.request_close().is_none());
        m.settle(epoch);
        assert!(m.request_close().is_none());
    }

    #[test]
    fn close_while_closed_is_ignored() {
        let mut m = VisibilityMachine::new();
        assert!(m.request_close().is_none());
        assert_eq!(m.phase(), Phase::Closed);
    }

    #[test]
    fn reopen_during_close_supersedes_pending_hide() {
        let mut m = VisibilityMachine::new();
        let open1 = m.request_open().unwrap();
        m.settle(open1);
        let close = m.request_close().unwrap();

        // Reopened before the exit transition finished.
        let open2 = m.request_open().unwrap();
        assert_eq!(m.phase(), Phase::Opening);

        // The superseded hide step must not fire.
        assert!(!m.settle(close));
        assert_eq!(m.phase(), Phase::Opening);

        assert!(m.settle(open2));
        assert_eq!(m.phase(), Phase::Open);
    }

    #[test]
    fn close_during_opening_cancels_entrance() {
        let mut m = VisibilityMachine::new();
        let open = m.request_open().unwrap();
        let close = m.request_close().unwrap();
        assert_eq!(m.phase(), Phase::Closing);
        assert!(!m.settle(open));
        assert!(m.settle(close));
        assert_eq!(m.phase(), Phase::Closed);
    }

    #[test]
    fn settle_is_idempotent_per_epoch() {
        let mut m = VisibilityMachine::new();
        let epoch = m.request_open().unwrap();
        assert!(m.settle(epoch));
        assert!(!m.settle(epoch));
        assert_eq!(m.phase(), Phase::Open);
    }

    #[test]
    fn visibility_spans_transitions() {
        let mut m = VisibilityMachine::new();
        assert!(!m.phase().is_visible());
        let open = m.request_open().unwrap();
        assert!(m.phase().is_visible());
        m.settle(open);
        assert!(m.phase().is_visible());
        let close = m.request_close().unwrap();
        assert!(m.phase().is_visible());
        m.settle(close);
        assert!(!m.phase().is_visible());
    }
}
