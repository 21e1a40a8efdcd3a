//! Focus containment for the open dialog.
//!
//! [`FocusTrap`] owns the three pieces of focus state a modal needs: the
//! element that was focused before it opened, and the first/last focusable
//! descendants that act as the wrap points for Tab cycling. It is generic
//! over [`FocusTarget`] so the containment rules can be exercised without a
//! rendering environment; the DOM-backed target lives in [`scan`].
//!
//! The trap never reads ambient document state itself; the previously
//! focused element is passed into [`FocusTrap::engage`] by the caller.

pub mod probe;
pub mod scan;

/// Something keyboard focus can be moved to.
pub trait FocusTarget: Clone + PartialEq {
    fn focus(&self);
}

/// Keeps keyboard focus cycling within one dialog's descendants until
/// released.
pub struct FocusTrap<T: FocusTarget> {
    prior: Option<T>,
    first: Option<T>,
    last: Option<T>,
}

impl<T: FocusTarget> FocusTrap<T> {
    pub fn new() -> Self {
        Self {
            prior: None,
            first: None,
            last: None,
        }
    }

    /// Arm the trap. `prior` is whatever held focus before the dialog
    /// opened; `candidates` are the focusable descendants in document
    /// order. Boundaries are recomputed from scratch on every call, since
    /// the projected content may have changed since the last open.
    ///
    /// With no candidates the trap arms empty and focus stays where it was.
    /// That almost always means the embedding page put nothing interactive
    /// in the dialog, which is an accessibility bug on its side, hence the
    /// log noise rather than a hard failure.
    pub fn engage(&mut self, prior: Option<T>, candidates: &[T]) {
        self.prior = prior;
        self.first = candidates.first().cloned();
        self.last = candidates.last().cloned();

        match &self.first {
            Some(first) => first.focus(),
            None => log::warn!("dialog opened with no focusable descendants; focus left unmoved"),
        }
    }

    /// Disarm and restore focus to the recorded prior element, if any.
    pub fn release(&mut self) {
        self.first = None;
        self.last = None;
        if let Some(prior) = self.prior.take() {
            prior.focus();
        }
    }

    /// Where a forward Tab from `active` should land, if the trap
    /// intercepts it at all. `None` means default browser traversal.
    pub fn wrap_forward(&self, active: &T) -> Option<T> {
        match (&self.first, &self.last) {
            (Some(first), Some(last)) if active == last => Some(first.clone()),
            _ => None,
        }
    }

    /// Where a Shift+Tab from `active` should land, if intercepted.
    pub fn wrap_backward(&self, active: &T) -> Option<T> {
        match (&self.first, &self.last) {
            (Some(first), Some(last)) if active == first => Some(last.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Test double: focus calls append the target's id to a shared log.
    #[derive(Clone, Debug)]
    struct Stop {
        id: u32,
        focus_log: Rc<RefCell<Vec<u32>>>,
    }

    impl PartialEq for Stop {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl FocusTarget for Stop {
        fn focus(&self) {
            self.focus_log.borrow_mut().push(self.id);
        }
    }

    fn stops(ids: &[u32]) -> (Vec<Stop>, Rc<RefCell<Vec<u32>>>) {
        let focus_log = Rc::new(RefCell::new(Vec::new()));
        let list = ids
            .iter()
            .map(|&id| Stop {
                id,
                focus_log: Rc::clone(&focus_log),
            })
            .collect();
        (list, focus_log)
    }

    #[test]
    fn engage_focuses_the_first_candidate() {
        let (list, focus_log) = stops(&[1, 2, 3]);
        let mut trap = FocusTrap::new();
        trap.engage(None, &list);
        assert_eq!(*focus_log.borrow(), vec![1]);
    }

    #[test]
    fn engage_with_no_candidates_leaves_focus_unmoved() {
        let (_, focus_log) = stops(&[]);
        let outside = Stop {
            id: 9,
            focus_log: Rc::clone(&focus_log),
        };
        let mut trap: FocusTrap<Stop> = FocusTrap::new();
        trap.engage(None, &[]);
        assert!(focus_log.borrow().is_empty());
        assert_eq!(trap.wrap_forward(&outside), None);
        assert_eq!(trap.wrap_backward(&outside), None);
    }

    #[test]
    fn release_restores_the_exact_prior_element() {
        let (list, focus_log) = stops(&[1, 2, 3]);
        let prior = Stop {
            id: 42,
            focus_log: Rc::clone(&focus_log),
        };
        let mut trap = FocusTrap::new();
        trap.engage(Some(prior), &list);
        trap.release();
        assert_eq!(*focus_log.borrow(), vec![1, 42]);
    }

    #[test]
    fn release_without_prior_is_a_no_op() {
        let (list, focus_log) = stops(&[1, 2]);
        let mut trap = FocusTrap::new();
        trap.engage(None, &list);
        trap.release();
        trap.release();
        assert_eq!(*focus_log.borrow(), vec![1]);
    }

    #[test]
    fn tab_wraps_only_at_the_boundaries() {
        let (list, _) = stops(&[1, 2, 3]);
        let mut trap = FocusTrap::new();
        trap.engage(None, &list);

        assert_eq!(trap.wrap_forward(&list[2]), Some(list[0].clone()));
        assert_eq!(trap.wrap_forward(&list[0]), None);
        assert_eq!(trap.wrap_forward(&list[1]), None);

        assert_eq!(trap.wrap_backward(&list[0]), Some(list[2].clone()));
        assert_eq!(trap.wrap_backward(&list[1]), None);
        assert_eq!(trap.wrap_backward(&list[2]), None);
    }

    #[test]
    fn single_candidate_wraps_onto_itself() {
        let (list, _) = stops(&[7]);
        let mut trap = FocusTrap::new();
        trap.engage(None, &list);
        assert_eq!(trap.wrap_forward(&list[0]), Some(list[0].clone()));
        assert_eq!(trap.wrap_backward(&list[0]), Some(list[0].clone()));
    }

    #[test]
    fn boundaries_recompute_on_each_engage() {
        let (first_batch, focus_log) = stops(&[1, 2, 3]);
        let mut trap = FocusTrap::new();
        trap.engage(None, &first_batch);

        let replacement = vec![
            Stop {
                id: 10,
                focus_log: Rc::clone(&focus_log),
            },
            Stop {
                id: 20,
                focus_log: Rc::clone(&focus_log),
            },
        ];
        trap.engage(None, &replacement);

        assert_eq!(trap.wrap_forward(&replacement[1]), Some(replacement[0].clone()));
        assert_eq!(trap.wrap_forward(&first_batch[2]), None);
    }

    #[test]
    fn alert_with_three_buttons_cycles_and_restores() {
        let (buttons, focus_log) = stops(&[1, 2, 3]);
        let prior = Stop {
            id: 42,
            focus_log: Rc::clone(&focus_log),
        };
        let mut trap = FocusTrap::new();

        trap.engage(Some(prior), &buttons);
        assert_eq!(focus_log.borrow().last(), Some(&1));

        // Shift+Tab from the first button lands on the last.
        if let Some(target) = trap.wrap_backward(&buttons[0]) {
            target.focus();
        }
        assert_eq!(focus_log.borrow().last(), Some(&3));

        // Tab from the last button wraps back to the first.
        if let Some(target) = trap.wrap_forward(&buttons[2]) {
            target.focus();
        }
        assert_eq!(focus_log.borrow().last(), Some(&1));

        trap.release();
        assert_eq!(focus_log.borrow().last(), Some(&42));
    }
}
