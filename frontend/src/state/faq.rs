use std::rc::Rc;

use yew::Reducible;

/// Which FAQ entry is expanded. At most one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

pub enum AccordionAction {
    Toggle(usize),
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggled(self, index: usize) -> Self {
        let open = if self.is_open(index) { None } else { Some(index) };
        Self { open }
    }

    pub fn chevron(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            "fas fa-chevron-up"
        } else {
            "fas fa-chevron-down"
        }
    }
}

impl Reducible for Accordion {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AccordionAction::Toggle(index) => Rc::new(self.toggled(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: usize = 4;

    fn every_state() -> Vec<Accordion> {
        std::iter::once(Accordion::default())
            .chain((0..ENTRIES).map(|i| Accordion { open: Some(i) }))
            .collect()
    }

    #[test]
    fn starts_closed() {
        assert_eq!(Accordion::default().open, None);
    }

    #[test]
    fn clicking_the_open_entry_closes_it() {
        for i in 0..ENTRIES {
            let state = Accordion { open: Some(i) };
            assert_eq!(state.toggled(i).open, None);
        }
    }

    #[test]
    fn clicking_another_entry_opens_only_that_one() {
        for state in every_state() {
            for i in 0..ENTRIES {
                if state.is_open(i) {
                    continue;
                }
                let next = state.toggled(i);
                assert_eq!(next.open, Some(i));
                assert_eq!((0..ENTRIES).filter(|j| next.is_open(*j)).count(), 1);
            }
        }
    }

    #[test]
    fn reopen_then_close_third_entry() {
        let state = Rc::new(Accordion::default());
        let state = state.reduce(AccordionAction::Toggle(2));
        assert!(state.is_open(2));
        assert_eq!(state.chevron(2), "fas fa-chevron-up");

        let state = state.reduce(AccordionAction::Toggle(2));
        assert_eq!(state.open, None);
        assert_eq!(state.chevron(2), "fas fa-chevron-down");
    }
}
