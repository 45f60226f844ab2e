#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, id: usize) -> bool {
        self.open == Some(id)
    }

    pub fn toggle(self, id: usize) -> Self {
        if self.is_open(id) {
            AccordionState { open: None }
        } else {
            AccordionState { open: Some(id) }
        }
    }

    pub fn close_all(self) -> Self {
        AccordionState { open: None }
    }
}

/// Footer columns only fold on narrow screens; wider layouts show every
/// column expanded regardless of state.
pub fn footer_accordion_active(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let state = AccordionState::default().toggle(0);
        assert!(state.is_open(0));

        let state = state.toggle(1);
        assert!(state.is_open(1));
        assert!(!state.is_open(0));
    }

    #[test]
    fn toggling_the_open_item_closes_it() {
        let state = AccordionState::default().toggle(3).toggle(3);
        assert_eq!(state.open(), None);
    }

    #[test]
    fn never_more_than_one_open() {
        let mut state = AccordionState::default();
        for id in [0, 2, 2, 1, 4, 0, 0, 3] {
            state = state.toggle(id);
            let open = (0..5).filter(|&i| state.is_open(i)).count();
            assert!(open <= 1);
        }
        assert!(state.close_all().open().is_none());
    }

    #[test]
    fn footer_folds_only_below_the_breakpoint() {
        assert!(footer_accordion_active(375.0, 640.0));
        assert!(footer_accordion_active(640.0, 640.0));
        assert!(!footer_accordion_active(641.0, 640.0));
        assert!(!footer_accordion_active(1280.0, 640.0));
    }
}
