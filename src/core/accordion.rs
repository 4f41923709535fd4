/// Single-open accordion: opening an item closes every other one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    /// Seed from markup, where an item may already carry `active`.
    pub fn with_open(open: Option<usize>) -> Self {
        Self { open }
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Clicking an item's header: close all, then reopen it unless it was the open one.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }
}
