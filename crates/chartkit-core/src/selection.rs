// File: crates/chartkit-core/src/selection.rs
// Summary: Exclusive single-bar selection toggled by hit-test results.

use crate::bar::BarId;

/// Outcome of one hit-test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    Unchanged,
    Selected(BarId),
    /// The previously selected bar was toggled off.
    Deselected(BarId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionController {
    /// When false, hits are still reported but never change the state.
    pub enabled: bool,
    selected: Option<BarId>,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SelectionController {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, selected: None }
    }

    pub fn selected(&self) -> Option<BarId> {
        self.selected
    }

    pub fn is_selected(&self, id: BarId) -> bool {
        self.selected == Some(id)
    }

    /// Toggle `hit` if it is the current selection, otherwise make it the only selection.
    /// A miss (`None`) leaves the state alone.
    pub fn handle_hit(&mut self, hit: Option<BarId>) -> SelectionChange {
        let Some(id) = hit else { return SelectionChange::Unchanged };
        if !self.enabled {
            return SelectionChange::Unchanged;
        }
        if self.selected == Some(id) {
            self.selected = None;
            SelectionChange::Deselected(id)
        } else {
            self.selected = Some(id);
            SelectionChange::Selected(id)
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Clear the selection unless `exists` still reports the selected bar.
    pub fn retain(&mut self, exists: impl Fn(BarId) -> bool) -> bool {
        match self.selected {
            Some(id) if !exists(id) => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}
