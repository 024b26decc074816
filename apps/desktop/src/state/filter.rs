//! # Category Filter Selector
//!
//! The drop-down-like control: `"All"` followed by the stored categories.

use inventory_core::{CategoryFilter, ALL_CATEGORIES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelector {
    choices: Vec<String>,
    selected: usize,
}

impl Default for FilterSelector {
    fn default() -> Self {
        FilterSelector {
            choices: vec![ALL_CATEGORIES.to_string()],
            selected: 0,
        }
    }
}

impl FilterSelector {
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The current selector value.
    pub fn current(&self) -> &str {
        &self.choices[self.selected]
    }

    /// The current value as a list filter.
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_choice(Some(self.current()))
    }

    /// Rebuilds the choices from the stored categories.
    ///
    /// Keeps the current choice when it still exists. Otherwise falls back
    /// to `"All"` and returns `true` so the caller can re-run the view.
    pub fn set_categories(&mut self, categories: Vec<String>) -> bool {
        let current = self.current().to_string();

        self.choices = std::iter::once(ALL_CATEGORIES.to_string())
            .chain(categories.into_iter().filter(|c| c != ALL_CATEGORIES))
            .collect();

        match self.choices.iter().position(|c| *c == current) {
            Some(index) => {
                self.selected = index;
                false
            }
            None => {
                self.selected = 0;
                true
            }
        }
    }

    /// Selects `"All"`. Returns whether the choice changed.
    pub fn reset(&mut self) -> bool {
        let changed = self.selected != 0;
        self.selected = 0;
        changed
    }

    /// Moves to the next (`delta > 0`) or previous choice, wrapping around.
    /// Returns whether the choice changed.
    pub fn cycle(&mut self, delta: isize) -> bool {
        let len = self.choices.len();
        if len < 2 {
            return false;
        }

        let step = delta.rem_euclid(len as isize) as usize;
        let next = (self.selected + step) % len;
        let changed = next != self.selected;
        self.selected = next;
        changed
    }
}
