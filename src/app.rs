//! Application state and navigation logic for the cloud atlas TUI.
//!
//! The `App` struct owns the fixture catalog and the navigation state:
//! which screen is showing, and where the selection cursor sits in the
//! sectioned list.

use crate::models::{Catalog, Cloud};
use crate::presenter::ListPresenter;

/// Which screen is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    List, // Master list, grouped by altitude band
    Detail, // Single selected cloud record
}

/// Application state
pub struct App {
    pub catalog: Catalog,
    pub screen: Screen,
    // Flat selection cursor over the visible list rows (section headers
    // are not selectable), in section order then catalog order.
    pub selected: usize,
    // Section/row position of the record shown on the detail screen
    pub detail: Option<(usize, usize)>,
}

impl App {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::sample_data(),
            screen: Screen::List,
            selected: 0,
            detail: None,
        }
    }

    /// Total selectable rows across all sections (13 for the fixture:
    /// multi-band clouds are listed once per band).
    pub fn visible_row_count(&self) -> usize {
        let presenter = ListPresenter::new(self.catalog.clouds());
        (0..presenter.section_count())
            .map(|s| presenter.row_count(s))
            .sum()
    }

    /// Resolve the flat cursor to a (section, row) pair.
    pub fn selection_position(&self) -> (usize, usize) {
        let presenter = ListPresenter::new(self.catalog.clouds());
        let mut remaining = self.selected;
        let mut last = (0, 0);
        for section in 0..presenter.section_count() {
            let count = presenter.row_count(section);
            if remaining < count {
                return (section, remaining);
            }
            if count > 0 {
                last = (section, count - 1);
            }
            remaining -= count;
        }
        // Cursor is kept within bounds by select_next; clamp to the last
        // real row if it ever isn't.
        last
    }

    pub fn select_next(&mut self) {
        let max = self.visible_row_count().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the detail screen for the row under the cursor.
    pub fn open_detail(&mut self) {
        let position = self.selection_position();
        let presenter = ListPresenter::new(self.catalog.clouds());
        if presenter.row_at(position.0, position.1).is_ok() {
            self.detail = Some(position);
            self.screen = Screen::Detail;
        }
    }

    /// Return from the detail screen to the list.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.screen = Screen::List;
    }

    /// The catalog record shown on the detail screen. Resolved through the
    /// list presenter so the detail view reads the exact selected record.
    pub fn detail_cloud(&self) -> Option<&Cloud> {
        let (section, row) = self.detail?;
        let presenter = ListPresenter::new(self.catalog.clouds());
        presenter.row_at(section, row).ok()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
