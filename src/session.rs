// src/session.rs
//
// Headless search state shared by the GUI and the tests.
//
// Search mode: typing updates the suggestion list, picking a suggestion or
// submitting an exact name selects a product, and the results are every
// product sharing its ingredient (optionally its dose too).
// Category mode: the results are every product in the chosen category.
//
// The session stores indices, never references, so it can live next to the
// catalog inside the GUI app without self-borrowing.

use crate::catalog::{Catalog, CatalogView, DrugRecord};
use crate::config::consts::SUGGESTION_LIMIT;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Search,
    Category,
}

#[derive(Clone, Debug)]
pub struct Session {
    query: String,
    suggestions: Vec<usize>,
    selected: Option<usize>,
    same_dose_only: bool,
    category: Option<String>,
    mode: Mode,
    limit: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_limit(SUGGESTION_LIMIT)
    }
}

impl Session {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            query: s!(),
            suggestions: Vec::new(),
            selected: None,
            same_dose_only: false,
            category: None,
            mode: Mode::Search,
            limit,
        }
    }

    /* ---------- accessors ---------- */

    pub fn query(&self) -> &str { &self.query }
    pub fn mode(&self) -> Mode { self.mode }
    pub fn same_dose_only(&self) -> bool { self.same_dose_only }
    pub fn category(&self) -> Option<&str> { self.category.as_deref() }
    pub fn suggestion_indices(&self) -> &[usize] { &self.suggestions }
    pub fn selected_index(&self) -> Option<usize> { self.selected }

    pub fn suggestions<'a>(&self, catalog: &'a Catalog) -> Vec<&'a DrugRecord> {
        self.suggestions.iter().filter_map(|&ix| catalog.get(ix)).collect()
    }

    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a DrugRecord> {
        self.selected.and_then(|ix| catalog.get(ix))
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    /* ---------- search mode ---------- */

    /// Replace the query text and recompute suggestions. The current
    /// selection stays until something else is picked or submitted.
    pub fn set_query(&mut self, catalog: &Catalog, text: &str) {
        self.query = s!(text);
        self.suggestions = catalog.suggest_indices(&self.query, self.limit);
    }

    /// Pick the `i`-th entry of the suggestion list. Returns false when `i`
    /// is out of range.
    pub fn pick_suggestion(&mut self, catalog: &Catalog, i: usize) -> bool {
        let Some(&ix) = self.suggestions.get(i) else { return false };
        let Some(record) = catalog.get(ix) else { return false };
        self.query = record.name.clone();
        self.select(ix);
        true
    }

    /// Exact lookup of the current query. A miss leaves the state untouched.
    pub fn submit(&mut self, catalog: &Catalog) -> bool {
        match catalog.find_exact_index(&self.query) {
            Some(ix) => {
                self.select(ix);
                true
            }
            None => false,
        }
    }

    fn select(&mut self, ix: usize) {
        self.selected = Some(ix);
        self.suggestions.clear();
        self.same_dose_only = false;
        self.mode = Mode::Search;
    }

    pub fn set_same_dose_only(&mut self, on: bool) {
        self.same_dose_only = on;
    }

    pub fn toggle_same_dose_only(&mut self) {
        self.same_dose_only = !self.same_dose_only;
    }

    /* ---------- category mode ---------- */

    pub fn select_category(&mut self, category: &str) {
        self.category = Some(s!(category.trim()));
        self.suggestions.clear();
        self.mode = Mode::Category;
    }

    /// Leave category mode; the search selection (if any) comes back.
    pub fn clear_category(&mut self) {
        self.category = None;
        self.mode = Mode::Search;
    }

    /* ---------- results ---------- */

    pub fn results<'a>(&self, catalog: &'a Catalog) -> CatalogView<'a> {
        match self.mode {
            Mode::Search => match self.selected(catalog) {
                Some(base) => catalog.same_ingredient(base, self.same_dose_only),
                None => CatalogView::empty(catalog),
            },
            Mode::Category => match self.category.as_deref() {
                Some(c) => catalog.by_category(c),
                None => CatalogView::empty(catalog),
            },
        }
    }

    /// Results for a screen that shows `mode`. A screen showing the other
    /// mode gets nothing, so a cleared category listing never falls back to
    /// the search selection.
    pub fn results_in<'a>(&self, catalog: &'a Catalog, mode: Mode) -> CatalogView<'a> {
        if self.mode == mode {
            self.results(catalog)
        } else {
            CatalogView::empty(catalog)
        }
    }

    pub fn clear(&mut self) {
        *self = Self::with_limit(self.limit);
    }
}
