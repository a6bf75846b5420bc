// src/catalog/mod.rs
//! # Catalog
//!
//! The in-memory product list and the four lookups the frontends need:
//!
//! - **suggest**: case-insensitive name prefix match, catalog order, capped;
//! - **find_exact**: first record whose name equals the query exactly;
//! - **same_ingredient**: records sharing the normalized ingredient, optionally
//!   also the normalized dose;
//! - **by_category**: records in one category.
//!
//! The record list is fixed once the catalog is built. Every lookup is a
//! linear pass; results borrow from the catalog through [`CatalogView`].
mod record;
mod view;

pub use record::{DrugRecord, HEADERS, HEADERS_WITH_CATEGORY};
pub use view::CatalogView;

use crate::core::fold_case;

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<DrugRecord>,
}

impl Catalog {
    pub fn new(records: Vec<DrugRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn records(&self) -> &[DrugRecord] { &self.records }
    pub fn get(&self, ix: usize) -> Option<&DrugRecord> { self.records.get(ix) }

    /// Indices of records whose name starts with `query`, ignoring case.
    /// Empty query matches nothing.
    pub fn suggest_indices(&self, query: &str, limit: usize) -> Vec<usize> {
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }
        let needle = fold_case(query);
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| fold_case(&r.name).starts_with(&needle))
            .map(|(ix, _)| ix)
            .take(limit)
            .collect()
    }

    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&DrugRecord> {
        self.suggest_indices(query, limit)
            .into_iter()
            .map(|ix| &self.records[ix])
            .collect()
    }

    pub fn find_exact_index(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    pub fn find_exact(&self, name: &str) -> Option<&DrugRecord> {
        self.find_exact_index(name).map(|ix| &self.records[ix])
    }

    /// Records sharing `base`'s ingredient (and dose, if asked). `base` itself
    /// is part of the result when it belongs to this catalog. Blank keys are
    /// compared like any other, so blank ingredients match each other.
    pub fn same_ingredient(&self, base: &DrugRecord, same_dose_only: bool) -> CatalogView<'_> {
        let ingredient = base.ingredient_key();
        let dose = base.dose_key();

        let ix = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.ingredient_key() == ingredient && (!same_dose_only || r.dose_key() == dose))
            .map(|(ix, _)| ix)
            .collect();

        CatalogView::new(self, ix)
    }

    /// Distinct non-empty categories, first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            let c = r.category.trim();
            if !c.is_empty() && !out.contains(&c) {
                out.push(c);
            }
        }
        out
    }

    pub fn by_category(&self, category: &str) -> CatalogView<'_> {
        let wanted = category.trim();
        let ix = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.category.trim() == wanted)
            .map(|(ix, _)| ix)
            .collect();
        CatalogView::new(self, ix)
    }

    /// Number of records per category, `categories()` order.
    pub fn category_counts(&self) -> Vec<(&str, usize)> {
        self.categories()
            .into_iter()
            .map(|c| (c, self.records.iter().filter(|r| r.category.trim() == c).count()))
            .collect()
    }
}
