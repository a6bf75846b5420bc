// src/catalog/view.rs
//
// Zero-copy projection over a Catalog: a list of row indices plus a borrow.
// Result tables, copy and export all consume this instead of cloned records.

use super::{Catalog, DrugRecord};

#[derive(Clone, Debug)]
pub struct CatalogView<'a> {
    catalog: &'a Catalog,
    /// Positions of kept records in the catalog, ascending.
    row_ix: Vec<usize>,
}

impl<'a> CatalogView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, row_ix: Vec<usize>) -> Self {
        Self { catalog, row_ix }
    }

    pub fn empty(catalog: &'a Catalog) -> Self {
        Self { catalog, row_ix: Vec::new() }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn indices(&self) -> &[usize] { &self.row_ix }

    /// Borrow a single record by projected index.
    pub fn row(&self, i: usize) -> Option<&'a DrugRecord> {
        let catalog = self.catalog;
        self.row_ix.get(i).and_then(|&ix| catalog.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a DrugRecord> + '_ {
        let catalog = self.catalog;
        self.row_ix.iter().filter_map(move |&ix| catalog.get(ix))
    }

    /// Product names, in view order.
    pub fn names(&self) -> Vec<&'a str> {
        self.iter().map(|r| r.name.as_str()).collect()
    }

    /// Materialize owned records (JSON export boundary).
    pub fn to_owned_records(&self) -> Vec<DrugRecord> {
        self.iter().cloned().collect()
    }
}
