// src/gui/router.rs
use crate::config::options::PageKind;
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::search::PAGE,
    &pages::categories::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn index_of(kind: PageKind) -> Option<usize> {
    PAGES.iter().position(|p| p.kind() == kind)
}
