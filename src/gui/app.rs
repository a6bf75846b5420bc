// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    catalog::{Catalog, CatalogView},
    config::{
        options::PageKind,
        state::{AppState, settings_path},
    },
    log::{self, Sink},
    session::{Mode, Session},
    store::{self, Source},
};

use super::{fonts, pages::Page, router};

pub fn run() -> Result<(), Box<dyn Error>> {
    log::init(Sink::File, 0);

    let state = AppState::load_or_default(&settings_path());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Drug Finder")
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    eframe::run_native(
        "Drug Finder",
        options,
        Box::new(|cc| {
            fonts::install(&cc.egui_ctx);
            Ok(Box::new(App::new(state)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded once; never mutated afterwards
    pub catalog: Catalog,
    pub source: Source,

    // search/category state machine
    pub session: Session,

    // search box buffer (mirrored into the session on change)
    pub query_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (catalog, source, status) = load_catalog(&state);
        logf!("Init: catalog rows={} from {}", catalog.len(), source);

        let session = Session::with_limit(state.options.search.suggestion_limit);

        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            catalog,
            source,
            session,
            query_text: s!(),
            out_path_text,
            out_path_dirty: false,
            status,
        };

        // Restore the last tab (and its category, if any).
        let idx = app.current_index().min(router::all_pages().len() - 1);
        app.set_current_index(idx);
        app.current_page().on_enter(&mut app);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Rows for the table under the current page.
    pub fn results(&self) -> CatalogView<'_> {
        let mode = match self.current_page_kind() {
            PageKind::Search => Mode::Search,
            PageKind::Categories => Mode::Category,
        };
        self.session.results_in(&self.catalog, mode)
    }

    /* ---------- search ---------- */

    /// Push the search box text into the session.
    pub fn apply_query_text(&mut self) {
        self.session.set_query(&self.catalog, &self.query_text);
        logd!(
            "UI: Query {:?} → {} suggestion(s)",
            self.query_text,
            self.session.suggestion_indices().len()
        );
    }

    pub fn pick_suggestion(&mut self, i: usize) {
        if self.session.pick_suggestion(&self.catalog, i) {
            self.query_text = s!(self.session.query());
            self.on_selected();
        }
    }

    pub fn submit(&mut self) {
        if self.session.submit(&self.catalog) {
            self.on_selected();
        } else if self.query_text.is_empty() {
            self.status("Type a product name first");
        } else {
            logd!("UI: Submit miss for {:?}", self.query_text);
            self.status(format!("No product named \"{}\"", self.query_text));
        }
    }

    fn on_selected(&mut self) {
        let n = self.session.results(&self.catalog).len();
        if let Some(r) = self.session.selected(&self.catalog) {
            logf!("UI: Selected {:?} (ingredient {:?}) → {} row(s)", r.name, r.ingredient, n);
        }
        self.status(format!("{n} product(s) with the same ingredient"));
        self.switch_to(PageKind::Search);
    }

    /* ---------- categories ---------- */

    pub fn open_category(&mut self, category: &str) {
        self.session.select_category(category);
        self.state.gui.last_category = Some(s!(category));
        let n = self.session.results(&self.catalog).len();
        logf!("UI: Category {:?} → {} row(s)", category, n);
        self.status(format!("{n} product(s) in {category}"));
        self.switch_to(PageKind::Categories);
        self.persist();
    }

    /* ---------- pages ---------- */

    pub fn switch_page(&mut self, idx: usize) {
        if idx == self.current_index() || idx >= router::all_pages().len() {
            return;
        }
        let prev = self.current_page_kind();
        self.set_current_index(idx);
        let page = self.current_page();
        logf!("UI: Tab switch {:?} → {:?}", prev, page.kind());
        page.on_enter(self);
        self.persist();
    }

    fn switch_to(&mut self, kind: PageKind) {
        if let Some(idx) = router::index_of(kind) {
            self.switch_page(idx);
        }
    }

    /// Best-effort settings save.
    pub fn persist(&self) {
        if let Err(e) = self.state.save(&settings_path()) {
            loge!("Settings: save failed: {}", e);
        }
    }
}

fn load_catalog(state: &AppState) -> (Catalog, Source, String) {
    let wanted = state.options.search.data_path.as_deref();
    match store::resolve_catalog(wanted) {
        Ok((catalog, source)) => {
            let status = format!("Loaded {} products ({source})", catalog.len());
            (catalog, source, status)
        }
        Err(e) => {
            loge!("Store: {}", e);
            match store::bundled() {
                Ok(catalog) => {
                    let status = format!("Could not load catalog ({e}); using bundled dataset");
                    (catalog, Source::Bundled, status)
                }
                Err(e2) => (Catalog::default(), Source::Bundled, format!("Error: {e2}")),
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("categories")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::category_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw_controls(ui, self);

            ui.separator();

            super::components::export_bar::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });
    }
}
