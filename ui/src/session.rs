use leptos::prelude::{Get, RwSignal, Set, StoredValue, Update, WithValue};

use crate::catalog::{Catalog, Category, CategoryFilter, MenuItem};
use crate::components::contact::form::{ContactForm, Delay, SubmitOutcome};

/// Catalog plus the currently selected category tab.
#[derive(Copy, Clone)]
pub struct MenuSession {
    catalog: StoredValue<Catalog>,
    active: RwSignal<CategoryFilter>,
}

impl MenuSession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
            active: RwSignal::new(CategoryFilter::All),
        }
    }

    pub fn select(&self, selector: CategoryFilter) {
        self.active.set(selector);
    }

    pub fn active(&self) -> CategoryFilter {
        self.active.get()
    }

    pub fn is_active(&self, selector: &CategoryFilter) -> bool {
        self.active.get() == *selector
    }

    pub fn categories(&self) -> Vec<Category> {
        self.catalog.with_value(|c| c.categories().to_vec())
    }

    /// Items for the active tab; reactive on the selection.
    pub fn visible(&self) -> Vec<MenuItem> {
        let selector = self.active.get();
        self.catalog.with_value(|c| c.filter(&selector))
    }
}

/// Mobile navigation panel.
#[derive(Copy, Clone)]
pub struct NavState {
    open: RwSignal<bool>,
}

impl Default for NavState {
    fn default() -> Self {
        Self { open: RwSignal::new(false) }
    }
}

impl NavState {
    pub fn toggle(&self) {
        self.open.update(|o| *o = !*o);
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn panel_class(&self) -> &'static str {
        if self.open.get() { "visible" } else { "hidden" }
    }
}

/// Handlers the page's controls are wired to.
pub trait PageEvents {
    fn on_category_select(&self, selector: CategoryFilter);
    fn on_form_submit(&self, delay: &dyn Delay) -> SubmitOutcome;
    fn on_nav_toggle(&self);
}

#[derive(Copy, Clone)]
pub struct Page {
    pub menu: MenuSession,
    pub nav: NavState,
    pub contact: ContactForm,
}

impl Page {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            menu: MenuSession::new(catalog),
            nav: NavState::default(),
            contact: ContactForm::new(),
        }
    }
}

impl PageEvents for Page {
    fn on_category_select(&self, selector: CategoryFilter) {
        self.menu.select(selector);
    }

    fn on_form_submit(&self, delay: &dyn Delay) -> SubmitOutcome {
        self.contact.submit(delay)
    }

    fn on_nav_toggle(&self) {
        self.nav.toggle();
    }
}
