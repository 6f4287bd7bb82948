use leptos::logging::{error, log};
use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;

use crate::catalog::Catalog;
use crate::routes::SiteRoutes;
use crate::session::Page;

fn load_catalog() -> Catalog {
    match Catalog::builtin() {
        Ok(catalog) => {
            log!("menu catalog: {} items", catalog.items().len());
            catalog
        }
        Err(e) => {
            error!("menu catalog unusable, rendering empty menu: {e:#}");
            Catalog::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let page = Page::new(load_catalog());

    view! {
      <Router>
        <SiteRoutes page/>
      </Router>
    }
}
