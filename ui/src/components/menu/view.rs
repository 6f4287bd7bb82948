use leptos::prelude::*;

use crate::catalog::{Category, CategoryFilter, MenuItem};
use crate::session::{MenuSession, Page, PageEvents};

const TAB_ACTIVE: &str = "active bg-red-600 text-white";
const TAB_IDLE: &str = "bg-white text-stone-800";

#[component]
pub fn MenuCard(item: MenuItem) -> impl IntoView {
    let badge = item
        .popular
        .then(|| view! { <span class="badge-hot">"Popular"</span> });

    view! {
        <div class="menu-card relative" data-id=item.id.to_string()>
            { badge }
            <div class="h-64 overflow-hidden">
                <img src=item.image alt=item.name.clone() class="w-full h-full object-cover"/>
            </div>
            <div class="p-6 text-left">
                <div class="flex justify-between items-start mb-2">
                    <h3 class="text-xl font-bold">{ item.name }</h3>
                    <span class="text-red-600 font-bold">{ item.price }</span>
                </div>
                <p class="text-stone-500 text-sm">{ item.description }</p>
            </div>
        </div>
    }
}

/// The display region: one card per item, keyed by id, nothing else.
#[component]
pub fn MenuGrid(#[prop(into)] items: Signal<Vec<MenuItem>>) -> impl IntoView {
    view! {
        <div id="menu-container" class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
            <For
                each=move || items.get()
                key=|item: &MenuItem| item.id
                children=|item| view! { <MenuCard item/> }
            />
        </div>
        <Show when=move || items.with(|i| i.is_empty())>
            <p class="menu-empty text-stone-500">"Nothing here yet."</p>
        </Show>
    }
}

#[component]
fn CategoryTab(page: Page, selector: CategoryFilter, label: String) -> impl IntoView {
    let tag = selector.to_string();
    let is_active = {
        let selector = selector.clone();
        move || page.menu.is_active(&selector)
    };

    view! {
        <button
            class=move || format!(
                "menu-tab px-6 py-2 rounded-full font-semibold transition {}",
                if is_active() { TAB_ACTIVE } else { TAB_IDLE }
            )
            data-category=tag
            on:click=move |_| page.on_category_select(selector.clone())
        >
            { label }
        </button>
    }
}

#[component]
pub fn CategoryTabs(page: Page) -> impl IntoView {
    let tabs = std::iter::once((CategoryFilter::All, "All".to_owned()))
        .chain(
            page.menu
                .categories()
                .into_iter()
                .map(|Category { tag, label }| (CategoryFilter::Tag(tag), label)),
        )
        .map(|(selector, label)| view! { <CategoryTab page selector label/> })
        .collect::<Vec<_>>();

    view! {
        <div class="flex flex-wrap justify-center gap-4 mb-12">
            { tabs }
        </div>
    }
}

#[component]
pub fn MenuSection(page: Page) -> impl IntoView {
    let menu: MenuSession = page.menu;

    view! {
        <section id="menu" class="py-24 text-center">
            <h2 class="text-4xl font-bold mb-4">"Our Menu"</h2>
            <p class="text-stone-500 mb-10">"Hand-stretched dough, 48-hour ferment, wood-fired."</p>
            <CategoryTabs page/>
            <MenuGrid items=Signal::derive(move || menu.visible())/>
        </section>
    }
}
