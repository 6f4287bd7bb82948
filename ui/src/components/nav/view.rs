use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::utils::{is_scrolled, lock_body_scroll, scroll_to_anchor};
use crate::session::{Page, PageEvents};

pub const NAV_LINKS: &[(&str, &str)] = &[("#home", "Home"), ("#menu", "Menu"), ("#contact", "Contact")];

/// In-page link that scrolls smoothly instead of jumping.
#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(optional)] link_class: &'static str,
    #[prop(optional)] on_follow: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        scroll_to_anchor(href);
        if let Some(cb) = on_follow {
            cb.run(());
        }
    };

    view! {
        <a href=href class=link_class on:click=on_click>
            { children() }
        </a>
    }
}

#[component]
pub fn SiteHeader(page: Page) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    view! {
        <header
            class="fixed top-0 inset-x-0 z-40 transition-all duration-300"
            class=("nav-scrolled", move || scrolled.get())
        >
            <div class="max-w-6xl mx-auto flex justify-between items-center px-6 py-4">
                <AnchorLink href="#home" link_class="text-2xl font-extrabold text-red-600">
                    "SliceModern"
                </AnchorLink>

                <nav class="hidden md:flex gap-8 font-medium">
                    { NAV_LINKS.iter().map(|(href, label)| view! {
                        <AnchorLink href=*href link_class="hover:text-red-600">{ *label }</AnchorLink>
                    }).collect::<Vec<_>>() }
                </nav>

                <button
                    id="menu-toggle"
                    class="md:hidden text-2xl"
                    aria-label="Open navigation"
                    on:click=move |_| page.on_nav_toggle()
                >
                    "☰"
                </button>
            </div>
        </header>

        <MobileMenu page/>
    }
}

#[component]
fn MobileMenu(page: Page) -> impl IntoView {
    // body scroll is locked exactly while the panel is open
    Effect::new(move |_| lock_body_scroll(page.nav.is_open()));

    let close = Callback::new(move |_| page.on_nav_toggle());

    view! {
        <div
            id="mobile-menu"
            class=move || format!(
                "fixed inset-0 z-50 bg-stone-900 text-white flex flex-col items-center justify-center gap-8 {}",
                page.nav.panel_class()
            )
        >
            <button
                id="menu-close"
                class="absolute top-6 right-6 text-3xl"
                aria-label="Close navigation"
                on:click=move |_| close.run(())
            >
                "✕"
            </button>

            { NAV_LINKS.iter().map(|(href, label)| view! {
                <AnchorLink href=*href link_class="mobile-link text-3xl font-bold" on_follow=close>
                    { *label }
                </AnchorLink>
            }).collect::<Vec<_>>() }
        </div>
    }
}
