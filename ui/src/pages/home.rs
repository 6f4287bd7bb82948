use leptos::prelude::ElementChild;
use leptos::prelude::ClassAttribute;
use leptos::prelude::GlobalAttributes;
use leptos::component;
use leptos::IntoView;
use leptos::view;
use leptos_meta::Title;

use crate::components::contact::ContactSection;
use crate::components::menu::MenuSection;
use crate::components::nav::view::AnchorLink;
use crate::components::nav::SiteHeader;
use crate::session::Page;

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-[80vh] flex items-center bg-stone-900 text-white">
            <div class="max-w-6xl mx-auto px-6 py-32">
                <h1 class="text-5xl sm:text-7xl font-extrabold mb-6 leading-tight">
                    "Slices worth"<br/>"crossing town for."
                </h1>
                <p class="text-lg text-stone-300 mb-10 max-w-xl">
                    "Neapolitan-style pies, fired at 900°F in ninety seconds flat."
                </p>
                <AnchorLink
                    href="#menu"
                    link_class="inline-block bg-red-600 px-8 py-4 rounded-full font-bold hover:bg-red-700 transition"
                >
                    "See the Menu"
                </AnchorLink>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-stone-900 text-stone-400 py-8">
            <div class="max-w-6xl mx-auto px-6 flex flex-col sm:flex-row justify-between gap-4">
                <p>"© 2025 SliceModern Pizza"</p>
                <p>"Open daily 11:00 – 23:00"</p>
            </div>
        </footer>
    }
}

#[component]
pub fn Home(page: Page) -> impl IntoView {
    view! {
        <Title text="SliceModern Pizza"/>
        <SiteHeader page/>
        <main>
            <Hero/>
            <MenuSection page/>
            <ContactSection page/>
        </main>
        <Footer/>
    }
}
