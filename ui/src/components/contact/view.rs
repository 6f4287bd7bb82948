use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::form::{ContactForm, Field, TimeoutDelay};
use crate::session::{Page, PageEvents};

const INPUT: &str = "w-full px-4 py-3 rounded-lg border bg-white focus:outline-none focus:ring-2 focus:ring-red-600";

fn input_class(form: ContactForm, field: Field) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        let mark = if form.is_invalid(field) { "border-red-500" } else { "border-stone-300" };
        format!("{INPUT} {mark}")
    }
}

#[component]
pub fn ContactSection(page: Page) -> impl IntoView {
    let form = page.contact;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        page.on_form_submit(&TimeoutDelay);
    };

    view! {
        <section id="contact" class="py-24 bg-stone-100">
            <div class="max-w-xl mx-auto px-6">
                <h2 class="text-4xl font-bold mb-2 text-center">"Book a Table"</h2>
                <p class="text-stone-500 mb-10 text-center">
                    "Questions, catering or large groups: drop us a line."
                </p>

                <form class="flex flex-col gap-4" novalidate=true on:submit=on_submit>
                    <input
                        type="text"
                        name="name"
                        placeholder="Your name"
                        class=input_class(form, Field::Name)
                        prop:value=move || form.name.get()
                        on:input=move |ev| form.name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Email address"
                        class=input_class(form, Field::Email)
                        prop:value=move || form.email.get()
                        on:input=move |ev| form.email.set(event_target_value(&ev))
                    />
                    <textarea
                        name="message"
                        rows="5"
                        placeholder="Your message"
                        class=input_class(form, Field::Message)
                        prop:value=move || form.message.get()
                        on:input=move |ev| form.message.set(event_target_value(&ev))
                    ></textarea>

                    <button
                        type="submit"
                        class="bg-red-600 text-white font-bold py-3 rounded-full hover:bg-red-700 transition"
                        disabled=move || form.is_pending()
                    >
                        { move || form.button_label() }
                    </button>
                </form>

                { move || form.notice().map(|msg| view! {
                    <p class="mt-6 text-center text-green-700 font-medium" role="status">{ msg }</p>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::components::contact::form::tests::ManualDelay;
    use crate::components::contact::form::{PENDING_LABEL, SUBMIT_LABEL, THANK_YOU};

    #[test]
    fn marks_only_blank_fields() {
        Owner::new().with(|| {
            let page = Page::new(Catalog::default());
            page.contact.name.set("Gio".into());
            page.contact.message.set("Do you deliver?".into());
            page.on_form_submit(&ManualDelay::default());

            let html = view! { <ContactSection page/> }.to_html();
            assert_eq!(html.matches("border-red-500").count(), 1);
            assert!(html.contains(SUBMIT_LABEL));
        });
    }

    #[test]
    fn pending_then_restored() {
        Owner::new().with(|| {
            let page = Page::new(Catalog::default());
            let delay = ManualDelay::default();
            for f in Field::ALL {
                page.contact.field(f).set("x".into());
            }
            page.on_form_submit(&delay);

            let html = view! { <ContactSection page/> }.to_html();
            assert!(html.contains(PENDING_LABEL));
            assert!(html.contains("disabled"));

            delay.fire_all();
            let html = view! { <ContactSection page/> }.to_html();
            assert!(html.contains(SUBMIT_LABEL));
            assert!(!html.contains("disabled"));
            assert!(html.contains(THANK_YOU));
            assert_eq!(html.matches("border-red-500").count(), 0);
        });
    }
}
