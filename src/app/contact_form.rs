use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use super::effects::notify;
use crate::config::RelayConfig;
use crate::contact::{deliver, ContactForm, EmailJsRelay};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-gray-600 bg-gray-900 text-white focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // the form is emptied here, before the relay answers
        let message = match form.try_update(|f| f.take_message()) {
            Some(Ok(message)) => message,
            Some(Err(e)) => {
                log::debug!("contact form not submitted: {e}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let relay = EmailJsRelay::new();
            let notification = deliver(&relay, &RelayConfig::DEFAULT, &message).await;
            notify(notification);
        });
    };

    view! {
        <form class="max-w-xl mx-auto mt-10 space-y-4 text-left" on:submit=on_submit>
            <input
                type="text"
                name="user_name"
                placeholder="Your Name"
                required
                class=INPUT_CLASS
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
            <input
                type="email"
                name="user_email"
                placeholder="Your Email"
                required
                class=INPUT_CLASS
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />
            <textarea
                name="message"
                placeholder="Your Message"
                rows="5"
                required
                class=INPUT_CLASS
                prop:value=move || form.with(|f| f.message.clone())
                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
            ></textarea>
            <button
                type="submit"
                class="w-full bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-md font-medium transition-colors"
            >
                "Send Message"
            </button>
        </form>
    }
}
