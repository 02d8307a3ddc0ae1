//! Contact Page
//!
//! Email link plus a form that opens the visitor's mail client.

use leptos::prelude::*;

use crate::components::Card;
use crate::contact::{mailto_href, ContactForm};
use crate::context::AppContext;

const FIELD_CLASS: &str = "w-full rounded-2xl border border-white/10 bg-white/5 px-4 py-3 text-slate-100 outline-none placeholder:text-slate-500";

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let email = ctx.portfolio.with_value(|p| p.profile.email.clone());
    let email_href = format!("mailto:{}", email);

    let (name, set_name) = signal(String::new());
    let (sender, set_sender) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let recipient = email.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get(),
            email: sender.get(),
            message: message.get(),
        };

        match form.validate() {
            Ok(form) => {
                set_error.set(None);
                let href = mailto_href(&recipient, &form);
                log::info!("[CONTACT] handing message from {:?} to the mail client", form.name);
                if let Err(err) = window().location().set_href(&href) {
                    log::error!("[CONTACT] failed to open mail client: {:?}", err);
                    set_error.set(Some("Could not open your mail client.".to_string()));
                }
            }
            Err(err) => {
                log::debug!("[CONTACT] rejected form: {}", err);
                set_error.set(Some(err.to_string()));
            }
        }
    };

    view! {
        <Card>
            <h1 class="text-2xl font-extrabold">"Contact"</h1>
            <p class="mt-2 text-slate-400">
                "Email: "
                <a class="underline hover:text-slate-100" href=email_href>{email}</a>
            </p>
        </Card>

        <Card class="mt-6">
            <h2 class="text-lg font-extrabold">"Send a message"</h2>
            <form class="mt-4 grid gap-3" on:submit=on_submit>
                <input
                    type="text"
                    required
                    placeholder="Your name"
                    class=FIELD_CLASS
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    required
                    placeholder="Your email"
                    class=FIELD_CLASS
                    prop:value=move || sender.get()
                    on:input=move |ev| set_sender.set(event_target_value(&ev))
                />
                <textarea
                    required
                    placeholder="Your message"
                    class=format!("min-h-[160px] resize-y {}", FIELD_CLASS)
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>

                {move || error.get().map(|msg| view! {
                    <div class="text-sm text-red-400">{msg}</div>
                })}

                <button
                    type="submit"
                    class="inline-flex w-fit items-center justify-center rounded-xl border border-white/10 bg-white/5 px-4 py-2 text-sm hover:border-white/20"
                >
                    "Send"
                </button>
            </form>
        </Card>
    }
}
