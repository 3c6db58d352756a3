use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::contact::DRAFT_KEY;
use crate::contact::{ContactForm, FieldErrors, FormField, MAX_MESSAGE_LEN};
use crate::content::SITE;

const NOTICE_DISMISS_MS: f64 = 5000.0;

/// Validates the message again and hands it to the email service once.
#[server]
pub async fn send_message(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::email::EmailError;
    use crate::services::Services;

    let form = ContactForm::new(name, email, message);
    let errors = form.validate();
    if !errors.is_empty() {
        let reasons = errors.into_values().collect::<Vec<_>>().join(", ");
        return Err(ServerFnError::new(reasons));
    }
    let services = use_context::<Services>()
        .ok_or_else(|| ServerFnError::new("Email service unavailable"))?;
    let client = services
        .email
        .ok_or_else(|| ServerFnError::new(EmailError::NotConfigured.to_string()))?;
    client.send(&form).await.map_err(|e| {
        tracing::error!("contact message failed: {e}");
        ServerFnError::new("Failed to send message. Please try again later.")
    })
}

#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Sent,
    Failed(String),
}

#[component]
pub fn Contact() -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (notice, set_notice) = signal(None::<Notice>);
    let send = ServerAction::<SendMessage>::new();
    let pending = send.pending();

    let UseTimeoutFnReturn {
        start: start_dismiss,
        ..
    } = use_timeout_fn(move |_: ()| set_notice(None), NOTICE_DISMISS_MS);

    #[cfg(feature = "hydrate")]
    let (draft, set_draft, clear_draft) =
        use_local_storage::<ContactForm, JsonSerdeWasmCodec>(DRAFT_KEY);

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let saved = draft.get_untracked();
            if !saved.is_empty() {
                set_form(saved);
            }
        },
        true,
    );

    Effect::watch(
        move || send.value().get(),
        move |result, _, _| {
            let shown = match result {
                Some(Ok(())) => {
                    set_form(ContactForm::default());
                    #[cfg(feature = "hydrate")]
                    clear_draft();
                    Notice::Sent
                }
                Some(Err(ServerFnError::ServerError(message))) => Notice::Failed(message.clone()),
                Some(Err(e)) => Notice::Failed(e.to_string()),
                None => return,
            };
            if let Notice::Failed(message) = &shown {
                log::warn!("contact form not sent: {message}");
            }
            set_notice(Some(shown));
            start_dismiss(());
        },
        false,
    );

    let update = move |field: FormField, value: String| {
        set_form.update(|f| f.set_field(field, value));
        set_errors.update(|errors| {
            errors.remove(&field);
        });
        #[cfg(feature = "hydrate")]
        set_draft.set(form.get_untracked());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        let problems = current.validate();
        if !problems.is_empty() {
            set_errors(problems);
            return;
        }
        set_errors(FieldErrors::new());
        send.dispatch(SendMessage {
            name: current.name,
            email: current.email,
            message: current.message,
        });
    };

    let value_of = move |field: FormField| move || form.with(|f| f.field(field).to_string());
    let error_for = move |field: FormField| {
        move || {
            errors
                .with(|e| e.get(&field).cloned())
                .map(|message| view! { <p class="mt-1 text-sm text-red-400">{message}</p> })
        }
    };
    let input_class = move |field: FormField| {
        move || {
            if errors.with(|e| e.contains_key(&field)) {
                "w-full px-4 py-3 rounded-md bg-gray-900 border border-red-500 focus:outline-none focus:ring-2 focus:ring-red-500"
            } else {
                "w-full px-4 py-3 rounded-md bg-gray-900 border border-gray-700 focus:outline-none focus:ring-2 focus:ring-emerald-500"
            }
        }
    };

    view! {
        <section id="contact" class="py-20 px-4 bg-gray-900/50">
            <div class="max-w-2xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-4">"Get in Touch"</h2>
                <p class="text-center text-gray-400 mb-10">
                    "Have a project in mind or just want to say hi? Write to "
                    <a href=format!("mailto:{}", SITE.profile.email) class="text-emerald-400">
                        {SITE.profile.email.clone()}
                    </a> " or use the form below."
                </p>
                {move || {
                    notice()
                        .map(|notice| match notice {
                            Notice::Sent => {
                                view! {
                                    <div
                                        role="status"
                                        class="mb-6 p-4 rounded-md bg-emerald-900/40 border border-emerald-700 text-emerald-300"
                                    >
                                        "Message sent successfully! I'll get back to you soon."
                                    </div>
                                }
                                    .into_any()
                            }
                            Notice::Failed(message) => {
                                view! {
                                    <div
                                        role="alert"
                                        class="mb-6 p-4 rounded-md bg-red-900/40 border border-red-700 text-red-300"
                                    >
                                        {message}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
                <form class="space-y-6" novalidate=true on:submit=on_submit>
                    <div>
                        <label for="contact_name" class="block mb-2 text-gray-300">"Name"</label>
                        <input
                            id="contact_name"
                            type="text"
                            class=input_class(FormField::Name)
                            prop:value=value_of(FormField::Name)
                            on:input=move |ev| update(FormField::Name, event_target_value(&ev))
                        />
                        {error_for(FormField::Name)}
                    </div>
                    <div>
                        <label for="contact_email" class="block mb-2 text-gray-300">"Email"</label>
                        <input
                            id="contact_email"
                            type="email"
                            class=input_class(FormField::Email)
                            prop:value=value_of(FormField::Email)
                            on:input=move |ev| update(FormField::Email, event_target_value(&ev))
                        />
                        {error_for(FormField::Email)}
                    </div>
                    <div>
                        <label for="contact_message" class="block mb-2 text-gray-300">
                            "Message"
                        </label>
                        <textarea
                            id="contact_message"
                            rows="5"
                            maxlength=MAX_MESSAGE_LEN.to_string()
                            class=input_class(FormField::Message)
                            prop:value=value_of(FormField::Message)
                            on:input=move |ev| update(FormField::Message, event_target_value(&ev))
                        ></textarea>
                        <div class="flex justify-between">
                            {error_for(FormField::Message)}
                            <span class="ml-auto mt-1 text-xs text-gray-500">
                                {move || {
                                    format!("{} characters left", form.with(|f| f.remaining_chars()))
                                }}
                            </span>
                        </div>
                    </div>
                    <button
                        type="submit"
                        class="w-full py-3 rounded-md bg-emerald-500 hover:bg-emerald-600 disabled:opacity-50 disabled:cursor-not-allowed text-white font-medium transition-colors"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
