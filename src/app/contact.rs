use leptos::{
    either::Either,
    ev::{Event, FocusEvent, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use crate::{
    contact::{
        Begin, ContactForm, EmailJsRelay, MailRelay, RelayConfig, ResetTimer, SubmitStatus,
    },
    data::PERSONAL_INFO,
};

use super::{effects::Magnetic, homepage::SectionTitle, hooks::use_tracked_section};

#[component]
pub fn Contact() -> impl IntoView {
    let node_ref = use_tracked_section("contact");
    let form = RwSignal::new(ContactForm::default());
    let submitting = Memo::new(move |_| form.with(ContactForm::is_submitting));

    let schedule_reset = move |timer: ResetTimer| {
        set_timeout(
            move || {
                form.try_update(|f| f.reset(timer));
            },
            timer.delay,
        );
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(begin) = form.try_update(|f| f.begin(RelayConfig::from_env())) else {
            return;
        };
        match begin {
            Begin::Busy => {}
            Begin::Failed(timer) => schedule_reset(timer),
            Begin::Send(config) => {
                let msg = form.with_untracked(|f| f.message().clone());
                log::info!("sending contact message from {}", msg.email);
                spawn_local(async move {
                    let outcome = EmailJsRelay::default().send(&config, &msg).await;
                    if let Some(timer) = form.try_update(|f| f.finish(outcome)) {
                        schedule_reset(timer);
                    }
                });
            }
        }
    };

    view! {
        <section id="contact" node_ref=node_ref class="section-padding bg-gray-50 dark:bg-gray-800/50">
            <div class="max-w-6xl mx-auto">
                <SectionTitle
                    title="Get In Touch"
                    subtitle="Have a project in mind or just want to say hi? My inbox is open."
                />
                <div class="grid lg:grid-cols-5 gap-12">
                    <ContactDetails />
                    <form class="lg:col-span-3 glass rounded-2xl p-8 shadow space-y-6" novalidate on:submit=on_submit>
                        <div class="grid md:grid-cols-2 gap-6">
                            <Field form name="name" label="Name" placeholder="Your name" />
                            <Field
                                form
                                name="email"
                                label="Email"
                                input_type="email"
                                placeholder="you@example.com"
                            />
                        </div>
                        <Field form name="subject" label="Subject" placeholder="What is this about?" />
                        <Field
                            form
                            name="message"
                            label="Message"
                            multiline=true
                            placeholder="Tell me about your project"
                        />
                        <StatusBanner form />
                        <Magnetic strength=0.2>
                            <button
                                type="submit"
                                class="px-8 py-3 rounded-full text-white font-medium bg-gradient-to-r from-purple-600 to-pink-600 shadow-lg disabled:opacity-60 disabled:cursor-not-allowed"
                                disabled=submitting
                            >
                                {move || if submitting() { "Sending..." } else { "Send Message" }}
                            </button>
                        </Magnetic>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="lg:col-span-2 space-y-6">
            <h3 class="text-2xl font-bold text-gray-900 dark:text-white">"Let's talk"</h3>
            <p class="text-gray-600 dark:text-gray-400">
                "I'm open to freelance work, full-time roles and interesting collaborations."
            </p>
            <ul class="space-y-4 text-gray-700 dark:text-gray-300">
                <li>
                    <a href=format!("mailto:{}", PERSONAL_INFO.email) class="hover:text-purple-600">
                        "✉ "{PERSONAL_INFO.email}
                    </a>
                </li>
                <li>
                    <a href=format!("tel:{}", PERSONAL_INFO.phone) class="hover:text-purple-600">
                        "☎ "{PERSONAL_INFO.phone}
                    </a>
                </li>
                <li>"⌖ "{PERSONAL_INFO.location}</li>
            </ul>
        </div>
    }
}

#[component]
fn Field(
    form: RwSignal<ContactForm>,
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(name).to_string());
    let error = move || form.with(|f| f.error_message(name).map(str::to_string));
    let invalid = move || form.with(|f| f.has_error(name));
    let valid = move || form.with(|f| f.is_touched(name) && f.looks_valid(name));
    let disabled = move || form.with(ContactForm::is_submitting);
    let on_input = move |ev: Event| form.update(|f| f.set_field(name, event_target_value(&ev)));
    let on_blur = move |_: FocusEvent| form.update(|f| f.touch(name));
    let id = format!("contact-{name}");

    let class = "w-full px-4 py-3 rounded-lg border bg-white dark:bg-gray-900 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-purple-500";
    let control = if multiline {
        Either::Left(view! {
            <textarea
                id=id.clone()
                name=name
                rows="6"
                placeholder=placeholder
                class=class
                class=("border-red-500", invalid)
                class=("border-green-500", valid)
                class=("border-gray-300", move || !invalid() && !valid())
                aria-invalid=move || invalid().to_string()
                disabled=disabled
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                id=id.clone()
                name=name
                type=input_type
                placeholder=placeholder
                class=class
                class=("border-red-500", invalid)
                class=("border-green-500", valid)
                class=("border-gray-300", move || !invalid() && !valid())
                aria-invalid=move || invalid().to_string()
                disabled=disabled
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        })
    };

    view! {
        <div>
            <label for=id class="block mb-2 text-sm font-medium text-gray-700 dark:text-gray-300">
                {label}
            </label>
            {control}
            {move || error().map(|msg| view! { <p class="mt-1 text-sm text-red-500">{msg}</p> })}
        </div>
    }
}

/// Banner for the current status. Every failure shares one message.
fn status_text(status: &SubmitStatus) -> Option<(bool, &'static str)> {
    match status {
        SubmitStatus::Idle | SubmitStatus::Submitting => None,
        SubmitStatus::Success => Some((true, "Thanks! Your message has been sent.")),
        SubmitStatus::Error(_) => Some((false, "Oops! Something went wrong. Please try again.")),
    }
}

#[component]
fn StatusBanner(form: RwSignal<ContactForm>) -> impl IntoView {
    move || {
        form.with(|f| status_text(f.status())).map(|(ok, text)| {
            view! {
                <div
                    role="status"
                    class="px-4 py-3 rounded-lg text-sm"
                    class=(["bg-green-100", "text-green-800"], ok)
                    class=(["bg-red-100", "text-red-800"], !ok)
                >
                    {text}
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use super::*;
    use crate::contact::{ConfigError, SubmitError, PUBLIC_KEY_KEY};

    #[test]
    fn test_every_failure_shows_the_same_banner() {
        let banner = |e: SubmitError| status_text(&SubmitStatus::Error(e));
        let generic = banner(SubmitError::Invalid);
        assert!(matches!(generic, Some((false, _))));
        assert_eq!(
            banner(SubmitError::Config(ConfigError::Missing {
                key: PUBLIC_KEY_KEY
            })),
            generic
        );
        assert_eq!(banner(SubmitError::Transport("offline".to_string())), generic);
        assert_eq!(
            banner(SubmitError::Rejected {
                status: StatusCode::BAD_REQUEST,
                body: String::new(),
            }),
            generic
        );
    }

    #[test]
    fn test_no_banner_while_idle_or_sending() {
        assert_eq!(status_text(&SubmitStatus::Idle), None);
        assert_eq!(status_text(&SubmitStatus::Submitting), None);
        assert!(matches!(status_text(&SubmitStatus::Success), Some((true, _))));
    }
}
