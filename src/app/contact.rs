use std::time::Duration;

use leptos::{
    either::*,
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use super::reveal::{Reveal, SectionHeading};
use crate::contact::{ContactController, Field, Scheduler, SubmissionStatus};
use crate::content::{CONTACT_CHANNELS, EMAIL, PHONE_LINK, SOCIAL_LINKS};
use crate::relay::EmailJsRelay;

/// Defers work with the browser's `setTimeout`.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) {
        set_timeout(task, delay);
    }
}

type SiteController = ContactController<EmailJsRelay, TimeoutScheduler>;

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent bg-white dark:bg-gray-700 text-gray-900 dark:text-white transition-colors duration-200";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section-padding bg-gray-50 dark:bg-gray-800/50">
            <div class="container-custom">
                <SectionHeading
                    title="Get In"
                    highlight="Touch"
                    subtitle="I'm always open to discussing new opportunities, interesting projects, or just having a chat about technology"
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <ContactInfo />
                    <Reveal class="bg-white dark:bg-gray-800 p-8 rounded-xl shadow-lg">
                        <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">
                            "Send Message"
                        </h3>
                        <ContactForm />
                    </Reveal>
                </div>
                <Reveal class="mt-16 text-center bg-gradient-to-r from-blue-50 to-purple-50 dark:from-blue-900/20 dark:to-purple-900/20 p-8 rounded-xl">
                    <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">
                        "Ready to Work Together?"
                    </h3>
                    <p class="text-gray-600 dark:text-gray-400 mb-6 max-w-2xl mx-auto">
                        "I'm always excited to take on new challenges and collaborate on innovative projects. Let's discuss how we can bring your ideas to life with cutting-edge technology solutions."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href=format!("mailto:{EMAIL}")
                            class="px-8 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium shadow-lg transition-colors duration-200"
                        >
                            "Email Me Directly"
                        </a>
                        <a
                            href=PHONE_LINK
                            class="px-8 py-3 border-2 border-blue-600 text-blue-600 dark:text-blue-400 hover:bg-blue-600 hover:text-white rounded-lg font-medium transition-all duration-200"
                        >
                            "Call Me"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <Reveal>
                <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">"Let's Connect"</h3>
                <p class="text-gray-600 dark:text-gray-400 leading-relaxed">
                    "I'm currently working as a Software Engineer at Ginilytics IT Solution and am always interested in new challenges and opportunities. Whether you have a project in mind, want to collaborate, or just want to say hello, I'd love to hear from you!"
                </p>
            </Reveal>
            <div class="space-y-4">
                {CONTACT_CHANNELS
                    .iter()
                    .enumerate()
                    .map(|(i, channel)| {
                        view! {
                            <Reveal index={i + 1}>
                                <a
                                    href=channel.link
                                    class="flex items-center p-4 bg-white dark:bg-gray-800 rounded-xl shadow-lg hover:shadow-xl transition-all duration-300"
                                >
                                    <div>
                                        <h4 class="font-semibold text-gray-900 dark:text-white">
                                            {channel.title}
                                        </h4>
                                        <p class="text-gray-600 dark:text-gray-400">{channel.value}</p>
                                    </div>
                                </a>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
            <Reveal index={CONTACT_CHANNELS.len() + 1} class="pt-8">
                <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">"Follow Me"</h4>
                <div class="flex space-x-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-4 py-3 bg-white dark:bg-gray-800 rounded-lg shadow-lg text-gray-600 dark:text-gray-400 hover:text-blue-600 transition-all duration-300"
                                    aria-label=social.name
                                >
                                    {social.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let controller: SiteController =
        ContactController::new(EmailJsRelay::default(), TimeoutScheduler);
    let state = RwSignal::from(controller.state());

    let value = move |field: Field| move || state.with(|s| s.form.get(field).to_string());
    let on_input = {
        let controller = controller.clone();
        move |field: Field| {
            let controller = controller.clone();
            move |ev: Event| controller.set_field(field, event_target_value(&ev))
        }
    };
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            controller.submit().await;
        });
    };
    let pending = move || state.with(|s| s.is_pending());

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="grid md:grid-cols-2 gap-6">
                <div class="space-y-2">
                    <label for="name" class="text-sm font-medium text-gray-700 dark:text-gray-300">
                        "Your Name"
                    </label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        required
                        class=INPUT_CLASS
                        placeholder="John Doe"
                        prop:value=value(Field::Name)
                        on:input=on_input(Field::Name)
                    />
                </div>
                <div class="space-y-2">
                    <label for="email" class="text-sm font-medium text-gray-700 dark:text-gray-300">
                        "Email Address"
                    </label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        required
                        class=INPUT_CLASS
                        placeholder="john@example.com"
                        prop:value=value(Field::Email)
                        on:input=on_input(Field::Email)
                    />
                </div>
            </div>
            <div class="space-y-2">
                <label for="subject" class="text-sm font-medium text-gray-700 dark:text-gray-300">
                    "Subject"
                </label>
                <input
                    type="text"
                    id="subject"
                    name="subject"
                    required
                    class=INPUT_CLASS
                    placeholder="Project Collaboration"
                    prop:value=value(Field::Subject)
                    on:input=on_input(Field::Subject)
                />
            </div>
            <div class="space-y-2">
                <label for="message" class="text-sm font-medium text-gray-700 dark:text-gray-300">
                    "Message"
                </label>
                <textarea
                    id="message"
                    name="message"
                    required
                    rows=5
                    class=format!("{INPUT_CLASS} resize-none")
                    placeholder="Tell me about your project or just say hello..."
                    prop:value=value(Field::Message)
                    on:input=on_input(Field::Message)
                ></textarea>
            </div>
            <button
                type="submit"
                disabled=pending
                class="w-full flex items-center justify-center gap-2 px-8 py-4 bg-blue-600 hover:bg-blue-700 disabled:bg-blue-400 text-white rounded-lg font-medium transition-colors duration-200 shadow-lg hover:shadow-xl"
            >
                {move || {
                    if pending() {
                        Either::Left(
                            view! {
                                <div class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
                                "Sending..."
                            },
                        )
                    } else {
                        Either::Right(view! { "➤ Send Message" })
                    }
                }}
            </button>
            {move || {
                state
                    .with(|s| {
                        s.status().is_settled().then(|| (s.status(), s.message().to_string()))
                    })
                    .map(|(status, message)| view! { <StatusBanner status message /> })
            }}
        </form>
    }
}

#[component]
fn StatusBanner(status: SubmissionStatus, message: String) -> impl IntoView {
    let (class, icon) = if status == SubmissionStatus::Success {
        (
            "bg-green-50 dark:bg-green-900/20 text-green-700 dark:text-green-400 border border-green-200 dark:border-green-800",
            "✓",
        )
    } else {
        (
            "bg-red-50 dark:bg-red-900/20 text-red-700 dark:text-red-400 border border-red-200 dark:border-red-800",
            "⚠",
        )
    };
    view! {
        <div role="status" class=format!("flex items-center gap-2 p-4 rounded-lg {class}")>
            <span class="flex-shrink-0">{icon}</span>
            <p class="text-sm font-medium">{message}</p>
        </div>
    }
}
