use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::reveal::Reveal;
use crate::content::{EMAIL, LINKEDIN_URL, NAV_LINKS, OWNER_NAME, PHONE, PHONE_LINK};

const BUILD_YEAR: &str = env!("BUILD_YEAR");
const SCROLL_TOP_THRESHOLD: f64 = 300.0;

fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[component]
pub fn Footer() -> impl IntoView {
    // quick links cover the main content sections only
    let quick_links = NAV_LINKS
        .iter()
        .filter(|link| !matches!(link.section, "hero" | "achievements"));

    view! {
        <footer class="bg-gray-900 text-white relative overflow-hidden">
            <div class="container-custom px-4 sm:px-6 lg:px-8 py-16">
                <div class="grid md:grid-cols-3 gap-12">
                    <Reveal>
                        <h3 class="text-2xl font-bold gradient-text mb-4">{OWNER_NAME}</h3>
                        <p class="text-gray-400 leading-relaxed mb-6">
                            "Software Engineer passionate about creating innovative solutions with modern technologies. Specializing in .NET Core, React.js, and full-stack development."
                        </p>
                        <p class="text-gray-400 text-sm">"Made with ♥ using Rust & Leptos"</p>
                    </Reveal>
                    <Reveal index=1>
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {quick_links
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a
                                                href=link.href()
                                                class="text-gray-400 hover:text-white transition-colors duration-200"
                                            >
                                                {link.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Reveal>
                    <Reveal index=2>
                        <h4 class="text-lg font-semibold mb-4">"Get In Touch"</h4>
                        <div class="space-y-2 mb-6">
                            <a
                                href=format!("mailto:{EMAIL}")
                                class="block text-gray-400 hover:text-white transition-colors"
                            >
                                {EMAIL}
                            </a>
                            <a
                                href=PHONE_LINK
                                class="block text-gray-400 hover:text-white transition-colors"
                            >
                                {PHONE}
                            </a>
                        </div>
                        <a
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-2xl text-gray-400 hover:text-white"
                            aria-label="LinkedIn"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                    </Reveal>
                </div>
            </div>
            <div class="border-t border-gray-800">
                <div class="container-custom px-4 sm:px-6 lg:px-8 py-6 flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="text-gray-400 text-sm">
                        {format!("© {BUILD_YEAR} {OWNER_NAME}. All rights reserved.")}
                    </p>
                    <p class="text-gray-400 text-sm">"Currently working at Ginilytics IT Solution"</p>
                    <button
                        type="button"
                        class="p-2 bg-gray-800 hover:bg-gray-700 rounded-lg transition-colors"
                        aria-label="Scroll to top"
                        on:click=move |_| scroll_to_top()
                    >
                        "↑"
                    </button>
                </div>
            </div>
        </footer>
    }
}

/// Floating button shown once the page is scrolled past the hero.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let visible = move || scroll_y.get() > SCROLL_TOP_THRESHOLD;

    view! {
        <Show when=visible>
            <button
                type="button"
                class="fixed bottom-8 right-8 z-50 p-3 bg-blue-600 hover:bg-blue-700 text-white rounded-full shadow-lg transition-all duration-300"
                aria-label="Scroll to top"
                on:click=move |_| scroll_to_top()
            >
                "↑"
            </button>
        </Show>
    }
}
