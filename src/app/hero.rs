use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::reveal::Reveal;
use crate::content::{EMAIL, HERO_BLURB, HERO_ROLES, LINKEDIN_URL, OWNER_NAME, PHONE, PHONE_LINK};
use crate::motion::{TypewriterState, TYPE_TICK_MS};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="hero"
            class="min-h-screen flex items-center justify-center relative overflow-hidden pt-16"
        >
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-gradient-to-br from-blue-400 to-purple-600 rounded-full opacity-20 blur-3xl animate-pulse"></div>
                <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-gradient-to-br from-purple-400 to-pink-600 rounded-full opacity-20 blur-3xl animate-pulse"></div>
            </div>
            <div class="container-custom px-4 text-center relative z-10">
                <Reveal>
                    <div class="w-32 h-32 mx-auto mb-8 rounded-full bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center text-white text-4xl font-bold shadow-2xl">
                        "NA"
                    </div>
                </Reveal>
                <Reveal index=1>
                    <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold text-gray-900 dark:text-white mb-4">
                        "Hi, I'm " <span class="gradient-text">{OWNER_NAME}</span>
                    </h1>
                </Reveal>
                <Reveal index=2>
                    <div class="text-xl md:text-2xl lg:text-3xl text-gray-600 dark:text-gray-300 mb-8 h-12">
                        <RoleTypewriter />
                    </div>
                </Reveal>
                <Reveal index=3>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-3xl mx-auto mb-8 leading-relaxed">
                        {HERO_BLURB}
                    </p>
                </Reveal>
                <Reveal index=4 class="flex flex-wrap justify-center gap-6 mb-8">
                    <a
                        href=format!("mailto:{EMAIL}")
                        class="flex items-center gap-2 text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                    >
                        "✉ "
                        {EMAIL}
                    </a>
                    <a
                        href=PHONE_LINK
                        class="flex items-center gap-2 text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
                    >
                        "☎ "
                        {PHONE}
                    </a>
                </Reveal>
                <Reveal index=5 class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                    <a
                        href="#about"
                        class="px-8 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium shadow-lg transition-colors duration-200"
                    >
                        "Learn More About Me"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 border-2 border-blue-600 text-blue-600 dark:text-blue-400 hover:bg-blue-600 hover:text-white rounded-lg font-medium transition-all duration-200"
                    >
                        "Get In Touch"
                    </a>
                </Reveal>
                <Reveal index=6 class="flex justify-center gap-6">
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-2xl text-gray-600 dark:text-gray-400 hover:text-blue-600"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </Reveal>
                <a
                    href="#about"
                    class="absolute bottom-8 left-1/2 -translate-x-1/2 text-gray-400 animate-bounce"
                    aria-label="Scroll to about"
                >
                    "↓"
                </a>
            </div>
        </section>
    }
}

#[component]
fn RoleTypewriter() -> impl IntoView {
    let state = RwSignal::new(TypewriterState::new(HERO_ROLES));
    // no-op on the server; ticks start after hydration
    use_interval_fn(move || state.update(TypewriterState::tick), TYPE_TICK_MS);

    view! {
        <span class="font-semibold text-blue-600 dark:text-blue-400">
            {move || state.with(|s| s.text())}
        </span>
        <span class="animate-pulse">"|"</span>
    }
}
