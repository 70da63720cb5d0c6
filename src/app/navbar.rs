use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::theme::ThemeToggle;
use crate::content::{NAV_LINKS, OWNER_NAME};

const SCROLLED_OFFSET: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);
    let scrolled = move || scroll_y.get() > SCROLLED_OFFSET;

    view! {
        <nav class=move || {
            let bg = if scrolled() {
                "bg-white/90 dark:bg-gray-900/90 backdrop-blur-md shadow-lg"
            } else {
                "bg-transparent"
            };
            format!("fixed top-0 inset-x-0 z-50 transition-all duration-300 {bg}")
        }>
            <div class="container-custom px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="#hero" class="text-xl font-bold gradient-text">
                        {OWNER_NAME}
                    </a>
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href()
                                        class="text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 font-medium transition-colors duration-200"
                                    >
                                        {link.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>
                    <div class="md:hidden flex items-center space-x-2">
                        <ThemeToggle />
                        <button
                            type="button"
                            class="p-2 rounded-lg text-gray-700 dark:text-gray-300"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=menu_open>
                <div class="md:hidden bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-800">
                    <div class="px-4 py-2 space-y-1">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href()
                                        class="block px-3 py-2 rounded-md text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                                        on:click=move |_| set_menu_open(false)
                                    >
                                        {link.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
