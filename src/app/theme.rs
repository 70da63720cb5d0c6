use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;

/// Page-wide light/dark theme, provided once at the root.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_stored: WriteSignal<Option<Theme>>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn get_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    /// Flips the theme and remembers the choice for later visits.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("switching theme to {}", next.class());
        self.set_stored.set(Some(next));
    }
}

pub fn provide_theme() -> ThemeContext {
    // storage is read after hydration so the first client render matches the
    // server's markup, which never sees the stored choice
    #[cfg(feature = "hydrate")]
    let (stored, set_stored, _) =
        use_local_storage_with_options::<Option<Theme>, JsonSerdeWasmCodec>(
            THEME_STORAGE_KEY,
            UseStorageOptions::default().delay_during_hydration(true),
        );
    #[cfg(not(feature = "hydrate"))]
    let (stored, set_stored) = {
        let (stored, set_stored) = signal(None::<Theme>);
        (Signal::from(stored), set_stored)
    };

    let prefers_dark = use_preferred_dark();
    // effects only run in the browser, once hydration is done
    let (hydrated, set_hydrated) = signal(false);
    Effect::new(move |_| set_hydrated(true));

    let theme = Signal::derive(move || {
        Theme::resolve(hydrated.get(), stored.get(), prefers_dark.get())
    });

    let ctx = ThemeContext { theme, set_stored };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            type="button"
            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors duration-200"
            aria-label=move || theme.get().toggle_label()
            on:click=move |_| theme.toggle()
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
