use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::{
    reaches_reveal_threshold, skill_width, stagger_delay, REVEAL_DURATION_MS, REVEAL_THRESHOLD,
    SKILL_BAR_DELAY_MS, SKILL_BAR_DURATION_MS, STAGGER_STEP_MS,
};

/// Latches to `true` the first time a tenth of `target` scrolls into view.
pub fn use_revealed(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let hit = entries
                .iter()
                .any(|e| reaches_reveal_threshold(e.is_intersecting(), e.intersection_ratio()));
            if hit {
                set_revealed(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );
    revealed
}

/// Fades and lifts its children in once visible. `index` staggers siblings.
#[component]
pub fn Reveal(
    #[prop(optional)] index: usize,
    #[prop(default = STAGGER_STEP_MS)] step_ms: u64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_revealed(target);
    let style = format!(
        "transition-duration: {}ms; transition-delay: {}ms",
        REVEAL_DURATION_MS,
        stagger_delay(index, step_ms).as_millis()
    );

    view! {
        <div
            node_ref=target
            style=style
            class=move || {
                let state = if revealed() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-[30px]"
                };
                format!("{class} transition-all ease-out {state}")
            }
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SkillBar(name: &'static str, level: u8) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_revealed(target);
    let style = move || {
        let width = if revealed() { skill_width(level) } else { "0%".to_string() };
        format!(
            "width: {width}; transition: width {SKILL_BAR_DURATION_MS}ms ease-out {SKILL_BAR_DELAY_MS}ms"
        )
    };

    view! {
        <div node_ref=target class="space-y-2">
            <div class="flex justify-between items-center">
                <span class="font-medium text-gray-700 dark:text-gray-300">{name}</span>
                <span class="text-sm text-gray-500 dark:text-gray-400">
                    {skill_width(level)}
                </span>
            </div>
            <div class="w-full h-2 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                <div class="h-full rounded-full bg-gradient-to-r from-blue-500 to-purple-600" style=style></div>
            </div>
        </div>
    }
}

/// Standard section heading: title with a highlighted word plus a subtitle.
#[component]
pub fn SectionHeading(
    title: &'static str,
    highlight: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <Reveal>
                <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-gray-900 dark:text-white mb-4">
                    {title} " " <span class="gradient-text">{highlight}</span>
                </h2>
            </Reveal>
            <Reveal index=1>
                <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">{subtitle}</p>
            </Reveal>
        </div>
    }
}
