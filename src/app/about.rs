use leptos::prelude::*;

use super::reveal::{Reveal, SectionHeading};
use crate::content::{Stat, ABOUT_PARAGRAPHS, ABOUT_STATS, HOBBIES, STRENGTHS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section-padding">
            <div class="container-custom">
                <SectionHeading
                    title="About"
                    highlight="Me"
                    subtitle="Passionate software engineer with expertise in modern web technologies"
                />
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="space-y-6">
                        <Reveal>
                            <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">
                                "My Journey"
                            </h3>
                            {ABOUT_PARAGRAPHS
                                .iter()
                                .map(|p| {
                                    view! {
                                        <p class="text-gray-600 dark:text-gray-400 leading-relaxed mb-4">
                                            {*p}
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </Reveal>
                        <Reveal index=1>
                            <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-3">
                                "My Strengths"
                            </h4>
                            <ul class="space-y-2">
                                {STRENGTHS
                                    .iter()
                                    .map(|s| {
                                        view! {
                                            <li class="flex items-center text-gray-600 dark:text-gray-400">
                                                <span class="w-2 h-2 bg-blue-500 rounded-full mr-3"></span>
                                                {*s}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Reveal>
                        <Reveal index=2>
                            <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-3">
                                "Hobbies & Interests"
                            </h4>
                            <div class="flex flex-wrap gap-2">
                                {HOBBIES
                                    .iter()
                                    .map(|hobby| {
                                        view! {
                                            <span class="px-4 py-2 bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300 rounded-full text-sm font-medium">
                                                {*hobby}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Reveal>
                    </div>
                    <div class="grid grid-cols-2 gap-6">
                        {ABOUT_STATS
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| view! { <StatCard index=i stat /> })
                            .collect_view()}
                    </div>
                </div>
                <Reveal class="mt-16 text-center">
                    <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">"Languages"</h3>
                    <div class="flex justify-center gap-8">
                        <span class="px-6 py-3 bg-white dark:bg-gray-800 rounded-lg shadow font-medium text-gray-700 dark:text-gray-300">
                            "English"
                        </span>
                        <span class="px-6 py-3 bg-white dark:bg-gray-800 rounded-lg shadow font-medium text-gray-700 dark:text-gray-300">
                            "Hindi"
                        </span>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn StatCard(index: usize, stat: &'static Stat) -> impl IntoView {
    view! {
        <Reveal
            index=index
            class="p-6 bg-white dark:bg-gray-800 rounded-xl shadow-lg hover:shadow-xl transition-shadow text-center"
        >
            <div class="text-3xl font-bold gradient-text mb-2">{stat.number}</div>
            <div class="font-semibold text-gray-900 dark:text-white">{stat.label}</div>
            {(!stat.description.is_empty())
                .then(|| {
                    view! {
                        <div class="text-sm text-gray-600 dark:text-gray-400 mt-1">
                            {stat.description}
                        </div>
                    }
                })}
        </Reveal>
    }
}
