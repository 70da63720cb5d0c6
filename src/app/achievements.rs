use leptos::prelude::*;

use super::reveal::{Reveal, SectionHeading};
use crate::content::{ACHIEVEMENTS, GROWTH_STATEMENT};

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section id="achievements" class="section-padding bg-gray-50 dark:bg-gray-800/50">
            <div class="container-custom">
                <SectionHeading
                    title="Achievements &"
                    highlight="Milestones"
                    subtitle="Recognition and milestones that mark my journey in technology and professional growth"
                />
                <div class="grid md:grid-cols-2 gap-8">
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(i, a)| {
                            view! {
                                <Reveal
                                    index=i
                                    class="relative p-8 bg-white dark:bg-gray-800 rounded-xl shadow-lg hover:shadow-xl transition-shadow overflow-hidden"
                                >
                                    <div class="flex justify-between items-center mb-4">
                                        <span class="px-3 py-1 bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300 rounded-full text-xs font-medium">
                                            {a.category}
                                        </span>
                                        <span class="text-sm font-semibold text-gray-500 dark:text-gray-400">
                                            {a.year}
                                        </span>
                                    </div>
                                    <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">
                                        {a.title}
                                    </h3>
                                    <p class="text-blue-600 dark:text-blue-400 font-medium mb-4">
                                        {a.organization}
                                    </p>
                                    <p class="text-gray-600 dark:text-gray-400 leading-relaxed">
                                        {a.description}
                                    </p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal class="mt-16 text-center bg-gradient-to-r from-blue-50 to-purple-50 dark:from-blue-900/20 dark:to-purple-900/20 p-8 rounded-xl">
                    <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">
                        "Continuous Growth & Learning"
                    </h3>
                    <p class="text-gray-600 dark:text-gray-400 max-w-3xl mx-auto leading-relaxed">
                        {GROWTH_STATEMENT}
                    </p>
                </Reveal>
            </div>
        </section>
    }
}
