use leptos::prelude::*;

use super::about::StatCard;
use super::reveal::{Reveal, SectionHeading};
use crate::content::{EXPERIENCE, EXPERIENCE_STATS};

#[component]
pub fn Experience() -> impl IntoView {
    let job = &EXPERIENCE;
    view! {
        <section id="experience" class="section-padding">
            <div class="container-custom">
                <SectionHeading
                    title="Work"
                    highlight="Experience"
                    subtitle="My professional journey and contributions in software development"
                />
                <div class="relative max-w-4xl mx-auto">
                    <div class="absolute left-4 md:left-8 top-0 bottom-0 w-0.5 bg-gradient-to-b from-blue-500 to-purple-600"></div>
                    <div class="relative pl-12 md:pl-20">
                        <div class="absolute left-2 md:left-6 top-8 w-5 h-5 bg-blue-500 rounded-full border-4 border-white dark:border-gray-900"></div>
                        <Reveal class="bg-white dark:bg-gray-800 p-8 rounded-xl shadow-lg">
                            <div class="flex flex-col md:flex-row md:justify-between md:items-start mb-6">
                                <div>
                                    <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-2">
                                        {job.position}
                                    </h3>
                                    <div class="flex flex-wrap gap-4 text-gray-600 dark:text-gray-400">
                                        <span class="font-medium text-blue-600 dark:text-blue-400">
                                            {job.company}
                                        </span>
                                        <span>{job.location}</span>
                                    </div>
                                </div>
                                <span class="mt-2 md:mt-0 px-4 py-1 bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-300 rounded-full text-sm font-medium">
                                    {job.duration}
                                </span>
                            </div>
                            <p class="text-gray-600 dark:text-gray-400 leading-relaxed mb-6">
                                {job.description}
                            </p>
                            <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                                "Key Responsibilities:"
                            </h4>
                            <div class="grid md:grid-cols-2 gap-3 mb-6">
                                {job
                                    .responsibilities
                                    .iter()
                                    .map(|r| {
                                        view! {
                                            <div class="flex items-start gap-2 text-gray-600 dark:text-gray-400">
                                                <span class="text-green-500">"✓"</span>
                                                <span>{*r}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                                "Technologies Used:"
                            </h4>
                            <div class="flex flex-wrap gap-2">
                                {job
                                    .technologies
                                    .iter()
                                    .map(|t| {
                                        view! {
                                            <span class="px-3 py-1 bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300 rounded-full text-sm font-medium">
                                                {*t}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Reveal>
                    </div>
                    <Reveal index=1 class="relative pl-12 md:pl-20 mt-8">
                        <p class="text-gray-600 dark:text-gray-400 italic">
                            "Continuing to deliver innovative solutions and expand technical expertise at Ginilytics IT Solution"
                        </p>
                    </Reveal>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mt-16">
                    {EXPERIENCE_STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| view! { <StatCard index=i stat /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
