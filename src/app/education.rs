use leptos::prelude::*;

use super::reveal::{Reveal, SectionHeading};
use crate::content::{Degree, EDUCATION};

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="section-padding">
            <div class="container-custom">
                <SectionHeading
                    title="Education"
                    highlight="Journey"
                    subtitle="My academic background and continuous learning path in computer science"
                />
                <div class="relative max-w-4xl mx-auto space-y-8">
                    <div class="absolute left-4 md:left-8 top-0 bottom-0 w-0.5 bg-gradient-to-b from-blue-500 to-purple-600"></div>
                    {EDUCATION
                        .iter()
                        .enumerate()
                        .map(|(i, degree)| view! { <DegreeCard index=i degree /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn DegreeCard(index: usize, degree: &'static Degree) -> impl IntoView {
    let (dot, badge) = if degree.in_progress {
        (
            "bg-green-500 animate-pulse",
            "bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-300",
        )
    } else {
        (
            "bg-blue-500",
            "bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300",
        )
    };

    view! {
        <div class="relative pl-12 md:pl-20">
            <div class=format!(
                "absolute left-2 md:left-6 top-8 w-5 h-5 rounded-full border-4 border-white dark:border-gray-900 {dot}",
            )></div>
            <Reveal index=index class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-lg">
                <div class="flex flex-col md:flex-row md:justify-between md:items-start gap-4 mb-4">
                    <div>
                        <h3 class="text-xl font-bold text-gray-900 dark:text-white">{degree.degree}</h3>
                        <h4 class="text-lg text-blue-600 dark:text-blue-400 font-medium">
                            {degree.institution}
                        </h4>
                        <div class="flex flex-wrap gap-4 mt-2 text-sm text-gray-600 dark:text-gray-400">
                            <span>{degree.location}</span>
                            <span>{degree.duration}</span>
                        </div>
                    </div>
                    <span class=format!("px-3 py-1 rounded-full text-sm font-medium {badge}")>
                        {degree.status()}
                    </span>
                </div>
                <p class="text-gray-600 dark:text-gray-400 mb-4">{degree.description}</p>
                <h5 class="font-semibold text-gray-900 dark:text-white mb-2">"Key Subjects:"</h5>
                <div class="flex flex-wrap gap-2">
                    {degree
                        .highlights
                        .iter()
                        .map(|h| {
                            view! {
                                <span class="px-3 py-1 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded-full text-sm">
                                    {*h}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </div>
    }
}
