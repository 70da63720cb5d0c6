use leptos::prelude::*;

use super::reveal::{Reveal, SectionHeading};
use crate::content::{Project, PROJECTS};

const PROJECT_STAGGER_MS: u64 = 300;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section-padding bg-gray-50 dark:bg-gray-800/50">
            <div class="container-custom">
                <SectionHeading
                    title="Featured"
                    highlight="Projects"
                    subtitle="Showcasing my work across various domains including healthcare, politics, and analytics"
                />
                <div class="space-y-16">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard index=i project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn tag_list(items: &'static [&'static str], class: &'static str) -> impl IntoView {
    items
        .iter()
        .map(|item| view! { <span class=class>{*item}</span> })
        .collect_view()
}

fn bullet_list(items: &'static [&'static str], marker: &'static str) -> impl IntoView {
    items
        .iter()
        .map(|item| {
            view! {
                <li class="flex items-start gap-2 text-sm text-gray-600 dark:text-gray-400">
                    <span class="text-blue-500">{marker}</span>
                    <span>{*item}</span>
                </li>
            }
        })
        .collect_view()
}

#[component]
fn ProjectCard(index: usize, project: &'static Project) -> impl IntoView {
    // alternate the banner side on wide screens
    let banner_order = if index % 2 == 1 { "lg:order-2" } else { "" };
    view! {
        <Reveal
            index=index
            step_ms=PROJECT_STAGGER_MS
            class="grid lg:grid-cols-2 gap-8 items-center bg-white dark:bg-gray-800 rounded-2xl shadow-xl overflow-hidden"
        >
            <div class=format!(
                "h-full min-h-64 p-8 bg-gradient-to-br from-blue-500 to-purple-600 text-white flex flex-col justify-center {banner_order}",
            )>
                <div class="flex gap-2 mb-4">
                    <span class="px-3 py-1 bg-white/20 rounded-full text-sm">{project.category}</span>
                    <span class="px-3 py-1 bg-white/20 rounded-full text-sm">{project.year}</span>
                    <span class="px-3 py-1 bg-green-400/30 rounded-full text-sm">{project.status}</span>
                </div>
                <h3 class="text-3xl font-bold mb-4">{project.title}</h3>
                <p class="text-white/90 leading-relaxed">{project.long_description}</p>
            </div>
            <div class="p-8 space-y-6">
                <p class="text-gray-600 dark:text-gray-400 leading-relaxed">{project.description}</p>
                <div>
                    <h4 class="font-semibold text-gray-900 dark:text-white mb-3">"Key Features"</h4>
                    <ul class="grid sm:grid-cols-2 gap-2">{bullet_list(project.features, "•")}</ul>
                </div>
                <div>
                    <h4 class="font-semibold text-gray-900 dark:text-white mb-3">"My Role"</h4>
                    <ul class="space-y-2">{bullet_list(project.responsibilities, "✓")}</ul>
                </div>
                <div class="flex flex-wrap gap-2">
                    {tag_list(
                        project.technologies,
                        "px-3 py-1 bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300 rounded-full text-xs font-medium",
                    )}
                </div>
            </div>
        </Reveal>
    }
}
