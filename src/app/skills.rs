use leptos::prelude::*;

use super::reveal::{Reveal, SectionHeading, SkillBar};
use crate::content::{OTHER_TECHNOLOGIES, SKILL_CATEGORIES};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section-padding bg-gray-50 dark:bg-gray-800/50">
            <div class="container-custom">
                <SectionHeading
                    title="Skills &"
                    highlight="Technologies"
                    subtitle="Here are the technologies and tools I work with to bring ideas to life"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <Reveal
                                    index=i
                                    class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-lg"
                                >
                                    <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-6 text-center">
                                        {category.title}
                                    </h3>
                                    <div class="space-y-4">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! { <SkillBar name=skill.name level=skill.level /> }
                                            })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal class="mt-16 text-center">
                    <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-8">
                        "Other Technologies & Concepts"
                    </h3>
                    <div class="flex flex-wrap justify-center gap-3">
                        {OTHER_TECHNOLOGIES
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-4 py-2 bg-white dark:bg-gray-800 text-gray-700 dark:text-gray-300 rounded-full shadow-md text-sm font-medium hover:shadow-lg transition-shadow">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal class="mt-16 text-center">
                    <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-8">
                        "Certifications & Learning"
                    </h3>
                    <div class="max-w-md mx-auto bg-white dark:bg-gray-800 p-6 rounded-xl shadow-lg">
                        <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">
                            "0 to 100 Web Development Course"
                        </h4>
                        <p class="text-blue-600 dark:text-blue-400 font-medium mb-2">
                            "by Harkirat Singh"
                        </p>
                        <p class="text-gray-600 dark:text-gray-400 text-sm">
                            "Comprehensive full-stack web development training covering modern technologies and best practices"
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
