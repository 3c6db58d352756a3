use leptos::prelude::*;

use crate::content::{next_index, prev_index, SITE};

#[component]
pub fn Projects() -> impl IntoView {
    let projects = &SITE.projects;
    let (current, set_current) = signal(0usize);
    let count = projects.len();

    view! {
        <section id="projects" class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-10">"Projects"</h2>
                <div class="relative">
                    {move || {
                        projects
                            .get(current())
                            .map(|project| {
                                view! {
                                    <article class="rounded-2xl overflow-hidden bg-gray-900 shadow-lg">
                                        <div
                                            class="h-56 flex items-center justify-center"
                                            style=project.thumbnail_style()
                                        >
                                            <h3 class="text-3xl font-bold text-white drop-shadow">
                                                {project.title.clone()}
                                            </h3>
                                        </div>
                                        <div class="p-6">
                                            <p class="text-gray-400 mb-4">
                                                {project.description.clone()}
                                            </p>
                                            <div class="flex flex-wrap gap-2 mb-6">
                                                {project
                                                    .tags
                                                    .iter()
                                                    .map(|tag| {
                                                        view! {
                                                            <span class="px-3 py-1 text-sm rounded-full bg-gray-800 text-emerald-300">
                                                                {tag.clone()}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                            <div class="flex gap-4">
                                                <a
                                                    href=project.link.clone()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="px-4 py-2 rounded-md bg-emerald-500 hover:bg-emerald-600 text-white"
                                                >
                                                    "Visit"
                                                </a>
                                                <a
                                                    href=project.github.clone()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="px-4 py-2 rounded-md border border-gray-600 hover:border-gray-400"
                                                >
                                                    "Code"
                                                </a>
                                            </div>
                                        </div>
                                    </article>
                                }
                            })
                    }}
                    <div class="flex items-center justify-between mt-6">
                        <button
                            aria-label="Previous project"
                            class="px-4 py-2 rounded-full bg-gray-800 hover:bg-gray-700"
                            on:click=move |_| set_current.update(|i| *i = prev_index(*i, count))
                        >
                            "←"
                        </button>
                        <div class="flex gap-2">
                            {(0..count)
                                .map(|index| {
                                    view! {
                                        <button
                                            aria-label=format!("Show project {}", index + 1)
                                            class=move || {
                                                if current() == index {
                                                    "w-3 h-3 rounded-full bg-emerald-400"
                                                } else {
                                                    "w-3 h-3 rounded-full bg-gray-600"
                                                }
                                            }
                                            on:click=move |_| set_current(index)
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button
                            aria-label="Next project"
                            class="px-4 py-2 rounded-full bg-gray-800 hover:bg-gray-700"
                            on:click=move |_| set_current.update(|i| *i = next_index(*i, count))
                        >
                            "→"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
