use leptos::prelude::*;

use crate::content::SITE;

#[component]
pub fn Skills() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(0usize);
    let (hovered, set_hovered) = signal(None::<&'static str>);
    let categories = &SITE.skills;

    view! {
        <section id="skills" class="py-20 px-4 bg-gray-900/50">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-10">"Skills"</h2>
                <div class="flex justify-center gap-2 mb-10" role="tablist">
                    {categories
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || (active_tab() == index).to_string()
                                    class=move || {
                                        if active_tab() == index {
                                            "px-5 py-2 rounded-full bg-emerald-500 text-white"
                                        } else {
                                            "px-5 py-2 rounded-full bg-gray-800 text-gray-300 hover:bg-gray-700"
                                        }
                                    }
                                    on:click=move |_| {
                                        set_active_tab(index);
                                        set_hovered(None);
                                    }
                                >
                                    {category.name.clone()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    categories
                        .get(active_tab())
                        .map(|category| {
                            view! {
                                <div class="grid grid-cols-3 sm:grid-cols-4 md:grid-cols-6 gap-6">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            let name = skill.name.as_str();
                                            view! {
                                                <div
                                                    class="flex flex-col items-center"
                                                    on:mouseenter=move |_| set_hovered(Some(name))
                                                    on:mouseleave=move |_| set_hovered(None)
                                                >
                                                    <div class="w-20 h-20 flex items-center justify-center rounded-xl bg-gray-800 hover:-translate-y-1 transition-transform">
                                                        <i
                                                            class=format!("{} text-4xl", skill.icon)
                                                            style=format!("color: {}", skill.color)
                                                        ></i>
                                                    </div>
                                                    <span class=move || {
                                                        if hovered() == Some(name) {
                                                            "mt-2 text-sm text-gray-200 opacity-100 transition-opacity"
                                                        } else {
                                                            "mt-2 text-sm text-gray-200 opacity-0 transition-opacity"
                                                        }
                                                    }>{name}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </div>
        </section>
    }
}
