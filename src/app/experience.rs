use leptos::{html, prelude::*};
use leptos_use::{
    use_element_bounding, use_window_size, UseElementBoundingReturn, UseWindowSizeReturn,
};

use crate::content::{toggle_expanded, Position, SITE};
use crate::motion::{scroll_progress, ScrollStyle};

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(section_ref);
    let UseWindowSizeReturn {
        height: viewport_height,
        ..
    } = use_window_size();
    let style = move || {
        let viewport = viewport_height.get();
        // not measured yet, e.g. during the server render
        if viewport <= 0.0 || height.get() <= 0.0 {
            return ScrollStyle::resting().to_css();
        }
        ScrollStyle::at(scroll_progress(top.get(), height.get(), viewport)).to_css()
    };
    let (expanded, set_expanded) = signal(None::<usize>);

    view! {
        <section id="experience" node_ref=section_ref class="py-20 px-4">
            <div class="max-w-4xl mx-auto will-change-transform" style=style>
                <h2 class="text-3xl font-bold text-center mb-12">"Experience"</h2>
                <div class="relative border-l-2 border-emerald-400/40 ml-4 space-y-10">
                    {SITE
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(index, position)| {
                            let is_open = Signal::derive(move || expanded.get() == Some(index));
                            view! {
                                <PositionCard
                                    position=position
                                    is_open=is_open
                                    on_toggle=move || {
                                        set_expanded.update(|open| *open = toggle_expanded(*open, index))
                                    }
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PositionCard(
    position: &'static Position,
    #[prop(into)] is_open: Signal<bool>,
    on_toggle: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="relative pl-8">
            <span
                class="absolute -left-[11px] top-2 w-5 h-5 rounded-full border-2 border-gray-950"
                style=format!("background-color: {}", position.accent)
            ></span>
            <button
                class="w-full text-left p-6 rounded-xl bg-gray-900 hover:bg-gray-800 transition-colors"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| on_toggle()
            >
                <div class="flex items-center justify-between gap-4">
                    <div>
                        <h3 class="text-xl font-semibold">
                            <i class=format!("{} mr-2", position.icon)></i>
                            {position.role.clone()}
                        </h3>
                        <p class="text-emerald-400">{position.company.clone()}</p>
                        <p class="text-sm text-gray-500">
                            {format!(
                                "{} · {} · {}",
                                position.location,
                                position.job_type,
                                position.duration,
                            )}
                        </p>
                    </div>
                    <span class=move || {
                        if is_open.get() {
                            "text-gray-400 transition-transform rotate-180"
                        } else {
                            "text-gray-400 transition-transform"
                        }
                    }>"▾"</span>
                </div>
                <Show when=move || is_open.get()>
                    <div class="mt-4 space-y-4 text-gray-300">
                        <div>
                            <h4 class="font-medium mb-2">"Responsibilities"</h4>
                            <ul class="list-disc list-inside space-y-1">
                                {position
                                    .responsibilities
                                    .iter()
                                    .map(|item| view! { <li>{item.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div>
                            <h4 class="font-medium mb-2">"Projects"</h4>
                            <ul class="list-disc list-inside space-y-1">
                                {position
                                    .projects
                                    .iter()
                                    .map(|item| view! { <li>{item.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </Show>
            </button>
        </div>
    }
}
