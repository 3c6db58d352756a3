use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{anchor, SITE};

/// Scroll offset in px past which the navbar gets its solid background.
const SCROLLED_PAST: f64 = 20.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > SCROLLED_PAST;
    let (menu_open, set_menu_open) = signal(false);
    let profile = &SITE.profile;
    let mailto = format!("mailto:{}", profile.email);

    let links = move |class: &'static str| {
        profile
            .nav
            .iter()
            .map(|label| {
                view! {
                    <a href=anchor(label) class=class on:click=move |_| set_menu_open(false)>
                        {label.clone()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            if scrolled() {
                "fixed top-0 inset-x-0 z-40 bg-gray-950/90 backdrop-blur shadow transition-colors duration-300"
            } else {
                "fixed top-0 inset-x-0 z-40 bg-transparent transition-colors duration-300"
            }
        }>
            <div class="max-w-6xl mx-auto px-4 py-4 flex items-center justify-between">
                <a href="#" class="text-xl font-bold text-emerald-400">
                    {profile.name.clone()}
                </a>
                <div class="hidden md:flex items-center space-x-8">
                    {links("text-gray-300 hover:text-emerald-400 transition-colors")}
                    <a
                        href=mailto.clone()
                        class="px-4 py-2 rounded-md bg-emerald-500 hover:bg-emerald-600 text-white"
                    >
                        "Hire Me"
                    </a>
                </div>
                <button
                    class="md:hidden text-gray-300"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=menu_open>
                <div class="md:hidden flex flex-col space-y-4 px-4 pb-4 bg-gray-950/95">
                    {links("text-gray-300 hover:text-emerald-400")}
                    <a
                        href=mailto.clone()
                        class="px-4 py-2 rounded-md bg-emerald-500 text-white text-center"
                    >
                        "Hire Me"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
