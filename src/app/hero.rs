use leptos::prelude::*;

use crate::content::SITE;
use crate::motion::letter_delays;

const NAME_DELAY_SECS: f64 = 0.5;
const LETTER_STAGGER_SECS: f64 = 0.08;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &SITE.profile;
    view! {
        <section
            id="home"
            class="min-h-screen flex flex-col items-center justify-center text-center px-4"
        >
            <h1 class="text-4xl md:text-6xl font-bold mb-6">
                <span class="block text-gray-300 mb-2">"Hi, I'm"</span>
                <span class="block text-emerald-400" aria-label=profile.name.clone()>
                    {letter_delays(&profile.name, NAME_DELAY_SECS, LETTER_STAGGER_SECS)
                        .into_iter()
                        .map(|(letter, delay)| {
                            // keep spaces from collapsing inside inline-block spans
                            let letter = if letter == ' ' { '\u{a0}' } else { letter };
                            view! {
                                <span
                                    class="letter-reveal inline-block"
                                    aria-hidden="true"
                                    style=format!("animation-delay: {delay:.2}s")
                                >
                                    {letter.to_string()}
                                </span>
                            }
                        })
                        .collect_view()}
                </span>
            </h1>
            <p class="text-lg md:text-xl text-gray-400 max-w-2xl mb-8">
                {profile.tagline.clone()}
            </p>
            <a
                href="#projects"
                class="px-6 py-3 rounded-md bg-emerald-500 hover:bg-emerald-600 text-white font-medium transition-colors"
            >
                "View My Work"
            </a>
        </section>
    }
}
