use leptos::prelude::*;

use crate::content::SITE;

#[component]
pub fn About() -> impl IntoView {
    let profile = &SITE.profile;
    view! {
        <section id="about" class="py-20 px-4">
            <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                <img
                    src=profile.portrait.clone()
                    alt=profile.name.clone()
                    class="rounded-2xl shadow-lg w-full max-w-sm mx-auto object-cover"
                />
                <div>
                    <h2 class="text-3xl font-bold mb-6">"About Me"</h2>
                    {profile
                        .about
                        .iter()
                        .map(|paragraph| {
                            view! { <p class="text-gray-400 mb-4">{paragraph.clone()}</p> }
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        class="inline-block mt-2 px-6 py-3 rounded-md border border-emerald-400 text-emerald-400 hover:bg-emerald-400/10 transition-colors"
                    >
                        "Get in Touch"
                    </a>
                </div>
            </div>
            <div class="max-w-4xl mx-auto mt-16 flex flex-wrap justify-center gap-6">
                {profile
                    .tech_icons()
                    .map(|(url, slug)| {
                        view! {
                            <img
                                src=url
                                alt=slug.to_string()
                                title=slug.to_string()
                                loading="lazy"
                                class="w-10 h-10 hover:scale-110 transition-transform"
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
