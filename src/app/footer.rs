use chrono::Datelike;
use leptos::prelude::*;

use crate::content::SITE;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let profile = &SITE.profile;
    let year = chrono::Utc::now().year();
    let build_date = BUILD_TIME.split('T').next().unwrap_or(BUILD_TIME);

    view! {
        <footer class="py-10 px-4 border-t border-gray-800">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="flex gap-6">
                    {profile
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.label.clone()
                                    class="text-gray-400 hover:text-emerald-400 transition-colors"
                                >
                                    <i class=format!("{} text-2xl", social.icon)></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-sm text-gray-500">
                    {format!("© {year} {}. All rights reserved.", profile.name)}
                </p>
                <p class="text-xs text-gray-600" title=BUILD_TIME>
                    {format!("Built {build_date}")}
                </p>
            </div>
        </footer>
    }
}
