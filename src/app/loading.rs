use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

/// How long the loading animation is shown before the page is revealed.
pub const LOADING_DELAY_MS: f64 = 2000.0;

/// Shows [`LoadingAnimation`] until the delay elapses, then the children.
///
/// The timer only runs in the browser and is cancelled if the gate unmounts
/// first.
#[component]
pub fn LoadingGate(children: ChildrenFn) -> impl IntoView {
    let (ready, set_ready) = signal(false);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_ready(true), LOADING_DELAY_MS);
    start(());

    view! {
        <Show when=ready fallback=LoadingAnimation>
            {children()}
        </Show>
    }
}

#[component]
pub fn LoadingAnimation() -> impl IntoView {
    view! {
        <div class="fixed inset-0 flex items-center justify-center bg-gray-950 z-50">
            <div class="flex space-x-3" role="status" aria-label="Loading">
                {(0..3)
                    .map(|i| {
                        view! {
                            <span
                                class="loading-dot w-4 h-4 rounded-full bg-emerald-400"
                                style=format!("animation-delay: {:.2}s", i as f64 * 0.15)
                            ></span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
