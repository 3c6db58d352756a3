use chrono::{Datelike, Weekday};
use leptos::{prelude::*, server_fn::codec::GetUrl};

use crate::contributions::{
    describe_day, year_options, ContributionDay, ContributionGrid, ContributionWeek,
    HeatmapState, Intensity, LEGEND_SAMPLES,
};

fn error_message(e: ServerFnError) -> String {
    match e {
        ServerFnError::ServerError(message) => message,
        e => format!("Error fetching data: {e}"),
    }
}

fn fetch_error(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::new(format!("Error fetching data: {e}"))
}

/// Builds the heat map for `username` and the calendar `year`.
///
/// Only the site owner's login is served.
#[server(input = GetUrl)]
pub async fn get_contributions(
    username: String,
    year: i32,
) -> Result<ContributionGrid, ServerFnError> {
    use crate::content::SITE;
    use crate::contributions::check_profile_login;
    use crate::services::Services;

    let login = check_profile_login(&username, &SITE.profile.github_username)
        .map_err(fetch_error)?;
    let services = use_context::<Services>()
        .ok_or_else(|| ServerFnError::new("Contributions service unavailable"))?;
    services
        .contributions
        .fetch_grid(login, year)
        .await
        .map_err(|e| {
            tracing::warn!(%username, year, "contributions fetch failed: {e}");
            fetch_error(e)
        })
}

async fn load_heatmap(username: String, year: i32) -> HeatmapState {
    let result = get_contributions(username, year).await.map_err(error_message);
    let state = HeatmapState::from(result);
    if let Some(message) = state.error() {
        log::warn!("{year}: {message}");
    }
    state
}

#[component]
pub fn ContributionHeatmap(#[prop(into)] username: String) -> impl IntoView {
    let current_year = chrono::Utc::now().year();
    let (year, set_year) = signal(current_year);
    let username = StoredValue::new(username);
    // a Resource only resolves with the value of its latest source
    let heatmap = Resource::new(
        move || (username.get_value(), year.get()),
        |(username, year)| load_heatmap(username, year),
    );

    view! {
        <section id="contributions" class="py-20 px-4">
            <div class="max-w-5xl mx-auto">
                <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-8">
                    <h2 class="text-3xl font-bold">"GitHub Contributions"</h2>
                    <label class="flex items-center gap-2 text-gray-400">
                        "Year"
                        <select
                            class="px-3 py-2 rounded-md bg-gray-800 text-gray-100 border border-gray-700 focus:outline-none focus:ring-2 focus:ring-emerald-500"
                            prop:value=move || year().to_string()
                            on:change=move |ev| {
                                if let Ok(selected) = event_target_value(&ev).parse::<i32>() {
                                    set_year(selected);
                                }
                            }
                        >
                            {year_options(current_year)
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <option value=option.to_string() selected=option == current_year>
                                            {option.to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                </div>
                <Transition fallback=move || {
                    view! {
                        <div class="space-y-4 animate-pulse">
                            <div class="h-8 rounded bg-gray-800 w-1/3"></div>
                            <div class="h-32 rounded bg-gray-800"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match heatmap.await {
                            HeatmapState::Ready(grid) => view! { <HeatmapGrid grid=grid /> }.into_any(),
                            HeatmapState::Failed(message) => {
                                view! {
                                    <div class="p-4 rounded-md bg-red-900/40 border border-red-700 text-red-300">
                                        {message}
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                    })}
                </Transition>
            </div>
        </section>
    }
}

#[component]
fn HeatmapGrid(grid: ContributionGrid) -> impl IntoView {
    let best_day = grid
        .best_day()
        .map(|day| format!("{} on {}", day.count, day.date.format("%b %-d")))
        .unwrap_or_else(|| "None yet".to_string());
    let stats = [
        (format!("Contributions in {}", grid.year), grid.total.to_string()),
        ("All-time contributions".to_string(), grid.all_time_total.to_string()),
        ("Active days".to_string(), grid.active_days().to_string()),
        ("Best day".to_string(), best_day),
    ];
    let month_row = (0..grid.weeks.len())
        .map(|index| {
            let name = grid.month_at(index).unwrap_or_default().to_string();
            view! { <span class="w-3 text-[10px] text-gray-500 overflow-visible whitespace-nowrap">{name}</span> }
        })
        .collect_view();

    view! {
        <h3 class="text-xl text-gray-300 mb-6">
            {format!("{} contributions in {}", grid.total, grid.year)}
        </h3>
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">
            {stats
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="p-4 rounded-xl bg-gray-900">
                            <p class="text-sm text-gray-500">{label}</p>
                            <p class="text-2xl font-semibold text-emerald-400">{value}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="overflow-x-auto">
            <div class="inline-flex flex-col gap-1">
                <div class="flex gap-1 ml-8">{month_row}</div>
                <div class="flex gap-1">
                    <WeekdayLabels />
                    {grid
                        .weeks
                        .into_iter()
                        .map(|week| view! { <WeekColumn week=week /> })
                        .collect_view()}
                </div>
            </div>
        </div>
        <Legend />
    }
}

#[component]
fn WeekdayLabels() -> impl IntoView {
    let labeled = [Weekday::Mon, Weekday::Wed, Weekday::Fri];
    view! {
        <div class="flex flex-col gap-1 w-7 text-[10px] text-gray-500">
            {[
                Weekday::Sun,
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
            ]
                .into_iter()
                .map(|day| {
                    let text = if labeled.contains(&day) { day.to_string() } else { String::new() };
                    view! { <span class="h-3 leading-3">{text}</span> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn WeekColumn(week: ContributionWeek) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1">
            {(0..week.leading_blanks())
                .map(|_| view! { <span class="w-3 h-3"></span> })
                .collect_view()}
            {week.days().iter().map(|day| view! { <DayCell day=*day /> }).collect_view()}
        </div>
    }
}

#[component]
fn DayCell(day: ContributionDay) -> impl IntoView {
    let class = format!(
        "w-3 h-3 rounded-sm hover:ring-1 hover:ring-gray-400 {}",
        Intensity::classify(day.count).css_class()
    );
    view! { <span class=class title=describe_day(&day) data-date=day.date.to_string()></span> }
}

#[component]
fn Legend() -> impl IntoView {
    view! {
        <div class="flex items-center justify-end gap-1 mt-4 text-xs text-gray-500">
            <span class="mr-1">"Less"</span>
            {LEGEND_SAMPLES
                .into_iter()
                .map(|count| {
                    let class = format!("w-3 h-3 rounded-sm {}", Intensity::classify(count).css_class());
                    view! { <span class=class></span> }
                })
                .collect_view()}
            <span class="ml-1">"More"</span>
        </div>
    }
}
