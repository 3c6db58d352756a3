mod about;
mod contact;
mod contributions;
mod experience;
mod footer;
mod hero;
mod loading;
mod navbar;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::SITE;

use self::{
    about::About, contact::Contact, contributions::ContributionHeatmap,
    experience::Experience, footer::Footer, hero::Hero, loading::LoadingGate, navbar::Navbar,
    projects::Projects, skills::Skills,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="description" content=SITE.profile.tagline.clone() />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-950 text-gray-100 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", SITE.profile.name) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=SITE.profile.title.clone() />
        <LoadingGate>
            <Navbar />
            <main class="flex flex-col w-full">
                <Hero />
                <ContributionHeatmap username=SITE.profile.github_username.clone() />
                <About />
                <Experience />
                <Skills />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </LoadingGate>
    }
}
