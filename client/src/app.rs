//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, landing::LandingPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Routes `/` to the landing page and `/home` to the dashboard. Unknown paths
/// (including the dashboard's quick-action targets) render the fallback.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/medai.css"/>
        <Title text="MedAI Diagnostics"/>
        <Meta
            name="description"
            content="Multi-agent AI diagnostics combining cardiology, psychology and pulmonology expertise."
        />

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("home") view=HomePage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found."</h1>
            <a class="btn btn--primary" href="/">
                "Back to MedAI"
            </a>
        </div>
    }
}
