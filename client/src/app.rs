//! Root application component with routing.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::team::TeamPage;

/// Compiled Tailwind output, emitted by the build under the site `pkg` dir.
pub const STYLESHEET_HREF: &str = "/pkg/team-page.css";

const UBUNTU_FONT_HREF: &str = "https://fonts.googleapis.com/css2?family=Ubuntu:wght@400;500;700&display=swap";

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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href=STYLESHEET_HREF/>
        <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
        <Link rel="stylesheet" href=UBUNTU_FONT_HREF/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TeamPage/>
                <Route path=StaticSegment("member") view=TeamPage/>
            </Routes>
        </Router>
    }
}
