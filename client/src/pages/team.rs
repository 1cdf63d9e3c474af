//! "Our Team" page: loads the roster once and renders it by section.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount (hydrated builds only) the page issues a single `GET /api/member`
//! and feeds the outcome through `state::team::reduce`. Sections are derived
//! from the current state on every render.
//!
//! LIFECYCLE
//! =========
//! The request carries an abort signal. On cleanup the page aborts it and
//! clears a liveness flag, so a response that still arrives is dropped
//! instead of being written into a disposed signal.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::category_section::CategorySection;
use crate::state::team::TeamState;
use crate::util::categorize::Category;

pub const PAGE_HEADING: &str = "Our Team";
pub const PAGE_TAGLINE: &str = "The minds behind the magic. Passionate individuals driving innovation forward.";

fn error_text(message: &str) -> String {
    format!("Error: {message}")
}

/// Team page. Shows a spinner, an error panel, or the grouped roster.
#[component]
pub fn TeamPage() -> impl IntoView {
    let team = RwSignal::new(TeamState::default());

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::net::api::{FetchAbort, fetch_members};
        use crate::state::team::{TeamEvent, reduce};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        let abort = StoredValue::new_local(FetchAbort::new());

        leptos::task::spawn_local(async move {
            let Some(handle) = abort.try_get_value() else {
                return;
            };
            let result = fetch_members(&handle).await;
            if !alive_task.load(Ordering::Relaxed) {
                log::debug!("team page gone; dropping members response");
                return;
            }
            if let Err(message) = &result {
                log::warn!("members fetch failed: {message}");
            }
            team.update(|state| *state = reduce(std::mem::take(state), TeamEvent::from(result)));
        });

        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            abort.try_with_value(FetchAbort::abort);
        });
    }

    view! {
        <Title text=PAGE_HEADING/>
        {move || match team.get() {
            TeamState::Loading => view! { <LoadingPanel/> }.into_any(),
            TeamState::Error { message } => view! { <ErrorPanel message=message/> }.into_any(),
            ready @ TeamState::Ready { .. } => view! { <ReadyView categories=ready.categories()/> }.into_any(),
        }}
    }
}

/// Loaded roster: the header, then one section per non-empty category.
#[component]
fn ReadyView(categories: Vec<Category>) -> impl IntoView {
    let sections = categories
        .into_iter()
        .map(|category| view! { <CategorySection category=category/> })
        .collect::<Vec<_>>();

    view! {
        <div class="team-page font-ubuntu min-h-screen bg-[#140b29] text-white selection:bg-purple-500/30 pb-20">
            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 py-12 md:py-20">
                <TeamHeader/>
                {sections}
            </div>
        </div>
    }
}

#[component]
fn TeamHeader() -> impl IntoView {
    view! {
        <section class="team-page__header text-center mb-12 md:mb-20 space-y-3 md:space-y-4">
            <h1 class="text-4xl md:text-7xl font-bold tracking-tight text-white">{PAGE_HEADING}</h1>
            <p class="text-base md:text-xl text-gray-400 max-w-2xl mx-auto px-4">{PAGE_TAGLINE}</p>
        </section>
    }
}

#[component]
fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="team-page team-page--loading font-ubuntu min-h-screen flex items-center justify-center bg-[#140b29]">
            <div
                class="w-8 h-8 border-4 border-purple-500 border-t-transparent rounded-full animate-spin"
                role="status"
                aria-label="Loading"
            ></div>
        </div>
    }
}

#[component]
fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="team-page team-page--error font-ubuntu min-h-screen flex items-center justify-center bg-[#140b29]">
            <div class="text-red-400 px-4 py-2 border border-red-500/20 bg-red-500/10 rounded-lg" role="alert">
                {error_text(&message)}
            </div>
        </div>
    }
}
