//! Upload dashboard.
//!
//! Resolves the current user, then shows one upload card per asset kind,
//! links to the galleries and the local upload history.

mod history;
mod upload_card;

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::{AppContext, report};
use crate::components::icons as ic;
use crate::core::AssetService;
use crate::models::{AppRoute, AssetKind, SessionState};

use history::HistoryTable;
use upload_card::UploadCard;

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // History is read once per mount and written back after each attempt
    ctx.reload_history();

    ctx.session.set(SessionState::Resolving);
    spawn_local(async move {
        match ctx.api.current_user().await {
            Ok(username) => {
                log::info!("dashboard for {}", username);
                ctx.session.set(SessionState::Authenticated { username });
            }
            Err(e) => {
                ctx.session.set(SessionState::Unknown);
                report("Failed to load user data", &e.into());
            }
        }
    });

    let resolving = Signal::derive(move || ctx.session.with(|s| s.is_resolving()));
    let display_name = Signal::derive(move || ctx.session.with(|s| s.display_name()));

    view! {
        <Show
            when=move || !resolving.get()
            fallback=|| view! {
                <div class=css::loading>
                    <div class=css::spinner></div>
                    <p>"Loading dashboard..."</p>
                </div>
            }
        >
            <div class=css::page>
                <header class=css::header>
                    <div>
                        <h1 class=css::title>"File Upload Dashboard"</h1>
                        <p class=css::welcome>
                            <span class=css::welcomeIcon><Icon icon=ic::USER /></span>
                            "Welcome, "
                            <strong>{display_name}</strong>
                        </p>
                    </div>
                </header>

                <section class=css::cards>
                    {AssetKind::ALL
                        .into_iter()
                        .map(|kind| view! { <UploadCard kind=kind /> })
                        .collect_view()}
                </section>

                <GalleryLinks />

                <HistoryTable />
            </div>
        </Show>
    }
}

/// Links to the four galleries.
#[component]
fn GalleryLinks() -> impl IntoView {
    view! {
        <section class=css::section>
            <h2 class=css::sectionTitle>"Browse Uploads"</h2>
            <nav class=css::links>
                {AssetKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <a
                                class=css::link
                                href=AppRoute::Gallery(kind).to_hash()
                                style=format!("--accent: {}", kind.accent())
                            >
                                <span class=css::linkIcon><Icon icon=ic::kind_icon(kind) /></span>
                                {format!("View {}", kind.plural())}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </section>
    }
}
