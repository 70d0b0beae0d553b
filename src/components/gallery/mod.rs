//! Gallery for one asset kind.
//!
//! The list is fetched once per mount. Search, sort, layout and delete all
//! work on the fetched copy; "Refresh" fetches again and brings deleted
//! rows back.

mod item;
mod preview;

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::{AppContext, report};
use crate::components::icons as ic;
use crate::core::download;
use crate::core::error::AppError;
use crate::core::gallery::{self, GalleryState};
use crate::models::{AppRoute, AssetKind, AssetRecord, SortKey, ViewMode};
use crate::utils::dom;

use item::GalleryItem;
use preview::PreviewModal;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

#[component]
pub fn Gallery(kind: AssetKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let state = RwSignal::new(GalleryState::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // Controls are hidden while loading, so the query cannot change mid-fetch
    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let mut next = state.get_untracked();
            match gallery::refresh(&ctx.api, kind, &mut next).await {
                Ok(count) => {
                    log::info!("loaded {} {}", count, kind.plural());
                    state.set(next);
                }
                Err(e) => {
                    let e = AppError::from(e);
                    error.set(Some(e.to_string()));
                    report(&format!("Failed to load {}", kind.plural()), &e);
                }
            }
            loading.set(false);
        });
    };
    load();

    let on_refresh = Callback::new(move |_: ()| load());
    let selected = Memo::new(move |_| state.with(|s| s.selected().cloned()));

    view! {
        <div class=css::page>
            <header class=css::header style=format!("--accent: {}", kind.accent())>
                <button
                    class=css::backButton
                    on:click=move |_| AppRoute::Dashboard.push()
                    title="Back to dashboard"
                >
                    <Icon icon=ic::BACK />
                </button>
                <div>
                    <h1 class=css::title>
                        <span class=css::titleIcon><Icon icon=ic::kind_icon(kind) /></span>
                        {format!("{} Gallery", kind.label())}
                    </h1>
                    <p class=css::subtitle>{format!("Browse and manage your uploaded {}", kind.plural())}</p>
                </div>
            </header>

            {move || {
                if loading.get() {
                    view! {
                        <div class=css::status>
                            <div class=css::spinner></div>
                            <p>{format!("Loading {}...", kind.plural())}</p>
                        </div>
                    }
                    .into_any()
                } else if let Some(message) = error.get() {
                    view! {
                        <div class=css::errorPanel>
                            <h2>{format!("Failed to load {}", kind.plural())}</h2>
                            <p>{message}</p>
                            <button class=css::retryButton on:click=move |_| on_refresh.run(())>
                                <Icon icon=ic::REFRESH />
                                "Retry Loading"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <GalleryBody kind=kind state=state on_refresh=on_refresh /> }.into_any()
                }
            }}

            {move || selected.get().map(|record| view! {
                <PreviewModal record=record kind=kind state=state />
            })}
        </div>
    }
}

/// Toolbar, stats, item list and footer for a loaded gallery.
#[component]
fn GalleryBody(
    kind: AssetKind,
    state: RwSignal<GalleryState>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let visible = Memo::new(move |_| state.with(|s| s.visible()));
    let stats = Memo::new(move |_| state.with(|s| s.stats()));
    let view_mode = Signal::derive(move || state.with(|s| s.view_mode));

    let empty_message = move || {
        if stats.get().total == 0 {
            format!("No {} uploaded yet", kind.plural())
        } else {
            format!("No {} match your search", kind.plural())
        }
    };

    view! {
        <Toolbar kind=kind state=state view_mode=view_mode on_refresh=on_refresh />

        <div class=css::stats>
            <div class=css::stat>
                <span class=css::statValue>{move || stats.get().total}</span>
                <span class=css::statLabel>{format!("Total {}", kind.plural())}</span>
            </div>
            <div class=css::stat>
                <span class=css::statValue>{move || stats.get().shown}</span>
                <span class=css::statLabel>"Shown"</span>
            </div>
            <div class=css::stat>
                <span class=css::statValue>{move || stats.get().estimated_label()}</span>
                <span class=css::statLabel>"Storage Used"</span>
            </div>
        </div>

        <Show
            when=move || !visible.with(|v| v.is_empty())
            fallback=move || view! { <p class=css::empty>{empty_message}</p> }
        >
            <div class=move || match view_mode.get() {
                ViewMode::Grid => css::grid,
                ViewMode::List => css::list,
            }>
                <For
                    each=move || visible.get()
                    key=|record| record.id
                    children=move |record| {
                        view! {
                            <GalleryItem
                                record=record
                                kind=kind
                                view_mode=view_mode
                                state=state
                            />
                        }
                    }
                />
            </div>
        </Show>

        <footer class=css::footer>
            {move || {
                let s = stats.get();
                format!("Showing {} of {} {}", s.shown, s.total, kind.plural())
            }}
        </footer>
    }
}

/// Search box, sort selector, layout toggle and refresh.
#[component]
fn Toolbar(
    kind: AssetKind,
    state: RwSignal<GalleryState>,
    view_mode: Signal<ViewMode>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let search = Signal::derive(move || state.with(|s| s.query.search.clone()));
    let sort = Signal::derive(move || state.with(|s| s.query.sort));

    let on_search = move |ev: leptos::ev::Event| {
        let term = event_target_value(&ev);
        state.update(|s| s.query.search = term);
    };

    let on_sort = move |ev: leptos::ev::Event| {
        let key = SortKey::parse(&event_target_value(&ev));
        state.update(|s| s.query.sort = key);
    };

    view! {
        <div class=css::toolbar>
            <label class=css::searchBox>
                <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                <input
                    class=css::searchInput
                    type="search"
                    placeholder=format!("Search {} by name or owner...", kind.plural())
                    prop:value=search
                    on:input=on_search
                />
            </label>

            <select class=css::select on:change=on_sort prop:value=move || sort.get().as_str()>
                {SortKey::ALL
                    .into_iter()
                    .map(|key| view! {
                        <option value=key.as_str() selected=move || sort.get() == key>
                            {key.label()}
                        </option>
                    })
                    .collect_view()}
            </select>

            <button
                class=css::toolButton
                on:click=move |_| state.update(|s| s.toggle_view())
                title=move || match view_mode.get() {
                    ViewMode::Grid => "Switch to list view",
                    ViewMode::List => "Switch to grid view",
                }
            >
                {move || match view_mode.get() {
                    ViewMode::Grid => view! { <Icon icon=ic::LIST /> }.into_any(),
                    ViewMode::List => view! { <Icon icon=ic::GRID /> }.into_any(),
                }}
            </button>

            <button
                class=css::toolButton
                on:click=move |_| on_refresh.run(())
                title="Refresh"
            >
                <Icon icon=ic::REFRESH />
            </button>
        </div>
    }
}

// ============================================================================
// Item actions
// ============================================================================

/// Decode the record's payload and hand it to the browser as a download.
fn download_record(record: &AssetRecord, kind: AssetKind) {
    let result = download::prepare(record, kind)
        .and_then(|file| dom::trigger_download(&file).map(|_| file));

    match result {
        Ok(file) => log::info!(
            "saved {} ({}, {} bytes)",
            file.filename,
            file.mime,
            file.bytes.len()
        ),
        Err(e) => report("Download failed", &e.into()),
    }
}

/// Remove a record from this view after confirmation. The service keeps it.
fn delete_record(state: RwSignal<GalleryState>, id: i64, kind: AssetKind) {
    let prompt = format!(
        "Are you sure you want to delete this {}?",
        kind.label().to_lowercase()
    );
    if !dom::confirm(&prompt) {
        return;
    }

    if let Some(record) = state.try_update(|s| s.remove_local(id)).flatten() {
        log::info!(
            "removed {} #{} ({}) from the local list",
            kind,
            record.id,
            record.name_display()
        );
    }
}
