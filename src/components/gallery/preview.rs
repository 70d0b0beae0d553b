//! Preview modal and inline media rendering.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{delete_record, download_record};
use crate::components::icons as ic;
use crate::core::download;
use crate::core::gallery::GalleryState;
use crate::models::{AssetKind, AssetRecord};

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

/// Approximate payload size, or "Unknown" when there is no payload.
pub(super) fn size_label(record: &AssetRecord) -> String {
    record
        .approx_size_kb()
        .map(|kb| format!("{} KB", kb))
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Inline media for `record`.
///
/// `full` renders playable controls and document frames; thumbnails only
/// show images and muted video posters.
pub(super) fn media(record: &AssetRecord, kind: AssetKind, full: bool) -> AnyView {
    let Some(src) = download::data_url(record, kind) else {
        return view! {
            <div class=css::placeholder>
                <Icon icon=ic::kind_icon(kind) />
                <span>"No preview available"</span>
            </div>
        }
        .into_any();
    };
    let alt = record.name_display().to_string();
    let muted = !full;

    match kind {
        AssetKind::Image => view! { <img class=css::media src=src alt=alt /> }.into_any(),
        AssetKind::Video => view! {
            <video class=css::media src=src controls=full muted=muted preload="metadata"></video>
        }
        .into_any(),
        AssetKind::Audio if full => view! {
            <audio class=css::audio src=src controls=true></audio>
        }
        .into_any(),
        AssetKind::Document if full => view! {
            <iframe class=css::document src=src title=alt></iframe>
        }
        .into_any(),
        _ => view! {
            <div class=css::placeholder>
                <Icon icon=ic::kind_icon(kind) />
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn PreviewModal(
    record: AssetRecord,
    kind: AssetKind,
    state: RwSignal<GalleryState>,
) -> impl IntoView {
    let close = move || state.update(|s| s.close_preview());
    let id = record.id;
    let body = media(&record, kind, true);
    let title = record.name_display().to_string();
    let owner = record.owner_display().to_string();
    let size = size_label(&record);

    view! {
        <div class=css::backdrop on:click=move |_| close()>
            <div
                class=css::modal
                role="dialog"
                aria-modal="true"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <header class=css::modalHeader>
                    <h2 class=css::modalTitle>{title.clone()}</h2>
                    <button class=css::iconButton on:click=move |_| close() title="Close">
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=css::modalBody>{body}</div>

                <dl class=css::details>
                    <dt>"ID"</dt>
                    <dd>{id}</dd>
                    <dt>"Owner"</dt>
                    <dd>{owner}</dd>
                    <dt>"Name"</dt>
                    <dd>{title}</dd>
                    <dt>"Type"</dt>
                    <dd>{kind.label()}</dd>
                    <dt>"Size"</dt>
                    <dd>{size}</dd>
                </dl>

                <footer class=css::modalActions>
                    <button
                        class=css::actionButton
                        on:click=move |_| download_record(&record, kind)
                    >
                        <Icon icon=ic::DOWNLOAD />
                        "Download"
                    </button>
                    <button
                        class=format!("{} {}", css::actionButton, css::danger)
                        on:click=move |_| delete_record(state, id, kind)
                    >
                        <Icon icon=ic::TRASH />
                        "Delete"
                    </button>
                    <button class=css::secondaryButton on:click=move |_| close()>
                        "Close"
                    </button>
                </footer>
            </div>
        </div>
    }
}
