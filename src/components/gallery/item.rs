//! A single gallery entry, rendered as a grid card or a list row.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::preview::{media, size_label};
use super::{delete_record, download_record};
use crate::components::icons as ic;
use crate::core::gallery::GalleryState;
use crate::models::{AssetKind, AssetRecord, ViewMode};

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

#[component]
pub fn GalleryItem(
    record: AssetRecord,
    kind: AssetKind,
    view_mode: Signal<ViewMode>,
    state: RwSignal<GalleryState>,
) -> impl IntoView {
    let id = record.id;
    let title = record.name_display().to_string();
    let owner = record.owner_display().to_string();
    let details = format!("#{} · {} · Uploaded recently", id, size_label(&record));
    let thumbnail = media(&record, kind, false);

    let open = move |_: leptos::ev::MouseEvent| state.update(|s| s.select(id));

    view! {
        <article class=move || match view_mode.get() {
            ViewMode::Grid => css::gridItem,
            ViewMode::List => css::listItem,
        }>
            <div class=css::thumb on:click=open>{thumbnail}</div>

            <div class=css::meta>
                <h3 class=css::itemTitle title=title.clone()>{title.clone()}</h3>
                <p class=css::itemOwner>"by " {owner}</p>
                <p class=css::itemDetails>{details}</p>
            </div>

            <div class=css::itemActions>
                <button class=css::iconButton on:click=open title="Preview">
                    <Icon icon=ic::EYE />
                </button>
                <button
                    class=css::iconButton
                    on:click=move |_| download_record(&record, kind)
                    title="Download"
                >
                    <Icon icon=ic::DOWNLOAD />
                </button>
                <button
                    class=format!("{} {}", css::iconButton, css::danger)
                    on:click=move |_| delete_record(state, id, kind)
                    title="Delete"
                >
                    <Icon icon=ic::TRASH />
                </button>
            </div>
        </article>
    }
}
