//! One upload card: file picker, name field, upload button.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};

use crate::app::{AppContext, report};
use crate::components::icons as ic;
use crate::core::api::FileSource;
use crate::core::upload::{self, UploadForm, UploadOutcome};
use crate::models::AssetKind;
use crate::utils::dom;
use crate::utils::format::format_kb;

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

#[component]
pub fn UploadCard(kind: AssetKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // web_sys::File is not Send, so the signal lives in local storage
    let file = RwSignal::new_local(None::<File>);
    let name = RwSignal::new(String::new());
    let uploading = RwSignal::new(false);
    let input_ref = NodeRef::<html::Input>::new();

    let selected = Signal::derive(move || {
        file.with(|f| {
            f.as_ref()
                .map(|f| format!("{} ({})", f.name(), format_kb(FileSource::size(f))))
        })
    });

    let on_pick = move |ev: leptos::ev::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|list| list.get(0));
        file.set(picked);
    };

    let on_upload = move |_: leptos::ev::MouseEvent| {
        if uploading.get_untracked() {
            return;
        }

        let mut form = UploadForm {
            file: file.get_untracked(),
            name: name.get_untracked(),
        };
        if let Err(e) = form.validate(kind) {
            report("Upload failed", &e.into());
            return;
        }

        let username = ctx
            .session
            .with_untracked(|s| s.username().map(String::from))
            .unwrap_or_default();

        uploading.set(true);
        spawn_local(async move {
            // The history is only touched after the await, so cards that
            // upload at the same time each keep their entry.
            let result =
                upload::submit(&ctx.api, kind, &mut form, &username, dom::now_iso()).await;

            if let Ok(outcome) = &result
                && ctx
                    .history
                    .try_update(|h| upload::record_outcome(h, outcome))
                    .unwrap_or(false)
            {
                ctx.persist_history();
            }

            match result {
                Ok(UploadOutcome::Uploaded(record)) => {
                    file.set(None);
                    name.set(String::new());
                    if let Some(input) = input_ref.get_untracked() {
                        input.set_value("");
                    }
                    log::info!("uploaded {} as {:?}", record.filename, record.name);
                    dom::alert(&format!("{} uploaded successfully!", kind.label()));
                }
                Ok(UploadOutcome::Failed(_, e)) => {
                    report(&format!("{} upload failed", kind.label()), &e);
                }
                Err(e) => report("Upload failed", &e.into()),
            }
            uploading.set(false);
        });
    };

    view! {
        <div class=css::card style=format!("--accent: {}", kind.accent())>
            <div class=css::cardHeader>
                <span class=css::cardIcon><Icon icon=ic::kind_icon(kind) /></span>
                <h3 class=css::cardTitle>{format!("Upload {}", kind.label())}</h3>
            </div>

            <input
                class=css::fileInput
                type="file"
                accept=kind.accept()
                node_ref=input_ref
                on:change=on_pick
                disabled=move || uploading.get()
            />
            <p class=css::fileInfo>
                {move || selected.get().unwrap_or_else(|| "No file selected".to_string())}
            </p>

            <input
                class=css::textInput
                type="text"
                placeholder=format!("Enter {} name", kind.label().to_lowercase())
                prop:value=name
                on:input=move |ev| name.set(event_target_value(&ev))
                disabled=move || uploading.get()
            />

            <button
                class=css::uploadButton
                on:click=on_upload
                disabled=move || uploading.get()
            >
                <Icon icon=ic::UPLOAD />
                {move || if uploading.get() {
                    "Uploading...".to_string()
                } else {
                    format!("Upload {}", kind.label())
                }}
            </button>
        </div>
    }
}
