//! Recent uploads table.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::UploadRecord;
use crate::utils::dom;
use crate::utils::format::format_kb;

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

#[component]
pub fn HistoryTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_empty = Signal::derive(move || ctx.history.with(|h| h.is_empty()));

    view! {
        <section class=css::section>
            <h2 class=css::sectionTitle>"Upload History"</h2>
            <Show
                when=move || !is_empty.get()
                fallback=|| view! { <p class=css::empty>"No uploads yet"</p> }
            >
                <table class=css::table>
                    <thead>
                        <tr>
                            <th>"Type"</th>
                            <th>"Name"</th>
                            <th>"File"</th>
                            <th>"Size"</th>
                            <th>"Date"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || ctx.history.with(|h| {
                            h.iter().map(history_row).collect_view()
                        })}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

fn history_row(record: &UploadRecord) -> impl IntoView + use<> {
    let status_class = if record.status.is_success() {
        css::statusOk
    } else {
        css::statusFailed
    };

    view! {
        <tr>
            <td>
                <span class=css::typeBadge style=format!("background: {}", record.kind.accent())>
                    {record.kind.label()}
                </span>
            </td>
            <td>{record.name.clone()}</td>
            <td class=css::filename>{record.filename.clone()}</td>
            <td>{format_kb(record.size)}</td>
            <td>{dom::locale_date(&record.date)}</td>
            <td class=status_class>{record.status.mark()}</td>
        </tr>
    }
}
