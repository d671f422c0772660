//! Aggregate counters under the file list.

use leptos::*;
use pdfdrop::{format_file_size, Summary};

#[component]
pub fn SummaryBar(#[prop(into)] summary: Signal<Summary>) -> impl IntoView {
    view! {
        <div class="summary">
            <span>
                "Total Files: "
                <strong>{move || summary.get().total_files}</strong>
            </span>
            <span>
                "Completed: "
                <strong class="summary-completed">{move || summary.get().completed}</strong>
            </span>
            <span>
                "Total Size: "
                <strong>{move || format_file_size(summary.get().total_size)}</strong>
            </span>
        </div>
    }
}
