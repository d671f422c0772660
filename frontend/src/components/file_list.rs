//! List of accepted files with their live status.

use leptos::*;
use pdfdrop::{format_file_size, EntryId, UploadStatus};
use web_sys::MouseEvent;

use crate::components::{ProgressBar, SummaryBar};
use crate::services::UploadController;

#[component]
pub fn FileListSection(controller: UploadController) -> impl IntoView {
    let state = controller.state();
    let count = move || state.with(|s| s.entries().len());

    view! {
        <div class="file-list">
            <h3 class="file-list-title">"📄 Uploaded Files (" {count} ")"</h3>

            <div class="file-rows">
                <For
                    each=move || state.with(|s| {
                        s.entries()
                            .iter()
                            .map(|e| (e.id, e.name.clone(), e.size))
                            .collect::<Vec<_>>()
                    })
                    key=|(id, _, _)| *id
                    children=move |(id, name, size)| {
                        view! { <FileRow controller=controller entry_id=id name=name size=size/> }
                    }
                />
            </div>

            <SummaryBar summary=Signal::derive(move || state.with(|s| s.summary()))/>
        </div>
    }
}

#[component]
fn FileRow(
    controller: UploadController,
    entry_id: EntryId,
    name: String,
    size: u64,
) -> impl IntoView {
    let id = entry_id;
    let state = controller.state();
    let status = Signal::derive(move || {
        state.with(|s| s.entry(id).map(|e| e.status).unwrap_or(UploadStatus::Pending))
    });
    let percent = Signal::derive(move || state.with(|s| s.progress_of(id)));

    let on_remove = move |ev: MouseEvent| {
        // Keep the click away from the drop zone's picker
        ev.stop_propagation();
        controller.remove(id);
    };

    view! {
        <div class="file-row">
            <div class="file-info">
                <span class="file-icon">{move || status.get().icon()}</span>
                <div class="file-text">
                    <p class="file-name" title=name.clone()>{name.clone()}</p>
                    <p class="file-size">{format_file_size(size)}</p>
                </div>
            </div>

            <Show
                when=move || status.get() == UploadStatus::Uploading
                fallback=|| view! { }
            >
                <ProgressBar percent=percent/>
            </Show>

            <div class="file-status">
                {move || {
                    let current = status.get();
                    current.badge().map(|label| view! {
                        <span class=format!("badge {}", current.css_class())>{label}</span>
                    })
                }}
                <button class="remove-button" title="Remove" on:click=on_remove>"❌"</button>
            </div>
        </div>
    }
}
