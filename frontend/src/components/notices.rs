//! Rejected-file notices.
//!
//! Shows why dropped files were not added (wrong type, too large). The
//! core keeps only the most recent few; each can be dismissed, or all at
//! once.

use leptos::*;
use web_sys::MouseEvent;

use crate::services::UploadController;

#[component]
pub fn RejectionNotices(controller: UploadController) -> impl IntoView {
    let state = controller.state();
    let notices = move || {
        state.with(|s| {
            s.rejections()
                .iter()
                .map(|r| r.to_string())
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    let clear_all = move |ev: MouseEvent| {
        ev.stop_propagation();
        state.update(|s| s.clear_rejections());
    };

    view! {
        <Show
            when=move || state.with(|s| !s.rejections().is_empty())
            fallback=|| view! { }
        >
            <div class="notices">
                <div class="notices-header">
                    <span class="notices-title">"⚠️ Some files were not added"</span>
                    <button class="notices-clear" on:click=clear_all>"Clear"</button>
                </div>
                // Keyed by position and text: dismissing shifts the rest
                <For
                    each=notices
                    key=|(i, text)| (*i, text.clone())
                    children=move |(i, text)| {
                        view! {
                            <div class="notice">
                                <span>{text}</span>
                                <button
                                    class="notice-dismiss"
                                    on:click=move |_| controller.dismiss_rejection(i)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
