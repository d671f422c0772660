//! PDF Drop - Frontend Rust/Leptos Application
//!
//! A WebAssembly page hosting a drag & drop PDF uploader. Uploads are
//! simulated: each accepted file gets an animated progress bar driven by
//! a local timer, nothing leaves the browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (router, page title)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PdfUploader                                                │
//! │  ├── Hero (title, tagline)                                  │
//! │  ├── UploadSection (drop zone + hidden file input)          │
//! │  ├── RejectionNotices (files that were not added)           │
//! │  └── FileListSection (rows, progress, summary)              │
//! │      or EmptyState                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - UI copy and mounted uploader configuration
//! - [`components`] - UI components
//! - [`services`] - File conversion and simulation glue

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic hook and console logging, then mount the page.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 PDF Drop - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Home/>
                </Routes>
            </main>
        </Router>
    }
}

/// Page shell: only hosts the uploader.
#[component]
fn Home() -> impl IntoView {
    view! {
        <div class="page">
            <PdfUploader/>
        </div>
    }
}

/// The uploader widget: drop zone, file list and summary.
#[component]
pub fn PdfUploader() -> impl IntoView {
    let controller = UploadController::new(uploader_config());
    let state = controller.state();

    on_cleanup(move || controller.shutdown());

    view! {
        <div class="container">
            <Hero/>

            <UploadSection controller=controller/>

            <RejectionNotices controller=controller/>

            <Show
                when=move || state.with(|s| !s.is_empty())
                fallback=|| view! { <EmptyState/> }
            >
                <FileListSection controller=controller/>
            </Show>
        </div>
    }
}
