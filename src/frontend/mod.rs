use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes, A};
use wasm_bindgen::prelude::*;

use crate::services::{Analytics, FileStore};

pub mod charts;
pub mod dashboard;
pub mod file_display;
pub mod filter_bar;
pub mod header;
pub mod home;
pub mod icon;
pub mod intake;
pub mod styles;
pub mod toast;
pub mod upload_zone;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use toast::{ToastContainer, Toasts};

use icon::Icon;
use styles::StyleProvider;

const DARK_MODE_KEY: &str = "darkMode";

/// Dark-mode flag, persisted to localStorage across reloads. The rest of
/// the app only reads it through the root CSS class.
#[derive(Clone, Copy)]
pub struct Theme {
    dark: RwSignal<bool>,
}

impl Theme {
    pub fn load() -> Self {
        Self {
            dark: create_rw_signal(stored_dark_mode().unwrap_or(false)),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub fn toggle(&self) {
        self.dark.update(|dark| *dark = !*dark);
        persist_dark_mode(self.dark.get_untracked());
    }
}

fn stored_dark_mode() -> Option<bool> {
    let storage = window().local_storage().ok()??;
    let value = storage.get_item(DARK_MODE_KEY).ok()??;
    Some(value == "true")
}

fn persist_dark_mode(dark: bool) {
    if let Ok(Some(storage)) = window().local_storage() {
        if storage
            .set_item(DARK_MODE_KEY, if dark { "true" } else { "false" })
            .is_err()
        {
            log::warn!("failed to persist dark mode preference");
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One store, one aggregator, shared by every page through context.
    let store = FileStore::seeded();
    provide_context(Analytics::new(store.clone()));
    provide_context(store);
    provide_context(Toasts::new());

    let theme = Theme::load();
    provide_context(theme);

    view! {
        <Title text="DropZone"/>
        <StyleProvider/>
        <Router>
            <div class=move || if theme.is_dark() { "app dark" } else { "app" }>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/dashboard" view=DashboardPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
                <ToastContainer/>
            </div>
        </Router>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <Icon name="file-x" size=96 class="not-found-icon"/>
            <h1>"404"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/" class="primary-btn">
                <Icon name="home"/>
                <span>"Go Home"</span>
            </A>
        </div>
    }
}

#[wasm_bindgen]
pub fn run() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}
