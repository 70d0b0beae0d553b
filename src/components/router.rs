//! Application router component.
//!
//! Uses native hashchange events instead of leptos_router for true hash
//! routing. The URL hash is the source of truth; back and forward buttons
//! work without extra bookkeeping.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::dashboard::Dashboard;
use crate::components::gallery::Gallery;
use crate::components::login::Login;
use crate::models::AppRoute;

/// Main application router.
///
/// - `#/` → Login
/// - `#/dashboard` → Upload dashboard
/// - `#/showImage`, `#/showVideo`, `#/showDocument`, `#/showAudio` → Gallery
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Memo so re-assigning the same hash does not remount the view
    let route_memo = Memo::new(move |_| route.get());

    Effect::new(move |_| {
        log::debug!("route: {}", route_memo.get().to_hash());
    });

    // Each route change mounts a fresh view, so galleries re-fetch
    move || match route_memo.get() {
        AppRoute::Login => view! { <Login /> }.into_any(),
        AppRoute::Dashboard => view! { <Dashboard /> }.into_any(),
        AppRoute::Gallery(kind) => view! { <Gallery kind=kind /> }.into_any(),
    }
}
