//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::ApiClient;
use crate::core::error::{AppError, ErrorClass};
use crate::core::history::{self, UploadHistory};
use crate::models::SessionState;
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because every field is either a Leptos signal or
/// a `Copy` handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Client for the remote file service.
    pub api: ApiClient,

    /// User reported by the service for the current cookie session.
    pub session: RwSignal<SessionState>,

    /// Local upload history (newest first).
    pub history: RwSignal<UploadHistory>,
}

impl AppContext {
    /// Creates a new application context.
    ///
    /// The history starts empty; the dashboard loads it from storage when
    /// it mounts.
    pub fn new() -> Self {
        Self {
            api: ApiClient::from_config(),
            session: RwSignal::new(SessionState::default()),
            history: RwSignal::new(history::empty()),
        }
    }

    /// Re-read the upload history from localStorage.
    pub fn reload_history(&self) {
        self.history.set(history::load());
    }

    /// Persist the current history, reporting failures to the console.
    pub fn persist_history(&self) {
        if let Err(e) = self.history.with_untracked(history::save) {
            log::error!("could not save upload history: {}", e);
        }
    }
}

/// Log an error and show it to the user in a blocking alert.
///
/// Validation messages are shown as-is; anything else gets `prefix`.
pub fn report(prefix: &str, error: &AppError) {
    match error.class() {
        ErrorClass::Validation => {
            log::warn!("{}", error);
            dom::alert(&error.to_string());
        }
        class => {
            log::error!("{} ({:?}): {}", prefix, class, error);
            dom::alert(&format!("{}: {}", prefix, error));
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f5f7fa;
                    color: #2c3e50;
                    font-family: 'Segoe UI', sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #64748b; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="text-align: left; color: #dc2626; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #3b82f6;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 0.75rem;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
