//! Login form.
//!
//! Blank fields are rejected locally; otherwise the credentials go to the
//! service and a successful answer leads to the dashboard.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::{AppContext, report};
use crate::components::icons as ic;
use crate::core::session::{self, LoginPhase};
use crate::models::{AppRoute, SessionState};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/login/login.module.css");

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (phase, set_phase) = signal(LoginPhase::Idle);
    let submitting = Signal::derive(move || phase.get() == LoginPhase::Submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let user = username.get_untracked();
        let pass = password.get_untracked();
        if let Err(e) = session::validate(&user, &pass) {
            report("Login failed", &e.into());
            return;
        }

        set_phase.set(LoginPhase::Submitting);
        spawn_local(async move {
            match session::authenticate(&ctx.api, &user, &pass).await {
                Ok(credentials) => {
                    ctx.session.set(SessionState::Authenticated {
                        username: credentials.username,
                    });
                    set_password.set(String::new());
                    set_phase.set(LoginPhase::Idle);
                    dom::alert("Login successful");
                    AppRoute::Dashboard.push();
                }
                Err(e) => {
                    report("Login failed", &e);
                    set_phase.set(LoginPhase::Idle);
                }
            }
        });
    };

    view! {
        <div class=css::page>
            <form class=css::card on:submit=on_submit>
                <div class=css::badge>
                    <Icon icon=ic::USER />
                </div>
                <h1 class=css::title>"Sign in"</h1>
                <p class=css::subtitle>"Upload and browse your files"</p>

                <label class=css::field>
                    <span class=css::fieldLabel>"Username"</span>
                    <input
                        class=css::input
                        type="text"
                        autocomplete="username"
                        placeholder="Enter your username"
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        disabled=submitting
                    />
                </label>

                <label class=css::field>
                    <span class=css::fieldLabel>"Password"</span>
                    <input
                        class=css::input
                        type="password"
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        disabled=submitting
                    />
                </label>

                <button class=css::submit type="submit" disabled=submitting>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
