//! Navigation Component
//!
//! Header navigation bar with page links and the login/logout control.

use leptos::*;
use leptos_router::*;

use vendorhub::pages::{logout, Page};
use vendorhub::session::AuthControl;

use crate::state::{watch, AuthMode, GlobalState};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏢"</span>
                        <span class="text-xl font-bold text-white">"VendorHub"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        {Page::ALL
                            .into_iter()
                            .map(|page| view! { <NavLink href=page.path() label=page.title() /> })
                            .collect_view()}
                        <AuthButton />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

/// Shows "Login" or "Logout" depending on the stored session
#[component]
fn AuthButton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let changed = watch(&state.ctx.session, |s| s.auth_control());

    let session = state.ctx.session.clone();
    let control = move || {
        changed.track();
        session.auth_control().get()
    };

    let on_click = {
        let state = state.clone();
        let control = control.clone();
        move |_| match control() {
            AuthControl::Login => state.open_auth(AuthMode::Login),
            AuthControl::Logout { .. } => {
                logout(&state.ctx);
            }
        }
    };

    view! {
        <div class="flex items-center space-x-3 ml-4">
            {
                let control = control.clone();
                move || match control() {
                    AuthControl::Logout { username } => view! {
                        <span class="text-sm text-gray-400">{username}</span>
                    }.into_view(),
                    AuthControl::Login => view! {}.into_view(),
                }
            }
            <button
                on:click=on_click
                class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 font-medium transition-colors"
            >
                {move || control().label()}
            </button>
        </div>
    }
}
