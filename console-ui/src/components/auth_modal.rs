//! Login and signup dialogs.

use leptos::*;

use vendorhub::pages::{login, register, LoginForm, SignupForm};

use super::bound_input;
use crate::state::{AuthMode, GlobalState};

#[component]
pub fn AuthModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let mode = state.auth_modal;

    view! {
        {move || {
            mode.get().map(|mode| view! {
                <div class="fixed inset-0 z-40 bg-black/60 flex items-center justify-center">
                    <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md">
                        {match mode {
                            AuthMode::Login => view! { <LoginDialog /> }.into_view(),
                            AuthMode::Signup => view! { <SignupDialog /> }.into_view(),
                        }}
                    </div>
                </div>
            })
        }}
    }
}

#[component]
fn LoginDialog() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = create_rw_signal(LoginForm::default());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = {
        let state = state.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            set_submitting.set(true);
            let state = state.clone();
            spawn_local(async move {
                if login(&state.ctx, &form.get_untracked()).await.is_ok() {
                    form.set(LoginForm::default());
                    state.close_auth();
                }
                set_submitting.set(false);
            });
        }
    };

    let close = {
        let state = state.clone();
        move |_| state.close_auth()
    };
    let to_signup = move |_| state.open_auth(AuthMode::Signup);

    view! {
        <form on:submit=on_submit class="space-y-4">
            <h2 class="text-2xl font-bold">"Login"</h2>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || form.get().email
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600"
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || form.get().password
                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600"
            />
            <div class="flex items-center justify-between">
                <button type="button" on:click=to_signup class="text-sm text-primary-400">
                    "Need an account? Sign up"
                </button>
                <div class="space-x-2">
                    <button type="button" on:click=close class="px-4 py-2 bg-gray-600 rounded-lg">
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium"
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Login" }}
                    </button>
                </div>
            </div>
        </form>
    }
}

#[component]
fn SignupDialog() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = create_rw_signal(SignupForm::default());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = {
        let state = state.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            set_submitting.set(true);
            let state = state.clone();
            spawn_local(async move {
                if register(&state.ctx, &form.get_untracked()).await.is_ok() {
                    form.set(SignupForm::default());
                    state.open_auth(AuthMode::Login);
                }
                set_submitting.set(false);
            });
        }
    };

    let close = {
        let state = state.clone();
        move |_| state.close_auth()
    };
    let to_login = move |_| state.open_auth(AuthMode::Login);

    let field = |placeholder: &'static str, kind: &'static str, get: fn(&SignupForm) -> String, set: fn(&mut SignupForm, String)| {
        bound_input(
            placeholder,
            kind,
            move || form.with(get),
            move |value| form.update(|f| set(f, value)),
        )
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <h2 class="text-2xl font-bold">"Sign Up"</h2>
            {field("Username", "text", |f| f.username.clone(), |f, v| f.username = v)}
            {field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
            {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
            {field("Confirm Password", "password", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
            <div class="flex items-center justify-between">
                <button type="button" on:click=to_login class="text-sm text-primary-400">
                    "Have an account? Login"
                </button>
                <div class="space-x-2">
                    <button type="button" on:click=close class="px-4 py-2 bg-gray-600 rounded-lg">
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium"
                    >
                        {move || if submitting.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </div>
            </div>
        </form>
    }
}
