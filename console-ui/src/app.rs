//! App Root Component
//!
//! Router, global providers, and the bridge between the browser location
//! and the console's route.

use leptos::*;
use leptos_router::*;

use vendorhub::{Controller, Page, Route};

use crate::api::{get_api_base, set_api_base};
use crate::components::{AuthModal, Nav, Toast};
use crate::pages::{AnalyticsView, ContractsView, HomeView, ProfilesView, VendorsView};
use crate::state::{provide_global_state, watch, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <RouteSync />
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=|| view! { <PageHost page=Page::Home /> } />
                        <Route path="/vendors" view=|| view! { <PageHost page=Page::VendorManagement /> } />
                        <Route path="/profiles" view=|| view! { <PageHost page=Page::VendorProfiles /> } />
                        <Route path="/contracts" view=|| view! { <PageHost page=Page::ContractManagement /> } />
                        <Route path="/analytics" view=|| view! { <PageHost page=Page::Analytics /> } />
                        <Route path="/*any" view=LegacyRedirect />
                    </Routes>
                </main>

                <Footer />
                <Toast />
                <AuthModal />
            </div>
        </Router>
    }
}

/// Current browser location as `path?query#fragment`
fn current_location(location: &Location) -> String {
    format!(
        "{}?{}#{}",
        location.pathname.get_untracked(),
        location.search.get_untracked().trim_start_matches('?'),
        location.hash.get_untracked().trim_start_matches('#'),
    )
}

/// Keeps the browser location and the console route in step
#[component]
fn RouteSync() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let location = use_location();
    let navigate = use_navigate();

    // Browser -> console. The first run is the page load.
    create_effect({
        let state = state.clone();
        let location = location.clone();
        move |started: Option<()>| {
            location.pathname.track();
            location.search.track();
            let here = current_location(&location);
            if started.is_none() {
                state.console.start(&here);
            } else {
                state.ctx.route.set_if_changed(Route::parse(&here));
            }
        }
    });

    // Console -> browser (sign-out, "edit" from a profile card)
    let route = std::rc::Rc::clone(&state.ctx.route);
    let id = state.ctx.route.subscribe(move || {
        let target = route.get();
        if Route::parse(&current_location(&location)) != target {
            navigate(&target.href(), Default::default());
        }
    });
    let route = std::rc::Rc::clone(&state.ctx.route);
    on_cleanup(move || route.unsubscribe(id));
}

/// Builds the page's controller and re-activates it when the route or the
/// session changes
#[component]
fn PageHost(page: Page) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let controller = Controller::for_page(&state.ctx, page);

    let route_changed = watch(&state.ctx.route, |r| r);
    let auth_changed = watch(&state.ctx.session, |s| s.auth_control());

    create_effect({
        let controller = controller.clone();
        let ctx = state.ctx.clone();
        move |_| {
            route_changed.track();
            auth_changed.track();
            let route = ctx.route.get();
            if route.page != controller.page() {
                return;
            }
            let controller = controller.clone();
            spawn_local(async move { controller.activate(route).await });
        }
    });

    match controller {
        Controller::Home(carousel) => view! { <HomeView carousel=carousel /> }.into_view(),
        Controller::VendorManagement(page) => view! { <VendorsView page=page /> }.into_view(),
        Controller::VendorProfiles(page) => view! { <ProfilesView page=page /> }.into_view(),
        Controller::ContractManagement(page) => view! { <ContractsView page=page /> }.into_view(),
        Controller::Analytics(page) => view! { <AnalyticsView page=page /> }.into_view(),
    }
}

/// Backend URL, editable; a change takes effect on reload
#[component]
fn Footer() -> impl IntoView {
    let (api_url, set_api_url) = create_signal(get_api_base());

    let save_url = move |_| {
        set_api_base(&api_url.get_untracked());
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-end space-x-2 text-sm">
                <span class="text-gray-400">"API:"</span>
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="w-80 bg-gray-700 rounded px-2 py-1 border border-gray-600"
                />
                <button on:click=save_url class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded">
                    "Save"
                </button>
            </div>
        </footer>
    }
}

/// `vendor-management.html#edit=3` and friends, or anything unknown
#[component]
fn LegacyRedirect() -> impl IntoView {
    let location = use_location();
    let route = Route::parse(&current_location(&location));
    view! { <Redirect path=route.href() /> }
}
