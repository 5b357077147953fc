//! Bootstrap
//!
//! Page-load entry point: sync the header control with the stored session,
//! resolve the current location to a page, and hand over to that page's
//! controller. A sign-out from anywhere sends the console back home.

use std::rc::Rc;

use crate::context::ConsoleContext;
use crate::pages::{
    AnalyticsPage, Carousel, ContractManagementPage, Page, Route, VendorManagementPage,
    VendorProfilesPage,
};
use crate::session::SessionEvent;

/// The controller of the active page
#[derive(Clone)]
pub enum Controller {
    Home(Carousel),
    VendorManagement(Rc<VendorManagementPage>),
    VendorProfiles(Rc<VendorProfilesPage>),
    ContractManagement(Rc<ContractManagementPage>),
    Analytics(Rc<AnalyticsPage>),
}

impl Controller {
    pub fn for_page(ctx: &ConsoleContext, page: Page) -> Self {
        let ctx = ctx.clone();
        match page {
            Page::Home => Controller::Home(Carousel::default()),
            Page::VendorManagement => {
                Controller::VendorManagement(Rc::new(VendorManagementPage::new(ctx)))
            }
            Page::VendorProfiles => Controller::VendorProfiles(Rc::new(VendorProfilesPage::new(ctx))),
            Page::ContractManagement => {
                Controller::ContractManagement(Rc::new(ContractManagementPage::new(ctx)))
            }
            Page::Analytics => Controller::Analytics(Rc::new(AnalyticsPage::new(ctx))),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Controller::Home(_) => Page::Home,
            Controller::VendorManagement(_) => Page::VendorManagement,
            Controller::VendorProfiles(_) => Page::VendorProfiles,
            Controller::ContractManagement(_) => Page::ContractManagement,
            Controller::Analytics(_) => Page::Analytics,
        }
    }

    /// Run the page's initial fetches
    pub async fn activate(&self, route: Route) {
        match self {
            Controller::Home(_) => {}
            Controller::VendorManagement(page) => page.activate(route.edit).await,
            Controller::VendorProfiles(page) => page.activate().await,
            Controller::ContractManagement(page) => page.activate().await,
            Controller::Analytics(page) => page.activate().await,
        }
    }
}

pub struct Console {
    ctx: ConsoleContext,
}

impl Console {
    /// Wire the session listener. Call once per console instance.
    pub fn new(ctx: ConsoleContext) -> Self {
        let route = Rc::clone(&ctx.route);
        ctx.session.subscribe(move |event| {
            if let SessionEvent::SignedOut(reason) = event {
                tracing::debug!(?reason, "Signed out, returning home");
                route.set(Route::home());
            }
        });
        Self { ctx }
    }

    pub fn context(&self) -> &ConsoleContext {
        &self.ctx
    }

    /// Reflect the session and resolve `location` to the route to show
    pub fn start(&self, location: &str) -> Route {
        let control = self.ctx.session.reflect_session_in_ui();
        let route = Route::parse(location);
        tracing::info!(page = %route.page, auth = control.label(), "Console started");
        self.ctx.navigate(route);
        route
    }

    /// Build the controller for `route` and run its initial load
    pub async fn open(&self, route: Route) -> Controller {
        let controller = Controller::for_page(&self.ctx, route.page);
        controller.activate(route).await;
        controller
    }

    /// Resolve and activate in one step
    pub async fn boot(&self, location: &str) -> Controller {
        let route = self.start(location);
        self.open(route).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::context;
    use crate::session::AuthControl;

    #[tokio::test]
    async fn test_boot_dispatches_to_page() {
        let (transport, ctx) = context(true);
        let console = Console::new(ctx.clone());

        transport.respond(200, r#"[{"id": 3, "name": "Cater", "category": "Food"}]"#);
        transport.respond(200, r#"[{"id": 3, "name": "Cater", "category": "Food"}]"#);
        let controller = console.boot("vendor-management.html#edit=3").await;

        assert_eq!(controller.page(), Page::VendorManagement);
        assert_eq!(ctx.session.auth_control().get().label(), "Logout");
        match controller {
            Controller::VendorManagement(page) => {
                assert_eq!(page.form.get().input.name, "Cater");
            }
            _ => panic!("wrong controller"),
        }
    }

    #[tokio::test]
    async fn test_expired_session_goes_home_once() {
        let (transport, ctx) = context(true);
        let console = Console::new(ctx.clone());

        let route_changes = Rc::new(std::cell::Cell::new(0));
        let rc = Rc::clone(&route_changes);
        ctx.route.subscribe(move || rc.set(rc.get() + 1));

        console.start("/analytics");
        assert_eq!(route_changes.get(), 1);

        // Six concurrent calls all answered 401: one sign-out, one redirect.
        for _ in 0..6 {
            transport.respond(401, "");
        }
        console.open(Route::new(Page::Analytics)).await;

        assert_eq!(ctx.route.get(), Route::home());
        assert_eq!(route_changes.get(), 2);
        assert_eq!(ctx.session.auth_control().get(), AuthControl::Login);
    }

    #[tokio::test]
    async fn test_signed_out_start_shows_login() {
        let (_, ctx) = context(false);
        let console = Console::new(ctx.clone());

        let route = console.start("/");
        assert_eq!(route.page, Page::Home);
        assert_eq!(ctx.session.auth_control().get(), AuthControl::Login);
        assert!(matches!(console.open(route).await, Controller::Home(_)));
    }
}
