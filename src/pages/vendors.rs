//! Vendor management page: the vendor list with search and category filter,
//! and the create/update form.

use crate::api::{ApiError, ApiResult};
use crate::context::ConsoleContext;
use crate::models::{EntityId, Vendor, VendorInput};
use crate::pages::{Page, Route};
use crate::render::{vendor_rows, VendorRow};
use crate::state::{Loadable, Observable, RequestTracker};

/// Whether the vendor form creates a new record or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Update(EntityId),
}

impl FormMode {
    pub fn is_update(&self) -> bool {
        matches!(self, FormMode::Update(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VendorForm {
    pub input: VendorInput,
    pub mode: FormMode,
}

impl VendorForm {
    pub fn editing(vendor: &Vendor) -> Self {
        Self {
            input: VendorInput::from(vendor),
            mode: FormMode::Update(vendor.id),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Vendor",
            FormMode::Update(_) => "Update Vendor",
        }
    }

    pub fn validate(&self) -> ApiResult<()> {
        validate_vendor(&self.input)
    }
}

pub(crate) fn validate_vendor(input: &VendorInput) -> ApiResult<()> {
    if input.name.trim().is_empty() {
        return Err(ApiError::Validation("Vendor name is required".to_string()));
    }
    let email = input.email.trim();
    if !email.is_empty() && !email.contains('@') {
        return Err(ApiError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

pub struct VendorManagementPage {
    ctx: ConsoleContext,
    pub vendors: Observable<Loadable<Vec<Vendor>>>,
    pub search: Observable<String>,
    pub category: Observable<String>,
    pub form: Observable<VendorForm>,
    tracker: RequestTracker,
    edit_tracker: RequestTracker,
}

impl VendorManagementPage {
    pub fn new(ctx: ConsoleContext) -> Self {
        Self {
            ctx,
            vendors: Observable::default(),
            search: Observable::default(),
            category: Observable::default(),
            form: Observable::default(),
            tracker: RequestTracker::new(),
            edit_tracker: RequestTracker::new(),
        }
    }

    /// Load the list, then open the form on `edit` if one was requested
    pub async fn activate(&self, edit: Option<EntityId>) {
        self.load().await;
        if let Some(id) = edit {
            let _ = self.begin_edit(id).await;
        }
    }

    /// Fetch the list for the current category. A response that arrives
    /// after a newer load was issued is dropped.
    pub async fn load(&self) {
        let ticket = self.tracker.issue();
        self.vendors.update(|v| v.begin());

        let category = self.category.get();
        let result = self.ctx.api.list_vendors(Some(&category)).await;

        if !self.tracker.is_current(ticket) {
            tracing::debug!(generation = ticket.generation(), "Discarding stale vendor list");
            return;
        }

        match result {
            Ok(vendors) => {
                tracing::debug!(count = vendors.len(), "Vendors loaded");
                self.vendors.update(|v| v.succeed(vendors));
            }
            Err(e) => {
                self.vendors.update(|v| v.fail(e.to_string()));
                self.ctx.report_load("vendors", &e);
            }
        }
    }

    pub async fn set_search(&self, term: impl Into<String>) {
        self.search.set(term.into());
        self.load().await;
    }

    pub async fn set_category(&self, category: impl Into<String>) {
        self.category.set(category.into());
        self.load().await;
    }

    /// Rows for the current list and search term
    pub fn rows(&self) -> Vec<VendorRow> {
        let search = self.search.get();
        self.vendors.with(|v| {
            v.data()
                .map(|list| vendor_rows(list, &search))
                .unwrap_or_default()
        })
    }

    pub fn update_form(&self, f: impl FnOnce(&mut VendorInput)) {
        self.form.update(|form| f(&mut form.input));
    }

    /// Validate, then create or update. On success the form is reset and
    /// the list reloaded; on failure the form keeps its contents.
    pub async fn submit_form(&self) -> ApiResult<Vendor> {
        let form = self.form.get();
        if let Err(e) = form.validate() {
            self.ctx.report(&e);
            return Err(e);
        }

        let result = match form.mode {
            FormMode::Create => self.ctx.api.create_vendor(&form.input).await,
            FormMode::Update(id) => self.ctx.api.update_vendor(id, &form.input).await,
        };

        match result {
            Ok(vendor) => {
                let message = match form.mode {
                    FormMode::Create => "Vendor created successfully!",
                    FormMode::Update(_) => "Vendor updated successfully!",
                };
                tracing::info!(vendor_id = vendor.id, "{}", message);
                self.ctx.notices.success(message);
                self.form.set(VendorForm::default());
                self.load().await;
                Ok(vendor)
            }
            Err(e) => {
                self.ctx.report(&e);
                Err(e)
            }
        }
    }

    /// Fetch the full directory and pre-fill the form from vendor `id`.
    /// Only the most recently requested edit is applied, and once it is the
    /// `edit=<id>` route parameter is dropped so re-activation keeps the form.
    pub async fn begin_edit(&self, id: EntityId) -> ApiResult<()> {
        let ticket = self.edit_tracker.issue();
        let result = self.ctx.api.list_vendors(None).await.and_then(|vendors| {
            vendors
                .into_iter()
                .find(|v| v.id == id)
                .ok_or_else(|| ApiError::RequestFailed {
                    status: 404,
                    message: format!("Vendor {} not found", id),
                })
        });

        if !self.edit_tracker.is_current(ticket) {
            tracing::debug!(vendor_id = id, "Discarding superseded edit prefill");
            return Ok(());
        }

        match result {
            Ok(vendor) => {
                self.form.set(VendorForm::editing(&vendor));
                if self.ctx.route.with(|r| r.page == Page::VendorManagement) {
                    self.ctx
                        .route
                        .set_if_changed(Route::new(Page::VendorManagement));
                }
                Ok(())
            }
            Err(e) => {
                self.ctx.report(&e);
                Err(e)
            }
        }
    }

    pub fn cancel_edit(&self) {
        // A prefill still in flight must not reopen the form
        self.edit_tracker.issue();
        self.form.set(VendorForm::default());
    }

    /// Delete and reload. Confirmation is the front end's job.
    pub async fn delete(&self, id: EntityId) -> ApiResult<()> {
        match self.ctx.api.delete_vendor(id).await {
            Ok(_) => {
                tracing::info!(vendor_id = id, "Vendor deleted");
                self.ctx.notices.success("Vendor deleted successfully!");
                if self.form.with(|f| f.mode == FormMode::Update(id)) {
                    self.form.set(VendorForm::default());
                }
                self.load().await;
                Ok(())
            }
            Err(e) => {
                self.ctx.report(&e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::context;
    use crate::state::LoadPhase;
    use futures_util::future::join3;

    const ACME_BODA: &str = r#"[
        {"id": 1, "name": "Acme", "category": "IT"},
        {"id": 2, "name": "Boda", "category": "IT"}
    ]"#;

    #[tokio::test]
    async fn test_search_renders_matching_vendor() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx);

        transport.respond(200, ACME_BODA);
        transport.respond(200, ACME_BODA);
        page.load().await;
        page.set_search("ac").await;

        let rows = page.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Acme");
    }

    #[tokio::test]
    async fn test_category_filter_goes_to_server() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx);

        transport.respond(
            200,
            r#"[{"id": 1, "name": "Acme", "category": "IT"},
                {"id": 3, "name": "Cater", "category": "Food"}]"#,
        );
        page.set_category("IT").await;

        assert!(transport.urls()[0].contains("category=IT"));
        // Whatever the server returned is shown.
        assert_eq!(page.rows().len(), 2);
    }

    #[tokio::test]
    async fn test_create_resets_form_and_reloads() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx.clone());

        page.update_form(|input| {
            input.name = "Acme".to_string();
            input.category = "IT".to_string();
        });
        transport.respond(201, r#"{"id": 1, "name": "Acme", "category": "IT"}"#);
        transport.respond(200, r#"[{"id": 1, "name": "Acme", "category": "IT"}]"#);

        let created = page.submit_form().await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(page.form.get(), VendorForm::default());
        assert_eq!(page.rows()[0].name, "Acme");
        assert_eq!(
            ctx.notices.current()[0].message,
            "Vendor created successfully!"
        );

        let requests = transport.requests();
        assert_eq!(requests[0].method.to_string(), "POST");
        assert!(requests[0].body.as_deref().unwrap().contains("\"name\":\"Acme\""));
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx.clone());

        page.update_form(|input| input.name = "Acme".to_string());
        transport.respond(409, r#"{"message": "Vendor already exists"}"#);

        let err = page.submit_form().await.unwrap_err();
        assert_eq!(err.to_string(), "Vendor already exists");
        assert_eq!(page.form.get().input.name, "Acme");
        assert_eq!(ctx.notices.last_error().as_deref(), Some("Vendor already exists"));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_validation_blocks_request() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx);

        let err = page.submit_form().await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_edit_prefills_and_updates() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx);

        transport.respond(200, ACME_BODA);
        transport.respond(200, ACME_BODA);
        page.activate(Some(2)).await;

        let form = page.form.get();
        assert_eq!(form.mode, FormMode::Update(2));
        assert_eq!(form.input.name, "Boda");
        assert_eq!(form.submit_label(), "Update Vendor");

        transport.respond(200, r#"{"id": 2, "name": "Boda Ltd"}"#);
        transport.respond(200, ACME_BODA);
        page.update_form(|input| input.name = "Boda Ltd".to_string());
        page.submit_form().await.unwrap();

        let put = &transport.requests()[2];
        assert_eq!(put.method.to_string(), "PUT");
        assert!(put.url.ends_with("/vendors/2"));
        assert_eq!(page.form.get().submit_label(), "Add Vendor");
    }

    #[tokio::test]
    async fn test_activation_edit_clears_route_param() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx.clone());
        ctx.navigate(Route::edit_vendor(2));

        transport.respond(200, ACME_BODA);
        transport.respond(200, ACME_BODA);
        page.activate(ctx.route.get().edit).await;
        assert_eq!(page.form.get().mode, FormMode::Update(2));
        assert_eq!(ctx.route.get(), Route::new(Page::VendorManagement));

        // Re-activating from the cleaned route keeps what the user typed.
        page.update_form(|input| input.phone = "555-0199".to_string());
        transport.respond(200, ACME_BODA);
        page.activate(ctx.route.get().edit).await;
        assert_eq!(page.form.get().input.phone, "555-0199");
        assert_eq!(page.form.get().mode, FormMode::Update(2));
    }

    #[tokio::test]
    async fn test_last_clicked_edit_wins() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx);

        let first = transport.respond_gated(200, ACME_BODA);
        let second = transport.respond_gated(200, ACME_BODA);

        // Edit on Acme, then on Boda; Acme's directory response lands last.
        let (a, b, _) = join3(page.begin_edit(1), page.begin_edit(2), async {
            second.release();
            tokio::task::yield_now().await;
            first.release();
        })
        .await;

        assert!(a.is_ok() && b.is_ok());
        let form = page.form.get();
        assert_eq!(form.mode, FormMode::Update(2));
        assert_eq!(form.input.name, "Boda");
    }

    #[tokio::test]
    async fn test_cancel_drops_pending_prefill() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx);

        let gate = transport.respond_gated(200, ACME_BODA);
        let (result, ()) = futures_util::future::join(page.begin_edit(1), async {
            page.cancel_edit();
            gate.release();
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(page.form.get(), VendorForm::default());
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_rows() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx.clone());

        transport.respond(200, ACME_BODA);
        page.load().await;
        transport.respond(500, "");
        page.load().await;

        assert_eq!(page.vendors.with(|v| v.phase), LoadPhase::LoadFailed);
        assert_eq!(page.rows().len(), 2);
        assert_eq!(
            ctx.notices.last_error().as_deref(),
            Some("Failed to load vendors. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_later_issued_load_wins() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx);

        let first = transport.respond_gated(200, r#"[{"id": 1, "name": "Old"}]"#);
        let second = transport.respond_gated(200, r#"[{"id": 2, "name": "New"}]"#);

        // The second response lands first, then the stale first one.
        join3(page.load(), page.load(), async {
            second.release();
            tokio::task::yield_now().await;
            first.release();
        })
        .await;

        let rows = page.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "New");
        assert_eq!(page.vendors.with(|v| v.phase), LoadPhase::Rendered);
    }

    #[tokio::test]
    async fn test_stale_response_arriving_first_is_dropped() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx);

        let first = transport.respond_gated(200, r#"[{"id": 1, "name": "Old"}]"#);
        let second = transport.respond_gated(200, r#"[{"id": 2, "name": "New"}]"#);

        join3(page.load(), page.load(), async {
            first.release();
            tokio::task::yield_now().await;
            second.release();
        })
        .await;

        assert_eq!(page.rows()[0].name, "New");
    }

    #[tokio::test]
    async fn test_delete_reloads() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx.clone());

        transport.respond(200, r#"{"message": "Vendor deleted"}"#);
        transport.respond(200, r#"[{"id": 1, "name": "Acme"}]"#);
        page.delete(2).await.unwrap();

        assert!(transport.urls()[0].ends_with("/vendors/2"));
        assert_eq!(page.rows().len(), 1);
        assert_eq!(
            ctx.notices.current()[0].message,
            "Vendor deleted successfully!"
        );
    }

    #[tokio::test]
    async fn test_expired_session_reported() {
        let (transport, ctx) = context(true);
        let page = VendorManagementPage::new(ctx.clone());

        transport.respond(401, "");
        page.load().await;

        assert!(!ctx.session.is_authenticated());
        assert_eq!(
            ctx.notices.last_error().as_deref(),
            Some("Session expired. Please login again.")
        );
    }
}
