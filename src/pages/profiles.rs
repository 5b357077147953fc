//! Vendor profiles page: profile cards, performance reviews for the selected
//! vendor, and the review form.

use crate::api::{ApiError, ApiResult};
use crate::context::ConsoleContext;
use crate::models::{EntityId, Review, ReviewInput, Vendor};
use crate::pages::{Page, Route};
use crate::render::{profile_cards, ProfileCard};
use crate::state::{Loadable, Observable, RequestTracker};

/// Raw review form fields as typed by the user
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewForm {
    pub rating: String,
    pub comments: String,
    /// `YYYY-MM-DD`; today when left blank
    pub date: String,
}

impl ReviewForm {
    pub fn to_input(&self) -> ApiResult<ReviewInput> {
        let rating: f64 = self
            .rating
            .trim()
            .parse()
            .map_err(|_| ApiError::Validation("Rating must be a number".to_string()))?;
        if !(1.0..=5.0).contains(&rating) {
            return Err(ApiError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let date = match self.date.trim() {
            "" => chrono::Local::now().date_naive(),
            raw => chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                ApiError::Validation("Date must be in YYYY-MM-DD format".to_string())
            })?,
        };

        Ok(ReviewInput {
            rating,
            comments: self.comments.trim().to_string(),
            date: date.format("%Y-%m-%d").to_string(),
        })
    }
}

pub struct VendorProfilesPage {
    ctx: ConsoleContext,
    pub vendors: Observable<Loadable<Vec<Vendor>>>,
    pub search: Observable<String>,
    pub category: Observable<String>,
    pub selected: Observable<Option<EntityId>>,
    pub reviews: Observable<Loadable<Vec<Review>>>,
    pub review_form: Observable<ReviewForm>,
    tracker: RequestTracker,
    review_tracker: RequestTracker,
}

impl VendorProfilesPage {
    pub fn new(ctx: ConsoleContext) -> Self {
        Self {
            ctx,
            vendors: Observable::default(),
            search: Observable::default(),
            category: Observable::default(),
            selected: Observable::default(),
            reviews: Observable::default(),
            review_form: Observable::default(),
            tracker: RequestTracker::new(),
            review_tracker: RequestTracker::new(),
        }
    }

    pub async fn activate(&self) {
        self.load().await;
    }

    pub async fn load(&self) {
        let ticket = self.tracker.issue();
        self.vendors.update(|v| v.begin());

        let category = self.category.get();
        let result = self.ctx.api.list_vendors(Some(&category)).await;

        if !self.tracker.is_current(ticket) {
            tracing::debug!(generation = ticket.generation(), "Discarding stale profiles");
            return;
        }

        match result {
            Ok(vendors) => self.vendors.update(|v| v.succeed(vendors)),
            Err(e) => {
                self.vendors.update(|v| v.fail(e.to_string()));
                self.ctx.report_load("vendor profiles", &e);
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

    pub fn cards(&self) -> Vec<ProfileCard> {
        let search = self.search.get();
        self.vendors.with(|v| {
            v.data()
                .map(|list| profile_cards(list, &search))
                .unwrap_or_default()
        })
    }

    /// Name of the selected vendor, if it is in the loaded list
    pub fn selected_vendor(&self) -> Option<Vendor> {
        let id = self.selected.get()?;
        self.vendors
            .with(|v| v.data().and_then(|list| list.iter().find(|v| v.id == id).cloned()))
    }

    /// Open the performance reviews of vendor `id`
    pub async fn view(&self, id: EntityId) {
        self.selected.set(Some(id));
        self.review_form.set(ReviewForm::default());
        self.reviews.set(Loadable::default());
        self.load_reviews().await;
    }

    pub fn close_reviews(&self) {
        self.selected.set(None);
        self.reviews.set(Loadable::default());
    }

    pub async fn load_reviews(&self) {
        let Some(vendor_id) = self.selected.get() else {
            return;
        };
        let ticket = self.review_tracker.issue();
        self.reviews.update(|r| r.begin());

        let result = self.ctx.api.performance_reviews(vendor_id).await;

        // Also stale when the selection moved on while this was in flight.
        if !self.review_tracker.is_current(ticket) || self.selected.get() != Some(vendor_id) {
            tracing::debug!(vendor_id, "Discarding stale reviews");
            return;
        }

        match result {
            Ok(reviews) => self.reviews.update(|r| r.succeed(reviews)),
            Err(e) => {
                self.reviews.update(|r| r.fail(e.to_string()));
                self.ctx.report_load("performance reviews", &e);
            }
        }
    }

    /// Add a review to the selected vendor, then reload its reviews
    pub async fn submit_review(&self) -> ApiResult<Review> {
        let Some(vendor_id) = self.selected.get() else {
            let e = ApiError::Validation("Select a vendor first".to_string());
            self.ctx.report(&e);
            return Err(e);
        };

        let input = match self.review_form.with(ReviewForm::to_input) {
            Ok(input) => input,
            Err(e) => {
                self.ctx.report(&e);
                return Err(e);
            }
        };

        match self.ctx.api.add_performance_review(vendor_id, &input).await {
            Ok(review) => {
                tracing::info!(vendor_id, rating = input.rating, "Review added");
                self.ctx.notices.success("Review added successfully!");
                self.review_form.set(ReviewForm::default());
                self.load_reviews().await;
                Ok(review)
            }
            Err(e) => {
                self.ctx.report(&e);
                Err(e)
            }
        }
    }

    pub fn edit_vendor(&self, id: EntityId) {
        self.ctx.navigate(Route::edit_vendor(id));
    }

    pub fn new_profile(&self) {
        self.ctx.navigate(Route::new(Page::VendorManagement));
    }
}
