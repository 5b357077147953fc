//! Vendor Profiles Page
//!
//! Profile cards and a reviews panel for the selected vendor.

use leptos::*;
use std::rc::Rc;

use vendorhub::pages::{ReviewForm, VendorProfilesPage};
use vendorhub::render::{format_rating, ProfileCard};
use vendorhub::state::LoadPhase;

use crate::components::{bound_input, ListSkeleton, Loading};
use crate::state::watch;

#[component]
pub fn ProfilesView(page: Rc<VendorProfilesPage>) -> impl IntoView {
    let on_search = {
        let page = Rc::clone(&page);
        move |ev: ev::Event| {
            let page = Rc::clone(&page);
            let term = event_target_value(&ev);
            spawn_local(async move { page.set_search(term).await });
        }
    };
    let new_profile = {
        let page = Rc::clone(&page);
        move |_| page.new_profile()
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Vendor Profiles"</h1>
                    <p class="text-gray-400 mt-1">"Contacts and performance reviews"</p>
                </div>
                <button
                    on:click=new_profile
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium"
                >
                    "Add Vendor"
                </button>
            </div>

            <input
                type="text"
                placeholder="Search vendors..."
                on:input=on_search
                class="w-full bg-gray-700 rounded-lg px-4 py-2 border border-gray-600"
            />

            <ProfileGrid page=Rc::clone(&page) />
            <ReviewsPanel page=page />
        </div>
    }
}

#[component]
fn ProfileGrid(page: Rc<VendorProfilesPage>) -> impl IntoView {
    let changed = watch(&page, |p| &p.vendors);
    let searched = watch(&page, |p| &p.search);

    move || {
        changed.track();
        searched.track();

        let phase = page.vendors.with(|v| v.phase);
        if phase == LoadPhase::Loading && page.vendors.with(|v| v.data().is_none()) {
            return view! { <ListSkeleton count=3 /> }.into_view();
        }

        let cards = page.cards();
        if cards.is_empty() {
            return match phase {
                LoadPhase::LoadFailed => view! {
                    <p class="text-red-400">"Failed to load vendor profiles. Please try again."</p>
                }
                .into_view(),
                _ => view! { <p class="text-gray-400">"No vendors found"</p> }.into_view(),
            };
        }

        view! {
            <div class="grid md:grid-cols-3 gap-4">
                {cards
                    .into_iter()
                    .map(|card| view! { <ProfileCardView card=card page=Rc::clone(&page) /> })
                    .collect_view()}
            </div>
        }
        .into_view()
    }
}

#[component]
fn ProfileCardView(card: ProfileCard, page: Rc<VendorProfilesPage>) -> impl IntoView {
    let id = card.id;
    let view_reviews = {
        let page = Rc::clone(&page);
        move |_| {
            let page = Rc::clone(&page);
            spawn_local(async move { page.view(id).await });
        }
    };
    let edit = move |_| page.edit_vendor(id);

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-3">
            <div class="flex items-center space-x-3">
                <div
                    class="w-12 h-12 rounded-full flex items-center justify-center font-bold"
                    style=format!("background-color: {}", card.avatar_color)
                >
                    {card.initials}
                </div>
                <div>
                    <h3 class="font-semibold">{card.name}</h3>
                    <span class="text-sm text-gray-400">{card.category}</span>
                </div>
            </div>
            <div class="text-sm text-gray-300 space-y-1">
                <p>{card.email}</p>
                <p>{card.phone}</p>
                <p>{card.address}</p>
                <p class="text-gray-500">{card.contract_info}</p>
            </div>
            <div class="flex space-x-2">
                <button on:click=view_reviews class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded">
                    "Performance"
                </button>
                <button on:click=edit class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded">
                    "Edit"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ReviewsPanel(page: Rc<VendorProfilesPage>) -> impl IntoView {
    let selected = watch(&page, |p| &p.selected);
    let reviews_changed = watch(&page, |p| &p.reviews);

    move || {
        selected.track();
        page.selected.get()?;

        let title = page
            .selected_vendor()
            .map(|v| format!("{} - Performance", v.name))
            .unwrap_or_else(|| "Performance".to_string());
        let close = {
            let page = Rc::clone(&page);
            move |_| page.close_reviews()
        };

        let list = {
            let page = Rc::clone(&page);
            move || {
                reviews_changed.track();
                page.reviews.with(|r| match (r.phase, r.data()) {
                    (LoadPhase::Loading, None) | (LoadPhase::Idle, _) => view! { <Loading /> }.into_view(),
                    (LoadPhase::LoadFailed, None) => view! {
                        <p class="text-red-400">"Failed to load performance reviews."</p>
                    }
                    .into_view(),
                    (_, Some(list)) if list.is_empty() => {
                        view! { <p class="text-gray-400">"No reviews yet"</p> }.into_view()
                    }
                    (_, Some(list)) => list
                        .iter()
                        .map(|review| {
                            let date = review.date.clone().unwrap_or_else(|| "-".to_string());
                            let comments = review.comments.clone().unwrap_or_default();
                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <span class="text-gray-400 text-sm w-28">{date}</span>
                                    <span class="flex-1">{comments}</span>
                                    <span class="font-semibold">{format_rating(Some(review.rating))}</span>
                                </div>
                            }
                        })
                        .collect_view(),
                    (_, None) => view! {}.into_view(),
                })
            }
        };

        Some(view! {
            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-xl font-semibold">{title}</h2>
                    <button on:click=close class="text-gray-400 hover:text-white">"✕"</button>
                </div>
                <div>{list}</div>
                <ReviewFormPanel page=Rc::clone(&page) />
            </section>
        })
    }
}

#[component]
fn ReviewFormPanel(page: Rc<VendorProfilesPage>) -> impl IntoView {
    let changed = watch(&page, |p| &p.review_form);

    let field = |placeholder: &'static str, kind: &'static str, get: fn(&ReviewForm) -> String, set: fn(&mut ReviewForm, String)| {
        let reader = Rc::clone(&page);
        let writer = Rc::clone(&page);
        bound_input(
            placeholder,
            kind,
            move || {
                changed.track();
                reader.review_form.with(get)
            },
            move |value| writer.review_form.update(|form| set(form, value)),
        )
    };

    let on_submit = {
        let page = Rc::clone(&page);
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let page = Rc::clone(&page);
            spawn_local(async move {
                let _ = page.submit_review().await;
            });
        }
    };

    view! {
        <form on:submit=on_submit class="grid md:grid-cols-4 gap-2">
            {field("Rating (1-5)", "number", |f| f.rating.clone(), |f, v| f.rating = v)}
            {field("Date (YYYY-MM-DD)", "date", |f| f.date.clone(), |f, v| f.date = v)}
            {field("Comments", "text", |f| f.comments.clone(), |f, v| f.comments = v)}
            <button type="submit" class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium">
                "Add Review"
            </button>
        </form>
    }
}
