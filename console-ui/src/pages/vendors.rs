//! Vendor Management Page
//!
//! Vendor list with search and category filter, plus the create/edit form.

use leptos::*;
use std::collections::BTreeSet;
use std::rc::Rc;

use vendorhub::models::VendorInput;
use vendorhub::pages::VendorManagementPage;
use vendorhub::state::LoadPhase;

use crate::components::{bound_input, confirm, ListSkeleton, Loading};
use crate::state::watch;

#[component]
pub fn VendorsView(page: Rc<VendorManagementPage>) -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Vendor Management"</h1>
                <p class="text-gray-400 mt-1">"Add, update, and remove vendors"</p>
            </div>

            <div class="grid md:grid-cols-3 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <VendorFormPanel page=Rc::clone(&page) />
                </section>
                <section class="md:col-span-2 bg-gray-800 rounded-xl p-6 space-y-4">
                    <VendorFilters page=Rc::clone(&page) />
                    <VendorList page=page />
                </section>
            </div>
        </div>
    }
}

#[component]
fn VendorFormPanel(page: Rc<VendorManagementPage>) -> impl IntoView {
    let changed = watch(&page, |p| &p.form);
    let (submitting, set_submitting) = create_signal(false);

    let field = |placeholder: &'static str, get: fn(&VendorInput) -> String, set: fn(&mut VendorInput, String)| {
        let reader = Rc::clone(&page);
        let writer = Rc::clone(&page);
        bound_input(
            placeholder,
            "text",
            move || {
                changed.track();
                reader.form.with(|f| get(&f.input))
            },
            move |value| writer.update_form(|input| set(input, value)),
        )
    };

    let on_submit = {
        let page = Rc::clone(&page);
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            set_submitting.set(true);
            let page = Rc::clone(&page);
            spawn_local(async move {
                let _ = page.submit_form().await;
                set_submitting.set(false);
            });
        }
    };

    let heading = {
        let page = Rc::clone(&page);
        move || {
            changed.track();
            if page.form.with(|f| f.mode.is_update()) {
                "Edit Vendor"
            } else {
                "New Vendor"
            }
        }
    };
    let submit_label = {
        let page = Rc::clone(&page);
        move || {
            changed.track();
            if submitting.get() {
                "Saving..."
            } else {
                page.form.with(|f| f.submit_label())
            }
        }
    };
    let cancel = {
        let page = Rc::clone(&page);
        move || {
            changed.track();
            page.form.with(|f| f.mode.is_update()).then(|| {
                let page = Rc::clone(&page);
                view! {
                    <button
                        type="button"
                        on:click=move |_| page.cancel_edit()
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg"
                    >
                        "Cancel"
                    </button>
                }
            })
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-3">
            <h2 class="text-xl font-semibold">{heading}</h2>
            {field("Name", |i| i.name.clone(), |i, v| i.name = v)}
            {field("Business ID", |i| i.business_id.clone(), |i, v| i.business_id = v)}
            {field("Phone", |i| i.phone.clone(), |i, v| i.phone = v)}
            {field("Email", |i| i.email.clone(), |i, v| i.email = v)}
            {field("Address", |i| i.address.clone(), |i, v| i.address = v)}
            {field("Category", |i| i.category.clone(), |i, v| i.category = v)}
            <div class="flex space-x-2">
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="flex-1 px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium"
                >
                    {submit_label}
                </button>
                {cancel}
            </div>
        </form>
    }
}

#[component]
fn VendorFilters(page: Rc<VendorManagementPage>) -> impl IntoView {
    let changed = watch(&page, |p| &p.vendors);

    // Categories seen so far; the list itself is filtered server side
    let categories = create_rw_signal(BTreeSet::<String>::new());
    create_effect({
        let page = Rc::clone(&page);
        move |_| {
            changed.track();
            let seen: Vec<String> = page.vendors.with(|v| {
                v.data()
                    .map(|list| list.iter().filter_map(|v| v.category.clone()).collect())
                    .unwrap_or_default()
            });
            categories.update(|set| set.extend(seen));
        }
    });

    let on_search = {
        let page = Rc::clone(&page);
        move |ev: ev::Event| {
            let page = Rc::clone(&page);
            let term = event_target_value(&ev);
            spawn_local(async move { page.set_search(term).await });
        }
    };
    let on_category = move |ev: ev::Event| {
        let page = Rc::clone(&page);
        let category = event_target_value(&ev);
        spawn_local(async move { page.set_category(category).await });
    };

    view! {
        <div class="flex space-x-2">
            <input
                type="text"
                placeholder="Search vendors..."
                on:input=on_search
                class="flex-1 bg-gray-700 rounded-lg px-4 py-2 border border-gray-600"
            />
            <select on:change=on_category class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600">
                <option value="">"All Categories"</option>
                {move || categories
                    .get()
                    .into_iter()
                    .map(|c| view! { <option value=c.clone()>{c}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn VendorList(page: Rc<VendorManagementPage>) -> impl IntoView {
    let changed = watch(&page, |p| &p.vendors);
    let searched = watch(&page, |p| &p.search);

    move || {
        changed.track();
        searched.track();

        let phase = page.vendors.with(|v| v.phase);
        if phase == LoadPhase::Loading && page.vendors.with(|v| v.data().is_none()) {
            return view! { <ListSkeleton count=4 /> }.into_view();
        }

        let rows = page.rows();
        if rows.is_empty() {
            return match phase {
                LoadPhase::LoadFailed => view! {
                    <p class="text-red-400">"Failed to load vendors. Please try again."</p>
                }
                .into_view(),
                LoadPhase::Idle => view! { <Loading /> }.into_view(),
                _ => view! { <p class="text-gray-400">"No vendors found"</p> }.into_view(),
            };
        }

        rows.into_iter()
            .map(|row| {
                let id = row.id;
                let edit = {
                    let page = Rc::clone(&page);
                    move |_| {
                        let page = Rc::clone(&page);
                        spawn_local(async move {
                            let _ = page.begin_edit(id).await;
                        });
                    }
                };
                let delete = {
                    let page = Rc::clone(&page);
                    move |_| {
                        if !confirm("Are you sure you want to delete this vendor?") {
                            return;
                        }
                        let page = Rc::clone(&page);
                        spawn_local(async move {
                            let _ = page.delete(id).await;
                        });
                    }
                };
                view! {
                    <div class="flex items-center justify-between py-3 border-b border-gray-700 last:border-0">
                        <div>
                            <h3 class="font-semibold">{row.name}</h3>
                            <p class="text-sm text-gray-400">
                                {row.category}" · "{row.email}" · "{row.phone}
                            </p>
                        </div>
                        <div class="space-x-2">
                            <button on:click=edit class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded">
                                "Edit"
                            </button>
                            <button on:click=delete class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded">
                                "Delete"
                            </button>
                        </div>
                    </div>
                }
            })
            .collect_view()
    }
}
