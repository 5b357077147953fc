//! Contract Management Page
//!
//! Status tabs, contract cards, and the create/edit/renew dialog.

use leptos::*;
use std::rc::Rc;

use vendorhub::pages::{ContractForm, ContractManagementPage, StatusTab};
use vendorhub::render::ContractCard;
use vendorhub::state::LoadPhase;

use crate::components::{bound_input, confirm, ListSkeleton};
use crate::state::watch;

#[component]
pub fn ContractsView(page: Rc<ContractManagementPage>) -> impl IntoView {
    // Dialog visibility; the form contents live in the controller
    let dialog = create_rw_signal(false);

    let on_search = {
        let page = Rc::clone(&page);
        move |ev: ev::Event| {
            let page = Rc::clone(&page);
            let term = event_target_value(&ev);
            spawn_local(async move { page.set_search(term).await });
        }
    };
    let new_contract = {
        let page = Rc::clone(&page);
        move |_| {
            page.new_contract();
            dialog.set(true);
        }
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Contract Management"</h1>
                    <p class="text-gray-400 mt-1">"Terms, renewals, and expiry"</p>
                </div>
                <button
                    on:click=new_contract
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium"
                >
                    "New Contract"
                </button>
            </div>

            <div class="flex items-center justify-between space-x-4">
                <StatusTabs page=Rc::clone(&page) />
                <input
                    type="text"
                    placeholder="Search contracts..."
                    on:input=on_search
                    class="flex-1 max-w-sm bg-gray-700 rounded-lg px-4 py-2 border border-gray-600"
                />
            </div>

            <ContractGrid page=Rc::clone(&page) dialog=dialog />

            {
                let page = Rc::clone(&page);
                move || dialog.get().then(|| view! { <ContractDialog page=Rc::clone(&page) dialog=dialog /> })
            }
        </div>
    }
}

#[component]
fn StatusTabs(page: Rc<ContractManagementPage>) -> impl IntoView {
    let changed = watch(&page, |p| &p.tab);

    StatusTab::ALL
        .into_iter()
        .map(|tab| {
            let active = {
                let page = Rc::clone(&page);
                move || {
                    changed.track();
                    if page.tab.get() == tab {
                        "px-4 py-2 rounded-lg bg-gray-700 text-white"
                    } else {
                        "px-4 py-2 rounded-lg text-gray-400 hover:text-white"
                    }
                }
            };
            let select = {
                let page = Rc::clone(&page);
                move |_| {
                    let page = Rc::clone(&page);
                    spawn_local(async move { page.set_tab(tab).await });
                }
            };
            view! { <button on:click=select class=active>{tab.label()}</button> }
        })
        .collect_view()
}

#[component]
fn ContractGrid(page: Rc<ContractManagementPage>, dialog: RwSignal<bool>) -> impl IntoView {
    let changed = watch(&page, |p| &p.contracts);
    let names_changed = watch(&page, |p| &p.vendor_names);
    let searched = watch(&page, |p| &p.search);

    move || {
        changed.track();
        names_changed.track();
        searched.track();

        let phase = page.contracts.with(|c| c.phase);
        if phase == LoadPhase::Loading && page.contracts.with(|c| c.data().is_none()) {
            return view! { <ListSkeleton count=3 /> }.into_view();
        }

        let cards = page.cards();
        if cards.is_empty() {
            return match phase {
                LoadPhase::LoadFailed => view! {
                    <p class="text-red-400">"Failed to load contracts. Please try again."</p>
                }
                .into_view(),
                _ => view! { <p class="text-gray-400">"No contracts found"</p> }.into_view(),
            };
        }

        view! {
            <div class="grid md:grid-cols-2 gap-4">
                {cards
                    .into_iter()
                    .map(|card| view! { <ContractCardView card=card page=Rc::clone(&page) dialog=dialog /> })
                    .collect_view()}
            </div>
        }
        .into_view()
    }
}

#[component]
fn ContractCardView(
    card: ContractCard,
    page: Rc<ContractManagementPage>,
    dialog: RwSignal<bool>,
) -> impl IntoView {
    let id = card.id;
    let border = match card.highlight {
        Some("expiring") => "border-l-4 border-yellow-500",
        Some("expired") => "border-l-4 border-red-500",
        _ => "border-l-4 border-green-500",
    };

    let edit = {
        let page = Rc::clone(&page);
        move |_| {
            if page.edit(id) {
                dialog.set(true);
            }
        }
    };
    let renew = {
        let page = Rc::clone(&page);
        move |_| {
            if page.renew(id) {
                dialog.set(true);
            }
        }
    };
    let delete = move |_| {
        if !confirm("Are you sure you want to delete this contract?") {
            return;
        }
        let page = Rc::clone(&page);
        spawn_local(async move {
            let _ = page.delete(id).await;
        });
    };

    view! {
        <div class=format!("bg-gray-800 rounded-xl p-6 space-y-2 {}", border)>
            <div class="flex items-center justify-between">
                <h3 class="font-semibold">{card.title}</h3>
                <span class="text-sm px-2 py-1 rounded bg-gray-700">{card.status_label}</span>
            </div>
            <p class="text-sm text-gray-400">{card.vendor}</p>
            <p class="text-sm">{card.start_date}" → "{card.end_date}</p>
            <p class="font-semibold">{card.value}</p>
            <div class="flex space-x-2 pt-2">
                <button on:click=edit class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded">"Edit"</button>
                <button on:click=renew class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded">"Renew"</button>
                <button on:click=delete class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded">"Delete"</button>
            </div>
        </div>
    }
}

#[component]
fn ContractDialog(page: Rc<ContractManagementPage>, dialog: RwSignal<bool>) -> impl IntoView {
    let changed = watch(&page, |p| &p.form);
    let names_changed = watch(&page, |p| &p.vendor_names);

    let field = |placeholder: &'static str, kind: &'static str, get: fn(&ContractForm) -> String, set: fn(&mut ContractForm, String)| {
        let reader = Rc::clone(&page);
        let writer = Rc::clone(&page);
        bound_input(
            placeholder,
            kind,
            move || {
                changed.track();
                reader.form.with(get)
            },
            move |value| writer.form.update(|form| set(form, value)),
        )
    };

    let vendor_options = {
        let page = Rc::clone(&page);
        move || {
            names_changed.track();
            changed.track();
            let selected = page.form.with(|f| f.vendor_id.clone());
            let mut names: Vec<(i64, String)> = page
                .vendor_names
                .with(|n| n.iter().map(|(id, name)| (*id, name.clone())).collect());
            names.sort_by(|a, b| a.1.cmp(&b.1));
            names
                .into_iter()
                .map(|(id, name)| {
                    let value = id.to_string();
                    let is_selected = value == selected;
                    view! { <option value=value selected=is_selected>{name}</option> }
                })
                .collect_view()
        }
    };
    let on_vendor = {
        let page = Rc::clone(&page);
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            page.form.update(|f| f.vendor_id = value);
        }
    };
    let on_status = {
        let page = Rc::clone(&page);
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            page.form.update(|f| f.status = value);
        }
    };
    let status_value = {
        let page = Rc::clone(&page);
        move || {
            changed.track();
            page.form.with(|f| f.status.clone())
        }
    };

    let on_submit = {
        let page = Rc::clone(&page);
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let page = Rc::clone(&page);
            spawn_local(async move {
                if page.submit_form().await.is_ok() {
                    dialog.set(false);
                }
            });
        }
    };
    let submit_label = {
        let page = Rc::clone(&page);
        move || {
            changed.track();
            page.form.with(ContractForm::submit_label)
        }
    };

    view! {
        <div class="fixed inset-0 z-40 bg-black/60 flex items-center justify-center">
            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 w-full max-w-lg space-y-3">
                {field("Title", "text", |f| f.title.clone(), |f, v| f.title = v)}
                {field("Description", "text", |f| f.description.clone(), |f, v| f.description = v)}
                <select on:change=on_vendor class="w-full bg-gray-700 rounded-lg px-4 py-2 border border-gray-600">
                    <option value="">"Select a vendor"</option>
                    {vendor_options}
                </select>
                <select
                    on:change=on_status
                    prop:value=status_value
                    class="w-full bg-gray-700 rounded-lg px-4 py-2 border border-gray-600"
                >
                    <option value="active">"Active"</option>
                    <option value="expiring">"Expiring"</option>
                    <option value="expired">"Expired"</option>
                </select>
                <div class="grid grid-cols-2 gap-2">
                    {field("Start date", "date", |f| f.start_date.clone(), |f, v| f.start_date = v)}
                    {field("End date", "date", |f| f.end_date.clone(), |f, v| f.end_date = v)}
                </div>
                {field("Value ($)", "text", |f| f.value.clone(), |f, v| f.value = v)}
                <div class="flex justify-end space-x-2">
                    <button
                        type="button"
                        on:click=move |_| dialog.set(false)
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg"
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium">
                        {submit_label}
                    </button>
                </div>
            </form>
        </div>
    }
}
