//! Analytics Page
//!
//! Summary tiles, four charts, and the top performing vendors table.

use leptos::*;
use std::rc::Rc;

use vendorhub::pages::{AnalyticsData, AnalyticsPage};
use vendorhub::state::LoadPhase;

use crate::components::{BarChart, Loading};
use crate::state::watch;

#[component]
pub fn AnalyticsView(page: Rc<AnalyticsPage>) -> impl IntoView {
    let changed = watch(&page, |p| &p.data);

    let body = move || {
        changed.track();
        let (phase, data) = page.data.with(|d| (d.phase, d.data().cloned()));
        match (phase, data) {
            (_, Some(data)) => view! { <Dashboard data=data /> }.into_view(),
            (LoadPhase::LoadFailed, None) => view! {
                <p class="text-red-400">"Failed to load analytics data. Please try again."</p>
            }
            .into_view(),
            _ => view! { <Loading /> }.into_view(),
        }
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Analytics"</h1>
                <p class="text-gray-400 mt-1">"Spending and vendor performance"</p>
            </div>
            {body}
        </div>
    }
}

#[component]
fn Dashboard(data: AnalyticsData) -> impl IntoView {
    let tiles = data
        .tiles()
        .into_iter()
        .map(|tile| view! {
            <div class="bg-gray-800 rounded-xl p-6">
                <p class="text-sm text-gray-400">{tile.label}</p>
                <p class="text-2xl font-bold mt-1">{tile.value}</p>
            </div>
        })
        .collect_view();

    let charts = data
        .charts()
        .into_iter()
        .map(|series| view! { <BarChart series=series /> })
        .collect_view();

    let rows = data.top_rows();
    let table = if rows.is_empty() {
        view! { <p class="text-gray-400">"No rated vendors yet"</p> }.into_view()
    } else {
        view! {
            <table class="w-full text-left">
                <thead class="text-sm text-gray-400">
                    <tr>
                        <th class="py-2">"Vendor"</th>
                        <th>"Category"</th>
                        <th>"Total Value"</th>
                        <th>"Rating"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr class="border-t border-gray-700">
                                <td class="py-2">{row.name}</td>
                                <td>{row.category}</td>
                                <td>{row.total_value}</td>
                                <td>{row.rating}</td>
                                <td><span class="text-green-400">{row.status}</span></td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_view()
    };

    view! {
        <div class="space-y-8">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">{tiles}</div>
            <div class="grid md:grid-cols-2 gap-8">{charts}</div>
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Top Performing Vendors"</h2>
                {table}
            </section>
        </div>
    }
}
