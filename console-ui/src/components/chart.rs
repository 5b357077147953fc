//! Chart Component
//!
//! Horizontal bar chart for a single series.

use leptos::*;

use vendorhub::render::ChartSeries;

/// Bar colors, cycled per point
const SERIES_COLORS: [&str; 6] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

#[component]
pub fn BarChart(series: ChartSeries) -> impl IntoView {
    let bars = if series.is_empty() {
        view! { <p class="text-gray-400 text-sm">"No data yet"</p> }.into_view()
    } else {
        series
            .points()
            .enumerate()
            .map(|(i, (label, value))| {
                let color = SERIES_COLORS[i % SERIES_COLORS.len()];
                let style = format!("width: {:.1}%; background-color: {}", series.share(i), color);
                view! {
                    <div class="flex items-center space-x-3">
                        <span class="w-32 text-sm text-gray-300 truncate">{label.to_string()}</span>
                        <div class="flex-1 bg-gray-700 rounded h-4">
                            <div class="h-4 rounded" style=style />
                        </div>
                        <span class="w-20 text-right text-sm">{value.to_string()}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-lg font-semibold mb-4">{series.title}</h2>
            <div class="space-y-2">{bars}</div>
        </section>
    }
}
