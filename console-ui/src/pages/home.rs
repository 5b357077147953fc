//! Home page: hero carousel and entry points.

use leptos::*;
use leptos_router::*;

use vendorhub::pages::{Carousel, SLIDES, SLIDE_INTERVAL};

#[component]
pub fn HomeView(carousel: Carousel) -> impl IntoView {
    let carousel = create_rw_signal(carousel);

    let interval = gloo_timers::callback::Interval::new(SLIDE_INTERVAL.as_millis() as u32, move || {
        carousel.update(|c| {
            c.next();
        });
    });
    on_cleanup(move || drop(interval));

    view! {
        <div class="space-y-8">
            <section class="relative bg-gray-800 rounded-xl p-12 text-center overflow-hidden">
                {move || {
                    let current = carousel.with(Carousel::current);
                    let slide = SLIDES[current].clone();
                    view! {
                        <h1 class="text-4xl font-bold mb-2">{slide.title}</h1>
                        <p class="text-gray-400">{slide.caption}</p>
                    }
                }}

                <button
                    on:click=move |_| carousel.update(|c| { c.prev(); })
                    class="absolute left-4 top-1/2 text-2xl text-gray-400 hover:text-white"
                >
                    "‹"
                </button>
                <button
                    on:click=move |_| carousel.update(|c| { c.next(); })
                    class="absolute right-4 top-1/2 text-2xl text-gray-400 hover:text-white"
                >
                    "›"
                </button>

                <div class="flex justify-center space-x-2 mt-6">
                    {(0..SLIDES.len())
                        .map(|i| view! {
                            <button
                                on:click=move |_| carousel.update(|c| { c.go_to(i as isize); })
                                class=move || if carousel.with(|c| c.is_active(i)) {
                                    "w-3 h-3 rounded-full bg-primary-500"
                                } else {
                                    "w-3 h-3 rounded-full bg-gray-600"
                                }
                            />
                        })
                        .collect_view()}
                </div>
            </section>

            <div class="grid md:grid-cols-3 gap-4">
                <EntryCard href="/vendors" title="Vendors" blurb="Add and maintain supplier records" />
                <EntryCard href="/contracts" title="Contracts" blurb="Track terms, renewals, and expiry" />
                <EntryCard href="/analytics" title="Analytics" blurb="Spending and performance at a glance" />
            </div>
        </div>
    }
}

#[component]
fn EntryCard(href: &'static str, title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <A href=href class="block bg-gray-800 hover:bg-gray-700 rounded-xl p-6 transition-colors">
            <h2 class="text-xl font-semibold mb-1">{title}</h2>
            <p class="text-gray-400 text-sm">{blurb}</p>
        </A>
    }
}
