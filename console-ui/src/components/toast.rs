//! Toast Notification Component
//!
//! Renders the console's notices. Each one dismisses itself after a few
//! seconds; errors stay up longer.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use vendorhub::state::{Notice, NoticeKind};

use crate::state::{watch, GlobalState};

const SUCCESS_MS: u32 = 3000;
const ERROR_MS: u32 = 5000;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let notices = Rc::clone(&state.ctx.notices);
    let changed = watch(&notices, |n| n.observable());

    // Schedule a dismissal once per notice
    let scheduled = Rc::new(Cell::new(None::<u64>));
    create_effect({
        let notices = Rc::clone(&notices);
        move |_| {
            changed.track();
            for notice in notices.current() {
                if scheduled.get().is_some_and(|last| notice.id <= last) {
                    continue;
                }
                scheduled.set(Some(notice.id));

                let delay = match notice.kind {
                    NoticeKind::Success => SUCCESS_MS,
                    NoticeKind::Error => ERROR_MS,
                };
                let notices = Rc::clone(&notices);
                gloo_timers::callback::Timeout::new(delay, move || notices.dismiss(notice.id))
                    .forget();
            }
        }
    });

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || {
                changed.track();
                notices
                    .current()
                    .into_iter()
                    .map(|notice| view! { <ToastMessage notice=notice /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ToastMessage(notice: Notice) -> impl IntoView {
    let (icon, bg_class) = match notice.kind {
        NoticeKind::Success => ("✓", "bg-green-600"),
        NoticeKind::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{notice.message}</span>
        </div>
    }
}
