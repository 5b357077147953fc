//! VendorHub Console
//!
//! Vendor and contract management frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Vendor directory with create, edit, and delete
//! - Vendor profiles with performance reviews
//! - Contract tracking by status, with renewal
//! - Analytics charts and top performing vendors
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. All state and backend
//! calls live in the `vendorhub` core; this crate supplies the browser
//! transport and storage and turns the core's observable page state into
//! views.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
