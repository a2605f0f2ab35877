#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Bindery review-modal widget.
//!
//! Progressive enhancement for the server-rendered store pages: for every
//! book on the page, the widget binds its "open reviews" trigger, fetches the
//! review collection on activation, and reconciles the book's modal body with
//! the response — purging only the rows it inserted itself so foreign modal
//! content (the page's CSRF field among them) survives every cycle.
//!
//! Pure decisions (trigger naming, API paths, the stale-response guard, the
//! row view model) live in [`logic`] and [`models`] and are tested off-wasm;
//! DOM and network wiring is compiled for `wasm32` only.

pub mod logic;
pub mod models;

#[cfg(target_arch = "wasm32")]
pub mod services;
#[cfg(target_arch = "wasm32")]
mod widget;

#[cfg(target_arch = "wasm32")]
pub use widget::{MountOptions, ReviewsWidget, boot, mount};
