//! DOM wiring for the review modal widget.
//!
//! # Design
//! - Triggers are discovered once, from an explicit root handed in by the
//!   embedding page; the returned handle owns every binding and dropping it
//!   detaches the widget.
//! - Each activation runs one open-cycle: fetch, then clear and repopulate
//!   the book's modal surface.
//! - A per-book cycle token drops responses that lost the race to a newer
//!   activation.

mod reconcile;
mod row;

use crate::logic::{self, OpenCycle};
use crate::models::ReviewRow;
use crate::services::api::ApiClient;
use gloo::console;
use gloo::events::EventListener;
use reconcile::Reconciler;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

const FETCH_ERROR_NOTICE: &str = "Reviews are unavailable right now.";

/// Widget configuration supplied at mount time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MountOptions {
    /// URL prefix for API calls; empty targets the page origin.
    pub base_url: String,
    /// Re-run the open-cycle once a delete request has been sent
    /// successfully, so the removed row disappears without a manual reopen.
    pub refresh_after_delete: bool,
}

/// Handle owning every trigger binding created by [`mount`].
///
/// Dropping the handle unbinds the triggers and, with them, the per-row
/// delete handlers.
pub struct ReviewsWidget {
    triggers: Vec<EventListener>,
}

impl ReviewsWidget {
    /// Number of triggers bound at mount.
    #[must_use]
    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }
}

/// Everything one trigger needs across its open-cycles.
struct BookBinding {
    client: Rc<ApiClient>,
    cycle: OpenCycle,
    reconciler: Reconciler,
    book_id: String,
    refresh_after_delete: bool,
}

/// Discover every review trigger under `root` and bind its open-handler.
#[must_use = "dropping the widget handle detaches every trigger"]
pub fn mount(root: &Element, options: &MountOptions) -> ReviewsWidget {
    let client = Rc::new(ApiClient::new(options.base_url.clone()));
    let mut triggers = Vec::new();

    let found = match root.query_selector_all(logic::TRIGGER_SELECTOR) {
        Ok(list) => list,
        Err(err) => {
            console::error!("trigger scan failed", format!("{err:?}"));
            return ReviewsWidget { triggers };
        }
    };

    for index in 0..found.length() {
        let Some(node) = found.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        let element_id = element.id();
        let Some(book_id) = logic::book_id_from_trigger(&element_id) else {
            continue;
        };

        let binding = Rc::new(BookBinding {
            client: Rc::clone(&client),
            cycle: OpenCycle::default(),
            reconciler: Reconciler::default(),
            book_id: book_id.to_owned(),
            refresh_after_delete: options.refresh_after_delete,
        });
        triggers.push(bind_trigger(&element, binding));
    }

    ReviewsWidget { triggers }
}

/// Mount over the whole document with default options.
///
/// Entry point for the page script: the handle is leaked so the bindings
/// live for the lifetime of the page.
pub fn boot() {
    console_error_panic_hook::set_once();

    let document = gloo::utils::document();
    let Some(root) = document.document_element() else {
        console::error!("document has no root element");
        return;
    };

    let widget = mount(&root, &MountOptions::default());
    console::debug!("review triggers bound", widget.trigger_count());
    std::mem::forget(widget);
}

fn bind_trigger(element: &Element, binding: Rc<BookBinding>) -> EventListener {
    EventListener::new(element, "click", move |_event| {
        spawn_local(run_open_cycle(Rc::clone(&binding)));
    })
}

async fn run_open_cycle(binding: Rc<BookBinding>) {
    let token = binding.cycle.begin();
    let fetched = binding.client.fetch_reviews(&binding.book_id).await;

    if !binding.cycle.is_current(token) {
        console::debug!("stale review response dropped", binding.book_id.clone());
        return;
    }

    let document = gloo::utils::document();
    let surface_id = logic::surface_id(&binding.book_id);
    let Some(surface) = document.get_element_by_id(&surface_id) else {
        console::error!("review surface missing", surface_id);
        return;
    };

    match fetched {
        Ok(reviews) => render_reviews(&binding, &document, &surface, reviews),
        Err(err) => {
            console::error!("review fetch failed", binding.book_id.clone(), err.to_string());
            binding.reconciler.clear(&surface);
            match row::build_error_row(&document, FETCH_ERROR_NOTICE) {
                Ok(notice) => {
                    if let Err(err) = binding.reconciler.append(&surface, &notice) {
                        console::error!("error notice insert failed", format!("{err:?}"));
                    }
                }
                Err(err) => console::error!("error notice build failed", format!("{err:?}")),
            }
        }
    }
}

fn render_reviews(
    binding: &Rc<BookBinding>,
    document: &Document,
    surface: &Element,
    reviews: Vec<ReviewRow>,
) {
    binding.reconciler.clear(surface);

    for review in reviews {
        let built = match row::build_row(document, &review) {
            Ok(built) => built,
            Err(err) => {
                console::error!("review row build failed", format!("{err:?}"));
                continue;
            }
        };
        if let Err(err) = binding.reconciler.append(surface, &built.element) {
            console::error!("review row insert failed", format!("{err:?}"));
            continue;
        }
        let listener = bind_delete(binding, &built.delete_icon, built.user_id);
        binding.reconciler.track(listener);
    }
}

fn bind_delete(binding: &Rc<BookBinding>, icon: &Element, user_id: String) -> EventListener {
    // Weak capture: row listeners must not keep the binding (and themselves)
    // alive after the widget handle is dropped.
    let weak = Rc::downgrade(binding);
    EventListener::new(icon, "click", move |_event| {
        let Some(binding) = weak.upgrade() else {
            return;
        };
        let user_id = user_id.clone();
        spawn_local(async move {
            if let Err(err) = binding
                .client
                .delete_review(&binding.book_id, &user_id)
                .await
            {
                console::error!("review delete failed", err.to_string());
                return;
            }
            if binding.refresh_after_delete {
                run_open_cycle(binding).await;
            }
        });
    })
}
