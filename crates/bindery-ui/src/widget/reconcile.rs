//! Surface reconciliation: purge owned rows, keep foreign children.

use crate::logic::ROW_SELECTOR;
use gloo::events::EventListener;
use std::cell::RefCell;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// Owns the rendered rows of one modal surface between open-cycles.
///
/// Rows inserted through [`append`](Self::append) carry the purge marker;
/// [`clear`](Self::clear) removes exactly those, so foreign children of the
/// surface (the page's hidden CSRF field among them) survive every cycle.
/// Per-row delete listeners are tracked here and dropped by the purge that
/// removes their rows.
#[derive(Default)]
pub(crate) struct Reconciler {
    row_listeners: RefCell<Vec<EventListener>>,
}

impl Reconciler {
    /// Remove every marker-tagged row from `surface`.
    ///
    /// A surface without rows is left untouched, as is every child lacking
    /// the marker.
    pub(crate) fn clear(&self, surface: &Element) {
        self.row_listeners.borrow_mut().clear();

        let Ok(rows) = surface.query_selector_all(ROW_SELECTOR) else {
            return;
        };
        for index in 0..rows.length() {
            let Some(node) = rows.item(index) else {
                continue;
            };
            if let Ok(row) = node.dyn_into::<Element>() {
                row.remove();
            }
        }
    }

    /// Insert `row` after the surface's current last child.
    ///
    /// Callers append in server order, so the visible sequence matches the
    /// fetched collection.
    pub(crate) fn append(&self, surface: &Element, row: &Element) -> Result<(), JsValue> {
        surface.append_child(row)?;
        Ok(())
    }

    /// Keep `listener` alive until the purge that removes its row.
    pub(crate) fn track(&self, listener: EventListener) {
        self.row_listeners.borrow_mut().push(listener);
    }
}
