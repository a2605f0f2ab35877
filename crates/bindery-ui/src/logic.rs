//! Pure widget helpers extracted for non-wasm testing.
//!
//! # Design
//! - Keep every naming convention and path format in one place.
//! - Decisions that guard DOM mutation (stale-response tokens, the purge
//!   marker) are plain data so the host test suite can exercise them.

use std::cell::Cell;

/// Prefix shared by every review-trigger element id (`btn_<book_id>`).
pub const TRIGGER_PREFIX: &str = "btn_";

/// CSS selector matching every review trigger on a page.
pub const TRIGGER_SELECTOR: &str = r#"[id^="btn_"]"#;

/// Attribute marking rows owned by the reconciler.
///
/// Purging matches on this marker alone, never on layout classes, so sibling
/// content that happens to share styling can never be swept up.
pub const ROW_MARKER: &str = "data-review-row";

/// CSS selector matching every reconciler-owned row.
pub const ROW_SELECTOR: &str = "[data-review-row]";

/// Derive the book id from a trigger element id.
///
/// Returns `None` for ids outside the `btn_<book_id>` convention, including a
/// bare `btn_`. Everything after the prefix is the id, so identifiers that
/// themselves contain underscores pass through whole.
#[must_use]
pub fn book_id_from_trigger(element_id: &str) -> Option<&str> {
    let book_id = element_id.strip_prefix(TRIGGER_PREFIX)?;
    (!book_id.is_empty()).then_some(book_id)
}

/// Id of the modal body holding a book's review rows.
#[must_use]
pub fn surface_id(book_id: &str) -> String {
    format!("reviewContents_{book_id}")
}

/// Path for fetching the review collection of one book.
#[must_use]
pub fn reviews_path(book_id: &str) -> String {
    format!("/api/reviews/{book_id}")
}

/// Path for removing one (book, reviewer) review pair.
///
/// The reviewer id rides in the query string and is percent-encoded; the
/// book id is path material under the caller's control and travels verbatim.
#[must_use]
pub fn delete_review_path(book_id: &str, user_id: &str) -> String {
    format!(
        "/api/reviews/{book_id}?user_id={}",
        urlencoding::encode(user_id)
    )
}

/// Monotonic activation counter used to drop stale fetch responses.
///
/// Repeat activations of one trigger race on the network with no ordering
/// guarantee. Each activation mints a token; only the response holding the
/// most recent token may mutate the surface, so a slow response for an
/// abandoned open lands in the void instead of overwriting newer rows.
#[derive(Debug, Default)]
pub struct OpenCycle {
    current: Cell<u64>,
}

/// Token minted by [`OpenCycle::begin`] for a single activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleToken(u64);

impl OpenCycle {
    /// Start a new activation, invalidating every earlier token.
    #[must_use = "the token is the activation's claim on the surface"]
    pub fn begin(&self) -> CycleToken {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        CycleToken(next)
    }

    /// Whether `token` still belongs to the most recent activation.
    #[must_use]
    pub fn is_current(&self, token: CycleToken) -> bool {
        self.current.get() == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_ids_yield_book_ids() {
        assert_eq!(book_id_from_trigger("btn_42"), Some("42"));
        assert_eq!(
            book_id_from_trigger("btn_8c5ff187-9f3e-4e38-9a1b-6f4fd0944c21"),
            Some("8c5ff187-9f3e-4e38-9a1b-6f4fd0944c21")
        );
    }

    #[test]
    fn non_trigger_ids_are_rejected() {
        assert_eq!(book_id_from_trigger("view_42"), None);
        assert_eq!(book_id_from_trigger("btn_"), None);
        assert_eq!(book_id_from_trigger(""), None);
    }

    #[test]
    fn embedded_underscores_stay_in_the_book_id() {
        assert_eq!(book_id_from_trigger("btn_first_edition"), Some("first_edition"));
    }

    #[test]
    fn surface_ids_follow_the_page_convention() {
        assert_eq!(surface_id("42"), "reviewContents_42");
    }

    #[test]
    fn reviews_path_targets_the_book() {
        assert_eq!(reviews_path("42"), "/api/reviews/42");
    }

    #[test]
    fn delete_path_carries_an_encoded_reviewer_query() {
        assert_eq!(
            delete_review_path("42", "user 1"),
            "/api/reviews/42?user_id=user%201"
        );
        assert_eq!(
            delete_review_path("42", "plain-uuid"),
            "/api/reviews/42?user_id=plain-uuid"
        );
    }

    #[test]
    fn selectors_embed_their_markers() {
        assert!(TRIGGER_SELECTOR.contains(TRIGGER_PREFIX));
        assert!(ROW_SELECTOR.contains(ROW_MARKER));
    }

    #[test]
    fn stale_tokens_lose_to_newer_activations() {
        let cycle = OpenCycle::default();
        let first = cycle.begin();
        assert!(cycle.is_current(first));

        let second = cycle.begin();
        assert!(!cycle.is_current(first));
        assert!(cycle.is_current(second));
    }

    #[test]
    fn cycles_are_independent_per_surface() {
        let left = OpenCycle::default();
        let right = OpenCycle::default();

        let token = left.begin();
        let _ = right.begin();
        let _ = right.begin();

        assert!(left.is_current(token));
    }
}
