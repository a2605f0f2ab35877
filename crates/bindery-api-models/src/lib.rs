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
//! Shared HTTP DTOs for the Bindery reviews API.
//!
//! These types are re-used by the web UI for response decoding so the wire
//! contract stays a single source of truth. Identifiers travel as opaque
//! strings (the store issues UUIDs for both books and reviewers) and the
//! review timestamp is a server-formatted display string rendered verbatim.

use serde::{Deserialize, Serialize};

/// One customer review attached to a book listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewSummary {
    /// Opaque identifier of the reviewing user.
    pub user_id: String,
    /// Display name of the reviewer, also used as the avatar alt text.
    pub username: String,
    /// URL of the reviewer's profile picture.
    pub profile_pic: String,
    /// Free-text review body.
    pub content: String,
    /// Server-formatted display timestamp.
    pub time: String,
    /// Star rating in the range 0–5.
    pub stars: u8,
}

/// Review collection returned by `GET /api/reviews/{book_id}`.
///
/// Reviews arrive in server order and clients render them without
/// reordering; the collection is re-fetched on every modal open rather than
/// cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewsResponse {
    /// Ordered reviews for one book.
    pub reviews: Vec<ReviewSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviews_response_parses_the_documented_body() {
        let body = r#"{
            "reviews": [
                {
                    "user_id": "1",
                    "username": "a",
                    "profile_pic": "/p1.png",
                    "content": "good",
                    "time": "2024-01-01",
                    "stars": 5
                }
            ]
        }"#;

        let parsed: ReviewsResponse = serde_json::from_str(body).expect("well-formed body");
        assert_eq!(parsed.reviews.len(), 1);
        let review = &parsed.reviews[0];
        assert_eq!(review.user_id, "1");
        assert_eq!(review.username, "a");
        assert_eq!(review.profile_pic, "/p1.png");
        assert_eq!(review.content, "good");
        assert_eq!(review.time, "2024-01-01");
        assert_eq!(review.stars, 5);
    }

    #[test]
    fn body_without_reviews_field_is_rejected() {
        let err = serde_json::from_str::<ReviewsResponse>("{}").expect_err("missing field");
        assert!(err.to_string().contains("reviews"));
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let body = r#"{
            "reviews": [],
            "next_page": 2
        }"#;

        let parsed: ReviewsResponse = serde_json::from_str(body).expect("extra keys ignored");
        assert!(parsed.reviews.is_empty());
    }

    #[test]
    fn negative_star_counts_are_rejected() {
        let body = r#"{
            "reviews": [
                {
                    "user_id": "1",
                    "username": "a",
                    "profile_pic": "/p1.png",
                    "content": "good",
                    "time": "2024-01-01",
                    "stars": -1
                }
            ]
        }"#;

        assert!(serde_json::from_str::<ReviewsResponse>(body).is_err());
    }
}
