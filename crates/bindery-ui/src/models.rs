//! Display-ready projections of review DTOs, testable outside wasm.

use bindery_api_models::ReviewSummary;

/// Display-ready review consumed by the row builder.
///
/// The projection is a straight field pass-through except for the rating,
/// which is pre-formatted here so every renderer agrees on the label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRow {
    /// Reviewer id carried into the row's hidden field for delete dispatch.
    pub user_id: String,
    /// Reviewer display name, doubling as the avatar alt text.
    pub username: String,
    /// Profile picture URL, passed through as received.
    pub profile_pic: String,
    /// Free-text review body.
    pub content: String,
    /// Server-formatted display timestamp, rendered verbatim.
    pub time: String,
    /// Pre-formatted rating label (`"<stars>/5 Stars"`).
    pub rating: String,
}

impl From<ReviewSummary> for ReviewRow {
    fn from(value: ReviewSummary) -> Self {
        Self {
            rating: rating_label(value.stars),
            user_id: value.user_id,
            username: value.username,
            profile_pic: value.profile_pic,
            content: value.content,
            time: value.time,
        }
    }
}

/// Format a star count the way the review modal displays it.
///
/// Out-of-range counts are rendered as received; the server owns validation.
#[must_use]
pub fn rating_label(stars: u8) -> String {
    format!("{stars}/5 Stars")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindery_api_models::ReviewsResponse;

    fn summary() -> ReviewSummary {
        ReviewSummary {
            user_id: "1".to_string(),
            username: "a".to_string(),
            profile_pic: "/p1.png".to_string(),
            content: "good".to_string(),
            time: "2024-01-01".to_string(),
            stars: 5,
        }
    }

    #[test]
    fn conversion_preserves_display_fields() {
        let row = ReviewRow::from(summary());
        assert_eq!(row.user_id, "1");
        assert_eq!(row.username, "a");
        assert_eq!(row.profile_pic, "/p1.png");
        assert_eq!(row.content, "good");
        assert_eq!(row.time, "2024-01-01");
        assert_eq!(row.rating, "5/5 Stars");
    }

    #[test]
    fn rating_labels_are_unclamped() {
        assert_eq!(rating_label(0), "0/5 Stars");
        assert_eq!(rating_label(3), "3/5 Stars");
        assert_eq!(rating_label(7), "7/5 Stars");
    }

    #[test]
    fn fetched_body_projects_to_rows_in_server_order() {
        let body = r#"{
            "reviews": [
                {
                    "user_id": "1",
                    "username": "a",
                    "profile_pic": "/p1.png",
                    "content": "good",
                    "time": "2024-01-01",
                    "stars": 5
                },
                {
                    "user_id": "2",
                    "username": "b",
                    "profile_pic": "/p2.png",
                    "content": "meh",
                    "time": "2024-02-01",
                    "stars": 2
                }
            ]
        }"#;

        let parsed: ReviewsResponse = serde_json::from_str(body).expect("documented body");
        let rows: Vec<ReviewRow> = parsed.reviews.into_iter().map(ReviewRow::from).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].username, "a");
        assert_eq!(rows[0].rating, "5/5 Stars");
        assert_eq!(rows[1].username, "b");
        assert_eq!(rows[1].rating, "2/5 Stars");
    }
}
