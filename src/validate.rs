//! Request validation layer
//!
//! Pure, synchronous validators that run after serde deserialization and
//! before any store call. Each validator normalizes its input in place
//! (trimming, collapsing empty optionals to absent) and reports every
//! violated field constraint rather than stopping at the first.

use url::Url;

use crate::domain::{
    CreateContactRequest, CreateProjectRequest, CreateReviewRequest, CreateTeamMemberRequest,
    UpdateProjectRequest, UpdateTeamMemberRequest,
};
use crate::error::FieldError;

pub const REVIEW_MIN_CHARS: usize = 10;
pub const REVIEW_MAX_CHARS: usize = 1000;
pub const BIO_MIN_CHARS: usize = 10;

/// Collects field errors while a validator walks its input.
#[derive(Debug, Default)]
struct Violations(Vec<FieldError>);

impl Violations {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    fn into_result(self) -> Result<(), Vec<FieldError>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

/// Trim a required string in place; record a violation when empty.
fn require_text(errors: &mut Violations, field: &str, value: &mut String) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, "is required");
    }
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Empty optional fields are treated as absent, not as empty-string violations.
fn normalize_optional(value: &mut Option<String>) {
    if let Some(s) = value {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            *value = None;
        } else if trimmed.len() != s.len() {
            *value = Some(trimmed.to_string());
        }
    }
}

fn check_email(errors: &mut Violations, field: &str, value: &str) {
    let value = value.trim();
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        errors.push(field, "must be a valid email address");
    }
}

fn check_url(errors: &mut Violations, field: &str, value: &str) {
    if Url::parse(value.trim()).is_err() {
        errors.push(field, "must be a valid URL");
    }
}

// ---------------------------------------------------------------------------
// Contact submissions
// ---------------------------------------------------------------------------

pub fn validate_contact(req: &mut CreateContactRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Violations::default();

    require_text(&mut errors, "name", &mut req.name);
    require_text(&mut errors, "email", &mut req.email);
    if !req.email.is_empty() {
        check_email(&mut errors, "email", &req.email);
    }
    normalize_optional(&mut req.phone);
    require_text(&mut errors, "project_type", &mut req.project_type);
    require_text(&mut errors, "message", &mut req.message);

    errors.into_result()
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

pub fn validate_review(req: &mut CreateReviewRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Violations::default();

    require_text(&mut errors, "name", &mut req.name);
    require_text(&mut errors, "email", &mut req.email);
    if !req.email.is_empty() {
        check_email(&mut errors, "email", &req.email);
    }
    normalize_optional(&mut req.phone);

    if !(1..=5).contains(&req.rating) {
        errors.push("rating", "must be between 1 and 5");
    }

    let chars = req.review.trim().chars().count();
    if chars < REVIEW_MIN_CHARS {
        errors.push(
            "review",
            format!("must be at least {REVIEW_MIN_CHARS} characters"),
        );
    } else if chars > REVIEW_MAX_CHARS {
        errors.push(
            "review",
            format!("must be at most {REVIEW_MAX_CHARS} characters"),
        );
    }

    errors.into_result()
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

pub fn validate_project(req: &mut CreateProjectRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Violations::default();

    require_text(&mut errors, "title", &mut req.title);
    require_text(&mut errors, "description", &mut req.description);
    normalize_optional(&mut req.full_description);
    require_text(&mut errors, "location", &mut req.location);
    require_text(&mut errors, "date", &mut req.date);
    require_text(&mut errors, "client", &mut req.client);

    check_images(&mut errors, &req.images);
    require_text(&mut errors, "main_image", &mut req.main_image);
    if !req.main_image.is_empty() {
        check_url(&mut errors, "main_image", &req.main_image);
    }

    errors.into_result()
}

pub fn validate_project_update(req: &mut UpdateProjectRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Violations::default();

    if let Some(title) = &mut req.title {
        require_text(&mut errors, "title", title);
    }
    if let Some(description) = &mut req.description {
        require_text(&mut errors, "description", description);
    }
    normalize_optional(&mut req.full_description);
    if let Some(location) = &mut req.location {
        require_text(&mut errors, "location", location);
    }
    if let Some(date) = &mut req.date {
        require_text(&mut errors, "date", date);
    }
    if let Some(client) = &mut req.client {
        require_text(&mut errors, "client", client);
    }
    if let Some(images) = &req.images {
        check_images(&mut errors, images);
    }
    if let Some(main_image) = &req.main_image {
        check_url(&mut errors, "main_image", main_image);
    }

    errors.into_result()
}

fn check_images(errors: &mut Violations, images: &[String]) {
    if images.is_empty() {
        errors.push("images", "must contain at least one image URL");
        return;
    }
    for (i, image) in images.iter().enumerate() {
        if Url::parse(image.trim()).is_err() {
            errors.push("images", format!("entry {i} is not a valid URL"));
        }
    }
}

// ---------------------------------------------------------------------------
// Team members
// ---------------------------------------------------------------------------

pub fn validate_team_member(req: &mut CreateTeamMemberRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Violations::default();

    require_text(&mut errors, "name", &mut req.name);
    require_text(&mut errors, "role", &mut req.role);
    check_bio(&mut errors, &req.bio);
    require_text(&mut errors, "image", &mut req.image);
    if !req.image.is_empty() {
        check_url(&mut errors, "image", &req.image);
    }
    if req.display_order <= 0 {
        errors.push("order", "must be a positive number");
    }

    errors.into_result()
}

pub fn validate_team_member_update(
    req: &mut UpdateTeamMemberRequest,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Violations::default();

    if let Some(name) = &mut req.name {
        require_text(&mut errors, "name", name);
    }
    if let Some(role) = &mut req.role {
        require_text(&mut errors, "role", role);
    }
    if let Some(bio) = &req.bio {
        check_bio(&mut errors, bio);
    }
    if let Some(image) = &req.image {
        check_url(&mut errors, "image", image);
    }
    if let Some(order) = req.display_order {
        if order <= 0 {
            errors.push("order", "must be a positive number");
        }
    }

    errors.into_result()
}

fn check_bio(errors: &mut Violations, bio: &str) {
    if bio.trim().chars().count() < BIO_MIN_CHARS {
        errors.push("bio", format!("must be at least {BIO_MIN_CHARS} characters"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectType;

    fn contact_request() -> CreateContactRequest {
        CreateContactRequest {
            name: "Ana Ruiz".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            project_type: "Residential".to_string(),
            message: "We are renovating a two-bedroom flat.".to_string(),
        }
    }

    fn review_request() -> CreateReviewRequest {
        CreateReviewRequest {
            name: "Marc Beaumont".to_string(),
            email: "marc@example.com".to_string(),
            phone: None,
            rating: 5,
            review: "The studio reimagined our lobby beautifully.".to_string(),
            project_id: None,
        }
    }

    fn project_request() -> CreateProjectRequest {
        CreateProjectRequest {
            title: "Harbourside Penthouse".to_string(),
            description: "Full refit of a waterfront penthouse.".to_string(),
            full_description: None,
            location: "Lisbon".to_string(),
            date: "2025".to_string(),
            client: "Private".to_string(),
            project_type: ProjectType::Residential,
            featured: false,
            images: vec!["https://cdn.example.com/p/1.jpg".to_string()],
            main_image: "https://cdn.example.com/p/main.jpg".to_string(),
        }
    }

    fn team_request() -> CreateTeamMemberRequest {
        CreateTeamMemberRequest {
            name: "Iris Halloran".to_string(),
            role: "Senior Designer".to_string(),
            bio: "Fifteen years of hospitality interiors.".to_string(),
            image: "https://cdn.example.com/team/iris.jpg".to_string(),
            display_order: 2,
            active: true,
        }
    }

    #[test]
    fn valid_contact_passes() {
        let mut req = contact_request();
        assert!(validate_contact(&mut req).is_ok());
    }

    #[test]
    fn empty_optional_phone_is_absent_not_a_violation() {
        let mut req = contact_request();
        req.phone = Some("   ".to_string());
        assert!(validate_contact(&mut req).is_ok());
        assert_eq!(req.phone, None);
    }

    #[test]
    fn contact_reports_every_violation() {
        let mut req = contact_request();
        req.name = "  ".to_string();
        req.email = "not-an-email".to_string();
        req.message = String::new();
        let errors = validate_contact(&mut req).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"message"));
    }

    #[test]
    fn rating_boundaries_are_inclusive() {
        for rating in [1, 5] {
            let mut req = review_request();
            req.rating = rating;
            assert!(validate_review(&mut req).is_ok(), "rating {rating}");
        }
        for rating in [0, 6, -3] {
            let mut req = review_request();
            req.rating = rating;
            let errors = validate_review(&mut req).unwrap_err();
            assert!(
                errors.iter().any(|e| e.field == "rating"),
                "rating {rating} must be rejected"
            );
        }
    }

    #[test]
    fn review_text_length_is_bounded() {
        let mut short = review_request();
        short.review = "Too short".to_string(); // 9 chars
        assert!(validate_review(&mut short)
            .unwrap_err()
            .iter()
            .any(|e| e.field == "review"));

        let mut at_min = review_request();
        at_min.review = "Exactly 10".to_string();
        assert!(validate_review(&mut at_min).is_ok());

        let mut long = review_request();
        long.review = "x".repeat(REVIEW_MAX_CHARS + 1);
        assert!(validate_review(&mut long)
            .unwrap_err()
            .iter()
            .any(|e| e.field == "review"));
    }

    #[test]
    fn project_requires_at_least_one_image() {
        let mut req = project_request();
        req.images.clear();
        let errors = validate_project(&mut req).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "images"));
    }

    #[test]
    fn project_main_image_must_be_a_url() {
        let mut req = project_request();
        req.main_image = "not a url".to_string();
        let errors = validate_project(&mut req).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "main_image"));
    }

    #[test]
    fn project_update_only_checks_provided_fields() {
        let mut req = UpdateProjectRequest {
            featured: Some(true),
            ..Default::default()
        };
        assert!(validate_project_update(&mut req).is_ok());

        let mut bad = UpdateProjectRequest {
            images: Some(vec![]),
            ..Default::default()
        };
        assert!(validate_project_update(&mut bad).is_err());
    }

    #[test]
    fn team_member_order_must_be_positive() {
        for order in [0, -1] {
            let mut req = team_request();
            req.display_order = order;
            let errors = validate_team_member(&mut req).unwrap_err();
            assert!(errors.iter().any(|e| e.field == "order"));
        }
    }

    #[test]
    fn team_member_bio_must_reach_minimum_length() {
        let mut req = team_request();
        req.bio = "Too short".to_string();
        let errors = validate_team_member(&mut req).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "bio"));
    }
}
