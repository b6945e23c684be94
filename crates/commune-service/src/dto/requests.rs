//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use commune_core::Theme;

// ============================================================================
// Group Requests
// ============================================================================

/// Query parameters for the popular groups listing
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PopularGroupsQuery {
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,
}

/// Create group request
///
/// Empty strings are valid values for name, description, and rules;
/// only the length ceilings are enforced.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[validate(length(max = 100, message = "Group name must be at most 100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    #[serde(default)]
    pub description: String,

    #[validate(length(max = 50, message = "At most 50 rules"))]
    #[validate(custom(function = "validate_rules"))]
    #[serde(default)]
    pub rules: Vec<String>,

    #[serde(default)]
    pub private: bool,
}

/// Update group request
///
/// Only description and rules are mutable; name, privacy, and authorship
/// are fixed at creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGroupRequest {
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    #[serde(default)]
    pub description: String,

    #[validate(length(max = 50, message = "At most 50 rules"))]
    #[validate(custom(function = "validate_rules"))]
    #[serde(default)]
    pub rules: Vec<String>,
}

fn validate_rules(rules: &[String]) -> Result<(), validator::ValidationError> {
    if rules.iter().any(|r| r.len() > 500) {
        return Err(validator::ValidationError::new("rule_too_long")
            .with_message("Each rule must be at most 500 characters".into()));
    }
    Ok(())
}

// ============================================================================
// Preference Requests
// ============================================================================

/// Update preferences request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePreferencesRequest {
    pub theme: Theme,
}
