// =============================================================================
// RATE LIMIT ACTION TYPES
// =============================================================================

/// Bucket for project creation calls
pub const ACTION_CREATE_PROJECT: &str = "create-project";

/// Bucket for component creation calls
pub const ACTION_CREATE_COMPONENT: &str = "create-component";
