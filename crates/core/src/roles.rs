//! Well-known role name constants.
//!
//! These must match the `user_role` enum values seeded by the migrations.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_STAFF: &str = "staff";
