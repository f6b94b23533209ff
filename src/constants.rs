/// Name of the table holding user records
///
/// The document shape supports arbitrary named tables, but this is the only
/// one current operations touch.
pub const USER_TABLE: &str = "user";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a path id that does not parse as an integer
pub const ERR_INVALID_ID: &str = "Invalid ID format";

/// Error message for a lookup that matched no record
pub const ERR_USER_NOT_FOUND: &str = "User not found";
