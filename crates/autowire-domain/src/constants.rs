//! Domain layer constants

/// Member name used when a caller does not name the constructor explicitly
pub const DEFAULT_CONSTRUCTOR_MEMBER: &str = "new";
