//! Well-known field names shared by the form controllers.

pub const TITLE: &str = "title";
pub const STATUS: &str = "status";

/// Status value assigned to newly created records.
pub const STATUS_PUBLISH: &str = "publish";
