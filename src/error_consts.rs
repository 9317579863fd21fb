pub const NOT_AN_OBJECT: &str = "Not an object.";
pub const NOT_A_NUMBER: &str = "Not a number.";
pub const UNKNOWN_CONFIG: &str = "Unknown configuration name";
