// Audit actions
pub const USER_ADDED: &str = "USER_ADDED";
pub const GROUP_CREATED: &str = "GROUP_CREATED";
pub const GROUP_DELETED: &str = "GROUP_DELETED";
pub const EXPENSE_ADDED: &str = "EXPENSE_ADDED";

/// Allowed deviation of a percentage split's total from 100.
pub const PERCENTAGE_TOLERANCE: f64 = 0.01;

/// Percentages are scaled to integers with this many steps per percent.
pub const PERCENTAGE_SCALE: f64 = 10_000.0;

pub const MAX_EXPENSE_AMOUNT: f64 = 1_000_000.0;
pub const MAX_DESCRIPTION_LENGTH: usize = 255;
pub const MAX_NAME_LENGTH: usize = 100;
