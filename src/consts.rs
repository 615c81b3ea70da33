/// Days before a due date during which early renewal is expected
pub const RENEWAL_WINDOW_DAYS: i64 = 30;

/// Days after a due date during which a lapsed member may still renew
/// without being treated as a rejoining member
pub const GRACE_DAYS: i64 = 30;

/// Calendar months in one paid coverage period
pub const MONTHS_PER_PERIOD: u32 = 12;
