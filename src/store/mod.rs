//! Persistence gateway
//!
//! The only component that performs storage I/O. Each submodule exposes the
//! CRUD and aggregate surface for one entity; callers pass already-validated
//! data. Not-found is reported as `None`/`false`, never as an `Err`.

pub mod admins;
pub mod contacts;
pub mod projects;
pub mod reviews;
pub mod team;

/// Hard cap applied to caller-supplied list limits.
pub const MAX_LIST_LIMIT: u32 = 100;

/// Clamp an optional caller-supplied limit to `1..=MAX_LIST_LIMIT`.
///
/// `None` means "no limit" and becomes a NULL bind, which Postgres treats as
/// `LIMIT ALL`.
pub fn clamp_limit(limit: Option<u32>) -> Option<i64> {
    limit.map(|l| i64::from(l.clamp(1, MAX_LIST_LIMIT)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_bounds_caller_input() {
        assert_eq!(clamp_limit(None), None);
        assert_eq!(clamp_limit(Some(0)), Some(1));
        assert_eq!(clamp_limit(Some(25)), Some(25));
        assert_eq!(clamp_limit(Some(10_000)), Some(100));
    }
}
