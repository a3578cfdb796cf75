//! Partial-update filtering.
//!
//! A field in a `*Changes` body is applied only when it is present and not "empty":
//! `""` and `0` count as absent, so they cannot be used to clear a value.

use chrono::{NaiveDate, NaiveDateTime};

pub trait Provided {
    fn is_provided(&self) -> bool;
}

impl Provided for String {
    fn is_provided(&self) -> bool { !self.is_empty() }
}

impl Provided for i32 {
    fn is_provided(&self) -> bool { *self != 0 }
}

impl Provided for NaiveDate {
    fn is_provided(&self) -> bool { true }
}

impl Provided for NaiveDateTime {
    fn is_provided(&self) -> bool { true }
}

/// Keep `value` only if it should overwrite the stored field.
pub fn provided<T: Provided>(value: Option<T>) -> Option<T> {
    value.filter(Provided::is_provided)
}

#[cfg(test)]
mod tests {
    use super::provided;
    use chrono::NaiveDate;

    #[test]
    fn empty_string_and_zero_are_skipped() {
        assert_eq!(provided(Some(String::new())), None);
        assert_eq!(provided(Some(0)), None);
        assert_eq!(provided::<String>(None), None);
    }

    #[test]
    fn non_empty_values_pass_through() {
        assert_eq!(provided(Some(" ".to_string())), Some(" ".to_string()));
        assert_eq!(provided(Some(7)), Some(7));
        let d = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(provided(Some(d)), Some(d));
    }
}
