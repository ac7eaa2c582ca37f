#![forbid(unsafe_code)]

//! Plain person record.

use core::fmt;

use time::Date;

/// A person in the roster.
///
/// Plain data, freely mutable by the host; equality is field-wise, which
/// is what selection-by-item matches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Host-assigned identifier.
    pub id: u32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth.
    pub date_of_birth: Date,
}

impl Person {
    /// Create a person record.
    #[must_use]
    pub fn new(
        id: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: Date,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
        }
    }

    /// "First Last" display form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} (born {})",
            self.id, self.first_name, self.last_name, self.date_of_birth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn full_name_joins_first_and_last() {
        let person = Person::new(1, "Carl", "Franklin", date!(1970 - 01 - 01));
        assert_eq!(person.full_name(), "Carl Franklin");
    }

    #[test]
    fn equality_is_field_wise() {
        let a = Person::new(2, "Isadora", "Jarr", date!(1985 - 06 - 15));
        let mut b = a.clone();
        assert_eq!(a, b);
        b.last_name = "Cool".into();
        assert_ne!(a, b);
    }
}
