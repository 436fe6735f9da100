//! Label canonicalisation for enumerated profile fields
//!
//! Form widgets and older catalog files spell the same value several ways
//! ("Alluvial Soil", "alluvial", "ALLUVIAL"). Every enum accepts its
//! canonical name plus a fixed alias list; anything else is rejected.

use crate::error::ScoringError;

/// An enum whose values can be parsed from free-text labels.
pub trait Labelled: Copy + 'static {
    /// Field name reported in `InvalidInput` errors.
    const FIELD: &'static str;

    /// Every value of the domain, in declaration order.
    fn all() -> &'static [Self];

    /// Accepted labels. The first entry is the display name.
    fn labels(&self) -> &'static [&'static str];

    fn display_name(&self) -> &'static str {
        self.labels()[0]
    }
}

/// Lowercase and keep only ASCII alphanumerics, then drop a trailing "soil".
///
/// "Alluvial Soil" -> "alluvial", "Certified/Elite" -> "certifiedelite"
pub fn canonical_label(raw: &str) -> String {
    let folded: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match folded.strip_suffix("soil") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => folded,
    }
}

/// Parse a label into one of `T::all()`.
pub fn parse_label<T: Labelled>(raw: &str) -> Result<T, ScoringError> {
    let wanted = canonical_label(raw);
    if wanted.is_empty() {
        return Err(ScoringError::invalid(T::FIELD, "empty value"));
    }

    T::all()
        .iter()
        .copied()
        .find(|value| value.labels().iter().any(|l| canonical_label(l) == wanted))
        .ok_or_else(|| {
            let expected: Vec<&str> = T::all().iter().map(|v| v.display_name()).collect();
            ScoringError::invalid(
                T::FIELD,
                format!("'{}' is not one of [{}]", raw.trim(), expected.join(", ")),
            )
        })
}

/// Implements `FromStr`, `Display` and string-based serde for a `Labelled` enum.
macro_rules! labelled_string_impls {
    ($ty:ty) => {
        impl std::str::FromStr for $ty {
            type Err = $crate::error::ScoringError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::utils::labels::parse_label(s)
            }
        }

        impl std::convert::TryFrom<String> for $ty {
            type Error = $crate::error::ScoringError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                $crate::utils::labels::Labelled::display_name(&value).to_string()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::utils::labels::Labelled::display_name(self))
            }
        }
    };
}

pub(crate) use labelled_string_impls;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_label() {
        assert_eq!(canonical_label("Alluvial Soil"), "alluvial");
        assert_eq!(canonical_label("  BLACK soil "), "black");
        assert_eq!(canonical_label("Certified/Elite"), "certifiedelite");
        assert_eq!(canonical_label("Soil"), "soil");
        assert_eq!(canonical_label(""), "");
    }
}
