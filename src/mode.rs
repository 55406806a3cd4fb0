use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Policy for comparing two strings.
///
/// Builders only carry the mode into the predicate. It is interpreted when the predicate gets
/// evaluated (or by whoever translates it).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ComparisonMode {
    /// Byte-wise comparison.
    #[default]
    Ordinal,
    /// Byte-wise comparison, after lowercasing both sides.
    OrdinalIgnoreCase,
    /// Comparison of the canonical (NFC) composition, so that canonically equivalent strings match.
    Culture,
    /// Same as [`ComparisonMode::Culture`], ignoring case.
    CultureIgnoreCase,
}

impl ComparisonMode {
    pub const fn ignores_case(self) -> bool {
        matches!(self, Self::OrdinalIgnoreCase | Self::CultureIgnoreCase)
    }

    pub const fn is_culture_sensitive(self) -> bool {
        matches!(self, Self::Culture | Self::CultureIgnoreCase)
    }

    /// Bring a value into the form in which it gets compared.
    ///
    /// Case is folded character by character, without context dependent rules (like the Greek
    /// final sigma), so that folding a substring yields a substring of the folded value.
    pub fn canonicalize(self, value: &str) -> Cow<'_, str> {
        let value = match self.is_culture_sensitive() && !is_nfc(value) {
            true => Cow::Owned(value.nfc().collect::<String>()),
            false => Cow::Borrowed(value),
        };

        match self.ignores_case() && value.chars().any(|c| c.to_lowercase().ne(Some(c))) {
            true => Cow::Owned(value.chars().flat_map(char::to_lowercase).collect()),
            false => value,
        }
    }

    pub fn equals(self, left: &str, right: &str) -> bool {
        match self {
            Self::Ordinal => left == right,
            _ => self.canonicalize(left) == self.canonicalize(right),
        }
    }

    /// Check if `needle` is a substring of `haystack`. An empty needle is contained in every value.
    pub fn contains(self, haystack: &str, needle: &str) -> bool {
        match self {
            Self::Ordinal => haystack.contains(needle),
            _ => {
                let needle = self.canonicalize(needle);
                self.canonicalize(haystack).contains(&*needle)
            }
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ordinal => "ordinal",
            Self::OrdinalIgnoreCase => "ordinal-ignore-case",
            Self::Culture => "culture",
            Self::CultureIgnoreCase => "culture-ignore-case",
        }
    }
}

impl Display for ComparisonMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Unknown comparison mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for ComparisonMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ordinal" => Self::Ordinal,
            "ordinal-ignore-case" => Self::OrdinalIgnoreCase,
            "culture" => Self::Culture,
            "culture-ignore-case" => Self::CultureIgnoreCase,
            _ => return Err(UnknownMode(s.to_string())),
        })
    }
}
