// src/models/category.rs

/// A classification bucket a byte can be counted in.
///
/// `Total` counts every byte and is the denominator for percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Total,
    Alpha,
    Lowercase,
    Uppercase,
    Numeric,
    Punctuation,
    Whitespace,
    Control,
}

impl Category {
    pub const COUNT: usize = 8;

    /// Every category in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Total,
        Self::Alpha,
        Self::Lowercase,
        Self::Uppercase,
        Self::Numeric,
        Self::Punctuation,
        Self::Whitespace,
        Self::Control,
    ];

    /// Rows of the report that carry a percentage, in report order.
    pub const REPORTED: [Self; 7] = [
        Self::Alpha,
        Self::Uppercase,
        Self::Lowercase,
        Self::Numeric,
        Self::Punctuation,
        Self::Whitespace,
        Self::Control,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Total => 0,
            Self::Alpha => 1,
            Self::Lowercase => 2,
            Self::Uppercase => 3,
            Self::Numeric => 4,
            Self::Punctuation => 5,
            Self::Whitespace => 6,
            Self::Control => 7,
        }
    }

    /// Name used in the first column of the report.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Alpha => "Alphabetic",
            Self::Lowercase => "Lowercase",
            Self::Uppercase => "Uppercase",
            Self::Numeric => "Numeric",
            Self::Punctuation => "Punctuation",
            Self::Whitespace => "Whitespace",
            Self::Control => "Control",
        }
    }
}
