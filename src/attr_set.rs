use std::fmt;

const ALPHABET_LEN: u8 = 26;
const FULL_MASK: u32 = (1 << ALPHABET_LEN) - 1;

/// A single schema attribute, one of the letters `A`..`Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Attribute(u8);

impl Attribute {
    /// Upper and lower case fold onto the same attribute.
    pub fn from_char(c: char) -> Option<Attribute> {
        if c.is_ascii_alphabetic() {
            Some(Attribute(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    fn bit(self) -> u32 {
        1 << self.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Set of attributes backed by a fixed-width bit register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttributeSet(u32);

impl AttributeSet {
    pub const EMPTY: AttributeSet = AttributeSet(0);

    /// Collects every letter in `s`; other characters are ignored.
    pub fn from_letters(s: &str) -> AttributeSet {
        s.chars()
            .filter_map(Attribute::from_char)
            .fold(AttributeSet::EMPTY, AttributeSet::with)
    }

    pub fn single(attr: Attribute) -> AttributeSet {
        AttributeSet(attr.bit())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn contains(self, attr: Attribute) -> bool {
        self.0 & attr.bit() != 0
    }

    pub fn with(self, attr: Attribute) -> AttributeSet {
        AttributeSet(self.0 | attr.bit())
    }

    pub fn without(self, attr: Attribute) -> AttributeSet {
        AttributeSet(self.0 & !attr.bit())
    }

    pub fn union(self, other: AttributeSet) -> AttributeSet {
        AttributeSet(self.0 | other.0)
    }

    pub fn intersection(self, other: AttributeSet) -> AttributeSet {
        AttributeSet(self.0 & other.0)
    }

    pub fn difference(self, other: AttributeSet) -> AttributeSet {
        AttributeSet(self.0 & !other.0)
    }

    /// Complement relative to the whole alphabet.
    pub fn complement(self) -> AttributeSet {
        AttributeSet(!self.0 & FULL_MASK)
    }

    pub fn is_subset(self, other: AttributeSet) -> bool {
        self.0 & other.0 == self.0
    }

    pub fn is_superset(self, other: AttributeSet) -> bool {
        other.is_subset(self)
    }

    /// Attributes in alphabet order.
    pub fn iter(self) -> impl Iterator<Item = Attribute> {
        (0..ALPHABET_LEN)
            .map(Attribute)
            .filter(move |a| self.contains(*a))
    }

    /// Renders as `A B C`, or `(empty)`.
    pub fn spaced(self) -> String {
        if self.is_empty() {
            return "(empty)".to_string();
        }
        self.iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        for attr in self.iter() {
            write!(f, "{attr}")?;
        }
        Ok(())
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        iter.into_iter().fold(AttributeSet::EMPTY, AttributeSet::with)
    }
}
