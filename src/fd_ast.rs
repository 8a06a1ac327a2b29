use std::fmt;

use crate::attr_set::AttributeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionalDependency {
    pub lhs: AttributeSet,
    pub rhs: AttributeSet,
}

impl FunctionalDependency {
    pub fn new(lhs: AttributeSet, rhs: AttributeSet) -> Self {
        FunctionalDependency { lhs, rhs }
    }

    /// Both sides given as letters, e.g. `from_letters("AB", "C")` for `AB->C`.
    pub fn from_letters(lhs: &str, rhs: &str) -> Self {
        FunctionalDependency::new(AttributeSet::from_letters(lhs), AttributeSet::from_letters(rhs))
    }

    pub fn is_trivial(&self) -> bool {
        self.rhs.is_subset(self.lhs)
    }

    pub fn attributes(&self) -> AttributeSet {
        self.lhs.union(self.rhs)
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.lhs, self.rhs)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub universe: AttributeSet,
    pub dependencies: Vec<FunctionalDependency>,
}

impl Schema {
    /// Builds a schema whose universe covers every attribute the dependencies mention.
    pub fn new(declared: AttributeSet, dependencies: Vec<FunctionalDependency>) -> Self {
        let universe = dependencies
            .iter()
            .fold(declared, |u, fd| u.union(fd.attributes()));
        Schema {
            universe,
            dependencies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_when_rhs_inside_lhs() {
        assert!(FunctionalDependency::from_letters("AB", "A").is_trivial());
        assert!(!FunctionalDependency::from_letters("AB", "C").is_trivial());
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(FunctionalDependency::from_letters("BA", "DC").to_string(), "AB->CD");
    }

    #[test]
    fn schema_enlarges_declared_universe() {
        let schema = Schema::new(
            AttributeSet::from_letters("AB"),
            vec![FunctionalDependency::from_letters("A", "C")],
        );
        assert_eq!(schema.universe, AttributeSet::from_letters("ABC"));
    }
}
