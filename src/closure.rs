use crate::attr_set::AttributeSet;
use crate::fd_ast::FunctionalDependency;

/// Attribute closure `X+` of `attrs` under `fds`.
pub fn closure(attrs: AttributeSet, fds: &[FunctionalDependency]) -> AttributeSet {
    closure_filtered(attrs, fds, |_| true)
}

/// Closure using only the dependencies whose index passes `keep`.
pub fn closure_filtered(
    attrs: AttributeSet,
    fds: &[FunctionalDependency],
    keep: impl Fn(usize) -> bool,
) -> AttributeSet {
    let mut result = attrs;
    loop {
        let before = result;
        for (i, fd) in fds.iter().enumerate() {
            if keep(i) && fd.lhs.is_subset(result) {
                result = result.union(fd.rhs);
            }
        }
        if result == before {
            return result;
        }
    }
}

pub fn is_superkey(
    attrs: AttributeSet,
    universe: AttributeSet,
    fds: &[FunctionalDependency],
) -> bool {
    closure(attrs, fds).is_superset(universe)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(s: &str) -> AttributeSet {
        AttributeSet::from_letters(s)
    }

    fn fd(lhs: &str, rhs: &str) -> FunctionalDependency {
        FunctionalDependency::from_letters(lhs, rhs)
    }

    #[test]
    fn closure_follows_chain() {
        let fds = vec![fd("A", "B"), fd("B", "C")];
        assert_eq!(closure(set("A"), &fds), set("ABC"));
        assert_eq!(closure(set("B"), &fds), set("BC"));
        assert_eq!(closure(set("C"), &fds), set("C"));
    }

    #[test]
    fn closure_needs_whole_lhs() {
        let fds = vec![fd("AB", "C")];
        assert_eq!(closure(set("A"), &fds), set("A"));
        assert_eq!(closure(set("AB"), &fds), set("ABC"));
    }

    #[test]
    fn closure_independent_of_order() {
        // The later FD enables the earlier one; a second scan is needed.
        let fds = vec![fd("C", "D"), fd("B", "C"), fd("A", "B")];
        assert_eq!(closure(set("A"), &fds), set("ABCD"));
    }

    #[test]
    fn closure_of_empty() {
        assert_eq!(closure(AttributeSet::EMPTY, &[]), AttributeSet::EMPTY);
        assert_eq!(closure(set("AB"), &[]), set("AB"));
    }

    #[test]
    fn closure_filtered_skips_excluded() {
        let fds = vec![fd("A", "B"), fd("B", "C")];
        assert_eq!(closure_filtered(set("A"), &fds, |i| i != 1), set("AB"));
        assert_eq!(closure_filtered(set("A"), &fds, |i| i != 0), set("A"));
    }

    #[test]
    fn superkey_check() {
        let fds = vec![fd("A", "B"), fd("B", "C")];
        assert!(is_superkey(set("A"), set("ABC"), &fds));
        assert!(!is_superkey(set("B"), set("ABC"), &fds));
    }
}
