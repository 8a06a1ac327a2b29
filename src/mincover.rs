use tracing::{debug, trace};

use crate::attr_set::AttributeSet;
use crate::closure::{closure, closure_filtered};
use crate::fd_ast::FunctionalDependency;

/// Canonical cover of `fds`: singleton right-hand sides, no extraneous
/// left-hand attributes, no redundant dependencies.
///
/// Redundant dependencies are dropped greedily in list order and never
/// revisited, so the cover returned depends on the input order.
pub fn minimal_cover(fds: &[FunctionalDependency]) -> Vec<FunctionalDependency> {
    let mut working = decompose_rhs(fds);
    if working.is_empty() {
        return working;
    }
    debug!(count = working.len(), "decomposed right-hand sides");

    let passes = reduce_lhs(&mut working);
    debug!(passes, "reduced left-hand sides");

    let keep = redundancy_mask(&working);
    let cover: Vec<FunctionalDependency> = working
        .into_iter()
        .zip(keep)
        .filter_map(|(fd, kept)| kept.then_some(fd))
        .collect();
    debug!(count = cover.len(), "minimal cover");
    cover
}

fn decompose_rhs(fds: &[FunctionalDependency]) -> Vec<FunctionalDependency> {
    fds.iter()
        .flat_map(|fd| {
            fd.rhs
                .iter()
                .map(move |a| FunctionalDependency::new(fd.lhs, AttributeSet::single(a)))
        })
        .collect()
}

/// Removes extraneous attributes until no dependency changes. Returns the
/// number of passes taken.
fn reduce_lhs(working: &mut [FunctionalDependency]) -> usize {
    let mut passes = 0;
    loop {
        passes += 1;
        let mut changed = false;
        for i in 0..working.len() {
            for attr in working[i].lhs.iter() {
                let lhs = working[i].lhs;
                if lhs.len() <= 1 || !lhs.contains(attr) {
                    continue;
                }
                let reduced = lhs.without(attr);
                if working[i].rhs.is_subset(closure(reduced, working)) {
                    trace!(fd = %working[i], %attr, "extraneous attribute");
                    working[i].lhs = reduced;
                    changed = true;
                }
            }
        }
        if !changed {
            return passes;
        }
    }
}

fn redundancy_mask(working: &[FunctionalDependency]) -> Vec<bool> {
    let mut keep = vec![true; working.len()];
    for i in 0..working.len() {
        let reach = closure_filtered(working[i].lhs, working, |j| j != i && keep[j]);
        if working[i].rhs.is_subset(reach) {
            trace!(fd = %working[i], "redundant dependency");
            keep[i] = false;
        }
    }
    keep
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fd(lhs: &str, rhs: &str) -> FunctionalDependency {
        FunctionalDependency::from_letters(lhs, rhs)
    }

    #[test]
    fn decompose_splits_rhs_alphabetically() {
        assert_eq!(
            decompose_rhs(&[fd("A", "CB")]),
            vec![fd("A", "B"), fd("A", "C")]
        );
    }

    #[test]
    fn cover_of_nothing_is_empty() {
        assert!(minimal_cover(&[]).is_empty());
    }

    #[test]
    fn chain_is_already_minimal() {
        let fds = vec![fd("A", "B"), fd("B", "C")];
        assert_eq!(minimal_cover(&fds), fds);
    }

    #[test]
    fn transitive_shortcut_is_redundant() {
        let fds = vec![fd("A", "B"), fd("B", "C"), fd("A", "C")];
        assert_eq!(minimal_cover(&fds), vec![fd("A", "B"), fd("B", "C")]);
    }

    #[test]
    fn extraneous_lhs_attribute_removed() {
        let fds = vec![fd("A", "B"), fd("AB", "C")];
        assert_eq!(minimal_cover(&fds), vec![fd("A", "B"), fd("A", "C")]);
    }

    #[test]
    fn lhs_reduction_reaches_fixpoint() {
        // Each removal is checked against the already-shrunk LHS.
        let fds = vec![fd("ABC", "D"), fd("A", "B"), fd("B", "C")];
        assert_eq!(
            minimal_cover(&fds),
            vec![fd("A", "D"), fd("A", "B"), fd("B", "C")]
        );
    }

    #[test]
    fn duplicates_collapse() {
        let fds = vec![fd("A", "B"), fd("A", "B")];
        assert_eq!(minimal_cover(&fds), vec![fd("A", "B")]);
    }

    #[test]
    fn greedy_drop_depends_on_order() {
        // A->B, B->A, A->C, B->C: one of the two C dependencies survives.
        let forward = vec![fd("A", "B"), fd("B", "A"), fd("A", "C"), fd("B", "C")];
        assert_eq!(
            minimal_cover(&forward),
            vec![fd("A", "B"), fd("B", "A"), fd("B", "C")]
        );
        let reversed = vec![fd("A", "B"), fd("B", "A"), fd("B", "C"), fd("A", "C")];
        assert_eq!(
            minimal_cover(&reversed),
            vec![fd("A", "B"), fd("B", "A"), fd("A", "C")]
        );
    }

    #[test]
    fn trivial_dependency_is_dropped() {
        let fds = vec![fd("AB", "A"), fd("A", "C")];
        assert_eq!(minimal_cover(&fds), vec![fd("A", "C")]);
    }
}
