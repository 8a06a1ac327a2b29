use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::attr_set::AttributeSet;
use crate::closure::closure;
use crate::fd_ast::FunctionalDependency;

/// All minimal candidate keys of `universe` under `fds`, in discovery order.
///
/// Breadth-first search over attribute sets, rooted at the attributes that
/// never appear on a right-hand side (every key contains them). Superkeys are
/// never expanded. The search space is `2^n` in the number of non-essential
/// attributes, which the 26-letter alphabet keeps bounded.
pub fn candidate_keys(
    universe: AttributeSet,
    fds: &[FunctionalDependency],
) -> Vec<AttributeSet> {
    let derived = fds
        .iter()
        .fold(AttributeSet::EMPTY, |acc, fd| acc.union(fd.rhs));
    let essentials = universe.difference(derived);
    let optional = universe.difference(essentials);

    let mut queue = VecDeque::from([essentials]);
    let mut visited = HashSet::from([essentials]);
    let mut keys: Vec<AttributeSet> = Vec::new();

    while let Some(cur) = queue.pop_front() {
        if closure(cur, fds).is_superset(universe) {
            if keys.iter().any(|k| k.is_subset(cur)) {
                continue;
            }
            keys.retain(|k| !cur.is_subset(*k));
            keys.push(cur);
            continue;
        }
        for attr in optional.iter().filter(|a| !cur.contains(*a)) {
            let next = cur.with(attr);
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    debug!(
        %essentials,
        visited = visited.len(),
        keys = keys.len(),
        "candidate key search"
    );
    keys
}

/// Union of all candidate keys.
pub fn prime_attributes(keys: &[AttributeSet]) -> AttributeSet {
    keys.iter()
        .fold(AttributeSet::EMPTY, |acc, k| acc.union(*k))
}
