use std::fmt;

use crate::attr_set::AttributeSet;
use crate::closure::is_superkey;
use crate::fd_ast::FunctionalDependency;
use crate::keys::{candidate_keys, prime_attributes};
use crate::mincover::minimal_cover;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationReason {
    NotSuperkey,
    NotSuperkeyNorPrime,
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationReason::NotSuperkey => write!(f, "LHS is not a superkey"),
            ViolationReason::NotSuperkeyNorPrime => {
                write!(f, "LHS is not a superkey and RHS is not prime")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub dependency: FunctionalDependency,
    pub reason: ViolationReason,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Verdict {
    pub violations: Vec<Violation>,
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalFormReport {
    pub cover: Vec<FunctionalDependency>,
    /// Left empty when the cover is empty.
    pub candidate_keys: Vec<AttributeSet>,
    pub prime: AttributeSet,
    pub bcnf: Verdict,
    pub third: Verdict,
}

/// Checks BCNF and 3NF against the minimal cover of `fds`.
pub fn check_normal_forms(
    universe: AttributeSet,
    fds: &[FunctionalDependency],
) -> NormalFormReport {
    let cover = minimal_cover(fds);
    if cover.is_empty() {
        return NormalFormReport {
            cover,
            candidate_keys: Vec::new(),
            prime: AttributeSet::EMPTY,
            bcnf: Verdict::default(),
            third: Verdict::default(),
        };
    }

    let keys = candidate_keys(universe, &cover);
    let prime = prime_attributes(&keys);

    let mut bcnf = Verdict::default();
    let mut third = Verdict::default();
    for fd in cover.iter().filter(|fd| !fd.is_trivial()) {
        if is_superkey(fd.lhs, universe, &cover) {
            continue;
        }
        bcnf.violations.push(Violation {
            dependency: *fd,
            reason: ViolationReason::NotSuperkey,
        });
        if !fd.rhs.is_subset(prime) {
            third.violations.push(Violation {
                dependency: *fd,
                reason: ViolationReason::NotSuperkeyNorPrime,
            });
        }
    }

    NormalFormReport {
        cover,
        candidate_keys: keys,
        prime,
        bcnf,
        third,
    }
}
