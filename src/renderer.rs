use crate::attr_set::AttributeSet;
use crate::fd_ast::FunctionalDependency;
use crate::normal_form::{NormalFormReport, Verdict};

pub fn render_closure(x: AttributeSet, x_plus: AttributeSet, universe: AttributeSet) -> String {
    let mut lines = vec![format!("X = {}", x.spaced()), format!("X+ = {}", x_plus.spaced())];
    if !universe.is_empty() && x_plus.is_superset(universe) {
        lines.push("X is a superkey (X+ covers U)".to_string());
    }
    lines.join("\n")
}

pub fn render_cover(cover: &[FunctionalDependency]) -> String {
    cover
        .iter()
        .map(|fd| fd.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_keys(keys: &[AttributeSet]) -> String {
    let mut lines = vec![format!("Candidate keys ({}):", keys.len())];
    lines.extend(keys.iter().map(|k| k.spaced()));
    lines.join("\n")
}

pub fn render_normal_forms(report: &NormalFormReport) -> String {
    let mut lines = Vec::new();
    if report.cover.is_empty() {
        lines.push("No functional dependencies given.".to_string());
    }
    verdict_lines(&mut lines, "BCNF", &report.bcnf);
    verdict_lines(&mut lines, "3NF", &report.third);
    lines.join("\n")
}

fn verdict_lines(lines: &mut Vec<String>, name: &str, verdict: &Verdict) {
    if verdict.is_ok() {
        lines.push(format!("{name}: OK"));
        return;
    }
    lines.push(format!("{name}: Violations ({})", verdict.violations.len()));
    for v in &verdict.violations {
        lines.push(format!("{}    ({})", v.dependency, v.reason));
    }
}
