use std::fmt;

use tracing::{debug, warn};
use winnow::prelude::*;
use winnow::combinator::{alt, delimited, repeat};
use winnow::token::{take_till, take_until};

use crate::attr_set::AttributeSet;
use crate::error::{FdError, Result};
use crate::fd_ast::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSchema {
    pub schema: Schema,
    /// FD tokens that were skipped.
    pub warnings: Vec<ParseWarning>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseWarning {
    pub token: String,
    pub kind: WarningKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    MissingArrow,
    EmptySide,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let why = match self.kind {
            WarningKind::MissingArrow => "missing `->`",
            WarningKind::EmptySide => "empty side",
        };
        write!(f, "invalid FD token `{}`: {why}", self.token)
    }
}

pub fn parse_schema(input: &str) -> Result<ParsedSchema> {
    let clean: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    let declared = match block(&clean, "U=") {
        Ok(content) => AttributeSet::from_letters(content),
        Err(FdError::MissingBlock(_)) => AttributeSet::EMPTY,
        Err(e) => {
            warn!("{e}, inferring universe from dependencies");
            AttributeSet::EMPTY
        }
    };
    let fd_content = block(&clean, "F=")?;

    let mut dependencies = Vec::new();
    let mut warnings = Vec::new();
    for token in fd_tokens(fd_content) {
        match fd_token(token) {
            Ok(fd) => dependencies.push(fd),
            Err(kind) => {
                let warning = ParseWarning {
                    token: token.to_string(),
                    kind,
                };
                warn!("{warning}");
                warnings.push(warning);
            }
        }
    }

    let schema = Schema::new(declared, dependencies);
    debug!(
        universe = %schema.universe,
        dependencies = schema.dependencies.len(),
        skipped = warnings.len(),
        "parsed schema"
    );
    Ok(ParsedSchema { schema, warnings })
}

/// Content between the first `{` after `prefix` and its matching `}`.
fn block<'s>(clean: &'s str, prefix: &'static str) -> Result<&'s str> {
    let start = clean.find(prefix).ok_or(FdError::MissingBlock(prefix))?;
    let after = &clean[start + prefix.len()..];
    let open = after.find('{').ok_or(FdError::MissingBlock(prefix))?;
    let mut input = &after[open..];
    braced
        .parse_next(&mut input)
        .map_err(|_| FdError::UnterminatedBlock(prefix))
}

fn braced<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    delimited('{', balanced, '}').parse_next(input)
}

fn balanced<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    repeat::<_, _, (), _, _>(
        0..,
        alt((take_till(1.., ['{', '}']).void(), braced.void())),
    )
    .take()
    .parse_next(input)
}

/// Splits on `,` and `;`, dropping empty tokens.
fn fd_tokens(content: &str) -> Vec<&str> {
    content.split([',', ';']).filter(|t| !t.is_empty()).collect()
}

fn fd_token(token: &str) -> std::result::Result<FunctionalDependency, WarningKind> {
    let mut input = token;
    let (lhs, rhs) = arrow_split
        .parse_next(&mut input)
        .map_err(|_| WarningKind::MissingArrow)?;
    let lhs = AttributeSet::from_letters(lhs);
    let rhs = AttributeSet::from_letters(rhs);
    if lhs.is_empty() || rhs.is_empty() {
        return Err(WarningKind::EmptySide);
    }
    Ok(FunctionalDependency::new(lhs, rhs))
}

fn arrow_split<'s>(input: &mut &'s str) -> winnow::Result<(&'s str, &'s str)> {
    let lhs = take_until(0.., "->").parse_next(input)?;
    "->".parse_next(input)?;
    let rhs = *input;
    *input = "";
    Ok((lhs, rhs))
}
