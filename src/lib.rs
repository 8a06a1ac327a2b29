pub mod attr_set;
pub mod closure;
pub mod error;
pub mod fd_ast;
pub mod fd_parser;
pub mod keys;
pub mod mincover;
pub mod normal_form;
pub mod renderer;

use std::path::Path;

use attr_set::AttributeSet;
use error::{FdError, Result};
use fd_parser::ParsedSchema;

pub fn read_fds(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| FdError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses a `.fds` file.
pub fn load_schema(path: &Path) -> Result<ParsedSchema> {
    fd_parser::parse_schema(&read_fds(path)?)
}

pub fn closure_report(input: &str, x: &str) -> Result<String> {
    let schema = fd_parser::parse_schema(input)?.schema;
    let x = AttributeSet::from_letters(x);
    let x_plus = closure::closure(x, &schema.dependencies);
    Ok(renderer::render_closure(x, x_plus, schema.universe))
}

pub fn mincover_report(input: &str) -> Result<String> {
    let schema = fd_parser::parse_schema(input)?.schema;
    let cover = mincover::minimal_cover(&schema.dependencies);
    Ok(renderer::render_cover(&cover))
}

pub fn keys_report(input: &str) -> Result<String> {
    let schema = fd_parser::parse_schema(input)?.schema;
    let cover = mincover::minimal_cover(&schema.dependencies);
    let keys = keys::candidate_keys(schema.universe, &cover);
    Ok(renderer::render_keys(&keys))
}

pub fn normal_form_report(input: &str) -> Result<String> {
    let schema = fd_parser::parse_schema(input)?.schema;
    let report = normal_form::check_normal_forms(schema.universe, &schema.dependencies);
    Ok(renderer::render_normal_forms(&report))
}
