//! Pattern command

use anyhow::Result;
use serde::Serialize;
use xpkg_schema::PkgPattern;

use super::pkgver::print_field;

#[derive(Debug, Serialize)]
struct Parts<'a> {
    pattern: &'a str,
    name: Option<String>,
    constraint: Option<String>,
}

/// Print the name and constraint of each dependency pattern.
pub fn pattern(patterns: &[String], json: bool) -> Result<()> {
    for raw in patterns {
        let pattern = PkgPattern::new(raw);
        let parts = Parts {
            pattern: pattern.as_str(),
            name: pattern.name(),
            constraint: pattern.constraint(),
        };
        if json {
            println!("{}", serde_json::to_string(&parts)?);
        } else {
            println!("{}", parts.pattern);
            print_field("name", parts.name.as_deref());
            print_field("constraint", parts.constraint.as_deref());
        }
    }
    Ok(())
}
