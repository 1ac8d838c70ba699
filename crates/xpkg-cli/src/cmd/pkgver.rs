//! Pkgver command

use anyhow::Result;
use serde::Serialize;
use xpkg_schema::PkgVer;

#[derive(Debug, Serialize)]
struct Parts<'a> {
    pkgver: &'a str,
    name: Option<String>,
    version: Option<String>,
    revision: Option<String>,
    epoch: Option<String>,
}

/// Print the components of each package identifier.
pub fn pkgver(pkgvers: &[String], json: bool) -> Result<()> {
    for raw in pkgvers {
        let id = PkgVer::new(raw);
        let parts = Parts {
            pkgver: id.as_str(),
            name: id.name(),
            version: id.version(),
            revision: id.revision(),
            epoch: id.epoch(),
        };
        if json {
            println!("{}", serde_json::to_string(&parts)?);
            continue;
        }

        println!("{}", parts.pkgver);
        print_field("name", parts.name.as_deref());
        print_field("version", parts.version.as_deref());
        print_field("revision", parts.revision.as_deref());
        print_field("epoch", parts.epoch.as_deref());
    }
    Ok(())
}

pub(crate) fn print_field(label: &str, value: Option<&str>) {
    let lw = 10;
    println!("  {label:<lw$}{}", value.unwrap_or("-"));
}
