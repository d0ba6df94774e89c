//! Logging setup.
//!
//! ```bash
//! # Default: warnings, plus info from the scroller crates
//! scroller notes.txt
//!
//! # Debug level for every scroller crate
//! SCROLLER_LOG=debug scroller notes.txt
//!
//! # Full filter syntax is passed through unchanged
//! SCROLLER_LOG=warn,scroller_core=trace scroller notes.txt
//! ```
//!
//! `SCROLLER_LOG` takes precedence over `RUST_LOG`.

use std::env;
use tracing_subscriber::{EnvFilter, fmt};

const CRATES: &[&str] = &[
    "scroller",
    "scroller_config",
    "scroller_core",
    "scroller_application",
    "scroller_gui",
];

pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directives = filter_directives(
        env::var("SCROLLER_LOG").ok().as_deref(),
        env::var("RUST_LOG").ok().as_deref(),
    );
    fmt()
        .with_env_filter(EnvFilter::new(directives))
        .try_init()?;
    Ok(())
}

fn filter_directives(scroller_log: Option<&str>, rust_log: Option<&str>) -> String {
    if let Some(value) = scroller_log {
        return expand_scroller_log(value);
    }
    if let Some(value) = rust_log {
        return value.to_string();
    }
    expand_scroller_log("info")
}

/// A bare level applies to every scroller crate; anything with filter
/// syntax is used as-is.
fn expand_scroller_log(value: &str) -> String {
    if value.contains(['=', ':', ',']) {
        return value.to_string();
    }

    let mut directives = String::from("warn");
    for krate in CRATES {
        directives.push_str(&format!(",{krate}={value}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet_except_for_scroller_crates() {
        assert_eq!(
            filter_directives(None, None),
            "warn,scroller=info,scroller_config=info,scroller_core=info,\
             scroller_application=info,scroller_gui=info"
        );
    }

    #[test]
    fn scroller_log_wins_over_rust_log() {
        assert_eq!(
            filter_directives(Some("scroller_core=trace"), Some("debug")),
            "scroller_core=trace"
        );
        assert_eq!(filter_directives(None, Some("debug")), "debug");
    }

    #[test]
    fn bare_level_expands_to_every_crate() {
        let directives = filter_directives(Some("debug"), None);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("scroller_gui=debug"));
        assert!(directives.contains("scroller_core=debug"));
    }
}
