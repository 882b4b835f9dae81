//! Configuration templates for `folio init`.
//!
//! Templates are kept as valid TOML and handed out fully commented, so a fresh
//! file changes nothing until the user uncomments a line.

/// Local configuration template.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the commented local template.
pub fn local_template() -> String {
    comment_out(LOCAL_TEMPLATE)
}

/// Returns the commented global template.
pub fn global_template() -> String {
    comment_out(GLOBAL_TEMPLATE)
}

/// Prefixes every non-empty, non-comment line with `# `.
fn comment_out(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
