//! Message templates with version placeholders.

/// Replaced with the running app version.
pub const CURRENT_PLACEHOLDER: &str = "{current}";
/// Replaced with the configured latest version.
pub const LATEST_PLACEHOLDER: &str = "{latest}";

/// Substitute both placeholders in a single left-to-right pass.
/// Unknown `{...}` tokens are left untouched and substituted text is not rescanned.
pub fn interpolate(template: &str, current: &str, latest: &str) -> String {
    let mut out = String::with_capacity(template.len() + current.len() + latest.len());
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix(CURRENT_PLACEHOLDER) {
            out.push_str(current);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(LATEST_PLACEHOLDER) {
            out.push_str(latest);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
