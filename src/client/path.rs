//! Path templates and URL assembly

use crate::error::{TestRailError, TestRailResult};

/// Substitute `{}` placeholders in `template` with `ids`, in order.
///
/// The number of identifiers must match the number of placeholders.
pub fn resolve_path(template: &str, ids: &[u64]) -> TestRailResult<String> {
    let placeholders = template.matches("{}").count();
    if placeholders != ids.len() {
        return Err(TestRailError::invalid_argument(format!(
            "path '{}' takes {} identifiers, got {}",
            template,
            placeholders,
            ids.len()
        )));
    }

    let mut path = String::with_capacity(template.len() + ids.len() * 4);
    let mut rest = template;
    for id in ids {
        if let Some(pos) = rest.find("{}") {
            path.push_str(&rest[..pos]);
            path.push_str(&id.to_string());
            rest = &rest[pos + 2..];
        }
    }
    path.push_str(rest);
    Ok(path)
}

/// Join the API base, a resolved path and an encoded query string.
///
/// TestRail's default prefix already carries `?`, so parameters are then
/// appended with `&`.
pub fn join_url(api_url: &str, path: &str, query: &str) -> String {
    let mut url = format!("{}{}", api_url, path.trim_start_matches('/'));
    if !query.is_empty() {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(query);
    }
    url
}
