//! Endpoint templates and request-target resolution.
//!
//! Every management endpoint is a path template with ordered `{}`
//! placeholders. [`resolve`] substitutes percent-encoded path segments,
//! appends only the query parameters that carry a value, and joins the
//! result onto the server's base URL.

use chrono::{DateTime, FixedOffset};
use url::Url;

use crate::error::SdkError;

/// Incident listing and creation: profile, incident rule.
pub const INCIDENTS_EP: &str = "/rest/management/profiles/{}/incidentrules/{}/incidents/";
/// A single incident: profile, incident rule, incident id.
pub const INCIDENT_EP: &str = "/rest/management/profiles/{}/incidentrules/{}/incidents/{}";
/// All system profiles.
pub const PROFILES_EP: &str = "/rest/management/profiles";
/// A single system profile: profile.
pub const PROFILE_EP: &str = "/rest/management/profiles/{}";
/// Enable a system profile: profile.
pub const PROFILE_ENABLE_EP: &str = "/rest/management/profiles/{}/enable";
/// Disable a system profile: profile.
pub const PROFILE_DISABLE_EP: &str = "/rest/management/profiles/{}/disable";
/// Activate a profile configuration: profile, configuration.
pub const ACTIVATE_PROFILE_CONFIGURATION_EP: &str =
    "/rest/management/profiles/{}/configurations/{}/activate";
/// A single memory dump job: profile, job id.
pub const MEMORY_DUMP_JOB_EP: &str = "/rest/management/profiles/{}/memorydumpjobs/{}";

const PLACEHOLDER: &str = "{}";

/// Date pattern the server's filter parser expects, e.g. `2013-12-18T04:31:12.772+01:00`.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Formats a timestamp for query parameters and XML payloads.
///
/// Always emits exactly three fractional-second digits and a colon in the offset.
pub fn format_date(date: &DateTime<FixedOffset>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a timestamp produced by the server or by [`format_date`].
pub fn parse_date(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value.trim())
}

/// Resolves a template into a fully-qualified request target.
///
/// # Arguments
///
/// * `base_url` - Server base URL without trailing slash
/// * `template` - Path template with `{}` placeholders
/// * `args` - Positional path arguments, substituted in order
/// * `query` - Ordered query parameters; `None` or empty values are skipped
///
/// # Errors
///
/// Returns `SdkError::InvalidEndpoint` if an argument is empty or a dot
/// segment (`.` or `..`), the number of
/// arguments does not match the template, or the result is not a valid URL.
pub fn resolve(
    base_url: &str,
    template: &str,
    args: &[&str],
    query: &[(&str, Option<String>)],
) -> Result<Url, SdkError> {
    if !template.starts_with('/') {
        return Err(SdkError::invalid_endpoint(format!(
            "template must start with '/': {}",
            template
        )));
    }

    let placeholders = template.matches(PLACEHOLDER).count();
    if placeholders != args.len() {
        return Err(SdkError::invalid_endpoint(format!(
            "template {} expects {} argument(s), got {}",
            template,
            placeholders,
            args.len()
        )));
    }

    let mut path = String::with_capacity(template.len());
    let mut pieces = template.split(PLACEHOLDER);
    if let Some(first) = pieces.next() {
        path.push_str(first);
    }
    for (arg, piece) in args.iter().zip(pieces) {
        let trimmed = arg.trim();
        if trimmed.is_empty() {
            return Err(SdkError::invalid_endpoint(format!(
                "empty path argument for {}",
                template
            )));
        }
        // URL parsing collapses dot segments, even percent-encoded ones.
        if trimmed == "." || trimmed == ".." {
            return Err(SdkError::invalid_endpoint(format!(
                "dot segment {:?} not allowed as path argument for {}",
                trimmed, template
            )));
        }
        path.push_str(&urlencoding::encode(arg));
        path.push_str(piece);
    }

    let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), path))
        .map_err(|e| SdkError::invalid_endpoint(format!("could not build {}: {}", template, e)))?;

    let present: Vec<(&str, &str)> = query
        .iter()
        .filter_map(|(name, value)| match value.as_deref() {
            Some(v) if !v.is_empty() => Some((*name, v)),
            _ => None,
        })
        .collect();

    if !present.is_empty() {
        url.query_pairs_mut().extend_pairs(present);
    }

    Ok(url)
}
