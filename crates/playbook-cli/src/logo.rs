//! Logo lookup for toolbox entries.
//!
//! Derives a domain from a tool's URL and points at a third-party logo
//! service. Unparseable URLs yield no logo rather than an error, so a bad
//! toolbox entry never breaks rendering.

use url::Url;

/// Extract the domain from an absolute URL, stripping one leading `www.`.
pub fn domain_from_url(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let host = parsed.host_str()?;
    let domain = host.strip_prefix("www.").unwrap_or(host);
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_owned())
    }
}

/// Logo image URL for a tool, if its URL yields a domain.
pub fn logo_url(tool_url: &str) -> Option<String> {
    let domain = domain_from_url(tool_url)?;
    Some(format!("https://logo.clearbit.com/{domain}"))
}
