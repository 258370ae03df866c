//! Email domain restriction rules
//!
//! A rule is a free-form string such as `"@corp.example.com, example.org"`.
//! Commas, whitespace and `@` are all separators.

/// Split a rule string into lowercase bare domain suffixes
pub fn normalize_domains(rule: &str) -> Vec<String> {
    rule.to_lowercase()
        .split(|c: char| c == ',' || c == '@' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Check an address against every rule
///
/// Rules that normalize to no domains are ignored. Each remaining rule must
/// contain at least one domain the address ends with (`@domain`).
pub fn is_address_allowed<R: AsRef<str>>(address: &str, rules: &[R]) -> bool {
    rules.iter().all(|rule| {
        let domains = normalize_domains(rule.as_ref());
        domains.is_empty()
            || domains
                .iter()
                .any(|domain| address.ends_with(&format!("@{}", domain)))
    })
}
