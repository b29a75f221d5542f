use std::path::Path;

use url::Url;

/// Result of [`guess_url`]. Always present, not always usable.
///
/// A valid guess keeps the text as typed or built, checked by parsing it but
/// not replaced by the parser's normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessedUrl {
    Valid(String),
    Invalid(String),
}

impl GuessedUrl {
    pub fn is_valid(&self) -> bool {
        matches!(self, GuessedUrl::Valid(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            GuessedUrl::Valid(url) | GuessedUrl::Invalid(url) => url,
        }
    }

    pub fn into_valid(self) -> Option<String> {
        match self {
            GuessedUrl::Valid(url) => Some(url),
            GuessedUrl::Invalid(_) => None,
        }
    }
}

/// Turns whatever the user typed into the link dialog into a URL.
///
/// Tries, in order: an explicit scheme, an existing local file, a bare host
/// (`ftp.` hosts get `ftp://`, everything else `http://`), and finally a plain
/// parse of the input.
pub fn guess_url(input: &str) -> GuessedUrl {
    let trimmed = input.trim();
    let has_scheme = has_scheme_prefix(trimmed);

    if has_scheme && Url::parse(trimmed).is_ok() {
        return GuessedUrl::Valid(trimmed.to_string());
    }

    if let Some(url) = local_file_url(trimmed) {
        return GuessedUrl::Valid(url.into());
    }

    if !has_scheme {
        if let Some((prefix, _)) = trimmed.split_once('.') {
            let scheme = if prefix.eq_ignore_ascii_case("ftp") {
                "ftp"
            } else {
                "http"
            };
            let candidate = format!("{scheme}://{trimmed}");
            if Url::parse(&candidate).is_ok() {
                return GuessedUrl::Valid(candidate);
            }
        }
    }

    match Url::parse(input) {
        Ok(_) => GuessedUrl::Valid(input.to_string()),
        Err(_) => GuessedUrl::Invalid(input.to_string()),
    }
}

/// `^[a-zA-Z]+:.*`
fn has_scheme_prefix(input: &str) -> bool {
    input
        .split_once(':')
        .is_some_and(|(scheme, _)| !scheme.is_empty() && scheme.bytes().all(|b| b.is_ascii_alphabetic()))
}

fn local_file_url(input: &str) -> Option<Url> {
    if input.is_empty() {
        return None;
    }
    let path = Path::new(input);
    if !path.exists() {
        return None;
    }
    let absolute = std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .ok()?;
    Url::from_file_path(absolute).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_prefix_requires_letters() {
        assert!(has_scheme_prefix("https://x.com"));
        assert!(has_scheme_prefix("mailto:someone@example.com"));
        assert!(!has_scheme_prefix("://x"));
        assert!(!has_scheme_prefix("h2://x"));
        assert!(!has_scheme_prefix("example.com"));
    }
}
