use url::Url;

/// Resolves a listing `href` against the source's base URL.
///
/// Absolute links come back unchanged; anything else is joined onto `base`.
pub fn absolutize(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    if Url::parse(href).is_ok() {
        return Some(href.to_string());
    }
    base.join(href).ok().map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.pfizer.com").unwrap()
    }

    #[test]
    fn test_root_relative_gets_domain_once() {
        let url = absolutize(&base(), "/news/press-release/abc").unwrap();
        assert_eq!(url, "https://www.pfizer.com/news/press-release/abc");
        assert_eq!(url.matches("www.pfizer.com").count(), 1);
    }

    #[test]
    fn test_absolute_is_unchanged() {
        let href = "https://cdn.example.com/a?b=c";
        assert_eq!(absolutize(&base(), href).as_deref(), Some(href));
    }

    #[test]
    fn test_protocol_relative_and_empty() {
        assert_eq!(
            absolutize(&base(), "//investor.pfizer.com/x").as_deref(),
            Some("https://investor.pfizer.com/x")
        );
        assert_eq!(absolutize(&base(), "   "), None);
    }
}
