use url::Url;

/// True when `input` parses as an absolute URL.
pub fn validate_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}
