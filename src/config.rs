/// Base URL for API calls. Empty in every profile: the site and its
/// `/api` routes are served from one origin, and `trunk serve` is expected
/// to proxy them during development.
pub fn get_backend_url() -> &'static str {
    ""
}

/// Path of the email delivery endpoint the contact form posts to.
pub const CONTACT_ENDPOINT: &str = "/api/send-email";

pub fn contact_url() -> String {
    format!("{}{}", get_backend_url(), CONTACT_ENDPOINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_url_is_same_origin() {
        let url = contact_url();
        assert_eq!(url, "/api/send-email");
        assert!(url.starts_with('/'));
        assert!(!url.contains("://"));
    }
}
