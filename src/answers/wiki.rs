use super::error::ResolveError;
use super::http::Fetcher;
use super::image::decode_image;
use super::types::{DecodedImage, RemoteSummary, ResolverConfig};

/// Client for the encyclopedia page summary endpoint
pub struct WikiClient {
    endpoint: String,
    fetcher: Box<dyn Fetcher>,
}

impl WikiClient {
    pub fn new(config: &ResolverConfig, fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            endpoint: config.summary_endpoint.clone(),
            fetcher,
        }
    }

    /// Fetch and parse the summary for `keyword`
    pub fn summary(&self, keyword: &str) -> Result<RemoteSummary, ResolveError> {
        let url = summary_url(&self.endpoint, keyword);
        log::debug!("Fetching summary for {}", keyword);
        let body = self.fetcher.get_text(&url)?;
        parse_summary(&body)
    }

    /// Download and decode an image by URL
    pub fn image(&self, url: &str) -> Result<DecodedImage, ResolveError> {
        let bytes = self.fetcher.get_bytes(url)?;
        decode_image(&bytes)
    }
}

/// Summary URL for a keyword.
///
/// The keyword is appended verbatim, without percent-encoding.
pub fn summary_url(endpoint: &str, keyword: &str) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), keyword)
}

/// Parse a summary body. Missing fields are `None`; malformed JSON or a
/// present image object without `source` is an error.
pub fn parse_summary(body: &str) -> Result<RemoteSummary, ResolveError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::types::ImageRef;

    #[test]
    fn test_summary_url() {
        assert_eq!(
            summary_url("https://en.wikipedia.org/api/rest_v1/page/summary", "dog"),
            "https://en.wikipedia.org/api/rest_v1/page/summary/dog"
        );
        assert_eq!(summary_url("http://localhost/summary/", "cat"), "http://localhost/summary/cat");
    }

    #[test]
    fn test_summary_url_not_encoded() {
        assert_eq!(summary_url("http://h/s", "ice cream"), "http://h/s/ice cream");
    }

    #[test]
    fn test_parse_full_summary() {
        let summary = parse_summary(
            r#"{
                "extract": "A pterodactyl was a flying reptile. It lived long ago.",
                "thumbnail": {"source": "https://img/thumb.png"},
                "originalimage": {"source": "https://img/orig.png"}
            }"#,
        )
        .unwrap();
        assert_eq!(
            summary.thumbnail,
            Some(ImageRef {
                source: "https://img/thumb.png".to_string()
            })
        );
        assert_eq!(summary.original_image.unwrap().source, "https://img/orig.png");
    }

    #[test]
    fn test_parse_empty_object() {
        assert_eq!(parse_summary("{}").unwrap(), RemoteSummary::default());
    }

    #[test]
    fn test_parse_null_fields() {
        let summary = parse_summary(r#"{"extract": null, "thumbnail": null}"#).unwrap();
        assert_eq!(summary, RemoteSummary::default());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_summary("not json"), Err(ResolveError::Parse(_))));
        assert!(matches!(parse_summary("[1, 2]"), Err(ResolveError::Parse(_))));
        assert!(matches!(
            parse_summary(r#"{"thumbnail": {"width": 10}}"#),
            Err(ResolveError::Parse(_))
        ));
    }
}
