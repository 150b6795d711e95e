use std::io::Read;
use std::time::Duration;

use super::error::ResolveError;
use super::types::ResolverConfig;

/// Largest image body we are willing to buffer
const MAX_IMAGE_BYTES: u64 = 16 * 1024 * 1024;

/// Blocking GET transport used by the resolver.
///
/// `HttpFetcher` is the real one; tests substitute a scripted fake.
pub trait Fetcher: Send + Sync {
    /// GET `url` and return the body as text
    fn get_text(&self, url: &str) -> Result<String, ResolveError>;

    /// GET `url` and return the raw body
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ResolveError>;
}

/// `ureq`-backed fetcher
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(config: &ResolverConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new().user_agent(&config.user_agent);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self {
            agent: builder.build(),
        }
    }

    fn call(&self, url: &str) -> Result<ureq::Response, ResolveError> {
        log::debug!("GET {}", url);
        self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => ResolveError::Status(code, url.to_string()),
            ureq::Error::Transport(transport) => ResolveError::Network(transport.to_string()),
        })
    }
}

impl Fetcher for HttpFetcher {
    fn get_text(&self, url: &str) -> Result<String, ResolveError> {
        self.call(url)?
            .into_string()
            .map_err(|e| ResolveError::Network(format!("failed to read body: {}", e)))
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ResolveError> {
        let response = self.call(url)?;
        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_IMAGE_BYTES + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| ResolveError::Network(format!("failed to read body: {}", e)))?;
        if bytes.len() as u64 > MAX_IMAGE_BYTES {
            return Err(ResolveError::ImageDecode(format!(
                "image larger than {} bytes",
                MAX_IMAGE_BYTES
            )));
        }
        Ok(bytes)
    }
}
