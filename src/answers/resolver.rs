use std::sync::Arc;

use super::builtin::LocalAnswers;
use super::error::ResolveError;
use super::http::Fetcher;
use super::question::{extract_keyword, simplify_extract};
use super::types::{
    AnswerImage, DecodedImage, FALLBACK_MESSAGE, Outcome, Resolution, ResolverConfig,
};
use super::wiki::WikiClient;

/// Turns a question into an answer: builtin table first, then the
/// encyclopedia summary endpoint. One attempt per call, no caching.
pub struct Resolver {
    answers: Arc<LocalAnswers>,
    wiki: WikiClient,
    fetch_local_images: bool,
}

impl Resolver {
    pub fn new(
        config: &ResolverConfig,
        answers: Arc<LocalAnswers>,
        fetcher: Box<dyn Fetcher>,
    ) -> Self {
        Self {
            answers,
            wiki: WikiClient::new(config, fetcher),
            fetch_local_images: config.fetch_local_images,
        }
    }

    pub fn answers(&self) -> &LocalAnswers {
        &self.answers
    }

    /// Resolve a raw spoken or typed question. Never fails; errors become
    /// `Outcome::Failure`.
    pub fn resolve(&self, question: &str) -> Resolution {
        let Some(keyword) = extract_keyword(question) else {
            log::debug!("Ignoring blank question");
            return Resolution::failure(&ResolveError::EmptyQuestion);
        };

        if let Some(explanation) = self.answers.get(&keyword) {
            log::debug!("Builtin answer for {}", keyword);
            let explanation = explanation.to_string();
            return self.local_hit(keyword, explanation);
        }

        match self.lookup_remote(&keyword) {
            Ok(resolution) => resolution,
            Err(e) => {
                log::warn!("Lookup failed for {}: {}", keyword, e);
                Resolution::failure(&e)
            }
        }
    }

    fn local_hit(&self, keyword: String, explanation: String) -> Resolution {
        let (image, image_error) = if self.fetch_local_images {
            match self.local_image(&keyword) {
                Ok(Some(image)) => (AnswerImage::Fetched(image), None),
                Ok(None) => (AnswerImage::Placeholder, None),
                Err(e) => {
                    log::warn!("Image fetch failed for {}: {}", keyword, e);
                    (AnswerImage::Placeholder, Some(e.to_string()))
                }
            }
        } else {
            (AnswerImage::Placeholder, None)
        };

        Resolution {
            outcome: Outcome::LocalHit {
                explanation,
                keyword,
            },
            image,
            image_error,
        }
    }

    /// Best-effort picture for a builtin answer, from the full-size page image
    fn local_image(&self, keyword: &str) -> Result<Option<DecodedImage>, ResolveError> {
        let summary = self.wiki.summary(keyword)?;
        match summary.original_image {
            Some(image_ref) => self.wiki.image(&image_ref.source).map(Some),
            None => Ok(None),
        }
    }

    fn lookup_remote(&self, keyword: &str) -> Result<Resolution, ResolveError> {
        let summary = self.wiki.summary(keyword)?;
        let explanation = simplify_extract(summary.extract.as_deref());
        let image_url = summary.thumbnail.map(|t| t.source);

        let image = match &image_url {
            Some(url) => AnswerImage::Fetched(self.wiki.image(url)?),
            None => AnswerImage::Placeholder,
        };

        let outcome = match explanation {
            Some(explanation) => {
                log::info!("Remote answer for {}", keyword);
                Outcome::RemoteHit {
                    explanation,
                    image_url,
                }
            }
            None => {
                log::info!("No usable extract for {}", keyword);
                Outcome::RemoteMiss {
                    fallback_message: FALLBACK_MESSAGE.to_string(),
                }
            }
        };

        Ok(Resolution {
            outcome,
            image,
            image_error: None,
        })
    }
}
