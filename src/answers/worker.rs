use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, unbounded};

use super::resolver::Resolver;
use super::types::Resolution;

/// Message sent to the resolver worker
#[derive(Debug)]
pub struct ResolveRequest {
    pub id: u64,
    pub question: String,
}

/// Message sent back from the worker
#[derive(Debug, Clone)]
pub struct ResolveResult {
    pub id: u64,
    pub question: String,
    pub resolution: Resolution,
}

/// Spawn the background resolver worker.
///
/// Requests are handled one at a time in arrival order. The worker exits
/// when every request sender is dropped.
pub fn spawn_resolver_worker(
    resolver: Resolver,
    rx: Receiver<ResolveRequest>,
    result_tx: Sender<ResolveResult>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        log::info!(
            "Resolver worker started ({} builtin answers)",
            resolver.answers().len()
        );

        for request in rx {
            log::debug!("Resolving #{}: {:?}", request.id, request.question);

            let resolution = resolver.resolve(&request.question);
            log::debug!(
                "Resolved #{} (success: {})",
                request.id,
                resolution.outcome.is_success()
            );

            let result = ResolveResult {
                id: request.id,
                question: request.question,
                resolution,
            };

            // The front end may be gone already; the result is just dropped
            if let Err(e) = result_tx.send(result) {
                log::warn!("Dropping resolution #{}: receiver closed", e.0.id);
            }
        }

        log::info!("Resolver worker shutting down");
    })
}

/// Front-end side of the worker: submit questions, receive results
pub struct ResolverHandle {
    request_tx: Option<Sender<ResolveRequest>>,
    result_rx: Receiver<ResolveResult>,
    worker: Option<JoinHandle<()>>,
    next_id: u64,
}

impl ResolverHandle {
    pub fn spawn(resolver: Resolver) -> Self {
        let (request_tx, request_rx) = unbounded();
        let (result_tx, result_rx) = unbounded();
        let worker = spawn_resolver_worker(resolver, request_rx, result_tx);
        Self {
            request_tx: Some(request_tx),
            result_rx,
            worker: Some(worker),
            next_id: 0,
        }
    }

    /// Queue a question; returns its request id
    pub fn submit(&mut self, question: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let request = ResolveRequest {
            id,
            question: question.to_string(),
        };
        match &self.request_tx {
            Some(tx) => {
                if tx.send(request).is_err() {
                    log::error!("Resolver worker is gone; request #{} lost", id);
                }
            }
            None => log::error!("Resolver handle already shut down"),
        }
        id
    }

    pub fn results(&self) -> &Receiver<ResolveResult> {
        &self.result_rx
    }

    /// Stop accepting requests and wait for the worker to finish
    pub fn shutdown(&mut self) {
        self.request_tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Resolver worker panicked");
            }
        }
    }
}

impl Drop for ResolverHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::answers::builtin::builtin_answers;
    use crate::answers::test_support::{ENDPOINT, FakeFetcher};
    use crate::answers::types::{Outcome, ResolverConfig};

    fn resolver(fake: &FakeFetcher) -> Resolver {
        let config = ResolverConfig {
            summary_endpoint: ENDPOINT.to_string(),
            fetch_local_images: false,
            ..Default::default()
        };
        Resolver::new(&config, builtin_answers(), Box::new(fake.clone()))
    }

    #[test]
    fn test_results_come_back_in_order() {
        let fake = FakeFetcher::new().summary("otter", r#"{"extract": "Otters swim. A lot."}"#);
        let mut handle = ResolverHandle::spawn(resolver(&fake));

        let first = handle.submit("what is dog");
        let second = handle.submit("what is otter");

        let a = handle.results().recv_timeout(Duration::from_secs(5)).unwrap();
        let b = handle.results().recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!((a.id, b.id), (first, second));
        assert!(matches!(a.resolution.outcome, Outcome::LocalHit { .. }));
        assert_eq!(
            b.resolution.outcome,
            Outcome::RemoteHit {
                explanation: "Otters swim.".to_string(),
                image_url: None,
            }
        );
        assert_eq!(b.question, "what is otter");
    }

    #[test]
    fn test_worker_survives_closed_receiver() {
        let fake = FakeFetcher::new();
        let (tx, rx) = unbounded();
        let (result_tx, result_rx) = unbounded();
        let worker = spawn_resolver_worker(resolver(&fake), rx, result_tx);
        drop(result_rx);

        tx.send(ResolveRequest {
            id: 1,
            question: "what is cat".to_string(),
        })
        .unwrap();
        drop(tx);
        assert!(worker.join().is_ok());
    }

    #[test]
    fn test_shutdown_joins_worker() {
        let fake = FakeFetcher::new();
        let mut handle = ResolverHandle::spawn(resolver(&fake));
        handle.shutdown();
        assert!(handle.results().recv_timeout(Duration::from_millis(50)).is_err());
        // Submitting after shutdown is a logged no-op
        handle.submit("what is dog");
    }
}
