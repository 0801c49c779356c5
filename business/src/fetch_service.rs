use std::fmt::Debug;

use ehttp::{Request, Response, Result};

/// Completion callback for [`FetchService::fetch`].
pub type OnDone = Box<dyn FnOnce(Result<Response>) + Send + 'static>;

/// The HTTP capability used by commands.
///
/// `on_done` may run on another thread (native) or later on the JS event loop
/// (web); it must only talk to the UI through an `Updater`.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: OnDone);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: OnDone) {
        ehttp::fetch(request, on_done);
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::{DeferredFetcher, MockFetcher, mock_response};

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use ehttp::{Request, Response, Result};

    use super::{FetchService, OnDone};

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Builds a response the way `ehttp` reports it.
    pub fn mock_response(url: &str, status: u16, bytes: Vec<u8>) -> Response {
        Response {
            url: url.to_owned(),
            ok: (200..300).contains(&status),
            status,
            status_text: String::new(),
            headers: Default::default(),
            bytes,
        }
    }

    /// Answers every request immediately with a fixed result.
    #[derive(Debug, Default)]
    pub struct MockFetcher {
        response: Option<Result<Response>>,
        requested: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        pub fn new(response: Result<Response>) -> Self {
            Self {
                response: Some(response),
                requested: Mutex::default(),
            }
        }

        /// URLs requested so far, oldest first.
        pub fn requested_urls(&self) -> Vec<String> {
            lock(&self.requested).clone()
        }
    }

    impl FetchService for MockFetcher {
        fn fetch(&self, request: Request, on_done: OnDone) {
            lock(&self.requested).push(request.url);
            match &self.response {
                Some(response) => on_done(response.clone()),
                None => on_done(Err("MockFetcher: no response set".to_owned())),
            }
        }
    }

    /// Holds requests open until the test resolves them.
    #[derive(Debug, Default)]
    pub struct DeferredFetcher {
        pending: Mutex<Vec<(String, PendingCallback)>>,
        requested: Mutex<usize>,
    }

    struct PendingCallback(OnDone);

    impl std::fmt::Debug for PendingCallback {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("PendingCallback")
        }
    }

    impl DeferredFetcher {
        pub fn pending(&self) -> usize {
            lock(&self.pending).len()
        }

        /// Total number of requests ever started.
        pub fn requested(&self) -> usize {
            *lock(&self.requested)
        }

        /// Completes the oldest open request. Returns false if none was open.
        pub fn resolve_oldest(&self, result: Result<Response>) -> bool {
            let next = {
                let mut pending = lock(&self.pending);
                if pending.is_empty() {
                    None
                } else {
                    Some(pending.remove(0))
                }
            };
            match next {
                Some((_, PendingCallback(on_done))) => {
                    on_done(result);
                    true
                }
                None => false,
            }
        }

        /// Completes the newest open request. Returns false if none was open.
        pub fn resolve_newest(&self, result: Result<Response>) -> bool {
            let next = lock(&self.pending).pop();
            match next {
                Some((_, PendingCallback(on_done))) => {
                    on_done(result);
                    true
                }
                None => false,
            }
        }
    }

    impl FetchService for DeferredFetcher {
        fn fetch(&self, request: Request, on_done: OnDone) {
            *lock(&self.requested) += 1;
            lock(&self.pending).push((request.url, PendingCallback(on_done)));
        }
    }
}
