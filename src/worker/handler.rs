//! Background fetch worker thread.
//!
//! All network I/O runs on a single worker thread so the event loop never
//! blocks on the API. Requests arrive over an mpsc channel, each one maps to
//! exactly one response, and the thread exits when either channel closes.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use crate::api::CountryApi;
use crate::worker::{WorkerRequest, WorkerResponse};

/// Handle to the spawned fetch worker.
///
/// Dropping the handle closes the request channel, which terminates the
/// worker thread after any in-flight request completes.
pub struct FetchWorker {
    requests: Sender<WorkerRequest>,
    responses: Receiver<WorkerResponse>,
    handle: Option<JoinHandle<()>>,
}

impl FetchWorker {
    /// Spawns the worker thread around an API client.
    #[must_use]
    pub fn spawn(api: CountryApi) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<WorkerRequest>();
        let (response_tx, response_rx) = mpsc::channel::<WorkerResponse>();

        let handle = std::thread::spawn(move || run(&api, &request_rx, &response_tx));

        Self {
            requests: request_tx,
            responses: response_rx,
            handle: Some(handle),
        }
    }

    /// Posts a request to the worker.
    ///
    /// A disconnected worker is logged and ignored; the UI then simply never
    /// receives the corresponding response, which renders as an empty list.
    pub fn post(&self, request: WorkerRequest) {
        if let Err(e) = self.requests.send(request) {
            tracing::error!(error = %e, "fetch worker unavailable");
        }
    }

    /// Drains any responses that have arrived, without blocking.
    pub fn drain_responses(&self) -> Vec<WorkerResponse> {
        self.responses.try_iter().collect()
    }
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        // Explicitly drop the sender so the worker loop sees the disconnect
        // even while we still hold the join handle.
        let (closed, _) = mpsc::channel::<WorkerRequest>();
        self.requests = closed;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Worker loop: one response per request, in order.
fn run(api: &CountryApi, requests: &Receiver<WorkerRequest>, responses: &Sender<WorkerResponse>) {
    tracing::debug!("fetch worker started");

    while let Ok(request) = requests.recv() {
        let _span = tracing::debug_span!("worker_request", request = ?request).entered();

        let response = match request {
            WorkerRequest::FetchAllCountries { generation } => {
                let countries = api.fetch_all_countries();
                WorkerResponse::CountriesLoaded {
                    countries,
                    generation,
                }
            }
            WorkerRequest::FetchCountryDetails { code, generation } => {
                let detail = api.fetch_country_details(&code).map(Box::new);
                WorkerResponse::DetailLoaded {
                    code,
                    detail,
                    generation,
                }
            }
        };

        if responses.send(response).is_err() {
            tracing::debug!("response channel closed, stopping worker");
            break;
        }
    }

    tracing::debug!("fetch worker stopped");
}
