//! # hero-server
//!
//! In-memory mock REST data store for Tour of Heroes.
//!
//! Serves the hero endpoints under `/api/heroes` from a shared
//! [`HeroTable`] using `tiny_http`. Each request is handled on its own
//! thread, so a configured latency lets slow responses overlap the way a
//! real remote store would.
//!
//! ```no_run
//! use hero_core::table::HeroTable;
//! use hero_server::{MockServer, ServerOptions};
//!
//! let server = MockServer::start("127.0.0.1:0", HeroTable::seeded().into_shared(), ServerOptions::default())
//!     .expect("bind");
//! println!("data store at {}", server.base_url());
//! server.wait().expect("serve");
//! ```

mod error;
pub mod routes;

pub use error::ServerError;

use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use hero_core::table::{HeroTable, SharedHeroTable};
use routes::{Reply, Verb};

/// Behaviour knobs for the mock store.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerOptions {
    /// Delay applied before every response.
    pub latency: Duration,
}

/// A running mock data store.
pub struct MockServer {
    server: Arc<tiny_http::Server>,
    addr: SocketAddr,
    table: SharedHeroTable,
    worker: Option<JoinHandle<()>>,
}

impl MockServer {
    /// Bind `addr` and start serving on a background thread.
    ///
    /// Use port `0` to let the OS pick a free port; [`Self::addr`] reports
    /// the one chosen.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the address cannot be bound.
    pub fn start(
        addr: &str,
        table: SharedHeroTable,
        options: ServerOptions,
    ) -> Result<Self, ServerError> {
        let server = tiny_http::Server::http(addr).map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;
        let bound = server
            .server_addr()
            .to_ip()
            .ok_or_else(|| ServerError::NoAddress(addr.to_string()))?;
        let server = Arc::new(server);

        let worker = {
            let server = Arc::clone(&server);
            let table = Arc::clone(&table);
            std::thread::spawn(move || accept_loop(&server, &table, options))
        };

        tracing::info!(%bound, latency = ?options.latency, "mock hero store listening");
        Ok(Self {
            server,
            addr: bound,
            table,
            worker: Some(worker),
        })
    }

    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL clients should be pointed at (the `/heroes` suffix excluded).
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// The table backing this server.
    #[must_use]
    pub fn table(&self) -> SharedHeroTable {
        Arc::clone(&self.table)
    }

    /// Snapshot of the current table contents.
    #[must_use]
    pub fn snapshot(&self) -> HeroTable {
        self.table
            .lock()
            .map_or_else(|poisoned| poisoned.into_inner().clone(), |table| table.clone())
    }

    /// Block the calling thread until the server stops.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::WorkerPanicked`] if the accept loop panicked.
    pub fn wait(mut self) -> Result<(), ServerError> {
        match self.worker.take() {
            Some(worker) => worker.join().map_err(|_| ServerError::WorkerPanicked),
            None => Ok(()),
        }
    }

    /// Stop accepting requests and join the accept loop.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn accept_loop(server: &tiny_http::Server, table: &SharedHeroTable, options: ServerOptions) {
    for request in server.incoming_requests() {
        let table = Arc::clone(table);
        std::thread::spawn(move || respond(request, &table, options));
    }
    tracing::debug!("mock hero store stopped");
}

fn respond(mut request: tiny_http::Request, table: &SharedHeroTable, options: ServerOptions) {
    let verb = match request.method() {
        tiny_http::Method::Get => Verb::Get,
        tiny_http::Method::Post => Verb::Post,
        tiny_http::Method::Put => Verb::Put,
        tiny_http::Method::Delete => Verb::Delete,
        _ => Verb::Other,
    };
    let url = request.url().to_string();

    let mut body = String::new();
    let reply = if let Err(error) = request.as_reader().read_to_string(&mut body) {
        Reply {
            status: 400,
            body: Some(serde_json::json!({ "error": format!("unreadable body: {error}") })),
        }
    } else {
        if !options.latency.is_zero() {
            std::thread::sleep(options.latency);
        }
        routes::handle(table, verb, &url, &body)
    };

    tracing::debug!(method = %request.method(), %url, status = reply.status, "handled request");

    let payload = reply
        .body
        .as_ref()
        .map(serde_json::Value::to_string)
        .unwrap_or_default();
    let mut response = tiny_http::Response::from_string(payload).with_status_code(reply.status);
    if reply.body.is_some()
        && let Ok(header) = "Content-Type: application/json".parse::<tiny_http::Header>()
    {
        response = response.with_header(header);
    }
    if let Err(error) = request.respond(response) {
        tracing::warn!(%error, %url, "failed to write response");
    }
}
