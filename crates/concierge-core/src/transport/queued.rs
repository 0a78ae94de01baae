//! Worker-thread transport.
//!
//! Lines are queued on an unbounded channel and executed in submission order
//! by a single worker thread that owns the server. Callbacks therefore run on
//! the worker, never on the submitting thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use super::{TRANSPORT_TARGET, Transport, TransportError};
use crate::server::Server;

const WORKER_NAME: &str = "concierge-server";

/// Transport that executes lines on a dedicated server thread.
#[derive(Debug)]
pub struct QueuedTransport {
    sender: Mutex<Option<Sender<String>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl QueuedTransport {
    /// Spawns the server worker and returns a transport feeding it.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Spawn`] if the worker thread cannot start.
    pub fn start(server: Arc<Server>) -> Result<Self, TransportError> {
        let (sender, receiver) = mpsc::channel::<String>();
        let worker = thread::Builder::new()
            .name(WORKER_NAME.to_owned())
            .spawn(move || run_worker(&server, &receiver))
            .map_err(TransportError::Spawn)?;
        debug!(target: TRANSPORT_TARGET, worker = WORKER_NAME, "server worker started");

        Ok(Self {
            sender: Mutex::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
        })
    }

    /// Closes the inbound channel and waits for queued lines to drain.
    ///
    /// Calling `shutdown` more than once is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::WorkerPanicked`] if the worker panicked.
    pub fn shutdown(&self) -> Result<(), TransportError> {
        drop(
            self.sender
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take(),
        );
        let worker = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match worker {
            Some(handle) => handle.join().map_err(|_| TransportError::WorkerPanicked),
            None => Ok(()),
        }
    }
}

impl Transport for QueuedTransport {
    fn send(&self, line: &str) -> Result<(), TransportError> {
        let guard = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        let sender = guard.as_ref().ok_or(TransportError::Closed)?;
        sender
            .send(line.to_owned())
            .map_err(|_| TransportError::Closed)
    }
}

impl Drop for QueuedTransport {
    fn drop(&mut self) {
        if let Err(error) = self.shutdown() {
            warn!(target: TRANSPORT_TARGET, %error, "server worker did not stop cleanly");
        }
    }
}

fn run_worker(server: &Server, receiver: &Receiver<String>) {
    for line in receiver {
        debug!(target: TRANSPORT_TARGET, line = %line, "server worker received line");
        server.on_input_received(&line);
    }
    debug!(target: TRANSPORT_TARGET, worker = WORKER_NAME, "server worker stopped");
}
