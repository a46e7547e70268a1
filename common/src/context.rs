use std::sync::Arc;

use tokio::sync::{mpsc, watch};

struct Inner {
	// Never sent on. The handler sees the channel close once every context is gone.
	_alive: mpsc::Sender<()>,
	cancel: watch::Receiver<bool>,
}

/// A cloneable cancellation token. Work that must finish before shutdown
/// completes holds a clone; the paired [`Handler`] decides when to cancel and
/// waits for every clone to be dropped.
#[derive(Clone)]
pub struct Context(Arc<Inner>);

pub struct Handler {
	alive: mpsc::Receiver<()>,
	cancel: watch::Sender<bool>,
}

impl Context {
	#[must_use]
	pub fn new() -> (Self, Handler) {
		let (alive_send, alive_recv) = mpsc::channel(1);
		let (cancel_send, cancel_recv) = watch::channel(false);

		(
			Self(Arc::new(Inner {
				_alive: alive_send,
				cancel: cancel_recv,
			})),
			Handler {
				alive: alive_recv,
				cancel: cancel_send,
			},
		)
	}

	/// Resolves once the handler cancels or is dropped.
	pub async fn done(&self) {
		let mut cancel = self.0.cancel.clone();
		loop {
			if *cancel.borrow_and_update() {
				return;
			}

			if cancel.changed().await.is_err() {
				return;
			}
		}
	}
}

impl Handler {
	/// Waits for every context clone to be dropped without cancelling them.
	pub async fn done(&mut self) {
		while self.alive.recv().await.is_some() {}
	}

	/// Cancels all contexts and waits for every clone to be dropped.
	pub async fn cancel(mut self) {
		self.cancel.send_replace(true);
		self.done().await;
	}
}
