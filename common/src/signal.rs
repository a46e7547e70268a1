use std::io;

use futures::future::select_all;
use tokio::signal::unix::{Signal, SignalKind};

/// Waits on any number of unix signals at once.
#[derive(Default)]
pub struct SignalHandler {
	signals: Vec<(SignalKind, Signal)>,
}

impl SignalHandler {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_signal(mut self, kind: SignalKind) -> io::Result<Self> {
		let signal = tokio::signal::unix::signal(kind)?;
		self.signals.push((kind, signal));
		Ok(self)
	}

	/// Resolves with the kind of the next signal received. Never resolves when
	/// no signal has been registered.
	pub async fn recv(&mut self) -> SignalKind {
		if self.signals.is_empty() {
			return std::future::pending().await;
		}

		let pending = self.signals.iter_mut().map(|(kind, signal)| {
			let kind = *kind;
			Box::pin(async move {
				signal.recv().await;
				kind
			})
		});

		let (kind, _, _) = select_all(pending).await;
		kind
	}
}
