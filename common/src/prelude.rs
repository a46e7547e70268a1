use std::future::Future;
use std::time::Duration;

use tokio::time::Timeout;

/// Bounds any future by a deadline. Dropping the returned future drops the
/// inner one, which is how in-flight work gets abandoned.
pub trait FutureTimeout: Future {
	#[inline(always)]
	fn timeout(self, duration: Duration) -> Timeout<Self>
	where
		Self: Sized,
	{
		tokio::time::timeout(duration, self)
	}
}

impl<F: Future> FutureTimeout for F {}
