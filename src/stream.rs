//! Finite stream of random values, each one preceded by a pause.
use std::{
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use async_stream::stream;
use futures_util::stream::{FusedStream, Stream};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::time::sleep;
use tracing::{debug, trace};

pub const PRODUCTIONS: usize = 10;
pub const PAUSE: Duration = Duration::from_secs(1);
pub const LOWER: f64 = 0.0;
pub const UPPER: f64 = 10.0;

/// Draws one value uniformly from `[LOWER, UPPER)`.
pub fn sample_value<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(LOWER..UPPER)
}

/// Yields `PRODUCTIONS` values, sleeping `PAUSE` before each one.
///
/// A stream is good for a single traversal: once it has returned `None`
/// it keeps returning `None`.
pub struct TimedValueStream {
    inner: Pin<Box<dyn Stream<Item = f64> + Send>>,
    remaining: usize,
}

impl TimedValueStream {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng<R>(mut rng: R) -> Self
    where
        R: Rng + Send + 'static,
    {
        let inner = stream! {
            for n in 0..PRODUCTIONS {
                sleep(PAUSE).await;
                let value = sample_value(&mut rng);
                trace!(n, value, "produced value");
                yield value;
            }
        };
        Self {
            inner: Box::pin(inner),
            remaining: PRODUCTIONS,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Default for TimedValueStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Stream for TimedValueStream {
    type Item = f64;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<f64>> {
        if self.remaining == 0 {
            return Poll::Ready(None);
        }
        match self.inner.as_mut().poll_next(cx) {
            Poll::Ready(Some(value)) => {
                self.remaining -= 1;
                if self.remaining == 0 {
                    debug!("stream exhausted");
                }
                Poll::Ready(Some(value))
            }
            Poll::Ready(None) => {
                self.remaining = 0;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedStream for TimedValueStream {
    fn is_terminated(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;
    use tokio_stream::StreamExt;

    #[test]
    fn sample_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            let v = sample_value(&mut rng);
            assert!((LOWER..UPPER).contains(&v), "{v} out of range");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn each_value_waits_one_pause() {
        let mut stream = TimedValueStream::new();
        let mut last = Instant::now();
        while stream.next().await.is_some() {
            let now = Instant::now();
            assert!(now - last >= PAUSE);
            assert!(now - last < PAUSE + Duration::from_millis(100));
            last = now;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_stream_stays_done() {
        let mut stream = TimedValueStream::new();
        assert_eq!(stream.size_hint(), (PRODUCTIONS, Some(PRODUCTIONS)));

        let mut count = 0;
        while let Some(v) = stream.next().await {
            assert!((LOWER..UPPER).contains(&v));
            count += 1;
            assert_eq!(stream.remaining(), PRODUCTIONS - count);
        }
        assert_eq!(count, PRODUCTIONS);
        assert!(stream.is_terminated());
        assert_eq!(stream.next().await, None);
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_produced_before_first_pause() {
        let mut stream = TimedValueStream::new();
        let first = tokio::time::timeout(PAUSE / 2, stream.next()).await;
        assert!(first.is_err());
        assert_eq!(stream.remaining(), PRODUCTIONS);
    }
}
