//! Task-backed producer: a spawned task does the pausing and hands
//! values over an mpsc channel.
use rand::Rng;
use tokio::{sync::mpsc, time::sleep};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, trace};

use crate::stream::{sample_value, PAUSE, PRODUCTIONS};

/// Must be called from within a tokio runtime.
pub fn spawn_values<R>(mut rng: R) -> ReceiverStream<f64>
where
    R: Rng + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);

    tokio::spawn(async move {
        for n in 0..PRODUCTIONS {
            sleep(PAUSE).await;
            let value = sample_value(&mut rng);
            trace!(n, value, "sending value");
            if tx.send(value).await.is_err() {
                debug!(n, "receiver dropped, producer stopping");
                return;
            }
        }
    });

    ReceiverStream::new(rx)
}
