use futures_util::pin_mut;
use tokio_stream::{Stream, StreamExt};
use tracing::debug;

use crate::stream::TimedValueStream;

/// Drains `stream` into a vector, keeping production order.
pub async fn collect_values<S>(stream: S) -> Vec<f64>
where
    S: Stream<Item = f64>,
{
    pin_mut!(stream);

    let (lower, _) = stream.size_hint();
    let mut values = Vec::with_capacity(lower);
    while let Some(value) = stream.next().await {
        values.push(value);
    }
    debug!(count = values.len(), "collected values");
    values
}

/// Runs one fresh `TimedValueStream` to completion.
pub async fn async_comprehension() -> Vec<f64> {
    collect_values(TimedValueStream::new()).await
}
