use rand::{rngs::StdRng, SeedableRng};
use timed_values::{
    async_comprehension, channel::spawn_values, collect_values, logging::init_logging, Error,
};
use tokio::time::Instant;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging("info")?;

    let start = Instant::now();
    let t1 = tokio::spawn(async_comprehension());
    let t2 = tokio::spawn(async_comprehension());
    let t3 = tokio::spawn(collect_values(spawn_values(StdRng::from_entropy())));

    let (first, second, channelled) = tokio::join!(t1, t2, t3);
    let (first, second, channelled) = (first?, second?, channelled?);

    info!(values = ?first, "first comprehension");
    info!(values = ?second, "second comprehension");
    info!(values = ?channelled, "channel comprehension");
    info!(elapsed = ?start.elapsed(), "all traversals done");
    Ok(())
}
