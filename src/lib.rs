pub mod channel;
pub mod comprehension;
pub mod error;
pub mod logging;
pub mod stream;

pub use comprehension::{async_comprehension, collect_values};
pub use error::Error;
pub use stream::TimedValueStream;
