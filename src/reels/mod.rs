pub mod fetcher;
pub mod handler;
pub mod output;
pub mod render;
pub mod result;

pub use fetcher::{FetchError, ReelFetcher};
pub use handler::{Invocation, MoodReelHandler};
pub use output::{MemoryOutput, OutputArea};
pub use render::render;
pub use result::ReelResult;
