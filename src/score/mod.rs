mod index;
mod record;

pub use index::ScoreIndex;
pub use record::{ColorKey, ColorSet, ScoreRecord};
