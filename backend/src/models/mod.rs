//! Domain types shared by the codec, the store adapter and the HTTP edge.

pub mod score;
pub mod time;

pub use score::*;
pub use time::*;
