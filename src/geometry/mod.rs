pub mod ring;

pub use ring::{OffsetSegment, Ring};
