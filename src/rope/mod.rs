mod chunks;
mod node;
mod rope;

pub(crate) use self::node::Node;

pub use self::chunks::Chunks;
pub use self::rope::{Rope, DEFAULT_LEAF_LEN};
