//! A rope: text stored as a weight-balanced binary tree of fragments, so that
//! indexing, splitting, concatenation, insertion and deletion avoid copying
//! the whole string.
//!
//! ```
//! use text_rope::Rope;
//!
//! let mut rope = Rope::new("ABC");
//! rope.insert(1, Rope::new("XYZ"))?;
//! assert_eq!(rope.to_string(), "AXYZBC");
//!
//! rope.delete(1..4)?;
//! assert_eq!(rope.report(0..2)?, "AB");
//! # Ok::<(), text_rope::RopeError>(())
//! ```

mod error;
pub mod rope;
pub mod util;

pub use self::error::{Result, RopeError};
pub use self::rope::{Chunks, Rope, DEFAULT_LEAF_LEN};
