//! An index-addressed doubly-linked list with pool-owned nodes.
pub mod list;

pub use genpool::PoolPtr;

pub use crate::list::ChainList;
