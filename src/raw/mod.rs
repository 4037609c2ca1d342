mod arena;
mod balance;
mod handle;
mod node;
mod raw_avl_tree;

pub(crate) use handle::NodeId;
pub(crate) use node::Node;
pub(crate) use raw_avl_tree::RawAvlTree;
