//! Services
//!
//! Domain logic: generation operations, gamification arithmetic, the token
//! accuracy ledger, and recursive task-tree mutation.

pub mod gamification;
pub mod planner;
pub mod task_tree;
pub mod token_tracker;

pub use planner::Planner;
