// Per-client sessions: generation state machine plus account context, kept in memory.

pub mod generation;
pub mod handlers;
pub mod store;
