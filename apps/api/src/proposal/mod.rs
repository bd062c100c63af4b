// Proposal generation: request model, canned templates, synthesis and backends.
// Handlers and sessions go through `ProposalBackend`, never `synthesize` directly.

pub mod backend;
pub mod handlers;
pub mod models;
pub mod synthesizer;
pub mod templates;
