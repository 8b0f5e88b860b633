// Library surface for headless/integration tests and reuse.
pub mod corpus;
pub mod events;
pub mod limit;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod ui;

/// Poll interval for the main loop when no input arrives.
pub const TICK_RATE_MS: u64 = 250;
