//! # chaos-tests
//!
//! Chaos scenario tests for LocalNet.
//!
//! Unlike a production chaos rig, nothing here needs Docker or an external
//! fault injector: the relay under test *is* the fault injector. The harness
//! boots each service on an ephemeral localhost port inside the test process
//! and drives it over real HTTP, so every scenario exercises the full
//! middleware stack, not just the routers.
//!
//! Scenarios are grouped by the property they pin down:
//! - fault injection (failure rate 0.0 and 1.0, bypass list)
//! - latency injection
//! - payload corruption and its boundary
//! - store consistency (counts, filters, counted clears)
//! - log ring retention
//! - seeded determinism
//! - the aggregate dashboard view of a small topology

#![warn(missing_docs)]
#![warn(clippy::all)]


pub mod scenarios;
