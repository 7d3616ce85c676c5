//! In-memory account ledger with per-kind transaction fees.
//!
//! Accounts are Savings, Checking or Business; each kind takes a different
//! percentage of every withdrawal and outgoing transfer. Instructions arrive as
//! text, one per line, and every instruction produces one report line.

pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod logging;
pub mod parser;
pub mod writer;
