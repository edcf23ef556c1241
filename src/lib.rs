//! Core of a lane-crossing arcade game.
//!
//! Everything in this crate is presentation-free: entities only expose
//! state and the session reports what happened through the sink traits.
//! The terminal front end lives in the binary.

pub mod compute;
pub mod config;
pub mod entities;
pub mod session;
pub mod sinks;
