//! Model adapters and artifact loading
//!
//! The models are fitted offline; this crate only deserializes their
//! parameters and evaluates them. Nothing here mutates after load.

pub mod bundle;
pub mod linear;
pub mod scaler;
