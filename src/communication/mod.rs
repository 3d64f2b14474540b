//! Host communication protocols
//!
//! - `keyglove`: KGAPI motion event packets (encoding, override hooks, emission)

pub mod keyglove;
