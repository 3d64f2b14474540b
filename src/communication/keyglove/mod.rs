//! KGAPI motion events
//!
//! The Keyglove host API frames every packet as `[type, length, class, id, payload...]`.
//! This module produces the two motion-class events raised by the hand sensor:
//!
//! - `motion_mode`: `[sensor, mode]` when acquisition is enabled or disabled
//! - `motion_data`: `[sensor, flags, len, ax, ay, az, gx, gy, gz]` per sample,
//!   each axis little-endian `i16`
//!
//! Every event first goes through the application's override hook; a hook that
//! returns `true` suppresses the default transport for that event only.
//!
//! # Module Layout
//!
//! ```text
//! keyglove/
//! ├── packet.rs    - Identifiers, header, payload encoding
//! ├── hooks.rs     - Override hook trait and implementations
//! ├── transport.rs - Packet transport collaborator trait
//! ├── emitter.rs   - Override-then-transport dispatch
//! └── mock.rs      - Recording transport for tests
//! ```

pub mod emitter;
pub mod hooks;
pub mod packet;
pub mod transport;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use emitter::{emit_motion_data, emit_motion_mode};
pub use hooks::{FnOverride, MotionEventOverride, NoOverride};
pub use packet::{PacketClass, PacketHeader, PacketId, PacketType};
pub use transport::PacketTransport;
