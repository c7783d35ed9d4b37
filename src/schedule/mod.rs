//! Daily schedule core: timeline, range/cell codec, availability precedence
//! and the per-slot occupancy/availability calculation.
//!
//! Everything in this module is pure computation over immutable snapshots;
//! fetching the snapshots is the job of `services::schedule`.

pub mod codec;
pub mod engine;
pub mod resolver;
pub mod timeline;

pub use codec::{decode, encode, DecodeMode, Decoded, RawRange};
pub use engine::{calculate, BookingSlot, EngineOutput, DEFAULT_MINUTES_PER_MASSAGIST_SLOT};
pub use resolver::resolve_for_day;
pub use timeline::Timeline;
