//! Propflow Codec - Encode/decode between editor rules and persisted filters
//!
//! `encode` turns the ordered rule list of a condition editor into the
//! persisted filter expression; `decode` re-populates an editor from a
//! previously persisted expression. Both are pure, total functions:
//! malformed or incomplete input is skipped, never raised.
//!
//! `encode(decode(e)) == e` holds for every expression `e` that `encode`
//! itself produced. The reverse direction is lossy only when a model
//! carries two rules on the same field: the persisted form is keyed by
//! field and the later rule wins.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;
