//! Data model types exchanged with the quote provider.
//!
//! - `quote` — `/quote` payloads and provider error bodies.
pub mod quote;
