//! lightread-session — caller-owned state around the pure core.
//!
//! Member bookkeeping, JSON persistence of the book with its reading
//! progress, and the completion handoff. Everything the core treats as "the
//! external collaborator" lives here.

pub mod completion;
pub mod member;
pub mod state;
