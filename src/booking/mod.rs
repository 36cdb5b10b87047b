//! Booking collaborators: identifier issuance and placeholder dealership slots.

pub mod slots;
pub mod tokens;

pub use slots::{placeholder_slots, DealershipAvailability};
pub use tokens::{FixedTokenIssuer, TokenIssuer, UuidTokenIssuer};
