//! Booking identifier and confirmation code issuance.

use crate::domain::{BookingId, ConfirmationCode};
use std::fmt;
use uuid::Uuid;

/// Length of a confirmation code.
pub const CONFIRMATION_CODE_LEN: usize = 8;

const CONFIRMATION_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Issues identifiers for new bookings.
pub trait TokenIssuer: Send + Sync + fmt::Debug {
    /// A globally unique booking identifier.
    fn booking_id(&self) -> BookingId;

    /// A short code customers can read back over the phone.
    fn confirmation_code(&self) -> ConfirmationCode;
}

/// Random identifiers backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokenIssuer;

impl TokenIssuer for UuidTokenIssuer {
    fn booking_id(&self) -> BookingId {
        BookingId::new(Uuid::new_v4().to_string())
    }

    fn confirmation_code(&self) -> ConfirmationCode {
        // Only the low ~41 bits are consumed; those bytes of a v4 UUID are fully random.
        let mut bits = Uuid::new_v4().as_u128() as u64;
        let radix = CONFIRMATION_ALPHABET.len() as u64;
        let code = (0..CONFIRMATION_CODE_LEN)
            .map(|_| {
                let c = CONFIRMATION_ALPHABET[(bits % radix) as usize] as char;
                bits /= radix;
                c
            })
            .collect();
        ConfirmationCode::new(code)
    }
}

/// Issuer returning the same identifiers every time, for tests.
#[derive(Debug, Clone)]
pub struct FixedTokenIssuer {
    booking_id: String,
    confirmation_code: String,
}

impl FixedTokenIssuer {
    pub fn new(booking_id: impl Into<String>, confirmation_code: impl Into<String>) -> Self {
        Self {
            booking_id: booking_id.into(),
            confirmation_code: confirmation_code.into(),
        }
    }
}

impl TokenIssuer for FixedTokenIssuer {
    fn booking_id(&self) -> BookingId {
        BookingId::new(self.booking_id.clone())
    }

    fn confirmation_code(&self) -> ConfirmationCode {
        ConfirmationCode::new(self.confirmation_code.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_booking_id_is_uuid() {
        let id = UuidTokenIssuer.booking_id();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_booking_ids_are_unique() {
        let ids: HashSet<String> = (0..100)
            .map(|_| UuidTokenIssuer.booking_id().0)
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_confirmation_code_shape() {
        for _ in 0..50 {
            let code = UuidTokenIssuer.confirmation_code();
            assert_eq!(code.as_str().len(), CONFIRMATION_CODE_LEN);
            assert!(code
                .as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_fixed_issuer() {
        let issuer = FixedTokenIssuer::new("booking-1", "ABCD1234");
        assert_eq!(issuer.booking_id().as_str(), "booking-1");
        assert_eq!(issuer.confirmation_code().as_str(), "ABCD1234");
    }
}
