//! Domain primitives: VehicleId, BookingId, ConfirmationCode.

use serde::{Deserialize, Serialize};

/// Inventory identifier of a vehicle listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub String);

impl VehicleId {
    /// Create a VehicleId from a string.
    pub fn new(id: String) -> Self {
        VehicleId(id)
    }

    /// Get the id as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Globally unique booking identifier (UUID text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub String);

impl BookingId {
    pub fn new(id: String) -> Self {
        BookingId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short human-readable confirmation code (e.g. "K7Q2M9XA").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfirmationCode(pub String);

impl ConfirmationCode {
    pub fn new(code: String) -> Self {
        ConfirmationCode(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConfirmationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_id_display() {
        let id = VehicleId::new("suv-001".to_string());
        assert_eq!(id.to_string(), "suv-001");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = BookingId::new("b-1".to_string());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"b-1\"");

        let code: ConfirmationCode = serde_json::from_str("\"ABCD1234\"").unwrap();
        assert_eq!(code.as_str(), "ABCD1234");
    }

    #[test]
    fn test_vehicle_id_ordering() {
        let a = VehicleId::new("a".to_string());
        let b = VehicleId::new("b".to_string());
        assert!(a < b);
    }
}
