//! Transaction status reporting

/// Result of one initiator-driven transaction.
///
/// These are ordinary status values, not faults: `NoResponse` means the
/// partner half is absent or not listening (link down), `DataError` means
/// the checksum did not survive the wire (transient corruption). Neither
/// triggers a retry inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Full byte exchange with a matching checksum
    Completed,
    /// The target never pulled the line low during the presence probe
    NoResponse,
    /// Checksum mismatch after a full byte exchange
    DataError,
}

impl Outcome {
    /// Numeric status code: 0 = completed, 1 = no response, 2 = data error.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Completed => 0,
            Outcome::NoResponse => 1,
            Outcome::DataError => 2,
        }
    }

    /// Check if the transaction completed with valid data.
    pub fn is_completed(self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Outcome::Completed.code(), 0);
        assert_eq!(Outcome::NoResponse.code(), 1);
        assert_eq!(Outcome::DataError.code(), 2);
    }
}
