//! Transaction descriptors
//!
//! A descriptor names the two data buffers exchanged in one transaction
//! slot. The caller registers a table of them once at startup; the engines
//! borrow the table for their whole lifetime and never copy buffers other
//! than the defined transfer itself.

/// One transaction slot: a buffer per transfer direction, lengths fixed.
///
/// Both halves of the link must register descriptors with matching buffer
/// lengths; the wire carries no length field.
#[derive(Debug)]
pub struct TransactionDescriptor<'b> {
    /// Data flowing initiator → target. Reserved: the current protocol only
    /// transfers in the target → initiator direction.
    pub initiator_to_target: &'b mut [u8],
    /// Data flowing target → initiator. The target transmits this buffer's
    /// contents; the initiator overwrites its own copy with what it reads.
    pub target_to_initiator: &'b mut [u8],
}

impl<'b> TransactionDescriptor<'b> {
    /// Create a descriptor over caller-owned buffers.
    pub fn new(initiator_to_target: &'b mut [u8], target_to_initiator: &'b mut [u8]) -> Self {
        Self {
            initiator_to_target,
            target_to_initiator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_keeps_lengths() {
        let mut up = [0u8; 4];
        let mut down = [0u8; 7];
        let desc = TransactionDescriptor::new(&mut up, &mut down);
        assert_eq!(desc.initiator_to_target.len(), 4);
        assert_eq!(desc.target_to_initiator.len(), 7);
    }
}
