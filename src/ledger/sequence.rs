use thiserror::Error;

/// Every value of the sequence has been handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sequence exhausted")]
pub struct SequenceExhausted;

/// A monotonically increasing identifier generator, starting at 1.
///
/// Every account number (and customer id) comes from a `Sequence` owned by
/// whoever creates the entities, usually a `Bank`. Two sequences never share
/// state, so tests can start from a fresh one.
///
/// Values are never reused: once `u32::MAX` has been handed out, `next` fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    next: Option<u32>,
}

impl Sequence {
    pub const FIRST: u32 = 1;

    pub const fn new() -> Self {
        Self::starting_at(Self::FIRST)
    }

    pub const fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }

    /// Hand out the current value and advance.
    pub fn next(&mut self) -> Result<u32, SequenceExhausted> {
        let value = self.next.ok_or(SequenceExhausted)?;
        self.next = value.checked_add(1);
        Ok(value)
    }

    /// The value the next call to `next` will return, if any.
    pub fn peek(&self) -> Option<u32> {
        self.next
    }

    pub fn reset(&mut self) {
        self.next = Some(Self::FIRST);
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}
