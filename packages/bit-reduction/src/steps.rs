use std::{fmt, iter::FusedIterator};

use crate::{bit_string::BitString, counter::count_bits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Subtract one from an odd value.
    Decrement,
    /// Divide an even value by two.
    Halve,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Decrement => f.write_str("decrement"),
            Operation::Halve => f.write_str("halve"),
        }
    }
}

/// Replays the reduction one operation at a time on the bits themselves.
#[derive(Debug, Clone)]
pub struct ReductionSteps {
    // significant bits, most significant first; empty once the value is zero
    bits: Vec<bool>,
    remaining: usize,
}

impl ReductionSteps {
    pub fn new(bits: &BitString) -> Self {
        Self {
            bits: bits.significant_bits().collect(),
            remaining: count_bits(bits).0 as usize,
        }
    }
}

impl Iterator for ReductionSteps {
    type Item = Operation;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.bits.len();
        let lowest = self.bits.last_mut()?;

        let operation = if *lowest {
            if len == 1 {
                self.bits.clear();
            } else {
                *lowest = false;
            }
            Operation::Decrement
        } else {
            self.bits.pop();
            Operation::Halve
        };

        self.remaining -= 1;
        Some(operation)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ReductionSteps {}

impl FusedIterator for ReductionSteps {}
