use std::fmt;

use log::{debug, trace};

use crate::{bit_string::BitString, error::InvalidInputError};

/// Number of halve/decrement operations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperationCount(pub u64);

impl From<OperationCount> for u64 {
    fn from(count: OperationCount) -> Self {
        count.0
    }
}

impl fmt::Display for OperationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hooks into a count as it runs. Both methods default to doing nothing.
pub trait ReductionObserver {
    /// Called once the leading one is found, with its index and the initial count.
    fn on_leading_bit(&mut self, _index: usize, _count: OperationCount) {}

    /// Called after the bit at `index` has been folded into the running count.
    fn on_bit(&mut self, _index: usize, _bit: bool, _count: OperationCount) {}
}

impl ReductionObserver for () {}

impl<T: ReductionObserver + ?Sized> ReductionObserver for &mut T {
    fn on_leading_bit(&mut self, index: usize, count: OperationCount) {
        (**self).on_leading_bit(index, count)
    }

    fn on_bit(&mut self, index: usize, bit: bool, count: OperationCount) {
        (**self).on_bit(index, bit, count)
    }
}

/// Forwards the hooks to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ReductionObserver for LogObserver {
    fn on_leading_bit(&mut self, index: usize, count: OperationCount) {
        debug!("leading one at index {index}, count={count}");
    }

    fn on_bit(&mut self, index: usize, bit: bool, count: OperationCount) {
        trace!("bit {index}={}, count={count}", u8::from(bit));
    }
}

/// Returns the number of operations needed to reduce `bits` to zero, where an
/// odd value is decremented and an even value is halved.
///
/// # Errors
/// - `Empty` if `bits` is empty.
/// - `InvalidCharacter` if `bits` holds anything but `'0'` and `'1'`.
/// - `NoSetBit` if every bit is `'0'`.
pub fn count(bits: &str) -> Result<OperationCount, InvalidInputError> {
    count_with_observer(bits, ())
}

/// Same as [`count`], reporting progress to `observer`.
pub fn count_with_observer(
    bits: &str,
    observer: impl ReductionObserver,
) -> Result<OperationCount, InvalidInputError> {
    let bits = BitString::parse(bits)?;
    Ok(count_bits_with_observer(&bits, observer))
}

pub fn count_bits(bits: &BitString) -> OperationCount {
    count_bits_with_observer(bits, ())
}

pub fn count_bits_with_observer(
    bits: &BitString,
    mut observer: impl ReductionObserver,
) -> OperationCount {
    let leading_one = bits.leading_one();

    // the leading one costs a single decrement
    let mut count = OperationCount(1);
    observer.on_leading_bit(leading_one, count);

    // every lower bit costs a halving, set bits also cost a decrement
    for (offset, bit) in bits.significant_bits().enumerate().skip(1) {
        count.0 += if bit { 2 } else { 1 };
        observer.on_bit(leading_one + offset, bit, count);
    }

    count
}
