//! Button press patterns for the simulated board.

use sketchbook::Level;

use crate::{Error, Result};

/// Parse a pattern of `P` (pressed) and `R` (released) samples, one per poll.
///
/// The button is active-low, so `P` becomes [`Level::Low`].
pub fn parse(pattern: &str) -> Result<Vec<Level>> {
    if pattern.is_empty() {
        return Err(Error::EmptyPattern);
    }

    pattern
        .chars()
        .enumerate()
        .map(|(pos, ch)| match ch.to_ascii_uppercase() {
            'P' => Ok(Level::Low),
            'R' => Ok(Level::High),
            _ => Err(Error::InvalidPattern { ch, pos }),
        })
        .collect()
}
