//! Turning serial bytes into stamped text lines.

use chrono::NaiveTime;

/// `[HH:MM:SS.mmm] line`
pub fn stamp(time: NaiveTime, line: &str) -> String {
    format!("[{}] {}", time.format("%H:%M:%S%.3f"), line)
}

/// Reassembles lines from reads that split them at arbitrary points.
#[derive(Default)]
pub struct LineAssembler {
    partial: Vec<u8>,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of received bytes; returns every line it completed.
    ///
    /// Lines end at `\n`. Invalid UTF-8 is replaced, and surrounding
    /// whitespace (including the `\r` of `\r\n`) is trimmed.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();

        for &b in bytes {
            if b == b'\n' {
                lines.push(String::from_utf8_lossy(&self.partial).trim().to_owned());
                self.partial.clear();
            } else {
                self.partial.push(b);
            }
        }

        lines
    }

    /// Bytes received since the last line break.
    pub fn pending(&self) -> &[u8] {
        &self.partial
    }

    /// Hand out whatever arrived without a line break as a line of its own,
    /// decoded and trimmed like [`push`](Self::push) does. `None` if nothing
    /// is pending.
    pub fn take_pending(&mut self) -> Option<String> {
        if self.partial.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.partial).trim().to_owned();
        self.partial.clear();
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stamp_has_millisecond_precision() {
        let t = NaiveTime::from_hms_milli_opt(9, 5, 3, 7).unwrap();
        assert_eq!(stamp(t, "LED: ON"), "[09:05:03.007] LED: ON");
    }

    #[test]
    fn lines_split_across_reads() {
        let mut asm = LineAssembler::new();
        assert!(asm.push(b"LED: O").is_empty());
        assert_eq!(asm.push(b"N\r\nLED: OFF\r\nBut"), vec!["LED: ON", "LED: OFF"]);
        assert_eq!(asm.pending(), b"But");
        assert_eq!(asm.push(b"ton pressed - LED ON\r\n"), vec!["Button pressed - LED ON"]);
        assert!(asm.pending().is_empty());
    }

    #[test]
    fn unterminated_text_can_be_taken() {
        let mut asm = LineAssembler::new();
        assert_eq!(asm.take_pending(), None);
        assert!(asm.push(b"Temp: 21 \r").is_empty());
        assert_eq!(asm.take_pending().as_deref(), Some("Temp: 21"));
        assert!(asm.pending().is_empty());
        assert_eq!(asm.push(b"C\n"), vec!["C"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut asm = LineAssembler::new();
        assert_eq!(asm.push(b"ab\xffcd\n"), vec!["ab\u{fffd}cd"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        let mut asm = LineAssembler::new();
        assert_eq!(asm.push(b"\r\n  \n"), vec!["", ""]);
    }
}
