use std::io::Write;

use backstraightener_core::{DisplayTriple, WheelPanel};

/// Renders the wheels as a single `HH:MM:SS` line redrawn in place.
pub struct TerminalPanel<W: Write> {
    out: W,
    editable: bool,
    /// A display line is on screen without a trailing newline.
    dirty: bool,
}

impl<W: Write> TerminalPanel<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            editable: true,
            dirty: false,
        }
    }

    fn write(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to draw wheels");
        }
    }
}

impl<W: Write> WheelPanel for TerminalPanel<W> {
    fn show(&mut self, display: DisplayTriple) {
        self.write(&format!("\r{display}"));
        self.dirty = true;
    }

    fn set_editable(&mut self, editable: bool) {
        if editable && self.dirty {
            self.write("\n");
            self.dirty = false;
        }
        self.editable = editable;
        tracing::debug!(editable, "wheel input lock changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraws_in_place_and_ends_line_on_unlock() {
        let mut panel = TerminalPanel::new(Vec::new());
        panel.show(DisplayTriple::from_secs(2));
        panel.set_editable(false);
        panel.show(DisplayTriple::from_secs(1));
        panel.show(DisplayTriple::from_secs(0));
        panel.set_editable(true);
        panel.set_editable(true);

        let text = String::from_utf8(panel.out).unwrap();
        assert_eq!(text, "\r00:00:02\r00:00:01\r00:00:00\n");
        assert!(panel.editable);
    }
}
