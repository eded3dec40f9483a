// Output sink shared by every demo.
// Variants never print directly; they write lines into whatever sink the caller hands them.

use colored::Colorize;

/// Receives formatted lines in program order.
#[cfg_attr(test, mockall::automock)]
pub trait Sink {
    fn write(&mut self, line: &str);
}

// ============================================================================
// Console sink (stdout)
// ============================================================================

#[derive(Debug, Default)]
pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, line: &str) {
        if self.color {
            println!("{}", line.cyan());
        } else {
            println!("{line}");
        }
    }
}

// ============================================================================
// Transcript sink (records lines in memory)
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drains the recorded lines, leaving the transcript empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Sink for Transcript {
    fn write(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
