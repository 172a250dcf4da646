//! Reader and writer options

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PgnOptions {
    pub strict_disambiguation: bool,
    pub moves_per_line: usize,
}

impl PgnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject a hinted move that still matches several pieces instead of
    /// taking the first one found.
    pub fn strict_disambiguation(mut self) -> Self {
        self.strict_disambiguation = true;
        self
    }

    pub fn moves_per_line(mut self, moves: usize) -> Self {
        self.moves_per_line = moves.max(1);
        self
    }
}

impl Default for PgnOptions {
    fn default() -> Self {
        Self {
            strict_disambiguation: false,
            moves_per_line: 1,
        }
    }
}
