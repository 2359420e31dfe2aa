// Supporting types for math nodes

/// Bracket shapes produced by `\left..\right` pairs and matrix environments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    Round,  // ( )
    Square, // [ ]
    Curly,  // { }
}

impl BracketKind {
    /// Opening delimiter character
    #[inline]
    pub fn open(self) -> char {
        match self {
            BracketKind::Round => '(',
            BracketKind::Square => '[',
            BracketKind::Curly => '{',
        }
    }

    /// Closing delimiter character
    #[inline]
    pub fn close(self) -> char {
        match self {
            BracketKind::Round => ')',
            BracketKind::Square => ']',
            BracketKind::Curly => '}',
        }
    }
}

/// Large operators that carry their own limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LargeOperator {
    Sum,      // ∑
    Integral, // ∫
}

impl LargeOperator {
    /// Glyph drawn for the operator
    #[inline]
    pub fn symbol(self) -> &'static str {
        match self {
            LargeOperator::Sum => "∑",
            LargeOperator::Integral => "∫",
        }
    }
}
