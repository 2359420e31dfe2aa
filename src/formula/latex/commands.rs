// LaTeX command table
//
// Maps command names (without the leading backslash) to the literal symbol
// they render as, and classifies the named functions that render upright.
// Unknown names fall back to the name itself.

use phf::{phf_map, phf_set};

/// How a command without a dedicated handler renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandClass {
    /// Literal symbol, rendered as an ordinary (italic) run
    Symbol(&'static str),
    /// Named function, rendered as upright text
    Function(&'static str),
}

/// Command name to Unicode symbol lookup
static SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    // Lowercase Greek
    "alpha" => "α",
    "beta" => "β",
    "gamma" => "γ",
    "delta" => "δ",
    "epsilon" => "ϵ",
    "varepsilon" => "ε",
    "zeta" => "ζ",
    "eta" => "η",
    "theta" => "θ",
    "vartheta" => "ϑ",
    "iota" => "ι",
    "kappa" => "κ",
    "lambda" => "λ",
    "mu" => "μ",
    "nu" => "ν",
    "xi" => "ξ",
    "omicron" => "ο",
    "pi" => "π",
    "varpi" => "ϖ",
    "rho" => "ρ",
    "varrho" => "ϱ",
    "sigma" => "σ",
    "varsigma" => "ς",
    "tau" => "τ",
    "upsilon" => "υ",
    "phi" => "ϕ",
    "varphi" => "φ",
    "chi" => "χ",
    "psi" => "ψ",
    "omega" => "ω",

    // Uppercase Greek
    "Gamma" => "Γ",
    "Delta" => "Δ",
    "Theta" => "Θ",
    "Lambda" => "Λ",
    "Xi" => "Ξ",
    "Pi" => "Π",
    "Sigma" => "Σ",
    "Upsilon" => "Υ",
    "Phi" => "Φ",
    "Psi" => "Ψ",
    "Omega" => "Ω",

    // Binary operators
    "pm" => "±",
    "mp" => "∓",
    "times" => "×",
    "div" => "÷",
    "cdot" => "⋅",
    "ast" => "∗",
    "star" => "⋆",
    "circ" => "∘",
    "bullet" => "∙",
    "oplus" => "⊕",
    "ominus" => "⊖",
    "otimes" => "⊗",
    "odot" => "⊙",
    "wedge" => "∧",
    "land" => "∧",
    "vee" => "∨",
    "lor" => "∨",
    "cap" => "∩",
    "cup" => "∪",
    "setminus" => "∖",

    // Relations
    "leq" => "≤",
    "le" => "≤",
    "geq" => "≥",
    "ge" => "≥",
    "neq" => "≠",
    "ne" => "≠",
    "ll" => "≪",
    "gg" => "≫",
    "approx" => "≈",
    "sim" => "∼",
    "simeq" => "≃",
    "cong" => "≅",
    "equiv" => "≡",
    "propto" => "∝",
    "in" => "∈",
    "notin" => "∉",
    "ni" => "∋",
    "subset" => "⊂",
    "supset" => "⊃",
    "subseteq" => "⊆",
    "supseteq" => "⊇",
    "parallel" => "∥",
    "perp" => "⊥",
    "mid" => "∣",

    // Arrows
    "to" => "→",
    "rightarrow" => "→",
    "gets" => "←",
    "leftarrow" => "←",
    "leftrightarrow" => "↔",
    "Rightarrow" => "⇒",
    "Leftarrow" => "⇐",
    "Leftrightarrow" => "⇔",
    "implies" => "⟹",
    "iff" => "⟺",
    "uparrow" => "↑",
    "downarrow" => "↓",
    "mapsto" => "↦",
    "longrightarrow" => "⟶",
    "longleftarrow" => "⟵",

    // Miscellaneous symbols
    "infty" => "∞",
    "partial" => "∂",
    "nabla" => "∇",
    "forall" => "∀",
    "exists" => "∃",
    "nexists" => "∄",
    "neg" => "¬",
    "emptyset" => "∅",
    "varnothing" => "∅",
    "aleph" => "ℵ",
    "hbar" => "ℏ",
    "ell" => "ℓ",
    "Re" => "ℜ",
    "Im" => "ℑ",
    "angle" => "∠",
    "triangle" => "△",
    "therefore" => "∴",
    "because" => "∵",
    "prime" => "′",
    "degree" => "°",
    "ldots" => "…",
    "dots" => "…",
    "cdots" => "⋯",
    "vdots" => "⋮",
    "ddots" => "⋱",

    // Large operators without a dedicated handler
    "prod" => "∏",
    "coprod" => "∐",
    "iint" => "∬",
    "iiint" => "∭",
    "oint" => "∮",
    "bigcup" => "⋃",
    "bigcap" => "⋂",

    // Delimiters
    "langle" => "⟨",
    "rangle" => "⟩",
    "lfloor" => "⌊",
    "rfloor" => "⌋",
    "lceil" => "⌈",
    "rceil" => "⌉",
    "vert" => "|",
    "Vert" => "‖",

    // Spacing
    "quad" => "\u{2003}",
    "qquad" => "\u{2003}\u{2003}",

    // Sizing and style switches with no visible output
    "left" => "",
    "right" => "",
    "big" => "",
    "Big" => "",
    "bigg" => "",
    "Bigg" => "",
    "displaystyle" => "",
    "textstyle" => "",
    "limits" => "",
    "nolimits" => "",

    // Single-character control symbols
    "{" => "{",
    "}" => "}",
    "|" => "‖",
    "," => "\u{2009}",
    ":" => "\u{205F}",
    ";" => "\u{2004}",
    "!" => "",
    " " => " ",
    "%" => "%",
    "$" => "$",
    "&" => "&",
    "#" => "#",
    "_" => "_",
    "\\" => "",
};

/// Named functions rendered upright by typographic convention
static FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "sin", "cos", "tan", "cot", "sec", "csc",
    "arcsin", "arccos", "arctan",
    "sinh", "cosh", "tanh", "coth",
    "ln", "log", "exp",
    "max", "min", "det", "dim", "ker", "deg",
    "gcd", "Pr", "arg", "inf", "lim", "liminf", "limsup", "sup",
};

/// Look up the symbol a command renders as
#[inline]
pub fn symbol(name: &str) -> Option<&'static str> {
    SYMBOLS.get(name).copied()
}

/// Whether the command is a named function rendered upright
#[inline]
pub fn is_function(name: &str) -> bool {
    FUNCTIONS.contains(name)
}

/// Classify a command that has no dedicated handler
///
/// Returns `None` for names absent from both tables; callers render those
/// as a literal run of the name itself.
pub fn classify(name: &str) -> Option<CommandClass> {
    if is_function(name) {
        return FUNCTIONS
            .get_key(name)
            .map(|&function| CommandClass::Function(symbol(name).unwrap_or(function)));
    }
    symbol(name).map(CommandClass::Symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_symbols() {
        assert_eq!(symbol("alpha"), Some("α"));
        assert_eq!(symbol("Omega"), Some("Ω"));
        assert_eq!(classify("pi"), Some(CommandClass::Symbol("π")));
    }

    #[test]
    fn test_functions_are_upright() {
        for name in ["sin", "cos", "log", "ln", "max", "lim", "Pr"] {
            assert!(is_function(name), "{} should be a function", name);
            assert_eq!(classify(name), Some(CommandClass::Function(name)));
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(symbol("frobnicate"), None);
        assert!(!is_function("frobnicate"));
        assert_eq!(classify("frobnicate"), None);
    }

    #[test]
    fn test_control_symbols() {
        assert_eq!(symbol("{"), Some("{"));
        assert_eq!(symbol("!"), Some(""));
        assert_eq!(symbol("|"), Some("‖"));
    }
}
