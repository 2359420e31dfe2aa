// Recursive-descent LaTeX math parser
//
// Parses directly from the source string without a separate tokenizing
// pass. The parser never fails: malformed input degrades locally to literal
// runs or empty nodes, and the caller always receives a tree.

use super::commands::{self, CommandClass};
use super::cursor::Cursor;
use super::matrix::{self, MatrixEnvironment};
use crate::formula::ast::{BracketKind, LargeOperator, MathNode, flatten_sequence};
use std::borrow::Cow;
use std::collections::HashSet;

/// `\left..\right` pairs recognized as stretchy brackets
const BRACKET_PAIRS: [(&str, &str, BracketKind); 3] = [
    ("\\left(", "\\right)", BracketKind::Round),
    ("\\left[", "\\right]", BracketKind::Square),
    ("\\left\\{", "\\right\\}", BracketKind::Curly),
];

const LEFT: &str = "\\left";
const BEGIN: &str = "\\begin{";

/// Deepest atom nesting parsed structurally; anything deeper is kept as text
const MAX_NESTING: usize = 128;

/// Characters greedily collected into a single run
#[inline]
fn is_run_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-' | '*' | '/' | '=' | '(' | ')')
}

/// Scripts collected after an atom or a large operator
#[derive(Debug, Default)]
struct Scripts<'a> {
    subscript: Option<Vec<MathNode<'a>>>,
    superscript: Option<Vec<MathNode<'a>>>,
}

/// LaTeX math parser
///
/// # Example
/// ```ignore
/// use mathword::formula::LatexParser;
///
/// let root = LatexParser::new(r"\frac{a}{b}").parse();
/// assert_eq!(root.group_children().len(), 1);
/// ```
pub struct LatexParser<'a> {
    cursor: Cursor<'a>,
    /// Terminator of the innermost expression being parsed
    terminator: Option<&'static str>,
    /// Current atom nesting depth
    depth: usize,
    /// Positions of `\left` openers already known to have no closer
    unmatched: HashSet<usize>,
}

impl<'a> LatexParser<'a> {
    /// Create a parser over `source` (surrounding whitespace is ignored)
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source.trim()),
            terminator: None,
            depth: 0,
            unmatched: HashSet::new(),
        }
    }

    /// Parse the whole source into a normalized `Group` root
    pub fn parse(mut self) -> MathNode<'a> {
        let mut children = Vec::new();
        loop {
            children.extend(self.parse_expr(None));
            if self.cursor.is_eof() {
                break;
            }
            // Only an unbalanced `}` stops a top-level expression early
            tracing::trace!(
                position = self.cursor.position(),
                "skipping unbalanced closing brace"
            );
            self.cursor.bump();
        }

        let root = MathNode::Group(flatten_sequence(children));
        tracing::debug!(
            source = self.cursor.source(),
            nodes = root.node_count(),
            "parsed math span"
        );
        root
    }

    /// Parse atoms until `terminator`, an unmatched `}`, or end of input
    fn parse_expr(&mut self, terminator: Option<&'static str>) -> Vec<MathNode<'a>> {
        let outer = std::mem::replace(&mut self.terminator, terminator);
        let mut children = Vec::new();

        loop {
            self.cursor.skip_whitespace();
            if self.at_boundary() {
                break;
            }
            let Some(atom) = self.parse_atom() else {
                break;
            };
            if atom.large_operator().is_some() {
                children.push(atom);
            } else {
                children.push(self.attach_scripts(atom));
            }
        }

        self.terminator = outer;
        children
    }

    /// Whether the cursor sits at the end of the current expression
    fn at_boundary(&self) -> bool {
        match self.cursor.peek() {
            None | Some('}') => true,
            Some(_) => self.terminator.is_some_and(|t| self.cursor.starts_with(t)),
        }
    }

    /// Parse the smallest independent unit; `None` only at end of input
    ///
    /// Past `MAX_NESTING` levels the remaining input becomes one literal run.
    fn parse_atom(&mut self) -> Option<MathNode<'a>> {
        if self.depth >= MAX_NESTING {
            let rest = self.cursor.rest().trim_end();
            tracing::trace!(
                position = self.cursor.position(),
                "nesting limit reached, keeping the rest as text"
            );
            self.cursor.advance(self.cursor.rest().len());
            return (!rest.is_empty()).then(|| MathNode::Run(Cow::Borrowed(rest)));
        }

        self.depth += 1;
        let atom = self.parse_nested_atom();
        self.depth -= 1;
        atom
    }

    fn parse_nested_atom(&mut self) -> Option<MathNode<'a>> {
        self.cursor.skip_whitespace();
        let ch = self.cursor.peek()?;

        if let Some(&(left, right, kind)) = BRACKET_PAIRS
            .iter()
            .find(|(left, _, _)| self.cursor.starts_with(left))
        {
            return Some(self.parse_bracket_pair(left, right, kind));
        }

        if self.cursor.starts_with(BEGIN)
            && let Some(node) = self.parse_environment()
        {
            return Some(node);
        }

        match ch {
            '\\' => Some(self.parse_command()),
            '{' => {
                self.cursor.bump();
                let children = self.parse_expr(None);
                self.cursor.eat("}");
                Some(MathNode::from_sequence(children))
            },
            c if is_run_char(c) => Some(MathNode::Run(Cow::Borrowed(
                self.cursor.take_while(is_run_char),
            ))),
            _ => self.cursor.bump_str().map(|s| MathNode::Run(Cow::Borrowed(s))),
        }
    }

    fn parse_bracket_pair(
        &mut self,
        left: &'static str,
        right: &'static str,
        kind: BracketKind,
    ) -> MathNode<'a> {
        let start = self.cursor.position();
        let has_closer = !self.unmatched.contains(&start) && self.cursor.find(right).is_some();

        if has_closer {
            self.cursor.advance(left.len());
            let children = self.parse_expr(Some(right));
            if self.cursor.eat(right) {
                return MathNode::Brackets { kind, children };
            }
            // The outcome only depends on the text after `start`
            self.unmatched.insert(start);
        }

        // Unmatched: drop `\left` and let the delimiter parse as a literal
        tracing::trace!(position = start, opener = left, "unmatched bracket pair");
        self.cursor.set_position(start + LEFT.len());
        MathNode::Group(Vec::new())
    }

    /// Parse `\begin{name}..\end{name}`; `None` when no environment name is present
    fn parse_environment(&mut self) -> Option<MathNode<'a>> {
        let rest = self.cursor.rest();
        let name_len = rest[BEGIN.len()..].find('}')?;
        let name = &rest[BEGIN.len()..BEGIN.len() + name_len];
        self.cursor.advance(BEGIN.len() + name_len + 1);

        let Some(env) = MatrixEnvironment::from_name(name) else {
            tracing::trace!(environment = name, "ignoring unsupported environment");
            return Some(MathNode::Group(Vec::new()));
        };

        self.cursor.skip_whitespace();
        let end_marker = format!("\\end{{{}}}", name);
        let Some(end) = self.cursor.find(&end_marker) else {
            tracing::trace!(environment = name, "environment is never closed");
            return Some(env.wrap(Vec::new()));
        };

        let body = self.cursor.slice(self.cursor.position(), end);
        self.cursor.set_position(end + end_marker.len());
        Some(env.wrap(vec![matrix::build(body)]))
    }

    fn parse_command(&mut self) -> MathNode<'a> {
        self.cursor.bump(); // '\'
        let mut name = self.cursor.take_while(|c| c.is_ascii_alphabetic());
        if name.is_empty() {
            match self.cursor.bump_str() {
                Some(symbol) => name = symbol,
                None => return MathNode::run("\\"),
            }
        }

        match name {
            "frac" => self.parse_fraction(),
            "sqrt" => self.parse_radical(),
            "sum" => self.parse_large_operator(LargeOperator::Sum),
            "int" => self.parse_large_operator(LargeOperator::Integral),
            "text" | "textrm" | "mathrm" | "operatorname" | "mbox" => self.parse_text(),
            "end" => {
                // Closing marker of an environment that was ignored
                self.parse_group();
                MathNode::Group(Vec::new())
            },
            _ => lookup_command(name),
        }
    }

    fn parse_fraction(&mut self) -> MathNode<'a> {
        let numerator = self.parse_group();
        let denominator = self.parse_group();
        MathNode::Fraction {
            numerator,
            denominator,
        }
    }

    fn parse_radical(&mut self) -> MathNode<'a> {
        self.cursor.skip_whitespace();
        let degree = if self.cursor.eat("[") {
            let degree = self.parse_expr(Some("]"));
            self.cursor.eat("]");
            Some(degree)
        } else {
            None
        };
        let content = self.parse_group();
        MathNode::Radical { content, degree }
    }

    fn parse_large_operator(&mut self, operator: LargeOperator) -> MathNode<'a> {
        let Scripts {
            subscript,
            superscript,
        } = self.parse_scripts();

        self.cursor.skip_whitespace();
        let body = if self.at_boundary() {
            Vec::new()
        } else {
            match self.parse_atom() {
                Some(atom) if atom.large_operator().is_some() => flatten_sequence(vec![atom]),
                Some(atom) => flatten_sequence(vec![self.attach_scripts(atom)]),
                None => Vec::new(),
            }
        };
        let children = if body.is_empty() {
            vec![MathNode::run(operator.symbol())]
        } else {
            body
        };

        match operator {
            LargeOperator::Sum => MathNode::Sum {
                children,
                subscript,
                superscript,
            },
            LargeOperator::Integral => MathNode::Integral {
                children,
                subscript,
                superscript,
            },
        }
    }

    /// Read a text-mode argument verbatim, mapping control symbols
    fn parse_text(&mut self) -> MathNode<'a> {
        self.cursor.skip_whitespace();
        if !self.cursor.eat("{") {
            let token = self.parse_token();
            let mut text = String::new();
            for node in &token {
                node.write_plain_text(&mut text);
            }
            return MathNode::UprightText(Cow::Owned(text));
        }

        let start = self.cursor.position();
        let mut end = None;
        let mut depth = 0usize;
        let mut verbatim = true;
        let mut text = String::new();

        while let Some(ch) = self.cursor.peek() {
            match ch {
                '}' if depth == 0 => {
                    end = Some(self.cursor.position());
                    self.cursor.bump();
                    break;
                },
                '}' => {
                    depth -= 1;
                    verbatim = false;
                    self.cursor.bump();
                },
                '{' => {
                    depth += 1;
                    verbatim = false;
                    self.cursor.bump();
                },
                '\\' => {
                    verbatim = false;
                    self.cursor.bump();
                    let word = self.cursor.take_while(|c| c.is_ascii_alphabetic());
                    if word.is_empty() {
                        if let Some(symbol) = self.cursor.bump_str() {
                            text.push_str(commands::symbol(symbol).unwrap_or(symbol));
                        }
                    } else {
                        text.push_str(commands::symbol(word).unwrap_or(word));
                        // Control words swallow the spaces after them
                        self.cursor.skip_whitespace();
                    }
                },
                c => {
                    text.push(c);
                    self.cursor.bump();
                },
            }
        }

        if verbatim {
            let end = end.unwrap_or_else(|| self.cursor.position());
            return MathNode::UprightText(Cow::Borrowed(self.cursor.slice(start, end)));
        }
        MathNode::UprightText(Cow::Owned(text))
    }

    /// Parse a command argument: a braced group, or a single token
    fn parse_group(&mut self) -> Vec<MathNode<'a>> {
        self.cursor.skip_whitespace();
        if !self.cursor.eat("{") {
            return self.parse_token();
        }
        let children = self.parse_expr(None);
        // A missing closing brace closes the group at end of input
        self.cursor.eat("}");
        children
    }

    /// Parse a single-token argument (one character or one atom)
    ///
    /// Follows LaTeX argument rules, so `x^10` raises only the `1`. Older
    /// converters read a whole run here and raise `10`.
    fn parse_token(&mut self) -> Vec<MathNode<'a>> {
        self.cursor.skip_whitespace();
        if self.at_boundary() {
            return Vec::new();
        }
        match self.cursor.peek() {
            Some(c) if is_run_char(c) => self
                .cursor
                .bump_str()
                .map(|s| MathNode::Run(Cow::Borrowed(s)))
                .into_iter()
                .collect(),
            _ => self.parse_atom().into_iter().collect(),
        }
    }

    /// Collect at most one subscript and one superscript, in either order
    fn parse_scripts(&mut self) -> Scripts<'a> {
        let mut scripts = Scripts::default();
        loop {
            self.cursor.skip_whitespace();
            let slot = match self.cursor.peek() {
                Some('_') => &mut scripts.subscript,
                Some('^') => &mut scripts.superscript,
                _ => break,
            };
            self.cursor.bump();
            let argument = self.parse_group();
            if slot.is_some() {
                // Repeated script: the first one wins
                tracing::trace!(position = self.cursor.position(), "dropping repeated script");
                continue;
            }
            *slot = Some(argument);
        }
        scripts
    }

    /// Wrap `base` in script nodes for any trailing `_` / `^`
    fn attach_scripts(&mut self, base: MathNode<'a>) -> MathNode<'a> {
        let Scripts {
            subscript,
            superscript,
        } = self.parse_scripts();
        let base = Box::new(base);

        match (subscript, superscript) {
            (Some(sub), Some(sup)) => MathNode::SubSuperScript {
                base,
                subscript: Box::new(MathNode::from_sequence(sub)),
                superscript: Box::new(MathNode::from_sequence(sup)),
            },
            (Some(sub), None) => MathNode::SubScript {
                base,
                subscript: Box::new(MathNode::from_sequence(sub)),
            },
            (None, Some(sup)) => MathNode::SuperScript {
                base,
                superscript: Box::new(MathNode::from_sequence(sup)),
            },
            (None, None) => *base,
        }
    }
}

/// Resolve a command with no dedicated handler through the command table
fn lookup_command(name: &str) -> MathNode<'_> {
    match commands::classify(name) {
        Some(CommandClass::Function(text)) => MathNode::UprightText(Cow::Borrowed(text)),
        Some(CommandClass::Symbol("")) => MathNode::Group(Vec::new()),
        Some(CommandClass::Symbol(symbol)) => MathNode::Run(Cow::Borrowed(symbol)),
        None => MathNode::Run(Cow::Borrowed(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(source: &str) -> Vec<MathNode<'_>> {
        match LatexParser::new(source).parse() {
            MathNode::Group(children) => children,
            other => panic!("Expected group root, got {:?}", other),
        }
    }

    fn run(text: &str) -> MathNode<'_> {
        MathNode::run(text)
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\t ").is_empty());
    }

    #[test]
    fn test_fraction() {
        let nodes = parse(r"\frac{a}{b}");
        assert_eq!(
            nodes,
            vec![MathNode::Fraction {
                numerator: vec![run("a")],
                denominator: vec![run("b")],
            }]
        );
    }

    #[test]
    fn test_fraction_with_structured_parts() {
        let nodes = parse(r"\frac{x^2}{\sqrt{y}}");
        match &nodes[0] {
            MathNode::Fraction {
                numerator,
                denominator,
            } => {
                assert!(matches!(numerator[0], MathNode::SuperScript { .. }));
                assert!(matches!(denominator[0], MathNode::Radical { .. }));
            },
            other => panic!("Expected fraction, got {:?}", other),
        }
    }

    #[test]
    fn test_unbraced_fraction_arguments() {
        let nodes = parse(r"\frac12");
        assert_eq!(
            nodes,
            vec![MathNode::Fraction {
                numerator: vec![run("1")],
                denominator: vec![run("2")],
            }]
        );
    }

    #[test]
    fn test_unterminated_denominator_closes_at_end() {
        let nodes = parse(r"\frac{a}{b");
        assert_eq!(
            nodes,
            vec![MathNode::Fraction {
                numerator: vec![run("a")],
                denominator: vec![run("b")],
            }]
        );
    }

    #[test]
    fn test_radicals() {
        assert_eq!(
            parse(r"\sqrt[3]{x}"),
            vec![MathNode::Radical {
                content: vec![run("x")],
                degree: Some(vec![run("3")]),
            }]
        );
        assert_eq!(
            parse(r"\sqrt{x}"),
            vec![MathNode::Radical {
                content: vec![run("x")],
                degree: None,
            }]
        );
    }

    #[test]
    fn test_sub_superscript_in_either_order() {
        let expected = vec![MathNode::SubSuperScript {
            base: Box::new(run("x")),
            subscript: Box::new(run("1")),
            superscript: Box::new(run("2")),
        }];
        assert_eq!(parse("x_1^2"), expected);
        assert_eq!(parse("x^2_1"), expected);
        assert_eq!(parse("x_{1}^{2}"), expected);
    }

    #[test]
    fn test_single_scripts() {
        assert_eq!(
            parse("e^{i\\pi}"),
            vec![MathNode::SuperScript {
                base: Box::new(run("e")),
                superscript: Box::new(MathNode::Group(vec![run("i"), run("π")])),
            }]
        );
        assert_eq!(
            parse("a_n"),
            vec![MathNode::SubScript {
                base: Box::new(run("a")),
                subscript: Box::new(run("n")),
            }]
        );
    }

    #[test]
    fn test_unbraced_script_takes_one_character() {
        let nodes = parse("x^10");
        assert_eq!(
            nodes,
            vec![
                MathNode::SuperScript {
                    base: Box::new(run("x")),
                    superscript: Box::new(run("1")),
                },
                run("0"),
            ]
        );
    }

    #[test]
    fn test_repeated_script_is_dropped() {
        assert_eq!(
            parse("x_1_2"),
            vec![MathNode::SubScript {
                base: Box::new(run("x")),
                subscript: Box::new(run("1")),
            }]
        );
        assert_eq!(
            parse("x_1_{2}^3"),
            vec![MathNode::SubSuperScript {
                base: Box::new(run("x")),
                subscript: Box::new(run("1")),
                superscript: Box::new(run("3")),
            }]
        );
    }

    #[test]
    fn test_script_without_base_is_literal() {
        assert_eq!(parse("_2"), vec![run("_"), run("2")]);
        assert_eq!(parse("^"), vec![run("^")]);
        assert_eq!(parse(" ^x"), vec![run("^"), run("x")]);
    }

    #[test]
    fn test_sum_absorbs_leading_scripts() {
        let nodes = parse(r"\sum_{i=1}^{n} i^2");
        match &nodes[..] {
            [MathNode::Sum {
                children,
                subscript,
                superscript,
            }] => {
                assert_eq!(subscript.as_deref(), Some(&[run("i=1")][..]));
                assert_eq!(superscript.as_deref(), Some(&[run("n")][..]));
                assert_eq!(
                    children,
                    &vec![MathNode::SuperScript {
                        base: Box::new(run("i")),
                        superscript: Box::new(run("2")),
                    }]
                );
            },
            other => panic!("Expected a single sum, got {:?}", other),
        }
    }

    #[test]
    fn test_large_operators_default_symbol() {
        assert_eq!(
            parse(r"\int_0^1"),
            vec![MathNode::Integral {
                children: vec![run("∫")],
                subscript: Some(vec![run("0")]),
                superscript: Some(vec![run("1")]),
            }]
        );
        assert_eq!(
            parse(r"{\sum}"),
            vec![MathNode::Sum {
                children: vec![run("∑")],
                subscript: None,
                superscript: None,
            }]
        );
    }

    #[test]
    fn test_bracket_pairs() {
        assert_eq!(
            parse(r"\left( a \right)"),
            vec![MathNode::Brackets {
                kind: BracketKind::Round,
                children: vec![run("a")],
            }]
        );
        assert_eq!(
            parse(r"\left[ x \right]"),
            vec![MathNode::Brackets {
                kind: BracketKind::Square,
                children: vec![run("x")],
            }]
        );
        assert_eq!(
            parse(r"\left\{ y \right\}"),
            vec![MathNode::Brackets {
                kind: BracketKind::Curly,
                children: vec![run("y")],
            }]
        );
    }

    #[test]
    fn test_unmatched_bracket_degrades_to_literal() {
        let nodes = parse(r"\left( a + b");
        assert_eq!(nodes, vec![run("("), run("a"), run("+"), run("b")]);
    }

    #[test]
    fn test_many_unmatched_brackets_recover_quickly() {
        let source = "\\left(".repeat(40);
        let start = std::time::Instant::now();
        let nodes = parse(&source);
        assert!(start.elapsed() < std::time::Duration::from_secs(1));
        assert_eq!(nodes, vec![run("("); 40]);
    }

    #[test]
    fn test_unmatched_openers_before_a_matched_pair() {
        let source = format!("{}x\\right)", "\\left(".repeat(30));
        let start = std::time::Instant::now();
        let nodes = parse(&source);
        assert!(start.elapsed() < std::time::Duration::from_secs(1));
        assert_eq!(nodes.len(), 30);
        assert!(nodes[..29].iter().all(|node| *node == run("(")));
        assert_eq!(
            nodes[29],
            MathNode::Brackets {
                kind: BracketKind::Round,
                children: vec![run("x")],
            }
        );
    }

    #[test]
    fn test_deep_nesting_is_kept_as_text() {
        let source = "{".repeat(50_000);
        let nodes = parse(&source);
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            MathNode::Run(text) => {
                assert_eq!(text.len(), 50_000 - MAX_NESTING);
                assert!(text.chars().all(|c| c == '{'));
            },
            other => panic!("Expected literal run, got {:?}", other),
        }

        let source = "\\frac".repeat(10_000);
        let root = LatexParser::new(&source).parse();
        assert!(root.node_count() < 1_000);
    }

    #[test]
    fn test_matrix_environment_is_bracketed() {
        let nodes = parse(r"\begin{pmatrix} 1 & 2 \\ 3 & 4 \end{pmatrix}");
        assert_eq!(
            nodes,
            vec![MathNode::Brackets {
                kind: BracketKind::Round,
                children: vec![MathNode::Matrix {
                    rows: 2,
                    cols: 2,
                    cells: vec![
                        vec![vec![run("1")], vec![run("2")]],
                        vec![vec![run("3")], vec![run("4")]],
                    ],
                }],
            }]
        );
    }

    #[test]
    fn test_matrix_followed_by_content() {
        let nodes = parse(r"A=\begin{bmatrix} a \end{bmatrix} x");
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], run("A="));
        assert!(matches!(
            nodes[1],
            MathNode::Brackets {
                kind: BracketKind::Square,
                ..
            }
        ));
        assert_eq!(nodes[2], run("x"));
    }

    #[test]
    fn test_unclosed_environment() {
        let nodes = parse(r"\begin{Bmatrix} 1 & 2");
        assert_eq!(
            nodes[0],
            MathNode::Brackets {
                kind: BracketKind::Curly,
                children: Vec::new(),
            }
        );
    }

    #[test]
    fn test_unsupported_environment_is_transparent() {
        let nodes = parse(r"\begin{aligned} x \end{aligned}");
        assert_eq!(nodes, vec![run("x")]);
    }

    #[test]
    fn test_functions_are_upright_text() {
        for name in ["sin", "log", "lim", "max"] {
            let source = format!("\\{}", name);
            let nodes = parse(&source);
            assert_eq!(nodes, vec![MathNode::upright(name)]);
        }
    }

    #[test]
    fn test_symbols_and_unknown_commands() {
        assert_eq!(parse(r"\alpha"), vec![run("α")]);
        assert_eq!(parse(r"\foo"), vec![run("foo")]);
        assert_eq!(parse(r"a \times b"), vec![run("a"), run("×"), run("b")]);
    }

    #[test]
    fn test_text_command() {
        assert_eq!(parse(r"\text{if }"), vec![MathNode::upright("if ")]);
        assert_eq!(
            parse(r"\text{a \alpha}"),
            vec![MathNode::UprightText(Cow::Owned("a α".to_string()))]
        );
        assert_eq!(parse(r"\mathrm{d}x"), vec![MathNode::upright("d"), run("x")]);
    }

    #[test]
    fn test_brace_groups_are_flattened() {
        assert_eq!(parse("{a}{b c}"), vec![run("a"), run("b"), run("c")]);
        assert_eq!(
            parse(r"{\alpha\beta}^2"),
            vec![MathNode::SuperScript {
                base: Box::new(MathNode::Group(vec![run("α"), run("β")])),
                superscript: Box::new(run("2")),
            }]
        );
    }

    #[test]
    fn test_unbalanced_closing_brace_is_skipped() {
        assert_eq!(parse("a}b"), vec![run("a"), run("b")]);
    }

    #[test]
    fn test_control_symbols() {
        assert_eq!(parse(r"\{ x \}"), vec![run("{"), run("x"), run("}")]);
        assert_eq!(parse(r"a\!b"), vec![run("a"), run("b")]);
        assert_eq!(parse("a\\"), vec![run("a"), run("\\")]);
    }

    #[test]
    fn test_other_characters_are_single_runs() {
        assert_eq!(parse("a<b"), vec![run("a"), run("<"), run("b")]);
        assert_eq!(parse("αβ"), vec![run("α"), run("β")]);
    }

    proptest! {
        #[test]
        fn prop_literal_runs_reparse_identically(
            words in proptest::collection::vec("[a-z0-9.+*/=-]{1,6}", 1..6)
        ) {
            let source = words.join(" ");
            let first = parse(&source);
            prop_assert!(first.iter().all(|n| matches!(n, MathNode::Run(_))));

            let reconstructed = first
                .iter()
                .map(MathNode::plain_text)
                .collect::<Vec<_>>()
                .join(" ");
            let second = parse(&reconstructed);
            prop_assert_eq!(first, second);
        }
    }
}
