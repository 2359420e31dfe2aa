// MathNode to OMML serialization
//
// Writes Office Math Markup Language fragments into a caller-supplied
// buffer. Fragments use the `m:` prefix and expect the enclosing document
// to declare the math namespace.

use crate::common::error::Result;
use crate::formula::ast::{BracketKind, Formula, LargeOperator, MathNode};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

/// Serialize a math tree as a standalone `m:oMath` element
pub fn to_omml(node: &MathNode<'_>) -> Result<String> {
    let mut xml = String::with_capacity(64 * node.node_count());
    xml.push_str("<m:oMath>");
    write_node(&mut xml, node)?;
    xml.push_str("</m:oMath>");
    Ok(xml)
}

/// Serialize a formula, wrapping display formulas in `m:oMathPara`
pub fn formula_to_omml(formula: &Formula<'_>) -> Result<String> {
    let mut xml = String::new();
    write_formula(&mut xml, formula)?;
    Ok(xml)
}

/// Append the OMML of a formula to `xml`
pub fn write_formula(xml: &mut String, formula: &Formula<'_>) -> Result<()> {
    OmmlWriter::new(xml).write_formula(formula)
}

/// Append the OMML of a single node to `xml`
pub fn write_node(xml: &mut String, node: &MathNode<'_>) -> Result<()> {
    OmmlWriter::new(xml).write_node(node)
}

/// OMML writer over a borrowed output buffer
///
/// Optional WordprocessingML run properties (`w:rPr`) are attached to every
/// math run, which is how bold or italic spans carry into equations.
pub struct OmmlWriter<'w> {
    xml: &'w mut String,
    run_properties: Option<&'w str>,
}

impl<'w> OmmlWriter<'w> {
    pub fn new(xml: &'w mut String) -> Self {
        Self {
            xml,
            run_properties: None,
        }
    }

    /// Attach a pre-rendered `w:rPr` element to every math run
    pub fn with_run_properties(mut self, run_properties: &'w str) -> Self {
        self.run_properties = Some(run_properties).filter(|p| !p.is_empty());
        self
    }

    pub fn write_formula(&mut self, formula: &Formula<'_>) -> Result<()> {
        if formula.display_style() {
            self.xml.push_str("<m:oMathPara>");
        }
        self.xml.push_str("<m:oMath>");
        self.write_sequence(formula.root())?;
        self.xml.push_str("</m:oMath>");
        if formula.display_style() {
            self.xml.push_str("</m:oMathPara>");
        }
        Ok(())
    }

    pub fn write_node(&mut self, node: &MathNode<'_>) -> Result<()> {
        match node {
            MathNode::Run(text) => self.write_run(text, false)?,
            MathNode::UprightText(text) => self.write_run(text, true)?,
            MathNode::Fraction {
                numerator,
                denominator,
            } => {
                self.xml.push_str("<m:f>");
                self.write_wrapped("m:num", numerator)?;
                self.write_wrapped("m:den", denominator)?;
                self.xml.push_str("</m:f>");
            },
            MathNode::SuperScript { base, superscript } => {
                self.xml.push_str("<m:sSup>");
                self.write_slot("m:e", base)?;
                self.write_slot("m:sup", superscript)?;
                self.xml.push_str("</m:sSup>");
            },
            MathNode::SubScript { base, subscript } => {
                self.xml.push_str("<m:sSub>");
                self.write_slot("m:e", base)?;
                self.write_slot("m:sub", subscript)?;
                self.xml.push_str("</m:sSub>");
            },
            MathNode::SubSuperScript {
                base,
                subscript,
                superscript,
            } => {
                self.xml.push_str("<m:sSubSup>");
                self.write_slot("m:e", base)?;
                self.write_slot("m:sub", subscript)?;
                self.write_slot("m:sup", superscript)?;
                self.xml.push_str("</m:sSubSup>");
            },
            MathNode::Radical { content, degree } => {
                self.xml.push_str("<m:rad>");
                match degree {
                    Some(degree) => self.write_wrapped("m:deg", degree)?,
                    None => self
                        .xml
                        .push_str("<m:radPr><m:degHide m:val=\"1\"/></m:radPr><m:deg/>"),
                }
                self.write_wrapped("m:e", content)?;
                self.xml.push_str("</m:rad>");
            },
            MathNode::Sum {
                children,
                subscript,
                superscript,
            } => self.write_nary(
                LargeOperator::Sum,
                children,
                subscript.as_deref(),
                superscript.as_deref(),
            )?,
            MathNode::Integral {
                children,
                subscript,
                superscript,
            } => self.write_nary(
                LargeOperator::Integral,
                children,
                subscript.as_deref(),
                superscript.as_deref(),
            )?,
            MathNode::Brackets { kind, children } => self.write_delimiter(*kind, children)?,
            MathNode::Matrix { rows, cols, cells } => self.write_matrix(*rows, *cols, cells)?,
            MathNode::Group(children) => self.write_sequence(children)?,
        }
        Ok(())
    }

    fn write_sequence(&mut self, nodes: &[MathNode<'_>]) -> Result<()> {
        for node in nodes {
            self.write_node(node)?;
        }
        Ok(())
    }

    fn write_wrapped(&mut self, tag: &str, nodes: &[MathNode<'_>]) -> Result<()> {
        write!(self.xml, "<{}>", tag)?;
        self.write_sequence(nodes)?;
        write!(self.xml, "</{}>", tag)?;
        Ok(())
    }

    fn write_slot(&mut self, tag: &str, node: &MathNode<'_>) -> Result<()> {
        write!(self.xml, "<{}>", tag)?;
        self.write_node(node)?;
        write!(self.xml, "</{}>", tag)?;
        Ok(())
    }

    fn write_run(&mut self, text: &str, upright: bool) -> Result<()> {
        self.xml.push_str("<m:r>");
        if upright {
            self.xml.push_str("<m:rPr><m:nor/></m:rPr>");
        }
        if let Some(run_properties) = self.run_properties {
            self.xml.push_str(run_properties);
        }
        if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
            write!(self.xml, "<m:t xml:space=\"preserve\">{}</m:t>", escape(text))?;
        } else {
            write!(self.xml, "<m:t>{}</m:t>", escape(text))?;
        }
        self.xml.push_str("</m:r>");
        Ok(())
    }

    fn write_nary(
        &mut self,
        operator: LargeOperator,
        body: &[MathNode<'_>],
        subscript: Option<&[MathNode<'_>]>,
        superscript: Option<&[MathNode<'_>]>,
    ) -> Result<()> {
        let limit_location = match operator {
            LargeOperator::Sum => "undOvr",
            LargeOperator::Integral => "subSup",
        };
        write!(
            self.xml,
            "<m:nary><m:naryPr><m:chr m:val=\"{}\"/><m:limLoc m:val=\"{}\"/>",
            operator.symbol(),
            limit_location
        )?;
        if subscript.is_none() {
            self.xml.push_str("<m:subHide m:val=\"1\"/>");
        }
        if superscript.is_none() {
            self.xml.push_str("<m:supHide m:val=\"1\"/>");
        }
        self.xml.push_str("</m:naryPr>");

        self.write_wrapped("m:sub", subscript.unwrap_or_default())?;
        self.write_wrapped("m:sup", superscript.unwrap_or_default())?;

        // The operator glyph comes from m:chr; a body that only repeats it is empty
        let body: &[MathNode<'_>] = match body {
            [MathNode::Run(text)] if text.as_ref() == operator.symbol() => &[],
            other => other,
        };
        self.write_wrapped("m:e", body)?;
        self.xml.push_str("</m:nary>");
        Ok(())
    }

    fn write_delimiter(&mut self, kind: BracketKind, children: &[MathNode<'_>]) -> Result<()> {
        write!(
            self.xml,
            "<m:d><m:dPr><m:begChr m:val=\"{}\"/><m:endChr m:val=\"{}\"/></m:dPr>",
            kind.open(),
            kind.close()
        )?;
        self.write_wrapped("m:e", children)?;
        self.xml.push_str("</m:d>");
        Ok(())
    }

    fn write_matrix(
        &mut self,
        rows: usize,
        cols: usize,
        cells: &[Vec<Vec<MathNode<'_>>>],
    ) -> Result<()> {
        write!(
            self.xml,
            "<m:m><m:mPr><m:baseJc m:val=\"center\"/><m:plcHide m:val=\"1\"/><m:mcs><m:mc><m:mcPr><m:count m:val=\"{}\"/><m:mcJc m:val=\"center\"/></m:mcPr></m:mc></m:mcs></m:mPr>",
            cols.max(1)
        )?;
        for row in cells.iter().take(rows) {
            self.xml.push_str("<m:mr>");
            for cell in row.iter().take(cols) {
                self.write_wrapped("m:e", cell)?;
            }
            self.xml.push_str("</m:mr>");
        }
        self.xml.push_str("</m:m>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::latex;

    fn omml(source: &str) -> String {
        to_omml(&latex::parse(source)).unwrap()
    }

    #[test]
    fn test_simple_run() {
        assert_eq!(omml("x"), "<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>");
    }

    #[test]
    fn test_upright_text_is_normal_style() {
        let xml = omml(r"\sin");
        assert!(xml.contains("<m:rPr><m:nor/></m:rPr><m:t>sin</m:t>"));
    }

    #[test]
    fn test_text_escaping() {
        let xml = omml("a<b");
        assert!(xml.contains("<m:t>&lt;</m:t>"));
        let xml = omml(r"\text{ & }");
        assert!(xml.contains("<m:t xml:space=\"preserve\"> &amp; </m:t>"));
    }

    #[test]
    fn test_fraction() {
        let xml = omml(r"\frac{a}{b}");
        assert!(xml.contains(
            "<m:f><m:num><m:r><m:t>a</m:t></m:r></m:num><m:den><m:r><m:t>b</m:t></m:r></m:den></m:f>"
        ));
    }

    #[test]
    fn test_scripts() {
        assert!(omml("x^2").contains("<m:sSup><m:e>"));
        assert!(omml("x_2").contains("<m:sSub><m:e>"));
        assert!(omml("x_1^2").contains("<m:sSubSup><m:e>"));
    }

    #[test]
    fn test_radical_degree() {
        assert!(omml(r"\sqrt{x}").contains("<m:degHide m:val=\"1\"/>"));
        let xml = omml(r"\sqrt[3]{x}");
        assert!(xml.contains("<m:deg><m:r><m:t>3</m:t></m:r></m:deg>"));
        assert!(!xml.contains("degHide"));
    }

    #[test]
    fn test_nary_limits() {
        let xml = omml(r"\sum_{i=1}^{n} i");
        assert!(xml.contains("<m:chr m:val=\"∑\"/>"));
        assert!(!xml.contains("subHide"));
        assert!(xml.contains("<m:e><m:r><m:t>i</m:t></m:r></m:e>"));

        let xml = omml(r"\int");
        assert!(xml.contains("<m:chr m:val=\"∫\"/>"));
        assert!(xml.contains("<m:subHide m:val=\"1\"/><m:supHide m:val=\"1\"/>"));
        assert!(xml.contains("<m:e></m:e>"));
    }

    #[test]
    fn test_matrix_with_brackets() {
        let xml = omml(r"\begin{bmatrix} 1 & 2 \\ 3 & 4 \end{bmatrix}");
        assert!(xml.contains("<m:begChr m:val=\"[\"/><m:endChr m:val=\"]\"/>"));
        assert!(xml.contains("<m:count m:val=\"2\"/>"));
        assert_eq!(xml.matches("<m:mr>").count(), 2);
    }

    #[test]
    fn test_display_formula_is_paragraph() {
        let formula = Formula::from_root(latex::parse("x"), true);
        let xml = formula_to_omml(&formula).unwrap();
        assert!(xml.starts_with("<m:oMathPara><m:oMath>"));
        assert!(xml.ends_with("</m:oMath></m:oMathPara>"));

        let inline = Formula::from_root(latex::parse("x"), false);
        assert!(formula_to_omml(&inline).unwrap().starts_with("<m:oMath>"));
    }

    #[test]
    fn test_run_properties_follow_math_run_properties() {
        let formula = Formula::from_root(latex::parse(r"\sin x"), false);
        let mut xml = String::new();
        OmmlWriter::new(&mut xml)
            .with_run_properties("<w:rPr><w:b/></w:rPr>")
            .write_formula(&formula)
            .unwrap();
        assert!(xml.contains("<m:r><m:rPr><m:nor/></m:rPr><w:rPr><w:b/></w:rPr><m:t>sin</m:t>"));
        assert!(xml.contains("<m:r><w:rPr><w:b/></w:rPr><m:t>x</m:t></m:r>"));
    }
}
