//! Declaration harvesting on top of the `cssparser` tokenizer.
//!
//! Selectors are irrelevant here: every qualified rule's block is walked for
//! declarations regardless of what it applies to, and at-rules with a block
//! (`@media`, `@supports`) recurse so their nested rules contribute too.
//! Individually malformed rules or declarations are skipped, never fatal.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, ToCss, Token,
};

use super::value::CssValue;
use crate::colors::hex_to_rgb;

/// The 16 basic CSS color keywords, with their standard channel values.
///
/// This is the *conversion* table used while parsing; it is distinct from the
/// classifier's reference table in `colors` (which carries a known skew on
/// `gray`).
const NAMED_COLORS: [(&str, [u8; 3]); 16] = [
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
];

/// Parse raw CSS text into `(property, value)` pairs in source order.
///
/// Never fails: unparsable rules contribute nothing and are logged at debug
/// level. Fully malformed input yields an empty vec.
///
/// Text that is a bare declaration list rather than a full stylesheet
/// (`color: red; color: blue;`, as sometimes found inside `<style>` blocks)
/// is parsed as such when no rule yields anything.
#[must_use]
pub fn parse_declarations(raw_css: &str) -> Vec<(String, CssValue)> {
    let mut input = ParserInput::new(raw_css);
    let mut parser = Parser::new(&mut input);

    let mut collector = DeclarationCollector {
        declarations: Vec::new(),
    };

    let rule_parser = cssparser::StyleSheetParser::new(&mut parser, &mut collector);
    for result in rule_parser {
        if let Err((err, _)) = result {
            log::debug!("skipping unparsable css rule: {err:?}");
        }
    }

    if collector.declarations.is_empty() {
        return parse_bare_declarations(raw_css);
    }

    collector.declarations
}

/// Parse text as a selector-less declaration list.
fn parse_bare_declarations(raw_css: &str) -> Vec<(String, CssValue)> {
    let mut input = ParserInput::new(raw_css);
    let mut parser = Parser::new(&mut input);

    let mut declarations = Vec::new();
    let mut harvester = DeclarationHarvester {
        out: &mut declarations,
    };

    let body_parser = RuleBodyParser::new(&mut parser, &mut harvester);
    for result in body_parser {
        if let Err((err, _)) = result {
            log::debug!("skipping unparsable bare declaration: {err:?}");
        }
    }

    declarations
}

/// Walks top-level (and nested at-rule) rule lists, collecting declarations.
struct DeclarationCollector {
    declarations: Vec<(String, CssValue)>,
}

impl<'i> QualifiedRuleParser<'i> for DeclarationCollector {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        // Selector text is ignored; consume it whatever it is.
        while input.next().is_ok() {}
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        (): Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut harvester = DeclarationHarvester {
            out: &mut self.declarations,
        };
        let body_parser = RuleBodyParser::new(input, &mut harvester);

        for result in body_parser {
            if let Err((err, _)) = result {
                log::debug!("skipping unparsable css declaration: {err:?}");
            }
        }
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for DeclarationCollector {
    type Prelude = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        _name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        // Media queries and friends are not evaluated; their blocks are
        // walked unconditionally.
        while input.next().is_ok() {}
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        (): Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        let rule_parser = cssparser::StyleSheetParser::new(input, self);
        for _ in rule_parser {}
        Ok(())
    }

    fn rule_without_block(
        &mut self,
        (): Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        // @import / @charset carry no declarations of interest.
        Ok(())
    }
}

/// Collects declarations inside one rule body.
struct DeclarationHarvester<'a> {
    out: &'a mut Vec<(String, CssValue)>,
}

impl<'i> DeclarationParser<'i> for DeclarationHarvester<'_> {
    type Declaration = ();
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let value = parse_component_values(input);
        self.out.push((name.as_ref().to_string(), value));
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for DeclarationHarvester<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationHarvester<'_> {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (), ()> for DeclarationHarvester<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Read every component token of a declaration value into a [`CssValue`].
fn parse_component_values(input: &mut Parser<'_, '_>) -> CssValue {
    let mut components: Vec<CssValue> = Vec::new();

    loop {
        let token = match input.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            // Commas separate list components; the tokens themselves carry
            // the component boundaries, so nothing to record.
            Token::Comma => {}
            // `!important` terminates the value proper.
            Token::Delim('!') => {
                while input.next().is_ok() {}
                break;
            }
            Token::Ident(name) => components.push(ident_component(name.as_ref())),
            Token::QuotedString(text) => {
                components.push(CssValue::Quoted(text.as_ref().to_string()));
            }
            Token::Hash(digits) | Token::IDHash(digits) => {
                components.push(hash_component(digits.as_ref()));
            }
            Token::Function(name) => {
                let name = name.as_ref().to_string();
                components.push(function_component(&name, input));
            }
            Token::UnquotedUrl(target) => {
                components.push(CssValue::Literal(target.as_ref().to_string()));
            }
            Token::Number { .. } | Token::Percentage { .. } | Token::Dimension { .. } => {
                components.push(CssValue::Literal(token.to_css_string()));
            }
            // Unconsumed nested blocks are skipped by the parser itself.
            _ => components.push(CssValue::Unsupported),
        }
    }

    match components.len() {
        0 => CssValue::Unsupported,
        1 => components.swap_remove(0),
        _ => CssValue::List(components),
    }
}

/// An identifier is either a basic color keyword or plain text.
fn ident_component(name: &str) -> CssValue {
    let lowered = name.to_ascii_lowercase();
    for (keyword, [r, g, b]) in NAMED_COLORS {
        if keyword == lowered {
            return CssValue::Color { r, g, b };
        }
    }
    CssValue::Literal(name.to_string())
}

/// `#hex` component: 3- or 6-digit colors parse; anything else (ID-like
/// hashes, 4/8-digit colors) is unsupported.
fn hash_component(digits: &str) -> CssValue {
    match hex_to_rgb(digits) {
        Some([r, g, b]) => CssValue::Color { r, g, b },
        None => CssValue::Unsupported,
    }
}

/// `rgb()` / `rgba()` with numeric or percentage channels; alpha and any
/// channels past the third are discarded. Other functions are unsupported
/// (their arguments are skipped by the parser).
fn function_component(name: &str, input: &mut Parser<'_, '_>) -> CssValue {
    if !name.eq_ignore_ascii_case("rgb") && !name.eq_ignore_ascii_case("rgba") {
        return CssValue::Unsupported;
    }

    let parsed: Result<Vec<u8>, ParseError<'_, ()>> = input.parse_nested_block(|args| {
        let mut channels = Vec::new();
        loop {
            let token = match args.next() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };
            match token {
                Token::Number { value, .. } => channels.push(clamp_channel(value)),
                Token::Percentage { unit_value, .. } => {
                    channels.push(clamp_channel(unit_value * 255.0));
                }
                _ => {}
            }
        }
        Ok(channels)
    });

    match parsed {
        Ok(channels) if channels.len() >= 3 => CssValue::Color {
            r: channels[0],
            g: channels[1],
            b: channels[2],
        },
        _ => CssValue::Unsupported,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
