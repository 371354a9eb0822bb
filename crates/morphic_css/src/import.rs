//! Stylesheet import
//!
//! Reads a stylesheet produced by [`emit_stylesheet`](crate::emit_stylesheet)
//! (or a hand-edited copy of one) back into a [`ParameterVector`]. Only the
//! configurable variables and the parent's `background-color` are read;
//! computed variables and properties are ignored and re-derived.
//!
//! Values are not clamped here. Callers clamp against their own bounds.

use morphic_core::Rgb;
use morphic_style::{Field, GlassSettings, Material, ParameterVector};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, multispace1},
    combinator::{cut, eof, opt, value},
    error::{context, ParseError as NomParseError, VerboseError, VerboseErrorKind},
    multi::many0,
    number::complete::double,
    sequence::delimited,
    Finish, IResult,
};
use thiserror::Error;
use tracing::debug;

use crate::emitter::{field_var, PRIMARY_COLOR_VAR};
use crate::format::field_unit;

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Errors raised while importing a stylesheet
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    #[error("CSS syntax error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("no rule declares --primary-color")]
    MissingElementRule,

    #[error("invalid value for {name} on line {line}: '{value}'")]
    InvalidValue {
        name: String,
        value: String,
        line: usize,
    },
}

pub type Result<T> = std::result::Result<T, ImportError>;

/// A design recovered from stylesheet text
#[derive(Clone, Debug, PartialEq)]
pub struct ImportedStylesheet {
    pub params: ParameterVector,
    /// Selector of the rule carrying the configurable variables
    pub selector: String,
    /// Selector of the rule that set the parent background, if any
    pub parent_selector: Option<String>,
}

#[derive(Debug)]
struct Declaration<'a> {
    name: &'a str,
    value: &'a str,
    /// Remaining input where the declaration starts, for line numbers
    at: &'a str,
}

#[derive(Debug)]
struct Rule<'a> {
    selector: &'a str,
    declarations: Vec<Declaration<'a>>,
}

impl<'a> Rule<'a> {
    fn find(&self, name: &str) -> Option<&Declaration<'a>> {
        self.declarations.iter().rev().find(|decl| decl.name == name)
    }
}

/// Line and column (1-indexed) of `fragment` within `original`
fn calculate_position(original: &str, fragment: &str) -> (usize, usize) {
    let offset = original.len().saturating_sub(fragment.len());
    let consumed = &original[..offset];
    let line = consumed.matches('\n').count() + 1;
    let column = consumed
        .rfind('\n')
        .map(|pos| offset - pos)
        .unwrap_or(offset + 1);
    (line, column)
}

fn format_verbose_error(err: &VerboseError<&str>) -> String {
    err.errors
        .iter()
        .find_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(ctx) => Some(format!("expected {ctx}")),
            _ => None,
        })
        .or_else(|| {
            err.errors.first().map(|(_, kind)| match kind {
                VerboseErrorKind::Char(c) => format!("expected '{c}'"),
                VerboseErrorKind::Nom(kind) => format!("unexpected input ({kind:?})"),
                VerboseErrorKind::Context(ctx) => format!("expected {ctx}"),
            })
        })
        .unwrap_or_else(|| "unexpected input".to_string())
}

/// Whitespace and block comments
fn ws<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, (), E> {
    value(
        (),
        many0(alt((value((), multispace1), value((), parse_comment)))),
    )(input)
}

fn parse_comment<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, &'a str, E> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

/// Property or custom property name
fn property_name(input: &str) -> ParseResult<&str> {
    context(
        "property name",
        take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_'),
    )(input)
}

/// Everything up to the next `;` or `}`
fn property_value(input: &str) -> ParseResult<&str> {
    let (input, value) = context(
        "property value",
        take_while1(|c: char| c != ';' && c != '}'),
    )(input)?;
    Ok((input, value.trim()))
}

fn declaration(input: &str) -> ParseResult<Declaration<'_>> {
    let (input, _) = ws::<VerboseError<&str>>(input)?;
    let at = input;
    let (input, name) = property_name(input)?;
    let (input, _) = ws::<VerboseError<&str>>(input)?;
    let (input, _) = context("colon after property name", char(':'))(input)?;
    let (input, _) = ws::<VerboseError<&str>>(input)?;
    let (input, value) = cut(property_value)(input)?;
    let (input, _) = opt(char(';'))(input)?;
    Ok((input, Declaration { name, value, at }))
}

fn selector(input: &str) -> ParseResult<&str> {
    let (input, selector) = context(
        "selector",
        take_while1(|c: char| c != '{' && c != '}' && c != ';'),
    )(input)?;
    Ok((input, selector.trim()))
}

fn rule(input: &str) -> ParseResult<Rule<'_>> {
    let (input, _) = ws::<VerboseError<&str>>(input)?;
    let (input, selector) = selector(input)?;
    let (input, _) = context("opening brace", char('{'))(input)?;
    let (input, declarations) = cut(many0(declaration))(input)?;
    let (input, _) = ws::<VerboseError<&str>>(input)?;
    let (input, _) = cut(context("closing brace", char('}')))(input)?;
    Ok((input, Rule { selector, declarations }))
}

fn stylesheet(input: &str) -> ParseResult<Vec<Rule<'_>>> {
    let (input, rules) = many0(rule)(input)?;
    let (input, _) = ws::<VerboseError<&str>>(input)?;
    let (input, _) = context("end of stylesheet", eof)(input)?;
    Ok((input, rules))
}

/// Parse a number followed by `unit` or by nothing
fn number_with_unit(text: &str, unit: &str) -> Option<f64> {
    let (rest, number) = double::<&str, nom::error::Error<&str>>(text).ok()?;
    let rest = rest.trim();
    (number.is_finite() && (rest.is_empty() || rest == unit)).then_some(number)
}

struct Importer<'a> {
    source: &'a str,
}

impl<'a> Importer<'a> {
    fn invalid(&self, decl: &Declaration<'_>) -> ImportError {
        let (line, _) = calculate_position(self.source, decl.at);
        ImportError::InvalidValue {
            name: decl.name.to_string(),
            value: decl.value.to_string(),
            line,
        }
    }

    fn color(&self, decl: &Declaration<'_>) -> Result<Rgb> {
        decl.value.parse().map_err(|_| self.invalid(decl))
    }

    fn field(&self, rule: &Rule<'_>, field: Field) -> Result<Option<f64>> {
        let name = field_var(field);
        match rule.find(&name) {
            Some(decl) => number_with_unit(decl.value, field_unit(field))
                .map(Some)
                .ok_or_else(|| self.invalid(decl)),
            None => Ok(None),
        }
    }
}

/// Recover the design encoded in a stylesheet
///
/// The element rule is the first rule declaring `--primary-color`. The
/// parent is the first other rule with a `background-color` that parses as
/// a color. A design is glass when `--blur` or `--opacity` is present.
/// Missing variables keep their default values, and colors count as linked
/// when the parent background equals the primary color.
pub fn import_stylesheet(css: &str) -> Result<ImportedStylesheet> {
    let (_, rules) = stylesheet(css).finish().map_err(|err| {
        let (line, column) = err
            .errors
            .first()
            .map(|(fragment, _)| calculate_position(css, fragment))
            .unwrap_or((1, 1));
        ImportError::Syntax {
            line,
            column,
            message: format_verbose_error(&err),
        }
    })?;

    let importer = Importer { source: css };
    let element = rules
        .iter()
        .find(|rule| rule.find(PRIMARY_COLOR_VAR).is_some())
        .ok_or(ImportError::MissingElementRule)?;

    let mut params = ParameterVector::default();
    if let Some(decl) = element.find(PRIMARY_COLOR_VAR) {
        params.primary_color = importer.color(decl)?;
    }

    for (field, slot) in [
        (Field::Size, &mut params.size),
        (Field::CornerRadius, &mut params.corner_radius_percent),
        (Field::Bevel, &mut params.bevel_width),
        (Field::Angle, &mut params.light_angle_degrees),
        (Field::Elevation, &mut params.elevation),
        (Field::Intensity, &mut params.intensity),
        (Field::Diffusion, &mut params.diffusion),
    ] {
        if let Some(value) = importer.field(element, field)? {
            *slot = value;
        }
    }

    let blurriness = importer.field(element, Field::Blurriness)?;
    let translucency = importer.field(element, Field::Translucency)?;
    if blurriness.is_some() || translucency.is_some() {
        let defaults = GlassSettings::default();
        params.material = Material::Glass(GlassSettings {
            blurriness: blurriness.unwrap_or(defaults.blurriness),
            translucency: translucency.unwrap_or(defaults.translucency),
        });
    }

    let mut parent_selector = None;
    params.background_color = params.primary_color;
    for rule in rules.iter().filter(|rule| !std::ptr::eq(*rule, element)) {
        if let Some(decl) = rule.find("background-color") {
            if let Ok(color) = decl.value.parse::<Rgb>() {
                params.background_color = color;
                parent_selector = Some(rule.selector.to_string());
                break;
            }
        }
    }
    params.color_linked = params.background_color == params.primary_color;

    debug!(
        selector = element.selector,
        material = params.material.name(),
        linked = params.color_linked,
        "stylesheet imported"
    );

    Ok(ImportedStylesheet {
        params,
        selector: element.selector.to_string(),
        parent_selector,
    })
}
