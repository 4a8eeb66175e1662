// crates/swissmatch-core/src/key.rs

//! # Lookup keys
//!
//! Humans hand us identifiers in many shapes: `8000`, `"8000"`, `"800000"`,
//! `"Zürich"`. This module is the only place that looks at those shapes.
//! Loose caller input arrives as an [`Arg`] and is classified into a tagged
//! key ([`CantonKey`], [`ZipCodeKey`], [`ZipCodesQuery`]) which the indices
//! then resolve without any further inspection.

use crate::error::{Error, Result};

/// A loosely typed caller-supplied argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    Int(i64),
    Text(&'a str),
    /// A value of a kind no lookup accepts; carries the kind for the error message.
    Unsupported(&'static str),
}

macro_rules! arg_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg<'_> {
                fn from(n: $t) -> Self {
                    i64::try_from(n).map_or(Arg::Unsupported("integer out of range"), Arg::Int)
                }
            }
        )*
    };
}

arg_from_int!(i32, i64, u8, u16, u32, u64, usize);

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Text(s)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(s: &'a String) -> Self {
        Arg::Text(s.as_str())
    }
}

#[cfg(feature = "json")]
impl<'a> From<&'a serde_json::Value> for Arg<'a> {
    fn from(v: &'a serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Number(n) => n.as_i64().map_or(Arg::Unsupported("float"), Arg::Int),
            Value::String(s) => Arg::Text(s),
            Value::Null => Arg::Unsupported("null"),
            Value::Bool(_) => Arg::Unsupported("boolean"),
            Value::Array(_) => Arg::Unsupported("array"),
            Value::Object(_) => Arg::Unsupported("object"),
        }
    }
}

impl Arg<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Arg::Int(_) => "integer",
            Arg::Text(_) => "string",
            Arg::Unsupported(kind) => kind,
        }
    }
}

/// Shape of a text argument.
enum Shape<'a> {
    Digits(&'a str),
    Name(&'a str),
}

fn shape(s: &str) -> Result<Shape<'_>> {
    let t = s.trim();
    if t.is_empty() {
        return Err(Error::invalid("empty string"));
    }
    if t.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(Shape::Digits(t));
    }
    // full-width and other non-ASCII digits are never coerced
    if t.chars().all(char::is_numeric) {
        return Err(Error::invalid(format!("non-ASCII digits in {s:?}")));
    }
    Ok(Shape::Name(t))
}

fn parse_digits<T: std::str::FromStr>(d: &str, what: &str) -> Result<T> {
    d.parse()
        .map_err(|_| Error::invalid(format!("{what} out of range: {d}")))
}

fn code_from_int(n: i64) -> Result<u16> {
    if (1000..=9999).contains(&n) {
        Ok(n as u16)
    } else {
        Err(Error::invalid(format!("zip code must have 4 digits, got {n}")))
    }
}

fn add_on_from_int(n: i64) -> Result<u8> {
    if (0..=99).contains(&n) {
        Ok(n as u8)
    } else {
        Err(Error::invalid(format!("zip code add-on must have 2 digits, got {n}")))
    }
}

fn ordering_number_from_int(n: i64) -> Result<u32> {
    u32::try_from(n)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| Error::invalid(format!("invalid ordering number {n}")))
}

fn split_full_code(n: u32) -> Result<(u16, u8)> {
    Ok((code_from_int(i64::from(n / 100))?, (n % 100) as u8))
}

/// A 4 digit zip code given as integer or 4 digit string.
pub fn parse_code(arg: Arg<'_>) -> Result<u16> {
    match arg {
        Arg::Int(n) => code_from_int(n),
        Arg::Text(s) => match shape(s)? {
            Shape::Digits(d) if d.len() == 4 => code_from_int(parse_digits(d, "zip code")?),
            _ => Err(Error::invalid(format!("not a 4 digit zip code: {s:?}"))),
        },
        other => Err(Error::invalid(format!("zip code cannot be a {}", other.kind()))),
    }
}

/// A community number given as integer or digit string.
pub fn parse_community_number(arg: Arg<'_>) -> Result<u32> {
    let n = match arg {
        Arg::Int(n) => n,
        Arg::Text(s) => match shape(s)? {
            Shape::Digits(d) => parse_digits(d, "community number")?,
            Shape::Name(_) => {
                return Err(Error::invalid(format!("not a community number: {s:?}")))
            }
        },
        other => {
            return Err(Error::invalid(format!(
                "community number cannot be a {}",
                other.kind()
            )))
        }
    };
    u32::try_from(n).map_err(|_| Error::invalid(format!("invalid community number {n}")))
}

/// Canton identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CantonKey<'a> {
    Abbreviation(&'a str),
    PlateCode(u16),
}

impl<'a> CantonKey<'a> {
    pub fn parse(arg: Arg<'a>) -> Result<Self> {
        match arg {
            Arg::Int(n) => u16::try_from(n)
                .map(CantonKey::PlateCode)
                .map_err(|_| Error::invalid(format!("invalid plate code {n}"))),
            Arg::Text(s) => match shape(s)? {
                Shape::Digits(d) => Ok(CantonKey::PlateCode(parse_digits(d, "plate code")?)),
                Shape::Name(abbreviation) => Ok(CantonKey::Abbreviation(abbreviation)),
            },
            other => Err(Error::invalid(format!("canton cannot be a {}", other.kind()))),
        }
    }
}

/// Key that identifies at most one zip code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipCodeKey<'a> {
    OrderingNumber(u32),
    CodeAndAddOn { code: u16, add_on: u8 },
    CodeAndName { code: u16, name: &'a str },
}

impl<'a> ZipCodeKey<'a> {
    /// Classify `zip_code(code, add_on_or_name)` style arguments.
    ///
    /// A lone number is the **ordering number**, not the 4 digit code, except
    /// for the 6 digit combined form (`800000` = 8000 with add-on 00).
    pub fn parse(code: Arg<'a>, add_on_or_name: Option<Arg<'a>>) -> Result<Self> {
        let Some(second) = add_on_or_name else {
            return Self::parse_single(code);
        };
        let code = parse_code(code)?;
        match second {
            Arg::Int(n) => Ok(ZipCodeKey::CodeAndAddOn {
                code,
                add_on: add_on_from_int(n)?,
            }),
            Arg::Text(s) => match shape(s)? {
                Shape::Digits(d) if d.len() == 2 => Ok(ZipCodeKey::CodeAndAddOn {
                    code,
                    add_on: parse_digits(d, "add-on")?,
                }),
                Shape::Digits(d) => Err(Error::invalid(format!(
                    "zip code add-on must have 2 digits, got {d:?}"
                ))),
                Shape::Name(name) => Ok(ZipCodeKey::CodeAndName { code, name }),
            },
            other => Err(Error::invalid(format!(
                "second argument must be an add-on or a name, not a {}",
                other.kind()
            ))),
        }
    }

    fn parse_single(arg: Arg<'a>) -> Result<Self> {
        let n: i64 = match arg {
            Arg::Int(n) => n,
            Arg::Text(s) => match shape(s)? {
                Shape::Digits(d) => {
                    let n = parse_digits(d, "ordering number")?;
                    if d.len() != 6 {
                        return ordering_number_from_int(n).map(ZipCodeKey::OrderingNumber);
                    }
                    n
                }
                Shape::Name(_) => {
                    return Err(Error::invalid(format!(
                        "a single argument must be an ordering number, got {s:?}"
                    )))
                }
            },
            other => {
                return Err(Error::invalid(format!(
                    "zip code cannot be a {}",
                    other.kind()
                )))
            }
        };
        if (100_000..=999_999).contains(&n) {
            let (code, add_on) = split_full_code(n as u32)?;
            Ok(ZipCodeKey::CodeAndAddOn { code, add_on })
        } else {
            ordering_number_from_int(n).map(ZipCodeKey::OrderingNumber)
        }
    }
}

/// Query for a list of zip codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipCodesQuery<'a> {
    All,
    Code(u16),
    Name(&'a str),
}

impl<'a> ZipCodesQuery<'a> {
    pub fn parse(code_or_name: Option<Arg<'a>>) -> Result<Self> {
        match code_or_name {
            None => Ok(ZipCodesQuery::All),
            Some(Arg::Int(n)) => code_from_int(n).map(ZipCodesQuery::Code),
            Some(Arg::Text(s)) => match shape(s)? {
                Shape::Digits(d) if d.len() == 4 => {
                    code_from_int(parse_digits(d, "zip code")?).map(ZipCodesQuery::Code)
                }
                Shape::Digits(d) => Err(Error::invalid(format!("not a 4 digit zip code: {d:?}"))),
                Shape::Name(name) => Ok(ZipCodesQuery::Name(name)),
            },
            Some(other) => Err(Error::invalid(format!(
                "expected a zip code or a name, not a {}",
                other.kind()
            ))),
        }
    }
}
