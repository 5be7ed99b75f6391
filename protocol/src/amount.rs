//! # XRP Amount Conversion
//!
//! Conversion between drops (the indivisible native unit) and XRP (what
//! humans type). One XRP is one million drops.
//!
//! Everything here works on decimal digit strings. No `f64` gets anywhere
//! near an amount: `0.1 + 0.2` is a fun party trick until it's somebody's
//! balance. Inputs are parsed into sign + integer digits + fraction digits,
//! the decimal point is shifted by six places, and the result is rendered
//! back in its shortest form.
//!
//! Accepted syntax is `^-?[0-9]*\.?[0-9]*$` with at least one digit, so
//! `"1."`, `".5"` and `"-0"` are all fine, while `"1e6"`, `"1,000"` and `"."`
//! are not.

use std::borrow::Cow;
use thiserror::Error;

use crate::config::XRP_DECIMAL_PLACES;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while converting amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The input is not a plain decimal number.
    #[error("invalid value '{0}': expected a decimal number matching ^-?[0-9]*\\.?[0-9]*$")]
    InvalidValue(String),

    /// The input has more precision than the target unit can represent.
    #[error("value '{0}' has too many decimal places")]
    TooManyDecimalPlaces(String),
}

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Values that can be handed to [`drops_to_xrp`] and [`xrp_to_drops`].
///
/// Strings are parsed as written. Integer types are exact by construction
/// and go through their `Display` rendering.
pub trait ToDecimalString {
    /// Renders the value as a decimal string.
    fn to_decimal_string(&self) -> Cow<'_, str>;
}

impl ToDecimalString for str {
    fn to_decimal_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ToDecimalString for String {
    fn to_decimal_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

macro_rules! impl_to_decimal_string_for_ints {
    ($($t:ty),*) => {
        $(
            impl ToDecimalString for $t {
                fn to_decimal_string(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_to_decimal_string_for_ints!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

// ---------------------------------------------------------------------------
// Decimal parsing
// ---------------------------------------------------------------------------

/// A parsed decimal: sign, integer digits and fraction digits, each with
/// insignificant zeros stripped (leading zeros of the integer part,
/// trailing zeros of the fraction).
#[derive(Debug, PartialEq, Eq)]
struct Decimal {
    negative: bool,
    integer: String,
    fraction: String,
}

impl Decimal {
    fn parse(input: &str) -> Result<Self, AmountError> {
        let invalid = || AmountError::InvalidValue(input.to_string());

        let (negative, unsigned) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integer) || !all_digits(fraction) {
            return Err(invalid());
        }
        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            negative,
            integer: integer.trim_start_matches('0').to_string(),
            fraction: fraction.trim_end_matches('0').to_string(),
        })
    }

    /// Renders sign + digits with the decimal point `scale` places from the
    /// right of `digits`, in shortest form. Negative zero renders as `"0"`.
    fn render(negative: bool, digits: &str, scale: usize) -> String {
        let digits = digits.trim_start_matches('0');
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (integer, fraction) = padded.split_at(padded.len() - scale);

        let integer = match integer.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        let fraction = fraction.trim_end_matches('0');

        let is_zero = integer == "0" && fraction.is_empty();
        let sign = if negative && !is_zero { "-" } else { "" };

        if fraction.is_empty() {
            format!("{}{}", sign, integer)
        } else {
            format!("{}{}.{}", sign, integer, fraction)
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Converts an amount of drops to XRP.
///
/// Fails with [`AmountError::TooManyDecimalPlaces`] if the input describes a
/// fractional number of drops, and with [`AmountError::InvalidValue`] on
/// malformed syntax.
///
/// # Examples
///
/// ```
/// use xrpl_protocol::amount::drops_to_xrp;
///
/// assert_eq!(drops_to_xrp("1").unwrap(), "0.000001");
/// assert_eq!(drops_to_xrp(&2_500_000u64).unwrap(), "2.5");
/// assert_eq!(drops_to_xrp("-0").unwrap(), "0");
/// ```
pub fn drops_to_xrp<V: ToDecimalString + ?Sized>(drops: &V) -> Result<String, AmountError> {
    let input = drops.to_decimal_string();
    let parsed = Decimal::parse(&input)?;

    if !parsed.fraction.is_empty() {
        return Err(AmountError::TooManyDecimalPlaces(input.into_owned()));
    }

    Ok(Decimal::render(
        parsed.negative,
        &parsed.integer,
        XRP_DECIMAL_PLACES,
    ))
}

/// Converts an amount of XRP to drops.
///
/// Fails with [`AmountError::TooManyDecimalPlaces`] if the input has more
/// than six significant fractional digits, and with
/// [`AmountError::InvalidValue`] on malformed syntax.
///
/// # Examples
///
/// ```
/// use xrpl_protocol::amount::xrp_to_drops;
///
/// assert_eq!(xrp_to_drops("1").unwrap(), "1000000");
/// assert_eq!(xrp_to_drops("0.000001").unwrap(), "1");
/// assert!(xrp_to_drops("1.1234567").is_err());
/// ```
pub fn xrp_to_drops<V: ToDecimalString + ?Sized>(xrp: &V) -> Result<String, AmountError> {
    let input = xrp.to_decimal_string();
    let parsed = Decimal::parse(&input)?;

    if parsed.fraction.len() > XRP_DECIMAL_PLACES {
        return Err(AmountError::TooManyDecimalPlaces(input.into_owned()));
    }

    let digits = format!(
        "{}{:0<width$}",
        parsed.integer,
        parsed.fraction,
        width = XRP_DECIMAL_PLACES
    );
    Ok(Decimal::render(parsed.negative, &digits, 0))
}
