use std::fmt;
use std::str::FromStr;

use knuffel::errors::DecodeError;

/// Discrete size of a column (width) or of a window inside a column (height).
///
/// Every token but `Free` is a fraction of the space available along that axis. `Free` means the
/// size was set by a manual resize and is kept in pixels until a standard size is requested
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardSize {
    OneEighth,
    OneSixth,
    OneFourth,
    OneThird,
    ThreeEighths,
    OneHalf,
    FiveEighths,
    TwoThirds,
    ThreeQuarters,
    FiveSixths,
    SevenEighths,
    One,
    Free,
}

impl StandardSize {
    /// Standardized sizes in ascending order.
    pub const ALL: [StandardSize; 12] = [
        Self::OneEighth,
        Self::OneSixth,
        Self::OneFourth,
        Self::OneThird,
        Self::ThreeEighths,
        Self::OneHalf,
        Self::FiveEighths,
        Self::TwoThirds,
        Self::ThreeQuarters,
        Self::FiveSixths,
        Self::SevenEighths,
        Self::One,
    ];

    /// Fraction of the available space, or `None` for [`StandardSize::Free`].
    pub fn proportion(self) -> Option<f64> {
        let proportion = match self {
            Self::OneEighth => 1. / 8.,
            Self::OneSixth => 1. / 6.,
            Self::OneFourth => 1. / 4.,
            Self::OneThird => 1. / 3.,
            Self::ThreeEighths => 3. / 8.,
            Self::OneHalf => 1. / 2.,
            Self::FiveEighths => 5. / 8.,
            Self::TwoThirds => 2. / 3.,
            Self::ThreeQuarters => 3. / 4.,
            Self::FiveSixths => 5. / 6.,
            Self::SevenEighths => 7. / 8.,
            Self::One => 1.,
            Self::Free => return None,
        };
        Some(proportion)
    }

    pub fn is_free(self) -> bool {
        self == Self::Free
    }

    fn name(self) -> &'static str {
        match self {
            Self::OneEighth => "one-eighth",
            Self::OneSixth => "one-sixth",
            Self::OneFourth => "one-fourth",
            Self::OneThird => "one-third",
            Self::ThreeEighths => "three-eighths",
            Self::OneHalf => "one-half",
            Self::FiveEighths => "five-eighths",
            Self::TwoThirds => "two-thirds",
            Self::ThreeQuarters => "three-quarters",
            Self::FiveSixths => "five-sixths",
            Self::SevenEighths => "seven-eighths",
            Self::One => "one",
            Self::Free => "free",
        }
    }
}

impl fmt::Display for StandardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStandardSize(pub String);

impl fmt::Display for UnknownStandardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown size `{}`", self.0)
    }
}

impl std::error::Error for UnknownStandardSize {}

impl FromStr for StandardSize {
    type Err = UnknownStandardSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .chain([Self::Free])
            .find(|size| size.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStandardSize(s.to_owned()))
    }
}

impl<S: knuffel::traits::ErrorSpan> knuffel::DecodeScalar<S> for StandardSize {
    fn type_check(
        type_name: &Option<knuffel::span::Spanned<knuffel::ast::TypeName, S>>,
        ctx: &mut knuffel::decode::Context<S>,
    ) {
        if let Some(type_name) = &type_name {
            ctx.emit_error(DecodeError::unexpected(
                type_name,
                "type name",
                "no type name expected for this node",
            ));
        }
    }

    fn raw_decode(
        val: &knuffel::span::Spanned<knuffel::ast::Literal, S>,
        ctx: &mut knuffel::decode::Context<S>,
    ) -> Result<StandardSize, DecodeError<S>> {
        match &**val {
            knuffel::ast::Literal::String(ref s) => match s.parse() {
                Ok(size) => Ok(size),
                Err(err) => {
                    ctx.emit_error(DecodeError::unexpected(
                        val,
                        "standard size",
                        format!("{err}, expected one of one-eighth, one-sixth, one-fourth, \
                                 one-third, three-eighths, one-half, five-eighths, two-thirds, \
                                 three-quarters, five-sixths, seven-eighths, one, free"),
                    ));
                    Ok(Self::One)
                }
            },
            _ => {
                ctx.emit_error(DecodeError::unsupported(val, "sizes must be strings"));
                Ok(Self::One)
            }
        }
    }
}
