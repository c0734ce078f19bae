use crate::types::Codepoint;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// An ordered list of code points identifying a single emoji.
///
/// The textual form is each code point in hex, joined by underscores
/// (e.g. `1f468_200d_1f4bb`). Parsing accepts either case; rendering is
/// always lowercase and zero-padded to at least four digits.
///
/// Ordering is element-wise, with a shorter sequence sorting before any
/// longer sequence it is a prefix of.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodepointSequence(Vec<Codepoint>);

impl CodepointSequence {
    pub fn new(codepoints: Vec<Codepoint>) -> Self {
        Self(codepoints)
    }

    pub fn codepoints(&self) -> &[Codepoint] {
        &self.0
    }
}

impl FromStr for CodepointSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let codepoints = s
            .split('_')
            .map(|part| {
                // `from_str_radix` tolerates a leading sign; code points never carry one
                if part.is_empty() || part.starts_with(&['+', '-'][..]) {
                    return Err(Error::ParserError(format!(
                        "invalid code point sequence '{}'",
                        s
                    )));
                }

                Codepoint::from_str_radix(part, 16).map_err(|e| {
                    Error::ParserError(format!("invalid code point sequence '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<Codepoint>, Error>>()?;

        Ok(Self(codepoints))
    }
}

impl fmt::Display for CodepointSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, codepoint) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("_")?;
            }
            write!(f, "{:04x}", codepoint)?;
        }
        Ok(())
    }
}
