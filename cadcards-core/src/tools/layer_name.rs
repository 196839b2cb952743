//! Layer-name builder
//!
//! CAD layer names are six dash-joined tiers, each drawn from a fixed
//! vocabulary: `DISCIPLINE-CATEGORY-ELEMENT-MODIFIER-STATUS-TYPE`, e.g.
//! `CIV-UTIL-STRM-MAIN-PROP-LIN`. One modifier (`P-LINE`) itself contains a
//! dash, so parsing matches whole options rather than splitting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CadcardsError, Result};

/// One tier of a layer name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerPart {
    Discipline,
    Category,
    Element,
    Modifier,
    Status,
    Type,
}

impl LayerPart {
    /// Tiers in name order
    pub const ALL: [LayerPart; 6] = [
        LayerPart::Discipline,
        LayerPart::Category,
        LayerPart::Element,
        LayerPart::Modifier,
        LayerPart::Status,
        LayerPart::Type,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerPart::Discipline => "discipline",
            LayerPart::Category => "category",
            LayerPart::Element => "element",
            LayerPart::Modifier => "modifier",
            LayerPart::Status => "status",
            LayerPart::Type => "type",
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            LayerPart::Discipline => &["CIV", "SUR", "LND", "GEN", "GIS"],
            LayerPart::Category => &["UTIL", "TRAN", "ENV", "CTRL", "BNDY", "ANNO"],
            LayerPart::Element => &["STRM", "SANI", "WATR", "FIRE", "PVMT", "TREE", "GRAD", "VEG"],
            LayerPart::Modifier => &["MAIN", "LATR", "FITT", "MH", "VALV", "TEXT", "DIMS", "P-LINE"],
            LayerPart::Status => &["PROP", "EXST", "DEMO", "FUTR", "TEMP"],
            LayerPart::Type => &["LIN", "BLK", "PNT", "PAT", "TXT", "SHT", "DTL"],
        }
    }

    /// Plain-language question the tier answers
    pub fn help(&self) -> &'static str {
        match self {
            LayerPart::Discipline => "Who is responsible for this object? (e.g., Civil vs Survey)",
            LayerPart::Category => "Which major system does this belong to? (e.g., Utilities)",
            LayerPart::Element => "What is the object physically? (e.g., Pipe, Manhole)",
            LayerPart::Modifier => "Which specific detail sets it apart? (e.g., Main, Valve)",
            LayerPart::Status => "When does this exist? (e.g., Existing, New, Future)",
            LayerPart::Type => "How is it drawn? (e.g., Line, Text, Block)",
        }
    }

    /// Canonical spelling of `value`, matched case-insensitively
    pub fn resolve(&self, value: &str) -> Result<&'static str> {
        let value = value.trim();
        self.options()
            .iter()
            .find(|opt| opt.eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| {
                CadcardsError::LayerPart(format!(
                    "'{value}' is not a valid {} (expected one of {})",
                    self.as_str(),
                    self.options().join(", ")
                ))
            })
    }
}

impl fmt::Display for LayerPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated six-tier layer name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerName {
    parts: [&'static str; 6],
}

impl Default for LayerName {
    /// `CIV-UTIL-STRM-MAIN-PROP-LIN`
    fn default() -> Self {
        Self {
            parts: ["CIV", "UTIL", "STRM", "MAIN", "PROP", "LIN"],
        }
    }
}

impl LayerName {
    pub fn get(&self, part: LayerPart) -> &'static str {
        self.parts[part as usize]
    }

    /// Replace one tier, rejecting values outside its vocabulary
    pub fn set(&mut self, part: LayerPart, value: &str) -> Result<()> {
        self.parts[part as usize] = part.resolve(value)?;
        Ok(())
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, part: LayerPart, value: &str) -> Result<Self> {
        self.set(part, value)?;
        Ok(self)
    }
}

impl fmt::Display for LayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join("-"))
    }
}

impl FromStr for LayerName {
    type Err = CadcardsError;

    fn from_str(s: &str) -> Result<Self> {
        let mut rest = s.trim();
        let mut name = LayerName::default();

        for (i, part) in LayerPart::ALL.into_iter().enumerate() {
            let last = i + 1 == LayerPart::ALL.len();
            let matched = part.options().iter().copied().find(|opt| {
                rest.len() >= opt.len()
                    && rest.is_char_boundary(opt.len())
                    && rest[..opt.len()].eq_ignore_ascii_case(opt)
                    && if last {
                        rest.len() == opt.len()
                    } else {
                        rest[opt.len()..].starts_with('-')
                    }
            });

            let Some(opt) = matched else {
                let shown = rest.split('-').next().unwrap_or(rest);
                return Err(part.resolve(shown).err().unwrap_or_else(|| {
                    CadcardsError::LayerPart(format!("malformed layer name '{s}'"))
                }));
            };

            name.parts[i] = opt;
            rest = if last { "" } else { &rest[opt.len() + 1..] };
        }

        Ok(name)
    }
}
