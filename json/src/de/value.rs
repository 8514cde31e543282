//! Value list deserialization helpers
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// A person name in its JSON form,
/// made of up to three component groups.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DicomJsonPerson {
    #[serde(rename = "Alphabetic")]
    alphabetic: Option<String>,
    #[serde(rename = "Ideographic")]
    ideographic: Option<String>,
    #[serde(rename = "Phonetic")]
    phonetic: Option<String>,
}

impl fmt::Display for DicomJsonPerson {
    /// Writes the name in its textual form,
    /// with component groups separated by `=`
    /// and trailing empty groups left out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = [&self.alphabetic, &self.ideographic, &self.phonetic];
        let last = groups.iter().rposition(|g| g.is_some()).map_or(0, |i| i + 1);
        for (i, group) in groups[..last].iter().enumerate() {
            if i > 0 {
                f.write_str("=")?;
            }
            if let Some(group) = group {
                f.write_str(group)?;
            }
        }
        Ok(())
    }
}

/// A reference to bulk data held elsewhere.
///
/// Only recognized so that it can be skipped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BulkDataUri(#[allow(dead_code)] String);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText<N> {
    Number(N),
    Text(String),
}

impl<N> NumberOrText<N>
where
    N: Clone,
    N: FromStr,
{
    pub fn to_num(&self) -> Result<N, <N as FromStr>::Err> {
        match self {
            NumberOrText::Number(num) => Ok(num.clone()),
            NumberOrText::Text(text) => text.trim().parse(),
        }
    }
}
