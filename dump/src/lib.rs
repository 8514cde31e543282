#![allow(clippy::derive_partial_eq_without_eq)]
//! Data set dumping library
//!
//! This is a helper library
//! for dumping the contents of data sets and their elements
//! in a human readable way.
//!
//! # Examples
//!
//! A quick and easy way to dump the contents of a data set
//! is via [`dump_object`]
//! (or [`dump_object_to`] to print to an arbitrary writer).
//!
//! ```
//! use dcmset_object::DataSet;
//! use dcmset_dump::dump_object;
//!
//! let mut data_set = DataSet::new();
//! data_set.add_value("PatientName", "Doe^John")?;
//! dump_object(&data_set)?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
//!
//! See the [`DumpOptions`] builder for additional dumping options.
//!
//! ```
//! # use dcmset_object::DataSet;
//! use dcmset_dump::DumpOptions;
//!
//! # let data_set = DataSet::new();
//! let mut options = DumpOptions::new();
//! // dump to stdout (width = 100)
//! options.width(100).dump_object(&data_set)?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
use dcmset_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmset_core::value::Value;
use dcmset_core::{Tag, VR};
use dcmset_object::{DataSet, InMemElement};
use owo_colors::*;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::io::{stdout, Result as IoResult, Write};
use std::str::FromStr;

/// Options and flags to configure how to dump a data set.
///
/// This is a builder which exposes the various options available
/// for printing the contents of a data set in a readable way.
///
/// Once set up,
/// the [`dump_object`] or [`dump_object_to`] methods can be used
/// to finalize the dumping process.
///
/// [`dump_object`]: DumpOptions::dump_object
/// [`dump_object_to`]: DumpOptions::dump_object_to
///
/// # Example
///
/// ```
/// # use dcmset_object::DataSet;
/// use dcmset_dump::{ColorMode, DumpOptions};
///
/// # let data_set = DataSet::new();
/// let mut options = DumpOptions::new();
/// options
///     // maximum 120 characters per line
///     .width(120)
///     // no limit for text values
///     .no_text_limit(true)
///     // never print colored output
///     .color_mode(ColorMode::Never)
///     // dump to stdout
///     .dump_object(&data_set)?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct DumpOptions {
    /// whether to produce colored output
    pub color: ColorMode,
    /// the console width to assume when trimming long values
    pub width: Option<u32>,
    /// never trim out long text values
    pub no_text_limit: bool,
    /// never trim out any values (implies `no_text_limit`)
    pub no_limit: bool,
}

impl DumpOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the maximum output width in number of characters.
    pub fn width(&mut self, width: u32) -> &mut Self {
        self.width = Some(width);
        self
    }

    /// Set the maximum output width to automatic.
    ///
    /// This is the default behavior.
    /// When dumping to standard output,
    /// the width is based on the terminal size,
    /// or 120 characters if it could not be determined.
    /// The method [`dump_object_to`](Self::dump_object_to)
    /// prints everything to the end under this option.
    pub fn width_auto(&mut self) -> &mut Self {
        self.width = None;
        self
    }

    /// Set whether to remove the maximum width restriction for text values.
    pub fn no_text_limit(&mut self, no_text_limit: bool) -> &mut Self {
        self.no_text_limit = no_text_limit;
        self
    }

    /// Set whether to remove the maximum width restriction
    /// for all values.
    pub fn no_limit(&mut self, no_limit: bool) -> &mut Self {
        self.no_limit = no_limit;
        self
    }

    /// Set the output color mode.
    pub fn color_mode(&mut self, color: ColorMode) -> &mut Self {
        self.color = color;
        self
    }

    /// Dump the contents of a data set to standard output.
    #[inline]
    pub fn dump_object<D>(&self, obj: &DataSet<D>) -> IoResult<()>
    where
        D: DataDictionary,
    {
        self.dump_object_impl(stdout(), obj, true)
    }

    /// Dump the contents of a data set to the given writer.
    #[inline]
    pub fn dump_object_to<D>(&self, to: impl Write, obj: &DataSet<D>) -> IoResult<()>
    where
        D: DataDictionary,
    {
        self.dump_object_impl(to, obj, false)
    }

    fn dump_object_impl<D>(
        &self,
        mut to: impl Write,
        obj: &DataSet<D>,
        to_stdout: bool,
    ) -> IoResult<()>
    where
        D: DataDictionary,
    {
        match (self.color, to_stdout) {
            (ColorMode::Never, _) => owo_colors::set_override(false),
            (ColorMode::Always, _) => owo_colors::set_override(true),
            (ColorMode::Auto, false) => owo_colors::set_override(false),
            (ColorMode::Auto, true) => owo_colors::unset_override(),
        }

        let (width, no_limit) = match (self.width, to_stdout) {
            (Some(width), _) => (width, self.no_limit),
            (None, true) => (determine_width(None), self.no_limit),
            (None, false) => (u32::MAX, true),
        };

        if !obj.transfer_syntax().is_empty() {
            writeln!(
                to,
                "{}: {}",
                "Transfer Syntax".if_supports_color(Stream::Stdout, |v| v.bold()),
                obj.transfer_syntax().trim_end_matches(whitespace_or_null),
            )?;
            writeln!(to, "{:-<58}", "")?;
        }

        let limits = Limits {
            width,
            no_text_limit: self.no_text_limit,
            no_limit,
        };
        dump(&mut to, obj, obj.dictionary(), limits, 0)?;

        Ok(())
    }
}

/// Enumeration of output coloring modes.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ColorMode {
    /// Produce colored output if supported by the destination
    /// (namely, if the destination is a terminal).
    /// When calling [`dump_object_to`](DumpOptions::dump_object_to),
    /// the output will not be colored.
    ///
    /// This is the default behavior.
    #[default]
    Auto,
    /// Never produce colored output.
    Never,
    /// Always produce colored output.
    Always,
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Never => f.write_str("never"),
            ColorMode::Auto => f.write_str("auto"),
            ColorMode::Always => f.write_str("always"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = ColorModeError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "never" => Ok(ColorMode::Never),
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            _ => Err(ColorModeError),
        }
    }
}

/// The error raised when providing an invalid color mode.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct ColorModeError;

impl Display for ColorModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid color mode")
    }
}

impl std::error::Error for ColorModeError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DumpValue<T>
where
    T: ToString,
{
    TagNum(T),
    Alias(T),
    Num(T),
    Str(T),
    DateTime(T),
    Nothing,
}

impl<T> fmt::Display for DumpValue<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_value_with_width(value: impl fmt::Display, f: &mut fmt::Formatter) -> fmt::Result {
            if let Some(width) = f.width() {
                write!(f, "{:width$}", value, width = width)
            } else {
                write!(f, "{}", value)
            }
        }

        match self {
            DumpValue::TagNum(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.dimmed());
                write_value_with_width(value, f)
            }
            DumpValue::Alias(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.bold());
                write_value_with_width(value, f)
            }
            DumpValue::Num(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.cyan());
                write_value_with_width(value, f)
            }
            DumpValue::Str(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.yellow());
                write_value_with_width(value, f)
            }
            DumpValue::DateTime(v) => {
                let value = v.if_supports_color(Stream::Stdout, |v| v.green());
                write_value_with_width(value, f)
            }
            DumpValue::Nothing => {
                let value = "(no value)".if_supports_color(Stream::Stdout, |v| v.italic());
                write_value_with_width(value, f)
            }
        }
    }
}

/// Dump the contents of a data set to stdout.
pub fn dump_object<D>(obj: &DataSet<D>) -> IoResult<()>
where
    D: DataDictionary,
{
    DumpOptions::new().dump_object(obj)
}

/// Dump the contents of a data set to the given writer.
pub fn dump_object_to<D>(to: impl Write, obj: &DataSet<D>) -> IoResult<()>
where
    D: DataDictionary,
{
    DumpOptions::new().dump_object_to(to, obj)
}

#[inline]
fn whitespace_or_null(c: char) -> bool {
    c.is_whitespace() || c == '\0'
}

/// The resolved trimming settings of one dump.
#[derive(Debug, Clone, Copy)]
struct Limits {
    width: u32,
    no_text_limit: bool,
    no_limit: bool,
}

fn dump<W, D, E>(
    to: &mut W,
    obj: &DataSet<E>,
    dict: &D,
    limits: Limits,
    depth: u32,
) -> IoResult<()>
where
    W: ?Sized + Write,
    D: DataDictionary,
{
    for (tag, elem) in obj {
        dump_element(&mut *to, tag, elem, dict, limits, depth)?;
    }

    Ok(())
}

fn dump_element<W, D, E>(
    to: &mut W,
    tag: Tag,
    elem: &InMemElement<E>,
    dict: &D,
    limits: Limits,
    depth: u32,
) -> IoResult<()>
where
    W: ?Sized + Write,
    D: DataDictionary,
{
    let indent = vec![b' '; (depth * 2) as usize];
    let tag_alias = dict
        .by_tag(tag)
        .map(DataDictionaryEntry::alias)
        .unwrap_or("«Unknown Attribute»");
    to.write_all(&indent)?;
    let vm = elem.multiplicity();

    match elem.value() {
        Value::DataSets(items) => {
            writeln!(
                to,
                "{} {:28} {} ({} Item{})",
                DumpValue::TagNum(tag),
                DumpValue::Alias(tag_alias),
                elem.vr(),
                vm,
                if vm == 1 { "" } else { "s" },
            )?;
            for item in items {
                dump_item(&mut *to, item, dict, limits, depth + 1)?;
            }
            to.write_all(&indent)?;
            writeln!(
                to,
                "{} {}",
                DumpValue::TagNum("(FFFE,E0DD)"),
                DumpValue::Alias("SequenceDelimitationItem"),
            )?;
        }
        value => {
            let vr = elem.vr();
            writeln!(
                to,
                "{} {:28} {} ({}): {}",
                DumpValue::TagNum(tag),
                DumpValue::Alias(tag_alias),
                vr,
                vm,
                value_summary(value, vr, limits.width.saturating_sub(50 + depth * 2), limits),
            )?;
        }
    }

    Ok(())
}

fn dump_item<W, D, E>(
    to: &mut W,
    item: &DataSet<E>,
    dict: &D,
    limits: Limits,
    depth: u32,
) -> IoResult<()>
where
    W: ?Sized + Write,
    D: DataDictionary,
{
    let indent: String = "  ".repeat(depth as usize);
    writeln!(
        to,
        "{}{} na {}",
        indent,
        DumpValue::TagNum("(FFFE,E000)"),
        DumpValue::Alias("Item"),
    )?;
    dump(to, item, dict, limits, depth + 1)?;
    writeln!(
        to,
        "{}{} {}",
        indent,
        DumpValue::TagNum("(FFFE,E00D)"),
        DumpValue::Alias("ItemDelimitationItem"),
    )?;
    Ok(())
}

fn value_summary<I>(
    value: &Value<I>,
    vr: VR,
    max_characters: u32,
    limits: Limits,
) -> DumpValue<String> {
    if value.is_empty() {
        return DumpValue::Nothing;
    }

    let max_characters = match (limits.no_limit, limits.no_text_limit, value) {
        (true, _, _) => None,
        (false, true, Value::Strings(_)) => None,
        (false, _, _) => Some(max_characters),
    };
    match (value, vr) {
        (Value::Integers(values), _) => {
            DumpValue::Num(format_value_list(values, max_characters, false))
        }
        (Value::Reals(values), _) => DumpValue::Num(format_value_list(values, max_characters, false)),
        (Value::Strings(values), VR::DA | VR::DT | VR::TM) => DumpValue::DateTime(
            format_value_list(
                values
                    .iter()
                    .map(|s| s.trim_end_matches(whitespace_or_null)),
                max_characters,
                false,
            ),
        ),
        (Value::Strings(values), _) => DumpValue::Str(format_value_list(
            values
                .iter()
                .map(|s| s.trim_end_matches(whitespace_or_null)),
            max_characters,
            true,
        )),
        (Value::Binary(values), _) => DumpValue::Num(format_value_list(
            values.iter().map(|bytes| {
                bytes
                    .iter()
                    .map(|n| format!("{:02X}", n))
                    .collect::<Vec<_>>()
                    .join(" ")
            }),
            max_characters,
            false,
        )),
        (Value::DataSets(items), _) => DumpValue::Num(format!("{} items", items.len())),
    }
}

fn format_value_list<I>(values: I, max_characters: Option<u32>, quoted: bool) -> String
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: std::fmt::Display,
{
    let values = values.into_iter();
    let len = values.len();
    let mut acc_size = 0;
    let mut pieces = String::new();
    if len > 1 {
        pieces.push('[');
    }
    for piece in values {
        let mut piece = piece.to_string();
        // sanitize value piece
        piece = piece
            .replace('\n', "␊")
            .replace('\r', "␍")
            .replace('\0', "␀")
            .replace(|c: char| c.is_control(), "�");

        if acc_size > 0 {
            pieces.push_str(", ");
        }

        if quoted {
            piece = piece.replace('\"', "\\\"");
            pieces.push('"');
        }

        acc_size += piece.len();
        pieces.push_str(&piece);
        if quoted {
            pieces.push('"');
        }
        // stop earlier if applicable
        if max_characters
            .filter(|max| (*max as usize) < acc_size)
            .is_some()
        {
            break;
        }
    }
    if len > 1 {
        pieces.push(']');
    }
    if let Some(max_characters) = max_characters {
        cut_str(&pieces, max_characters).into_owned()
    } else {
        pieces
    }
}

fn cut_str(s: &str, max_characters: u32) -> Cow<str> {
    let max = (max_characters.saturating_sub(3)) as usize;
    let len = s.chars().count();

    if len > max {
        s.chars()
            .take(max)
            .chain("...".chars())
            .collect::<String>()
            .into()
    } else {
        s.into()
    }
}

/// Pick the output width:
/// the one given, else the terminal's, else 120.
pub fn determine_width(user_width: Option<u32>) -> u32 {
    user_width
        .or_else(|| terminal_size::terminal_size().map(|(width, _)| u32::from(width.0)))
        .unwrap_or(120)
}

#[cfg(test)]
mod tests {
    use dcmset_core::value::Value;
    use dcmset_core::{Tag, VR};
    use dcmset_dictionary_std::{tags, uids};
    use dcmset_object::DataSet;

    use super::{cut_str, whitespace_or_null};
    use crate::{ColorMode, DumpOptions};

    fn dump_lines(options: &mut DumpOptions, obj: &DataSet) -> Vec<String> {
        let mut out = Vec::new();
        options
            .color_mode(ColorMode::Never)
            .dump_object_to(&mut out, obj)
            .unwrap();
        std::str::from_utf8(&out)
            .expect("output is not valid UTF-8")
            .split('\n')
            .map(String::from)
            .collect()
    }

    fn check_line(line: &str, expected: (&str, &str, &str, &str)) {
        let parts: Vec<&str> = line.split(' ').filter(|p| !p.is_empty()).collect();
        let value = line.split_once(": ").unwrap().1.trim();
        assert_eq!(&parts[..3], &[expected.0, expected.1, expected.2]);
        assert_eq!(value, expected.3);
    }

    #[test]
    fn trims_all_whitespace() {
        assert_eq!("   ".trim_end_matches(whitespace_or_null), "");
        assert_eq!("\0".trim_end_matches(whitespace_or_null), "");
        assert_eq!("1.4.5.6\0".trim_end_matches(whitespace_or_null), "1.4.5.6");
        assert_eq!("AETITLE ".trim_end_matches(whitespace_or_null), "AETITLE");
    }

    #[test]
    fn cuts_long_strings() {
        assert_eq!(cut_str("short", 10), "short");
        assert_eq!(cut_str("a rather long value", 10), "a rathe...");
    }

    #[test]
    fn dump_object_to_covers_properties() {
        let mut obj = DataSet::new();
        obj.add_value(tags::SOP_INSTANCE_UID, "1.2.888.123").unwrap();
        obj.add_value(tags::STUDY_DATE, "20170101").unwrap();
        obj.add(tags::SERIES_DATE).unwrap();
        obj.add_value(tags::MODALITY, "OT").unwrap();
        obj.add_value(tags::IMAGE_TYPE, ["ORIGINAL", "PRIMARY"]).unwrap();
        obj.add_value(tags::PATIENT_NAME, "Doe^John").unwrap();
        obj.add_value(tags::ROWS, 3_i64).unwrap();
        obj.add_value(tags::PIXEL_SPACING, [0.5_f64, 0.25]).unwrap();
        obj.add_value_with_vr(Tag(0x0009, 0x1002), VR::UN, vec![0xCF_u8, 0x4C])
            .unwrap();
        obj.add_value(tags::PATIENT_ID, "Country Roads 1\nWest Virginia")
            .unwrap();

        let lines = dump_lines(&mut DumpOptions::new(), &obj);

        check_line(
            &lines[0],
            ("(0008,0018)", "SOPInstanceUID", "UI", "\"1.2.888.123\""),
        );
        check_line(&lines[1], ("(0008,0020)", "StudyDate", "DA", "20170101"));
        check_line(&lines[2], ("(0008,0021)", "SeriesDate", "DA", "(no value)"));
        check_line(&lines[3], ("(0008,0060)", "Modality", "CS", "\"OT\""));
        check_line(
            &lines[4],
            ("(0008,0008)", "ImageType", "CS", "[\"ORIGINAL\", \"PRIMARY\"]"),
        );
        check_line(&lines[5], ("(0010,0010)", "PatientName", "PN", "\"Doe^John\""));
        check_line(&lines[6], ("(0028,0010)", "Rows", "US", "3"));
        check_line(&lines[7], ("(0028,0030)", "PixelSpacing", "DS", "[0.5, 0.25]"));
        check_line(
            &lines[8],
            ("(0009,1002)", "«Unknown", "Attribute»", "CF 4C"),
        );
        check_line(
            &lines[9],
            (
                "(0010,0020)",
                "PatientID",
                "LO",
                "\"Country Roads 1␊West Virginia\"",
            ),
        );
        assert!(lines[4].contains("CS (2)"));
        assert_eq!(lines[10], "");
    }

    #[test]
    fn dump_nested_items() {
        let mut item = DataSet::new();
        item.add_value(tags::CODE_VALUE, "121071").unwrap();

        let mut obj = DataSet::new();
        obj.add_value(
            tags::CONCEPT_NAME_CODE_SEQUENCE,
            Value::new_sequence(vec![item]),
        )
        .unwrap();
        obj.add_value(tags::MODALITY, "SR").unwrap();

        let lines = dump_lines(&mut DumpOptions::new(), &obj);

        assert!(lines[0].starts_with("(0040,A043) ConceptNameCodeSequence"));
        assert!(lines[0].ends_with("SQ (1 Item)"));
        assert_eq!(lines[1], "  (FFFE,E000) na Item");
        assert!(lines[2].starts_with("    (0008,0100) CodeValue"));
        assert!(lines[2].ends_with(": \"121071\""));
        assert_eq!(lines[3], "  (FFFE,E00D) ItemDelimitationItem");
        assert_eq!(lines[4], "(FFFE,E0DD) SequenceDelimitationItem");
        check_line(&lines[5], ("(0008,0060)", "Modality", "CS", "\"SR\""));
    }

    #[test]
    fn dump_transfer_syntax_header() {
        let mut obj = DataSet::with_transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN);
        obj.add_value(tags::MODALITY, "MR").unwrap();

        let lines = dump_lines(&mut DumpOptions::new(), &obj);
        assert_eq!(lines[0], "Transfer Syntax: 1.2.840.10008.1.2.1");
        assert_eq!(
            lines[1],
            "----------------------------------------------------------"
        );
        check_line(&lines[2], ("(0008,0060)", "Modality", "CS", "\"MR\""));
    }

    #[test]
    fn width_limits_long_values() {
        let mut obj = DataSet::new();
        obj.add_value(tags::PIXEL_DATA, vec![0_u8; 64]).unwrap();
        obj.add_value(tags::PATIENT_ID, "X".repeat(80)).unwrap();

        let lines = dump_lines(DumpOptions::new().width(80), &obj);
        let value = lines[0].split_once(": ").unwrap().1;
        assert_eq!(value.chars().count(), 30);
        assert!(value.ends_with("..."));
        let value = lines[1].split_once(": ").unwrap().1;
        assert!(value.ends_with("..."));

        let lines = dump_lines(DumpOptions::new().width(80).no_text_limit(true), &obj);
        assert!(lines[0].ends_with("..."));
        assert_eq!(
            lines[1].split_once(": ").unwrap().1,
            format!("\"{}\"", "X".repeat(80))
        );

        let lines = dump_lines(DumpOptions::new().width(80).no_limit(true), &obj);
        assert!(!lines[0].ends_with("..."));
        assert!(!lines[1].ends_with("..."));
    }
}
