//! In-memory model of a netCDF dataset header.
//!
//! Only the header is modelled: dimensions, global attributes and variable
//! metadata. Variable data is never read, which keeps checking large model
//! output cheap.
//!
//! The binary codec lives in [`header`] (reading) and [`writer`] (writing).
//! [`open`] picks the right decoder for a file on disk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

pub mod cdl;
pub mod error;
pub mod header;
pub mod writer;

pub use error::NetcdfError;
pub use header::read_header;
pub use writer::write_header;

/// On-disk flavour of a netCDF classic-family file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// CDF-1, the original classic format
    #[default]
    Classic,
    /// CDF-2, 64-bit offsets
    Offset64,
    /// CDF-5, 64-bit data (adds unsigned and 64-bit integer types)
    Data64,
}

impl Format {
    pub fn version_byte(self) -> u8 {
        match self {
            Format::Classic => 1,
            Format::Offset64 => 2,
            Format::Data64 => 5,
        }
    }

    pub fn from_version_byte(byte: u8) -> Result<Self, NetcdfError> {
        match byte {
            1 => Ok(Format::Classic),
            2 => Ok(Format::Offset64),
            5 => Ok(Format::Data64),
            other => Err(NetcdfError::UnsupportedVersion(other)),
        }
    }

    /// Width in bytes of counts and lengths (`NON_NEG` in the format grammar).
    pub(crate) fn count_width(self) -> usize {
        match self {
            Format::Data64 => 8,
            _ => 4,
        }
    }

    /// Width in bytes of a variable's `begin` offset.
    pub(crate) fn offset_width(self) -> usize {
        match self {
            Format::Classic => 4,
            _ => 8,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Classic => write!(f, "classic"),
            Format::Offset64 => write!(f, "64-bit offset"),
            Format::Data64 => write!(f, "64-bit data"),
        }
    }
}

/// External data type of a variable or attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NcType {
    Byte,
    Char,
    Short,
    Int,
    Float,
    Double,
    UByte,
    UShort,
    UInt,
    Int64,
    UInt64,
}

impl NcType {
    pub fn code(self) -> u32 {
        match self {
            NcType::Byte => 1,
            NcType::Char => 2,
            NcType::Short => 3,
            NcType::Int => 4,
            NcType::Float => 5,
            NcType::Double => 6,
            NcType::UByte => 7,
            NcType::UShort => 8,
            NcType::UInt => 9,
            NcType::Int64 => 10,
            NcType::UInt64 => 11,
        }
    }

    pub fn from_code(code: u32, format: Format) -> Result<Self, NetcdfError> {
        let ty = match code {
            1 => NcType::Byte,
            2 => NcType::Char,
            3 => NcType::Short,
            4 => NcType::Int,
            5 => NcType::Float,
            6 => NcType::Double,
            7 => NcType::UByte,
            8 => NcType::UShort,
            9 => NcType::UInt,
            10 => NcType::Int64,
            11 => NcType::UInt64,
            other => return Err(NetcdfError::UnknownType(other)),
        };
        if ty.is_extended() && format != Format::Data64 {
            return Err(NetcdfError::UnknownType(code));
        }
        Ok(ty)
    }

    /// Size in bytes of one element.
    pub fn size(self) -> usize {
        match self {
            NcType::Byte | NcType::Char | NcType::UByte => 1,
            NcType::Short | NcType::UShort => 2,
            NcType::Int | NcType::Float | NcType::UInt => 4,
            NcType::Double | NcType::Int64 | NcType::UInt64 => 8,
        }
    }

    /// Types only available in CDF-5.
    pub fn is_extended(self) -> bool {
        matches!(
            self,
            NcType::UByte | NcType::UShort | NcType::UInt | NcType::Int64 | NcType::UInt64
        )
    }

    /// Type keyword as printed in CDL.
    pub fn cdl_name(self) -> &'static str {
        match self {
            NcType::Byte => "byte",
            NcType::Char => "char",
            NcType::Short => "short",
            NcType::Int => "int",
            NcType::Float => "float",
            NcType::Double => "double",
            NcType::UByte => "ubyte",
            NcType::UShort => "ushort",
            NcType::UInt => "uint",
            NcType::Int64 => "int64",
            NcType::UInt64 => "uint64",
        }
    }
}

/// Typed attribute payload. Character attributes are decoded as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum AttrValue {
    Text(String),
    Byte(Vec<i8>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    UByte(Vec<u8>),
    UShort(Vec<u16>),
    UInt(Vec<u32>),
    Int64(Vec<i64>),
    UInt64(Vec<u64>),
}

impl AttrValue {
    pub fn nc_type(&self) -> NcType {
        match self {
            AttrValue::Text(_) => NcType::Char,
            AttrValue::Byte(_) => NcType::Byte,
            AttrValue::Short(_) => NcType::Short,
            AttrValue::Int(_) => NcType::Int,
            AttrValue::Float(_) => NcType::Float,
            AttrValue::Double(_) => NcType::Double,
            AttrValue::UByte(_) => NcType::UByte,
            AttrValue::UShort(_) => NcType::UShort,
            AttrValue::UInt(_) => NcType::UInt,
            AttrValue::Int64(_) => NcType::Int64,
            AttrValue::UInt64(_) => NcType::UInt64,
        }
    }

    /// Number of elements (bytes for text).
    pub fn len(&self) -> usize {
        match self {
            AttrValue::Text(s) => s.len(),
            AttrValue::Byte(v) => v.len(),
            AttrValue::Short(v) => v.len(),
            AttrValue::Int(v) => v.len(),
            AttrValue::Float(v) => v.len(),
            AttrValue::Double(v) => v.len(),
            AttrValue::UByte(v) => v.len(),
            AttrValue::UShort(v) => v.len(),
            AttrValue::UInt(v) => v.len(),
            AttrValue::Int64(v) => v.len(),
            AttrValue::UInt64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The value as a single integer.
    ///
    /// Succeeds for one-element numeric attributes holding an integral value,
    /// including floats such as `2.0`.
    pub fn as_integer(&self) -> Option<i64> {
        fn single<T: Copy>(v: &[T]) -> Option<T> {
            match v {
                [x] => Some(*x),
                _ => None,
            }
        }
        fn integral(x: f64) -> Option<i64> {
            (x.is_finite() && x.fract() == 0.0 && x.abs() < 9.0e15).then_some(x as i64)
        }

        match self {
            AttrValue::Text(_) => None,
            AttrValue::Byte(v) => single(v).map(i64::from),
            AttrValue::Short(v) => single(v).map(i64::from),
            AttrValue::Int(v) => single(v).map(i64::from),
            AttrValue::Float(v) => single(v).and_then(|x| integral(f64::from(x))),
            AttrValue::Double(v) => single(v).and_then(integral),
            AttrValue::UByte(v) => single(v).map(i64::from),
            AttrValue::UShort(v) => single(v).map(i64::from),
            AttrValue::UInt(v) => single(v).map(i64::from),
            AttrValue::Int64(v) => single(v),
            AttrValue::UInt64(v) => single(v).and_then(|x| i64::try_from(x).ok()),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(v: &[T], suffix: &str) -> String {
            v.iter()
                .map(|x| format!("{}{}", x, suffix))
                .collect::<Vec<_>>()
                .join(", ")
        }

        match self {
            AttrValue::Text(s) => write!(f, "\"{}\"", s.escape_default()),
            AttrValue::Byte(v) => write!(f, "{}", join(v, "b")),
            AttrValue::Short(v) => write!(f, "{}", join(v, "s")),
            AttrValue::Int(v) => write!(f, "{}", join(v, "")),
            AttrValue::Float(v) => write!(f, "{}", join(v, "f")),
            AttrValue::Double(v) => write!(f, "{}", join(v, "")),
            AttrValue::UByte(v) => write!(f, "{}", join(v, "ub")),
            AttrValue::UShort(v) => write!(f, "{}", join(v, "us")),
            AttrValue::UInt(v) => write!(f, "{}", join(v, "u")),
            AttrValue::Int64(v) => write!(f, "{}", join(v, "ll")),
            AttrValue::UInt64(v) => write!(f, "{}", join(v, "ull")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: AttrValue,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: AttrValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, AttrValue::Text(value.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    /// Current length. For the record dimension this is the record count.
    pub length: u64,
    #[serde(default)]
    pub unlimited: bool,
}

impl Dimension {
    pub fn new(name: impl Into<String>, length: u64) -> Self {
        Self {
            name: name.into(),
            length,
            unlimited: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub nc_type: NcType,
    /// Dimension names, outermost first.
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Variable {
    pub fn new(name: impl Into<String>, nc_type: NcType, dimensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            nc_type,
            dimensions: dimensions.iter().map(|d| d.to_string()).collect(),
            attributes: Vec::new(),
        }
    }

    /// Builder-style helper used when assembling datasets in code.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// Text value of an attribute, if it exists and is a character attribute.
    pub fn text_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(AttrValue::as_text)
    }
}

/// Header of a netCDF dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub format: Format,
    /// Number of records, `None` when the file was written in streaming mode.
    #[serde(default)]
    pub num_records: Option<u64>,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl Dataset {
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variable(name).is_some()
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// Shape of a variable. Dimensions that cannot be resolved count as 0.
    pub fn shape(&self, variable: &Variable) -> Vec<u64> {
        variable
            .dimensions
            .iter()
            .map(|d| self.dimension(d).map(|d| d.length).unwrap_or(0))
            .collect()
    }

    /// Parse a JSON dataset description, as printed by `dump --format json`.
    pub fn from_json(text: &str) -> Result<Self, NetcdfError> {
        Ok(serde_json::from_str(text)?)
    }

    /// ncdump-style header listing.
    pub fn to_cdl(&self, name: &str) -> String {
        cdl::render(self, name)
    }
}

/// Open a dataset from disk, detecting the encoding from its first bytes.
///
/// Binary netCDF classic files are read header-only. A JSON dataset
/// description is accepted when its first non-whitespace byte is `{`.
pub fn open(path: &Path) -> Result<Dataset, NetcdfError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut prefix = [0u8; 4];
    let n = read_prefix(&mut reader, &mut prefix)?;
    let prefix = &prefix[..n];

    tracing::debug!(path = %path.display(), "sniffing dataset encoding");

    if prefix.starts_with(b"CDF") {
        return read_header(prefix.chain(reader));
    }
    if prefix.starts_with(b"\x89HDF") {
        return Err(NetcdfError::Unsupported(
            "netCDF-4/HDF5 files cannot be read; convert with `nccopy -k classic`".to_string(),
        ));
    }
    let first = match prefix.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b) => Some(*b),
        None => skip_whitespace(&mut reader)?,
    };
    if first == Some(b'{') {
        let mut text = String::from_utf8_lossy(prefix).into_owned();
        reader.read_to_string(&mut text)?;
        return Dataset::from_json(&text);
    }

    Err(NetcdfError::BadMagic)
}

/// Consume leading ASCII whitespace and return the next byte without
/// consuming it.
fn skip_whitespace<R: BufRead>(reader: &mut R) -> Result<Option<u8>, NetcdfError> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        match buf.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(i) => {
                let next = buf[i];
                reader.consume(i);
                return Ok(Some(next));
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}

fn read_prefix<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, NetcdfError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}
