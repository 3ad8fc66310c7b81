//! Decoder for the netCDF classic-family header (CDF-1, CDF-2, CDF-5).
//!
//! Grammar, abridged:
//!
//! ```text
//! header   = magic numrecs dim_list gatt_list var_list
//! magic    = 'C' 'D' 'F' VERSION_BYTE
//! dim_list = ABSENT | NC_DIMENSION nelems [dim ...]
//! att_list = ABSENT | NC_ATTRIBUTE nelems [attr ...]
//! var_list = ABSENT | NC_VARIABLE  nelems [var ...]
//! var      = name nelems [dimid ...] vatt_list nc_type vsize begin
//! ABSENT   = ZERO ZERO
//! ```
//!
//! All integers are big-endian. Names and attribute values are padded with
//! zero bytes to a 4-byte boundary.

use std::io::Read;

use super::{AttrValue, Attribute, Dataset, Dimension, Format, NcType, NetcdfError, Variable};

pub(crate) const NC_DIMENSION: u32 = 0x0A;
pub(crate) const NC_VARIABLE: u32 = 0x0B;
pub(crate) const NC_ATTRIBUTE: u32 = 0x0C;

/// Read and decode a header. Reading stops at the end of the header, so the
/// reader may point at a file of any size.
pub fn read_header<R: Read>(reader: R) -> Result<Dataset, NetcdfError> {
    let mut r = HeaderReader {
        inner: reader,
        format: Format::Classic,
        pos: 0,
    };

    let magic = r.bytes(4)?;
    if &magic[..3] != b"CDF" {
        return Err(NetcdfError::BadMagic);
    }
    r.format = Format::from_version_byte(magic[3])?;

    let num_records = r.num_records()?;
    let dimensions = r.dimensions(num_records)?;
    let attributes = r.attributes()?;
    let variables = r.variables(&dimensions)?;

    tracing::debug!(
        format = %r.format,
        dims = dimensions.len(),
        vars = variables.len(),
        header_bytes = r.pos,
        "decoded netCDF header"
    );

    Ok(Dataset {
        format: r.format,
        num_records,
        dimensions,
        attributes,
        variables,
    })
}

struct HeaderReader<R> {
    inner: R,
    format: Format,
    pos: u64,
}

impl<R: Read> HeaderReader<R> {
    fn bytes(&mut self, len: u64) -> Result<Vec<u8>, NetcdfError> {
        // Counts come from the file, so never pre-allocate on their say-so.
        let mut buf = Vec::new();
        (&mut self.inner)
            .take(len)
            .read_to_end(&mut buf)
            .map_err(NetcdfError::from_read)?;
        if (buf.len() as u64) < len {
            return Err(NetcdfError::Truncated);
        }
        self.pos += len;
        Ok(buf)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], NetcdfError> {
        let mut buf = [0u8; N];
        self.inner
            .read_exact(&mut buf)
            .map_err(NetcdfError::from_read)?;
        self.pos += N as u64;
        Ok(buf)
    }

    fn u32(&mut self) -> Result<u32, NetcdfError> {
        Ok(u32::from_be_bytes(self.array()?))
    }

    fn u64(&mut self) -> Result<u64, NetcdfError> {
        Ok(u64::from_be_bytes(self.array()?))
    }

    fn non_neg(&mut self) -> Result<u64, NetcdfError> {
        match self.format.count_width() {
            8 => self.u64(),
            _ => self.u32().map(u64::from),
        }
    }

    fn offset(&mut self) -> Result<u64, NetcdfError> {
        match self.format.offset_width() {
            8 => self.u64(),
            _ => self.u32().map(u64::from),
        }
    }

    fn padding(&mut self, len: u64) -> Result<(), NetcdfError> {
        let pad = padding(len);
        if pad > 0 {
            self.bytes(pad)?;
        }
        Ok(())
    }

    fn num_records(&mut self) -> Result<Option<u64>, NetcdfError> {
        let raw = self.non_neg()?;
        let streaming = match self.format.count_width() {
            8 => raw == u64::MAX,
            _ => raw == u64::from(u32::MAX),
        };
        Ok((!streaming).then_some(raw))
    }

    /// Read a list tag and its element count. `ABSENT` yields 0.
    fn list(&mut self, expected: u32, label: &'static str) -> Result<u64, NetcdfError> {
        let tag = self.u32()?;
        let count = self.non_neg()?;
        match tag {
            0 if count == 0 => Ok(0),
            t if t == expected => Ok(count),
            found => Err(NetcdfError::UnexpectedTag {
                expected: label,
                found,
            }),
        }
    }

    fn name(&mut self) -> Result<String, NetcdfError> {
        let len = self.non_neg()?;
        let raw = self.bytes(len)?;
        self.padding(len)?;
        String::from_utf8(raw).map_err(|e| {
            NetcdfError::InvalidName(String::from_utf8_lossy(e.as_bytes()).into_owned())
        })
    }

    fn dimensions(&mut self, num_records: Option<u64>) -> Result<Vec<Dimension>, NetcdfError> {
        let count = self.list(NC_DIMENSION, "NC_DIMENSION")?;
        let mut dims = Vec::new();
        for _ in 0..count {
            let name = self.name()?;
            let length = self.non_neg()?;
            let dim = if length == 0 {
                Dimension {
                    name,
                    length: num_records.unwrap_or(0),
                    unlimited: true,
                }
            } else {
                Dimension {
                    name,
                    length,
                    unlimited: false,
                }
            };
            dims.push(dim);
        }
        Ok(dims)
    }

    fn attributes(&mut self) -> Result<Vec<Attribute>, NetcdfError> {
        let count = self.list(NC_ATTRIBUTE, "NC_ATTRIBUTE")?;
        let mut attrs = Vec::new();
        for _ in 0..count {
            let name = self.name()?;
            let nc_type = NcType::from_code(self.u32()?, self.format)?;
            let nelems = self.non_neg()?;
            let value = self.values(nc_type, nelems)?;
            attrs.push(Attribute { name, value });
        }
        Ok(attrs)
    }

    fn values(&mut self, nc_type: NcType, nelems: u64) -> Result<AttrValue, NetcdfError> {
        let len = nelems
            .checked_mul(nc_type.size() as u64)
            .ok_or(NetcdfError::Truncated)?;
        let raw = self.bytes(len)?;
        self.padding(len)?;
        Ok(decode_values(nc_type, &raw))
    }

    fn variables(&mut self, dims: &[Dimension]) -> Result<Vec<Variable>, NetcdfError> {
        let count = self.list(NC_VARIABLE, "NC_VARIABLE")?;
        let mut vars = Vec::new();
        for _ in 0..count {
            let name = self.name()?;
            let ndims = self.non_neg()?;
            let mut dimensions = Vec::new();
            for _ in 0..ndims {
                let id = self.non_neg()?;
                let dim = usize::try_from(id)
                    .ok()
                    .and_then(|i| dims.get(i))
                    .ok_or_else(|| NetcdfError::InvalidDimensionId {
                        variable: name.clone(),
                        id,
                        count: dims.len(),
                    })?;
                dimensions.push(dim.name.clone());
            }
            let attributes = self.attributes()?;
            let nc_type = NcType::from_code(self.u32()?, self.format)?;
            let _vsize = self.non_neg()?;
            let _begin = self.offset()?;
            vars.push(Variable {
                name,
                nc_type,
                dimensions,
                attributes,
            });
        }
        Ok(vars)
    }
}

/// Zero bytes needed to pad `len` to a 4-byte boundary.
pub(crate) fn padding(len: u64) -> u64 {
    (4 - len % 4) % 4
}

fn be<const N: usize>(chunk: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(chunk);
    out
}

fn decode_values(nc_type: NcType, raw: &[u8]) -> AttrValue {
    macro_rules! decode {
        ($variant:ident, $ty:ty, $n:expr) => {
            AttrValue::$variant(
                raw.chunks_exact($n)
                    .map(|c| <$ty>::from_be_bytes(be::<{ $n }>(c)))
                    .collect(),
            )
        };
    }

    match nc_type {
        NcType::Char => {
            let text = raw.split(|b| *b == 0).next().unwrap_or_default();
            AttrValue::Text(String::from_utf8_lossy(text).into_owned())
        }
        NcType::Byte => decode!(Byte, i8, 1),
        NcType::Short => decode!(Short, i16, 2),
        NcType::Int => decode!(Int, i32, 4),
        NcType::Float => decode!(Float, f32, 4),
        NcType::Double => decode!(Double, f64, 8),
        NcType::UByte => AttrValue::UByte(raw.to_vec()),
        NcType::UShort => decode!(UShort, u16, 2),
        NcType::UInt => decode!(UInt, u32, 4),
        NcType::Int64 => decode!(Int64, i64, 8),
        NcType::UInt64 => decode!(UInt64, u64, 8),
    }
}
