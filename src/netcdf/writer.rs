//! Encoder for netCDF classic-family headers.
//!
//! Writes a header-only file: variable `begin` offsets point past the header
//! as a real file would, but no data section follows. Readers that only look
//! at metadata (including [`super::read_header`]) accept it.

use super::header::{padding, NC_ATTRIBUTE, NC_DIMENSION, NC_VARIABLE};
use super::{AttrValue, Attribute, Dataset, Format, NetcdfError, Variable};

/// Encode the header of `dataset` in its own [`Format`].
pub fn write_header(dataset: &Dataset) -> Result<Vec<u8>, NetcdfError> {
    check_types(dataset)?;

    // Offsets have a fixed width, so a first pass with zeroed offsets gives
    // the exact header length.
    let zeros = vec![0u64; dataset.variables.len()];
    let header_len = encode(dataset, &zeros)?.len() as u64;
    let begins = data_offsets(dataset, header_len)?;
    encode(dataset, &begins)
}

fn check_types(dataset: &Dataset) -> Result<(), NetcdfError> {
    if dataset.format == Format::Data64 {
        return Ok(());
    }
    let attrs = dataset
        .attributes
        .iter()
        .chain(dataset.variables.iter().flat_map(|v| v.attributes.iter()));
    for attr in attrs {
        if attr.value.nc_type().is_extended() {
            return Err(NetcdfError::OutOfRange {
                format: "CDF-1/CDF-2",
                what: format!("attribute '{}' uses a CDF-5 type", attr.name),
            });
        }
    }
    for var in &dataset.variables {
        if var.nc_type.is_extended() {
            return Err(NetcdfError::OutOfRange {
                format: "CDF-1/CDF-2",
                what: format!("variable '{}' uses a CDF-5 type", var.name),
            });
        }
    }
    Ok(())
}

fn is_record_var(dataset: &Dataset, var: &Variable) -> bool {
    var.dimensions
        .first()
        .and_then(|d| dataset.dimension(d))
        .is_some_and(|d| d.unlimited)
}

/// Size of one variable (or one record of a record variable), 4-byte aligned.
fn var_size(dataset: &Dataset, var: &Variable) -> u64 {
    let record = is_record_var(dataset, var);
    let elems: u64 = dataset
        .shape(var)
        .iter()
        .enumerate()
        .filter(|(i, _)| !(record && *i == 0))
        .map(|(_, len)| *len)
        .product();
    let bytes = elems.saturating_mul(var.nc_type.size() as u64);
    bytes.saturating_add(padding(bytes))
}

/// Fixed-size variables are laid out first, record variables after them.
fn data_offsets(dataset: &Dataset, header_len: u64) -> Result<Vec<u64>, NetcdfError> {
    let mut begins = vec![0u64; dataset.variables.len()];
    let mut cursor = header_len;
    for pass_record in [false, true] {
        for (i, var) in dataset.variables.iter().enumerate() {
            if is_record_var(dataset, var) != pass_record {
                continue;
            }
            begins[i] = cursor;
            cursor = cursor.saturating_add(var_size(dataset, var));
        }
    }
    if dataset.format == Format::Classic && cursor > u64::from(u32::MAX) {
        return Err(NetcdfError::OutOfRange {
            format: "CDF-1",
            what: format!("data section ends at byte {}", cursor),
        });
    }
    Ok(begins)
}

fn encode(dataset: &Dataset, begins: &[u64]) -> Result<Vec<u8>, NetcdfError> {
    let mut w = HeaderWriter {
        buf: Vec::new(),
        format: dataset.format,
    };

    w.buf.extend_from_slice(b"CDF");
    w.buf.push(dataset.format.version_byte());
    match dataset.num_records {
        Some(n) => w.non_neg(n, "numrecs")?,
        None => match dataset.format.count_width() {
            8 => w.buf.extend_from_slice(&u64::MAX.to_be_bytes()),
            _ => w.buf.extend_from_slice(&u32::MAX.to_be_bytes()),
        },
    }

    w.list(NC_DIMENSION, dataset.dimensions.len())?;
    for dim in &dataset.dimensions {
        w.name(&dim.name)?;
        let stored = if dim.unlimited { 0 } else { dim.length };
        w.non_neg(stored, "dimension length")?;
    }

    w.attributes(&dataset.attributes)?;

    w.list(NC_VARIABLE, dataset.variables.len())?;
    for (var, begin) in dataset.variables.iter().zip(begins) {
        w.name(&var.name)?;
        w.non_neg(var.dimensions.len() as u64, "rank")?;
        for dim_name in &var.dimensions {
            let id = dataset
                .dimensions
                .iter()
                .position(|d| &d.name == dim_name)
                .ok_or_else(|| NetcdfError::InvalidName(dim_name.clone()))?;
            w.non_neg(id as u64, "dimension id")?;
        }
        w.attributes(&var.attributes)?;
        w.buf.extend_from_slice(&var.nc_type.code().to_be_bytes());
        let vsize = var_size(dataset, var);
        match dataset.format.count_width() {
            8 => w.buf.extend_from_slice(&vsize.to_be_bytes()),
            // Oversized variables store the 2^32 - 1 marker.
            _ => w
                .buf
                .extend_from_slice(&u32::try_from(vsize).unwrap_or(u32::MAX).to_be_bytes()),
        }
        w.offset(*begin)?;
    }

    Ok(w.buf)
}

struct HeaderWriter {
    buf: Vec<u8>,
    format: Format,
}

impl HeaderWriter {
    fn non_neg(&mut self, value: u64, what: &str) -> Result<(), NetcdfError> {
        match self.format.count_width() {
            8 => self.buf.extend_from_slice(&value.to_be_bytes()),
            _ => {
                let v = u32::try_from(value).map_err(|_| NetcdfError::OutOfRange {
                    format: "CDF-1/CDF-2",
                    what: format!("{} {}", what, value),
                })?;
                self.buf.extend_from_slice(&v.to_be_bytes());
            }
        }
        Ok(())
    }

    fn offset(&mut self, value: u64) -> Result<(), NetcdfError> {
        match self.format.offset_width() {
            8 => self.buf.extend_from_slice(&value.to_be_bytes()),
            _ => {
                let v = u32::try_from(value).map_err(|_| NetcdfError::OutOfRange {
                    format: "CDF-1",
                    what: format!("offset {}", value),
                })?;
                self.buf.extend_from_slice(&v.to_be_bytes());
            }
        }
        Ok(())
    }

    fn list(&mut self, tag: u32, count: usize) -> Result<(), NetcdfError> {
        let tag = if count == 0 { 0 } else { tag };
        self.buf.extend_from_slice(&tag.to_be_bytes());
        self.non_neg(count as u64, "list length")
    }

    fn pad(&mut self, len: usize) {
        let pad = padding(len as u64) as usize;
        self.buf.extend(std::iter::repeat(0u8).take(pad));
    }

    fn name(&mut self, name: &str) -> Result<(), NetcdfError> {
        if name.is_empty() || name.contains('/') {
            return Err(NetcdfError::InvalidName(name.to_string()));
        }
        self.non_neg(name.len() as u64, "name length")?;
        self.buf.extend_from_slice(name.as_bytes());
        self.pad(name.len());
        Ok(())
    }

    fn attributes(&mut self, attrs: &[Attribute]) -> Result<(), NetcdfError> {
        self.list(NC_ATTRIBUTE, attrs.len())?;
        for attr in attrs {
            self.name(&attr.name)?;
            self.buf
                .extend_from_slice(&attr.value.nc_type().code().to_be_bytes());
            self.non_neg(attr.value.len() as u64, "attribute length")?;
            let start = self.buf.len();
            encode_values(&attr.value, &mut self.buf);
            let written = self.buf.len() - start;
            self.pad(written);
        }
        Ok(())
    }
}

fn encode_values(value: &AttrValue, out: &mut Vec<u8>) {
    macro_rules! encode {
        ($v:expr) => {
            for x in $v {
                out.extend_from_slice(&x.to_be_bytes());
            }
        };
    }

    match value {
        AttrValue::Text(s) => out.extend_from_slice(s.as_bytes()),
        AttrValue::Byte(v) => encode!(v),
        AttrValue::Short(v) => encode!(v),
        AttrValue::Int(v) => encode!(v),
        AttrValue::Float(v) => encode!(v),
        AttrValue::Double(v) => encode!(v),
        AttrValue::UByte(v) => out.extend_from_slice(v),
        AttrValue::UShort(v) => encode!(v),
        AttrValue::UInt(v) => encode!(v),
        AttrValue::Int64(v) => encode!(v),
        AttrValue::UInt64(v) => encode!(v),
    }
}
