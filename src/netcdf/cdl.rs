//! `ncdump -h` style rendering of a dataset header.

use std::fmt::Write;

use super::{Attribute, Dataset};

pub fn render(dataset: &Dataset, name: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_cdl(&mut out, dataset, name);
    out
}

fn write_cdl(out: &mut String, dataset: &Dataset, name: &str) -> std::fmt::Result {
    writeln!(out, "netcdf {} {{", name)?;

    if !dataset.dimensions.is_empty() {
        writeln!(out, "dimensions:")?;
        for dim in &dataset.dimensions {
            if dim.unlimited {
                writeln!(
                    out,
                    "\t{} = UNLIMITED ; // ({} currently)",
                    dim.name, dim.length
                )?;
            } else {
                writeln!(out, "\t{} = {} ;", dim.name, dim.length)?;
            }
        }
    }

    if !dataset.variables.is_empty() {
        writeln!(out, "variables:")?;
        for var in &dataset.variables {
            if var.dimensions.is_empty() {
                writeln!(out, "\t{} {} ;", var.nc_type.cdl_name(), var.name)?;
            } else {
                writeln!(
                    out,
                    "\t{} {}({}) ;",
                    var.nc_type.cdl_name(),
                    var.name,
                    var.dimensions.join(", ")
                )?;
            }
            for attr in &var.attributes {
                write_attribute(out, "\t\t", &var.name, attr)?;
            }
        }
    }

    if !dataset.attributes.is_empty() {
        writeln!(out)?;
        writeln!(out, "// global attributes:")?;
        for attr in &dataset.attributes {
            write_attribute(out, "\t\t", "", attr)?;
        }
    }

    writeln!(out, "}}")
}

fn write_attribute(
    out: &mut String,
    indent: &str,
    owner: &str,
    attr: &Attribute,
) -> std::fmt::Result {
    writeln!(out, "{}{}:{} = {} ;", indent, owner, attr.name, attr.value)
}
