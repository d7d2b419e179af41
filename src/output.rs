#![warn(missing_docs)]
//! Writing generated rays in human readable or CSV form
use std::io::Write;

use uom::si::{
    f64::Length,
    length::{micrometer, millimeter},
};

use crate::{
    error::{SourceError, SourceResult},
    rays::Rays,
};

/// Write one summary line per named ray bundle.
///
/// The line contains the number of rays and the centroid of the ray positions in millimeters.
///
/// # Errors
///
/// This function will return an error if writing to `writer` fails.
pub fn write_summary<W: Write>(writer: &mut W, beams: &[(String, Rays)]) -> SourceResult<()> {
    let mm = Length::format_args(millimeter, uom::fmt::DisplayStyle::Abbreviation);
    for (name, rays) in beams {
        let line = rays.centroid().map_or_else(
            || format!("{name}: 0 rays"),
            |c| {
                format!(
                    "{name}: {} rays, centroid ({:.4}, {:.4}, {:.4})",
                    rays.nr_of_rays(),
                    mm.with(c.x),
                    mm.with(c.y),
                    mm.with(c.z)
                )
            },
        );
        writeln!(writer, "{line}")
            .map_err(|e| SourceError::Console(format!("writing summary failed: {e}")))?;
    }
    Ok(())
}

/// Write all rays as CSV rows.
///
/// Columns: `source,label,x,y,z,dx,dy,dz,wavelength` with positions in millimeters and wavelength in micrometers.
///
/// # Errors
///
/// This function will return an error if writing to `writer` fails.
pub fn write_csv<W: Write>(writer: W, beams: &[(String, Rays)]) -> SourceResult<()> {
    let to_console_err = |e: csv::Error| SourceError::Console(format!("writing csv failed: {e}"));
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "source",
        "label",
        "x",
        "y",
        "z",
        "dx",
        "dy",
        "dz",
        "wavelength",
    ])
    .map_err(to_console_err)?;
    for (name, rays) in beams {
        for ray in rays {
            let pos = ray.position();
            let dir = ray.direction();
            wtr.write_record([
                name.clone(),
                ray.label().to_owned(),
                pos.x.get::<millimeter>().to_string(),
                pos.y.get::<millimeter>().to_string(),
                pos.z.get::<millimeter>().to_string(),
                dir.x.to_string(),
                dir.y.to_string(),
                dir.z.to_string(),
                ray.wavelength().get::<micrometer>().to_string(),
            ])
            .map_err(to_console_err)?;
        }
    }
    wtr.flush()
        .map_err(|e| SourceError::Console(format!("writing csv failed: {e}")))?;
    Ok(())
}
