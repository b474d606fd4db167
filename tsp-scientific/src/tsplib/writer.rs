#[cfg(test)]
#[path = "../../tests/unit/tsplib/writer_test.rs"]
mod writer_test;

use std::io::{BufWriter, Write};
use tsp_core::models::Tour;
use tsp_core::utils::GenericError;

/// A trait to write a tour in tsplib95 TOUR format.
pub trait TsplibTour<W: Write> {
    /// Writes the tour. City ids are one-based, the closing city is not repeated.
    fn write_tsplib_tour(&self, name: &str, writer: BufWriter<W>) -> Result<(), GenericError>;
}

impl<W: Write> TsplibTour<W> for Tour {
    fn write_tsplib_tour(&self, name: &str, writer: BufWriter<W>) -> Result<(), GenericError> {
        let mut writer = writer;

        let cities = match self.path() {
            [first, inner @ .., last] if first == last => &self.path()[..inner.len() + 1],
            path => path,
        };

        writeln!(writer, "NAME : {name}")?;
        writeln!(writer, "COMMENT : Length {}", self.cost())?;
        writeln!(writer, "TYPE : TOUR")?;
        writeln!(writer, "DIMENSION : {}", cities.len())?;
        writeln!(writer, "TOUR_SECTION")?;
        cities.iter().try_for_each(|city| writeln!(writer, "{}", city + 1))?;
        writeln!(writer, "-1")?;
        writeln!(writer, "EOF")?;

        writer.flush()?;

        Ok(())
    }
}
