//! Reads distance matrices and writes tours in TSPLIB95 format.

mod reader;
pub use self::reader::{EdgeWeightFormat, TsplibProblem};

mod writer;
pub use self::writer::TsplibTour;
