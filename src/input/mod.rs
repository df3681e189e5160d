//! Readers for the two input files. Each file is read completely and closed
//! before anything is computed from it.

pub mod holidays;
pub mod roster;
