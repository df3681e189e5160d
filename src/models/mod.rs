pub mod holiday;
pub mod outcome;
pub mod roster;
