pub mod calculator;
pub mod calendar;
pub mod filter;
pub mod pipeline;
