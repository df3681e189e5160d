use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::business_days;
use crate::core::calendar::{HolidayCalendar, HolidayMode};
use crate::errors::AppResult;
use crate::input::holidays::read_holidays;
use crate::ui::messages::warning;
use crate::utils::date::parse_date_arg;
use crate::utils::path::expand_tilde;

/// Handle the `count` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Count {
        start,
        end,
        holidays,
        holiday_year,
        recurring_holidays,
    } = cmd
    {
        let start = parse_date_arg(start)?;
        let end = parse_date_arg(end)?;

        let year = holiday_year.unwrap_or(cfg.holiday_year);
        let mode = if *recurring_holidays {
            HolidayMode::Recurring
        } else {
            cfg.holiday_mode
        };

        let calendar = match holidays {
            Some(path) => HolidayCalendar::load(&read_holidays(&expand_tilde(path))?, year, mode)?,
            None => HolidayCalendar::empty(year, mode),
        };

        if start > end {
            warning(format!("{start} is after {end}: nothing to count"));
        }

        let days = business_days::count(start, end, &calendar)?;
        println!("Business days from {start} to {end}: {days}");
        println!("Elapsed business days: {}", days - 1);
    }
    Ok(())
}
