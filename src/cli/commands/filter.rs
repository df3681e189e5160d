use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::HolidayMode;
use crate::core::filter::ErrorPolicy;
use crate::core::pipeline::{Pipeline, RunRequest};
use crate::errors::AppResult;
use crate::models::outcome::FilterOutcome;
use crate::output::{OutputFormat, json, text};
use crate::ui::messages::info;
use crate::utils::date::{parse_date_arg, today};
use crate::utils::path::expand_tilde;

/// Handle the `filter` subcommand
///
/// Command-line values override the configuration file. The outcome is
/// printed to stdout even on failure; the error is then returned so the
/// process exits non-zero.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Filter {
        holidays,
        csv,
        today: today_arg,
        threshold,
        exclude_ou,
        holiday_year,
        recurring_holidays,
        skip_bad_rows,
        format,
        check,
    } = cmd
    {
        let mut cfg = cfg.clone();
        if let Some(t) = threshold {
            cfg.threshold = *t;
        }
        if let Some(ou) = exclude_ou {
            cfg.excluded_org_unit = ou.clone();
        }
        if let Some(y) = holiday_year {
            cfg.holiday_year = *y;
        }
        if *recurring_holidays {
            cfg.holiday_mode = HolidayMode::Recurring;
        }
        if *skip_bad_rows {
            cfg.error_policy = ErrorPolicy::Skip;
        }
        let format = format.unwrap_or(cfg.output_format);

        let today = match today_arg {
            Some(s) => parse_date_arg(s)?,
            None => today(),
        };

        let request = RunRequest {
            holidays_path: expand_tilde(holidays),
            roster_path: expand_tilde(csv),
            today,
            check_mode: *check,
        };

        if *check {
            info("Check mode: inputs were not read");
        }

        match Pipeline::from_config(&cfg).execute(&request) {
            Ok(outcome) => print_outcome(&outcome, format)?,
            Err(e) => {
                print_outcome(&FilterOutcome::failure(&e), format)?;
                return Err(e);
            }
        }
    }
    Ok(())
}

fn print_outcome(outcome: &FilterOutcome, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => println!("{}", json::to_json(outcome)?),
        OutputFormat::Text => print!("{}", text::render(outcome)),
    }
    Ok(())
}
