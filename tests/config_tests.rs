mod common;
use common::{missing_path, temp_file};
use rinactive::config::Config;
use rinactive::core::calendar::HolidayMode;
use rinactive::core::filter::ErrorPolicy;
use rinactive::errors::AppError;
use rinactive::output::OutputFormat;
use std::path::Path;

#[test]
fn test_missing_file_gives_defaults() {
    let path = missing_path("cfg_defaults", "conf");
    let cfg = Config::load(Some(Path::new(&path))).unwrap();

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.threshold, 45);
    assert_eq!(cfg.holiday_year, 2022);
    assert_eq!(cfg.holiday_mode, HolidayMode::Anchored);
    assert_eq!(cfg.error_policy, ErrorPolicy::Abort);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let path = temp_file(
        "cfg_partial",
        "conf",
        "threshold: 30\nholiday_mode: recurring\nerror_policy: skip\noutput_format: text\n",
    );
    let cfg = Config::load(Some(Path::new(&path))).unwrap();

    assert_eq!(cfg.threshold, 30);
    assert_eq!(cfg.holiday_mode, HolidayMode::Recurring);
    assert_eq!(cfg.error_policy, ErrorPolicy::Skip);
    assert_eq!(cfg.output_format, OutputFormat::Text);
    assert_eq!(cfg.org_unit_column, 8);

    let filter = cfg.filter_config();
    assert_eq!(filter.threshold, 30);
    assert_eq!(filter.schema.last_activity_col, 4);
}

#[test]
fn test_unparsable_file_is_a_config_error() {
    let path = temp_file("cfg_broken", "conf", "threshold: [not, a, number\n");
    assert!(matches!(
        Config::load(Some(Path::new(&path))),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_save_then_load() {
    let path = missing_path("cfg_save", "conf");
    let cfg = Config {
        threshold: 60,
        excluded_org_unit: "Somewhere/Else".to_string(),
        ..Config::default()
    };
    cfg.save(Path::new(&path)).unwrap();

    assert_eq!(Config::load(Some(Path::new(&path))).unwrap(), cfg);
}
