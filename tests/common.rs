#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str =
    "id,first_name,last_name,email,last_activity,title,department,phone,org_unit";
pub const QUEENS_OU: &str = "District Offices/Queens/User Accounts";

pub fn rin() -> Command {
    cargo_bin_cmd!("rinactive")
}

/// Create a unique file inside the system temp dir with the given content
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rinactive.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write fixture");
    p
}

/// Path inside the temp dir that is guaranteed not to exist
pub fn missing_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rinactive_missing.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// One 9-field roster line
pub fn roster_line(id: &str, last_activity: &str, org_unit: &str) -> String {
    format!(
        "{id},First{id},Last{id},user{id}@example.org,{last_activity},Analyst,IT,555-01{id},{org_unit}"
    )
}

/// Full CSV text: header plus the given lines
pub fn roster_csv(lines: &[String]) -> String {
    let mut out = String::from(HEADER);
    for l in lines {
        out.push('\n');
        out.push_str(l);
    }
    out.push('\n');
    out
}

/// Parsed rows, as the filter receives them
pub fn roster_rows(lines: &[String]) -> Vec<Vec<String>> {
    rinactive::input::roster::parse_roster(roster_csv(lines).as_bytes()).expect("parse roster")
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}
