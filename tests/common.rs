#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Three days: a regular 06–18 shift, a full day with a sleeper break
/// and one bad timestamp, and a day with an unusable window.
pub const SAMPLE_TRIP: &str = r#"{
  "log_sheets": [
    {
      "day": 1,
      "date": "2025-03-01",
      "start_time": "06:00:00",
      "end_time": "18:00:00",
      "entries": [
        { "time": "06:00:00", "status": "ON", "duration": 4.0, "activity": "Pre-trip inspection", "location": "Dallas, TX" },
        { "time": "10:00:00", "status": "DR", "duration": 8.0, "location": "I-35 N" }
      ],
      "summary": { "drive_hours": 8.0, "on_duty_hours": 4.0, "off_duty_hours": 0.0, "sleeper_hours": 0.0, "fuel_stops": 1 }
    },
    {
      "day": 2,
      "date": "2025-03-02",
      "start_time": "1 day, 00:00:00",
      "end_time": "1 day, 23:59:00",
      "entries": [
        { "time": "1 day, 00:00:00", "status": "SB" },
        { "time": "1 day, 08:00:00", "status": "DR", "activity": "Driving" },
        { "time": "garbage", "status": "OFF" },
        { "time": "1 day, 14:00:00", "status": "OFF", "location": "Oklahoma City, OK" }
      ],
      "summary": { "drive_hours": 6.0, "sleeper_hours": 8.0, "off_duty_hours": 10.0 }
    },
    {
      "day": 3,
      "date": "2025-03-03",
      "start_time": "2 days, 08:00:00",
      "end_time": "2 days, 08:00:00",
      "entries": []
    }
  ]
}"#;

pub fn eld() -> Command {
    cargo_bin_cmd!("eldgraph")
}

/// Fresh scratch directory for one test (also used as HOME).
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("eldgraph_it_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Create a unique test DB path inside the scratch dir
pub fn setup_test_db(dir: &Path) -> String {
    dir.join("activity.sqlite").to_string_lossy().to_string()
}

/// Write the sample trip as `<dir>/<trip_id>.json` and return its path.
pub fn write_trip(dir: &Path, trip_id: &str, json: &str) -> String {
    let path = dir.join(format!("{trip_id}.json"));
    fs::write(&path, json).expect("write trip file");
    path.to_string_lossy().to_string()
}

/// Output file path inside the scratch dir, removed if present
pub fn temp_out(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

/// Command isolated in `dir`: HOME points there, test mode, private DB.
pub fn eld_in(dir: &Path) -> Command {
    let mut cmd = eld();
    cmd.env("HOME", dir)
        .env("APPDATA", dir)
        .args(["--test", "--db", &setup_test_db(dir)]);
    cmd
}
