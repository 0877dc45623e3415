//! Integration tests for the monthcal binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn monthcal() -> Command {
    let mut cmd = Command::cargo_bin("monthcal").unwrap();
    cmd.env("MONTHCAL_TEST_TIME", "2024-03-15").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_current_month() {
    monthcal().assert().success().stdout(
        "        2024, March\n\
         Mon Tue Wed Thu Fri Sat Sun\n\
         \x20                 1   2   3\n\
         \x20 4   5   6   7   8   9  10\n\
         \x2011  12  13  14  15  16  17\n\
         \x2018  19  20  21  22  23  24\n\
         \x2025  26  27  28  29  30  31\n",
    );
}

#[test]
fn test_month_and_year() {
    monthcal()
        .args(["2", "2024"])
        .assert()
        .success()
        .stdout(
            "        2024, February\n\
             Mon Tue Wed Thu Fri Sat Sun\n\
             \x20             1   2   3   4\n\
             \x20 5   6   7   8   9  10  11\n\
             \x2012  13  14  15  16  17  18\n\
             \x2019  20  21  22  23  24  25\n\
             \x2026  27  28  29",
        )
        .stderr("");
}

#[test]
fn test_custom_first_day_of_week() {
    monthcal()
        .args(["02", "2024", "7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "        2024, February\n\
             Sun Mon Tue Wed Thu Fri Sat\n\
             \x20                 1   2   3\n",
        ));
}

#[test]
fn test_smallest_date() {
    monthcal()
        .args(["01", "0001"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("           1, January\n"));
}

#[test]
fn test_invalid_month() {
    monthcal()
        .args(["13", "2024"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Incorrect month format"));
}

#[test]
fn test_invalid_year() {
    monthcal()
        .args(["1", "0000"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Incorrect year format"));
}

#[test]
fn test_invalid_day_of_week() {
    monthcal()
        .args(["2", "2024", "8"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Incorrect day of week format"));
}

#[test]
fn test_all_invalid_fields_reported() {
    monthcal()
        .args(["0", "24", "9"])
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Incorrect month format")
                .and(predicate::str::contains("Incorrect year format"))
                .and(predicate::str::contains("Incorrect day of week format")),
        );
}

#[test]
fn test_negative_month() {
    monthcal()
        .args(["-3", "2024"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Incorrect month format"));
}

#[test]
fn test_one_argument() {
    monthcal()
        .arg("3")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("must supply two or three arguments"));
}

#[test]
fn test_too_many_arguments() {
    monthcal()
        .args(["3", "2024", "1", "5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("More than three arguments"));
}

#[test]
fn test_error_has_program_prefix() {
    monthcal()
        .arg("3")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("monthcal: "));
}

#[test]
fn test_flag_like_month_is_format_error() {
    monthcal()
        .args(["-x", "2024"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Incorrect month format"));
}

#[test]
fn test_out_of_range_today_is_internal_error() {
    monthcal()
        .env("MONTHCAL_TEST_TIME", "+10000-01-01")
        .assert()
        .failure()
        .code(70)
        .stdout("")
        .stderr(predicate::str::contains("Invalid month spec: year 10000"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    monthcal()
        .args(["-v", "2", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("        2024, February\n"))
        .stderr(predicate::str::contains("resolved month spec"));
}

#[test]
fn test_help_flag() {
    monthcal()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Displays a calendar for a single month"));
}

#[test]
fn test_version_flag() {
    monthcal()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("monthcal"));
}
