//! End-to-end CLI test suite.
//!
//! Tests organized by command group. Each test verifies CLI behavior through
//! the public interface.

mod common;

use common::harness::{ClerkCommand, TestEnv};
use predicates::prelude::*;
use serde_json::Value;

fn ranked_contents(env: &TestEnv, customer: i64) -> Vec<(u64, String)> {
    let output: Value = env.cmd().note_ls(customer).format_json().output_json();
    output["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|n| {
            (
                n["rank"].as_u64().expect("rank"),
                n["content"].as_str().expect("content").to_string(),
            )
        })
        .collect()
}

fn pairs(items: &[(u64, &str)]) -> Vec<(u64, String)> {
    items.iter().map(|(r, c)| (*r, c.to_string())).collect()
}

// ===========================================
// general
// ===========================================
mod general_tests {
    use super::*;

    #[test]
    fn test_help_lists_command_groups() {
        ClerkCommand::new()
            .args(["--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("customer"))
            .stdout(predicate::str::contains("note"))
            .stdout(predicate::str::contains("printout"));
    }

    #[test]
    fn test_completions_do_not_need_database() {
        let env = TestEnv::new();
        env.cmd()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("clerk"));
        assert!(!env.db_path().exists());
    }

    #[test]
    fn test_bad_config_reports_error() {
        let env = TestEnv::new();
        env.write_config("search_range_days = \"seven\"\n");
        env.cmd()
            .args(["customer", "ls"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse config file"));
    }

    #[test]
    fn test_out_of_range_offset_in_config_is_rejected() {
        let env = TestEnv::new();
        env.write_config("utc_offset_hours = 48\n");
        env.cmd()
            .args(["customer", "ls"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("utc_offset_hours must be between"));
        assert!(!env.db_path().exists());
    }

    #[test]
    fn test_database_from_config_file() {
        let env = TestEnv::new();
        let db = env.root().join("from-config.db");
        env.write_config(&format!("database = {:?}\n", db.to_string_lossy()));

        ClerkCommand::new()
            .config(&env.config_path())
            .customer_add("Config Customer")
            .assert()
            .success();
        assert!(db.exists());
    }
}

// ===========================================
// customer command tests
// ===========================================
mod customer_tests {
    use super::*;

    #[test]
    fn test_customer_add_and_list() {
        let env = TestEnv::new();
        env.add_customer("Sato Shoten");
        env.add_customer("Kato Farm");

        env.cmd()
            .args(["customer", "ls"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Sato Shoten"))
            .stdout(predicate::str::contains("Kato Farm"))
            .stdout(predicate::str::contains("2 customer(s)"));
    }

    #[test]
    fn test_customer_show_missing_is_404() {
        let env = TestEnv::new();
        env.cmd()
            .args(["customer", "show", "42"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error [404]"))
            .stderr(predicate::str::contains("customer 42 not found"));
    }

    #[test]
    fn test_customer_add_rejects_blank_name() {
        let env = TestEnv::new();
        env.cmd()
            .customer_add("   ")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error [400]"));
    }

    #[test]
    fn test_customer_rm_cascades_notes() {
        let env = TestEnv::new();
        let id = env.add_customer("Sato Shoten");
        env.cmd().note_add(id, "gate code 1234").assert().success();

        env.cmd()
            .args(["customer", "rm", &id.to_string()])
            .assert()
            .success();

        assert!(ranked_contents(&env, id).is_empty());
    }
}

// ===========================================
// note command tests
// ===========================================
mod note_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_note_add_appends_and_inserts() {
        let env = TestEnv::new();
        let id = env.add_customer("Sato Shoten");

        env.cmd().note_add(id, "first").assert().success();
        env.cmd().note_add(id, "second").assert().success();
        env.cmd()
            .note_add(id, "front")
            .args(["--rank", "1"])
            .assert()
            .success();

        assert_eq!(
            ranked_contents(&env, id),
            pairs(&[(1, "front"), (2, "first"), (3, "second")])
        );
    }

    #[test]
    fn test_note_add_updates_customer_count() {
        let env = TestEnv::new();
        let id = env.add_customer("Sato Shoten");
        env.cmd().note_add(id, "a").assert().success();
        env.cmd().note_add(id, "b").assert().success();

        let output: Value = env
            .cmd()
            .args(["customer", "show", &id.to_string()])
            .format_json()
            .output_json();
        assert_eq!(output["data"]["notes"], 2);
    }

    #[test]
    fn test_note_add_for_missing_customer_is_404() {
        let env = TestEnv::new();
        env.cmd()
            .note_add(9, "orphan")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error [404]"));
    }

    #[test]
    fn test_note_add_rejects_zero_rank() {
        let env = TestEnv::new();
        let id = env.add_customer("Sato Shoten");
        env.cmd()
            .note_add(id, "nope")
            .args(["--rank", "0"])
            .assert()
            .failure();
        assert!(ranked_contents(&env, id).is_empty());
    }

    #[test]
    fn test_note_update_moves_note() {
        let env = TestEnv::new();
        let id = env.add_customer("Sato Shoten");
        for content in ["a", "b", "c", "d"] {
            env.cmd().note_add(id, content).assert().success();
        }

        env.cmd()
            .args(["note", "update", &id.to_string(), "4", "--to", "2"])
            .assert()
            .success();

        assert_eq!(
            ranked_contents(&env, id),
            pairs(&[(1, "a"), (2, "d"), (3, "b"), (4, "c")])
        );
    }

    #[test]
    fn test_note_update_content_in_place() {
        let env = TestEnv::new();
        let id = env.add_customer("Sato Shoten");
        env.cmd().note_add(id, "old").assert().success();

        env.cmd()
            .args(["note", "update", &id.to_string(), "1", "--content", "new"])
            .assert()
            .success();

        assert_eq!(ranked_contents(&env, id), pairs(&[(1, "new")]));
    }

    #[test]
    fn test_delete_leaves_gap_until_next_create() {
        let env = TestEnv::new();
        let id = env.add_customer("Sato Shoten");
        for content in ["a", "b", "c"] {
            env.cmd().note_add(id, content).assert().success();
        }

        env.cmd()
            .args(["note", "rm", &id.to_string(), "2"])
            .assert()
            .success();
        assert_eq!(ranked_contents(&env, id), pairs(&[(1, "a"), (3, "c")]));

        env.cmd().note_add(id, "d").assert().success();
        assert_eq!(
            ranked_contents(&env, id),
            pairs(&[(1, "a"), (2, "c"), (3, "d")])
        );
    }

    #[test]
    fn test_note_rm_missing_is_404() {
        let env = TestEnv::new();
        let id = env.add_customer("Sato Shoten");
        env.cmd()
            .args(["note", "rm", &id.to_string(), "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error [404]"));
    }

    #[test]
    fn test_note_ls_human_table() {
        let env = TestEnv::new();
        let id = env.add_customer("Sato Shoten");
        env.cmd().note_add(id, "deliver before noon").assert().success();

        env.cmd()
            .note_ls(id)
            .assert()
            .success()
            .stdout(predicate::str::contains("Rank"))
            .stdout(predicate::str::contains("deliver before noon"))
            .stdout(predicate::str::contains("1 note(s)"));
    }
}

// ===========================================
// invoice-type command tests
// ===========================================
mod invoice_type_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invoice_type_lifecycle() {
        let env = TestEnv::new();
        env.cmd()
            .args(["invoice-type", "add", "Monthly"])
            .assert()
            .success();

        let output: Value = env
            .cmd()
            .args(["invoice-type", "ls"])
            .format_json()
            .output_json();
        let id = output["data"][0]["id"].as_i64().expect("id");
        assert_eq!(output["data"][0]["name"], "Monthly");

        env.cmd()
            .args(["invoice-type", "rename", &id.to_string(), "Per delivery"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Per delivery"));

        env.cmd()
            .args(["invoice-type", "rm", &id.to_string()])
            .assert()
            .success();
        env.cmd()
            .args(["invoice-type", "ls"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No invoice types found."));
    }

    #[test]
    fn test_invoice_type_rename_missing_is_404() {
        let env = TestEnv::new();
        env.cmd()
            .args(["invoice-type", "rename", "5", "Anything"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error [404]"));
    }
}

// ===========================================
// printout command tests
// ===========================================
mod printout_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn add_printout(env: &TestEnv, delivery: &str, printed_at: &str) {
        env.cmd()
            .args([
                "printout",
                "add",
                "--delivery-date",
                delivery,
                "--printed-at",
                printed_at,
                "--customer-name",
                "Sato Shoten",
                "--customer-address",
                "Osaka",
                "--items",
                "rice x2",
                "--packages",
                "2",
            ])
            .assert()
            .success();
    }

    #[test]
    fn test_printout_search_by_delivery_date() {
        let env = TestEnv::new();
        add_printout(&env, "2024-03-01", "2024-02-28T10:00:00+09:00");
        add_printout(&env, "2024-03-02", "2024-02-28T11:00:00+09:00");
        add_printout(&env, "2024-03-09", "2024-02-28T12:00:00+09:00");

        let output: Value = env
            .cmd()
            .args([
                "printout",
                "search",
                "--by",
                "delivery-date",
                "--from",
                "2024-03-02",
                "--to",
                "2024-03-01",
            ])
            .format_json()
            .output_json();
        let dates: Vec<&str> = output["data"]
            .as_array()
            .expect("data array")
            .iter()
            .map(|p| p["delivery_date"].as_str().expect("date"))
            .collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-03-02"]);
    }

    #[test]
    fn test_printout_search_wider_than_limit_is_400() {
        let env = TestEnv::new();
        env.cmd()
            .args([
                "printout",
                "search",
                "--from",
                "2024-03-01",
                "--to",
                "2024-03-12",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error [400]"));
    }

    #[test]
    fn test_printout_search_limit_from_config() {
        let env = TestEnv::new();
        env.write_config("search_range_days = 31\n");
        env.cmd()
            .args([
                "printout",
                "search",
                "--from",
                "2024-03-01",
                "--to",
                "2024-03-12",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("No printouts found."));
    }

    #[test]
    fn test_printout_add_missing_items_is_rejected() {
        let env = TestEnv::new();
        env.cmd()
            .args([
                "printout",
                "add",
                "--delivery-date",
                "2024-03-01",
                "--customer-name",
                "Sato Shoten",
                "--customer-address",
                "Osaka",
                "--items",
                "",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error [400]"))
            .stderr(predicate::str::contains("items of order"));
    }

    #[test]
    fn test_printout_rm_by_key() {
        let env = TestEnv::new();
        add_printout(&env, "2024-03-01", "2024-02-28T10:00:00+09:00");

        env.cmd()
            .args([
                "printout",
                "rm",
                "--delivery-date",
                "2024-03-01",
                "--printed-at",
                "2024-02-28T10:00:00+09:00",
            ])
            .assert()
            .success();

        env.cmd()
            .args(["printout", "search", "--from", "2024-03-01"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No printouts found."));
    }
}
