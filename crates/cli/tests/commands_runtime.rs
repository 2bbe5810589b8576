use std::env;
use std::fs;
use std::sync::{Mutex, OnceLock};

use lapwise_cli::commands::list::ListArgs;
use lapwise_cli::commands::{compare, config, list, packages, show};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn compare_returns_recommendation_envelope() {
    with_env(&[], || {
        let result = compare::run("surface-laptop-4", "hp-probook-11e-g5", true);
        assert_eq!(result.exit_code, 0, "expected successful comparison");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "compare");
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["data"]["recommendation"]["winner"]["id"], "surface-laptop-4");
        assert_eq!(payload["data"]["comparison"]["rows"][0]["first_value"], "TZS 1,200,000");
        assert_eq!(payload["data"]["comparison"]["rows"][2]["outcome"], "better");
    });
}

#[test]
fn compare_renders_table_and_justification_as_text() {
    with_env(&[], || {
        let result = compare::run("hp-elitebook-845-g8-r7", "hp-elitebook-845-g8-r5", false);
        assert_eq!(result.exit_code, 0, "expected successful comparison");

        assert!(result.output.starts_with("FEATURE"));
        assert!(result.output.contains("Best For"));
        // Identical scores: the second selection wins.
        assert!(result.output.contains("Recommendation: HP EliteBook 845 G8 (Ryzen 5)"));
        assert!(result.output.contains("making it a great choice for office, student."));
    });
}

#[test]
fn compare_unknown_id_returns_not_found() {
    with_env(&[], || {
        let result = compare::run("surface-laptop-4", "thinkpad-x1", true);
        assert_eq!(result.exit_code, 3, "expected not-found exit code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "compare");
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "not_found");
        let message = payload["message"].as_str().unwrap_or_default();
        assert!(message.contains("Choose another laptop"));
        assert!(message.contains("thinkpad-x1"));
    });
}

#[test]
fn compare_uses_configured_currency() {
    with_env(&[("LAPWISE_DISPLAY_CURRENCY", "KES")], || {
        let result = compare::run("hp-pro-x2", "surface-laptop-2", true);
        assert_eq!(result.exit_code, 0, "expected successful comparison");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["data"]["comparison"]["rows"][0]["first_value"], "KES 650,000");
    });
}

#[test]
fn invalid_currency_returns_config_failure() {
    with_env(&[("LAPWISE_DISPLAY_CURRENCY", "shilling")], || {
        let result = compare::run("hp-pro-x2", "surface-laptop-2", true);
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn catalog_file_replaces_seed_catalog() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
[[product]]
id = "lenovo-t480"
name = "Lenovo ThinkPad T480"
brand = "Lenovo"
price = 600000
condition = "refurbished"
use_cases = ["office"]

[product.specs]
processor = "Intel Core i5 8th Gen"
ram = "8GB DDR4"
storage = "256GB SSD"
screen = "14\" FHD"

[[product]]
id = "lenovo-x1"
name = "Lenovo ThinkPad X1 Carbon"
brand = "Lenovo"
price = 1100000
condition = "new"

[product.specs]
processor = "Intel Core i7 10th Gen"
ram = "16GB LPDDR3"
storage = "512GB NVMe SSD"
screen = "14\" FHD"
"#,
    )
    .expect("catalog file should be written");
    let catalog_path = path.display().to_string();

    with_env(&[("LAPWISE_CATALOG_PATH", catalog_path.as_str())], || {
        let result = compare::run("lenovo-t480", "lenovo-x1", true);
        assert_eq!(result.exit_code, 0, "expected comparison against file catalog");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["data"]["recommendation"]["winner"]["id"], "lenovo-x1");
        assert!(payload["data"]["recommendation"]["justification"]
            .as_str()
            .unwrap_or_default()
            .ends_with("a great choice for general use."));

        let missing = compare::run("lenovo-t480", "surface-laptop-4", true);
        assert_eq!(missing.exit_code, 3, "seed products are not part of a file catalog");
    });
}

#[test]
fn malformed_catalog_file_returns_catalog_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "[[product]]\nid = \"broken\"\n").expect("catalog file should be written");
    let catalog_path = path.display().to_string();

    with_env(&[("LAPWISE_CATALOG_PATH", catalog_path.as_str())], || {
        let result = list::run(&ListArgs { json: true, ..ListArgs::default() });
        assert_eq!(result.exit_code, 2, "expected catalog failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "list");
        assert_eq!(payload["error_class"], "catalog");
    });
}

#[test]
fn list_filters_by_budget_and_sorts_by_price() {
    with_env(&[], || {
        let args = ListArgs {
            budget: Some("under-500k".to_string()),
            sort: Some("price-low".to_string()),
            json: true,
            ..ListArgs::default()
        };
        let result = list::run(&args);
        assert_eq!(result.exit_code, 0, "expected successful listing");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["data"]["count"], 4);
        assert_eq!(payload["data"]["products"][0]["id"], "nec-versapro-11e");
        assert_eq!(payload["data"]["products"][1]["id"], "dell-latitude-3120");
        assert_eq!(payload["data"]["products"][3]["id"], "hp-probook-mt22");
        assert_eq!(payload["data"]["brands"][0], "Dell");
        assert_eq!(payload["data"]["ram_options"][1], "8GB");
        assert_eq!(payload["data"]["storage_options"][2], "512GB");
    });
}

#[test]
fn list_renders_matches_as_text() {
    with_env(&[], || {
        let args = ListArgs {
            budget: Some("under-500k".to_string()),
            sort: Some("price-low".to_string()),
            ..ListArgs::default()
        };
        let result = list::run(&args);
        assert_eq!(result.exit_code, 0, "expected successful listing");

        let mut lines = result.output.lines();
        assert_eq!(lines.next(), Some("4 laptops found"));
        let first = lines.next().unwrap_or_default();
        assert!(first.starts_with("- nec-versapro-11e"));
        assert!(first.contains("TZS 350,000"));
        assert!(first.ends_with("4GB DDR3L | 128GB SSD [Student Pick]"));
        assert!(result
            .output
            .ends_with("RAM options: 4GB, 8GB, 16GB; storage options: 128GB, 256GB, 512GB"));
    });
}

#[test]
fn list_reports_which_condition_was_rejected() {
    with_env(&[], || {
        let args = ListArgs { conditions: vec!["used".to_string()], ..ListArgs::default() };
        let result = list::run(&args);
        assert_eq!(result.exit_code, 4, "expected invalid input exit code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "invalid_input");
        let message = payload["message"].as_str().unwrap_or_default();
        assert!(message.contains("unknown condition `used`"), "message was: {message}");
    });
}

#[test]
fn list_featured_and_use_case_filters_combine() {
    with_env(&[], || {
        let args = ListArgs {
            featured: true,
            use_case: Some("student".to_string()),
            json: true,
            ..ListArgs::default()
        };
        let result = list::run(&args);
        assert_eq!(result.exit_code, 0, "expected successful listing");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["data"]["count"], 2);
        assert_eq!(payload["data"]["products"][0]["id"], "surface-laptop-4");
        assert_eq!(payload["data"]["products"][1]["id"], "hp-elitebook-845-g8-r7");
    });
}

#[test]
fn list_rejects_unknown_sort_order() {
    with_env(&[], || {
        let args = ListArgs { sort: Some("cheapest".to_string()), ..ListArgs::default() };
        let result = list::run(&args);
        assert_eq!(result.exit_code, 4, "expected invalid input exit code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "invalid_input");
        let message = payload["message"].as_str().unwrap_or_default();
        assert!(message.contains("unknown sort order `cheapest`"), "message was: {message}");
    });
}

#[test]
fn show_includes_score_breakdown_and_related_models() {
    with_env(&[], || {
        let result = show::run("surface-laptop-3", true);
        assert_eq!(result.exit_code, 0, "expected product detail");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["message"], "Microsoft Surface Laptop 3");
        assert_eq!(payload["data"]["score"]["ram"], 80.0);
        assert_eq!(payload["data"]["related"][0], "surface-laptop-4");
        assert_eq!(payload["data"]["related"][1], "surface-laptop-2");
    });
}

#[test]
fn show_text_lists_specs_and_score() {
    with_env(&[], || {
        let result = show::run("hp-elitebook-1040-g8", false);
        assert_eq!(result.exit_code, 0, "expected product detail");

        assert!(result.output.starts_with("HP EliteBook 1040 G8 (HP)"));
        assert!(result.output.contains("Price: TZS 1,450,000"));
        assert!(result.output.contains("Badge: New Arrival"));
        assert!(result.output.contains("Score: 96.2"));
    });
}

#[test]
fn packages_resolve_their_laptops() {
    with_env(&[], || {
        let result = packages::run(true);
        assert_eq!(result.exit_code, 0, "expected package listing");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["message"], "3 student packages");
        assert_eq!(payload["data"][0]["id"], "secondary-starter");
        assert_eq!(payload["data"][0]["audience"], "secondary school");
        assert_eq!(payload["data"][0]["laptops"][0], "HP ProBook 11 EE G5");
        assert_eq!(payload["data"][2]["tier"], "programming-design");
    });
}

#[test]
fn packages_render_bundles_as_text() {
    with_env(&[], || {
        let result = packages::run(false);
        assert_eq!(result.exit_code, 0, "expected package listing");

        let mut lines = result.output.lines();
        assert_eq!(
            lines.next(),
            Some("Secondary School Starter (secondary school) from TZS 350,000 [Most Popular]")
        );
        assert_eq!(lines.next(), Some("  Perfect for O-Level & A-Level Students"));
        assert_eq!(
            lines.next(),
            Some("  Laptops: HP ProBook 11 EE G5, NEC VersaPro 11e, Dell Latitude 3120")
        );
        assert!(result.output.contains("University Essential Pack (university)"));
    });
}

#[test]
fn config_reports_env_sources() {
    with_env(&[("LAPWISE_DISPLAY_CURRENCY", "KES"), ("LAPWISE_LOG_LEVEL", "debug")], || {
        let result = config::run();
        assert_eq!(result.exit_code, 0, "expected config report");

        assert!(result
            .output
            .contains("- display.currency = KES (source: env (LAPWISE_DISPLAY_CURRENCY))"));
        assert!(result
            .output
            .contains("- logging.level = debug (source: env (LAPWISE_LOG_LEVEL))"));
        assert!(result.output.contains("- catalog.path = <built-in seed> (source: default)"));
    });
}

#[test]
fn config_returns_failure_for_invalid_log_level() {
    with_env(&[("LAPWISE_LOGGING_LEVEL", "loud")], || {
        let result = config::run();
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "config");
        assert_eq!(payload["error_class"], "config_validation");
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "LAPWISE_CATALOG_PATH",
        "LAPWISE_DISPLAY_CURRENCY",
        "LAPWISE_LOGGING_LEVEL",
        "LAPWISE_LOGGING_FORMAT",
        "LAPWISE_LOG_LEVEL",
        "LAPWISE_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
