//! End-to-end tests for module dispatch under the harness.

#[cfg(test)]
mod tests {
    use crate::harness::{
        assert_payload_changed, assert_payload_contains, assert_payload_value, ModuleHarness,
        ModuleRun,
    };
    use crate::module::{args, FnModule, Module, ModuleContext, ModuleOutcome};
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::time::Duration;

    /// A config-style module: compares the requested hostname against the
    /// "current" one, reports the commands it would apply, and honors check
    /// mode by reporting without applying.
    #[derive(Debug)]
    struct HostnameModule {
        current: String,
    }

    impl Module for HostnameModule {
        fn name(&self) -> &str {
            "hostname"
        }

        fn run(&self, ctx: &ModuleContext) -> Result<ModuleOutcome, anyhow::Error> {
            let wanted = ctx
                .param("hostname")
                .and_then(serde_json::Value::as_str)
                .ok_or_else(|| anyhow::anyhow!("hostname parameter is required"))?;

            if wanted == self.current {
                return Ok(ModuleOutcome::exit_empty());
            }

            // Device settle delay, neutralized by the harness.
            ctx.sleep(Duration::from_secs(2));

            let mut payload = HashMap::new();
            payload.insert("changed".to_string(), serde_json::json!(true));
            payload.insert(
                "commands".to_string(),
                serde_json::json!([format!("set system host-name {wanted}")]),
            );
            payload.insert("check_mode".to_string(), serde_json::json!(ctx.check_mode()));
            Ok(ModuleOutcome::exit(payload))
        }
    }

    fn harness() -> ModuleHarness {
        crate::logging::init();
        ModuleHarness::new()
    }

    #[test]
    #[serial]
    fn test_no_change_run() {
        let module = HostnameModule {
            current: "r1".to_string(),
        };

        let result = harness()
            .execute_module(
                &module,
                ModuleRun::new().with_arg("hostname", serde_json::json!("r1")),
            )
            .unwrap();

        assert_payload_changed(&result, false);
    }

    #[test]
    #[serial]
    fn test_change_run_reports_commands() {
        let module = HostnameModule {
            current: "r1".to_string(),
        };

        let result = harness()
            .execute_module(
                &module,
                ModuleRun::new()
                    .with_arg("hostname", serde_json::json!("r2"))
                    .expect_changed(true)
                    .expect_commands(serde_json::json!(["set system host-name r2"])),
            )
            .unwrap();

        assert_payload_contains(&result, "commands");
        assert_payload_value(
            &result,
            "commands",
            &serde_json::json!(["set system host-name r2"]),
        );
    }

    #[test]
    #[serial]
    fn test_check_mode_run() {
        let module = HostnameModule {
            current: "r1".to_string(),
        };

        let result = harness()
            .execute_module(
                &module,
                ModuleRun::new()
                    .with_arg("hostname", serde_json::json!("r2"))
                    .in_check_mode()
                    .expect_changed(true),
            )
            .unwrap();

        assert_eq!(result.get("check_mode"), Some(&serde_json::json!(true)));
    }

    #[test]
    #[serial]
    fn test_missing_parameter_is_uncategorized_error() {
        let module = HostnameModule {
            current: "r1".to_string(),
        };

        let err = harness()
            .execute_module(&module, ModuleRun::new())
            .unwrap_err();

        assert!(err.to_string().contains("hostname parameter is required"));
    }

    #[test]
    #[serial]
    fn test_buffer_cleared_after_dispatch() {
        let baseline = args::replace_raw(None);

        let module = FnModule::new("noop", |_ctx: &ModuleContext| {
            Ok(ModuleOutcome::exit_empty())
        });
        let _ = harness().execute_module(&module, ModuleRun::new()).unwrap();

        assert!(!args::is_injected());
        args::replace_raw(baseline);
    }

    #[test]
    #[serial]
    fn test_settle_delay_does_not_slow_tests() {
        let module = HostnameModule {
            current: "r1".to_string(),
        };

        let start = std::time::Instant::now();
        let _ = harness()
            .execute_module(
                &module,
                ModuleRun::new()
                    .with_arg("hostname", serde_json::json!("r2"))
                    .expect_changed(true),
            )
            .unwrap();

        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
