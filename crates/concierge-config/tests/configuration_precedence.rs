//! Behavioural tests for layered configuration precedence.

use std::cell::RefCell;
use std::ffi::OsString;
use std::fs;
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

use concierge_config::{
    Config, DEFAULT_FLIGHT_CAPACITY, DEFAULT_LOG_FILTER, DEFAULT_OPENING_BALANCE, DeliveryMode,
    OrthoConfig, default_delivery, default_log_format,
};

const DELIVERY_VAR: &str = "CONCIERGE_DELIVERY";

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

struct Harness {
    temp_dir: TempDir,
    cli_args: RefCell<Vec<OsString>>,
    env_overrides: RefCell<Vec<(String, Option<OsString>)>>,
    loaded: RefCell<Option<Config>>,
    error: RefCell<Option<String>>,
    _env_guard: MutexGuard<'static, ()>,
}

impl Harness {
    fn new() -> Self {
        let env_guard = ENV_MUTEX
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let temp_dir = match TempDir::new() {
            Ok(dir) => dir,
            Err(error) => panic!("failed to create temporary directory: {error}"),
        };
        let harness = Self {
            temp_dir,
            cli_args: RefCell::new(vec![OsString::from("concierge")]),
            env_overrides: RefCell::new(Vec::new()),
            loaded: RefCell::new(None),
            error: RefCell::new(None),
            _env_guard: env_guard,
        };
        harness.clear_env(DELIVERY_VAR);
        harness
    }

    fn write_config(&self, delivery: DeliveryMode) {
        let path = self.temp_dir.path().join("concierge.toml");
        let toml = format!("delivery = \"{delivery}\"\n");
        if let Err(error) = fs::write(&path, toml) {
            panic!("failed to write configuration: {error}");
        }

        let mut args = self.cli_args.borrow_mut();
        args.push(OsString::from("--config-path"));
        args.push(path.into_os_string());
    }

    fn set_env(&self, key: &str, value: &str) {
        let previous = std::env::var_os(key);
        // Environment mutation is `unsafe` on the 2024 edition; `Drop` restores
        // every override while the mutex is still held.
        unsafe { std::env::set_var(key, value) };
        self.env_overrides
            .borrow_mut()
            .push((key.to_owned(), previous));
    }

    fn clear_env(&self, key: &str) {
        let previous = std::env::var_os(key);
        unsafe { std::env::remove_var(key) };
        self.env_overrides
            .borrow_mut()
            .push((key.to_owned(), previous));
    }

    fn push_cli_arg(&self, arg: impl Into<OsString>) {
        self.cli_args.borrow_mut().push(arg.into());
    }

    fn load(&self) {
        if self.loaded.borrow().is_some() || self.error.borrow().is_some() {
            return;
        }

        let args = self.cli_args.borrow().clone();
        match Config::load_from_iter(args) {
            Ok(config) => {
                *self.loaded.borrow_mut() = Some(config);
            }
            Err(error) => {
                *self.error.borrow_mut() = Some(error.to_string());
            }
        }
    }

    fn loaded_config(&self) -> Config {
        self.load();
        if let Some(error) = self.error.borrow().as_ref() {
            panic!("configuration failed to load: {error}");
        }
        match self.loaded.borrow().as_ref() {
            Some(config) => config.clone(),
            None => panic!("configuration was not loaded"),
        }
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        let mut overrides = self.env_overrides.borrow_mut();
        while let Some((key, value)) = overrides.pop() {
            if let Some(os_value) = value {
                unsafe { std::env::set_var(&key, os_value) };
            } else {
                unsafe { std::env::remove_var(&key) };
            }
        }
    }
}

fn parse_delivery(value: &str) -> DeliveryMode {
    match value.parse::<DeliveryMode>() {
        Ok(mode) => mode,
        Err(error) => panic!("invalid delivery mode '{value}': {error}"),
    }
}

#[fixture]
fn harness() -> Harness {
    Harness::new()
}

#[given("a configuration file setting the delivery mode to \"{mode}\"")]
fn given_configuration_file(harness: &Harness, mode: String) {
    harness.write_config(parse_delivery(&mode));
}

#[given("the environment overrides the delivery mode to \"{mode}\"")]
fn given_environment_override(harness: &Harness, mode: String) {
    harness.set_env(DELIVERY_VAR, &mode);
}

#[when("the CLI sets the delivery mode to \"{mode}\"")]
fn when_cli_override(harness: &Harness, mode: String) {
    harness.push_cli_arg("--delivery");
    harness.push_cli_arg(OsString::from(&mode));
}

#[when("the configuration loads without overrides")]
fn when_load_without_overrides(harness: &Harness) {
    harness.load();
}

#[then("loading the configuration resolves the delivery mode to \"{mode}\"")]
fn then_resolved_delivery(harness: &Harness, mode: String) {
    let config = harness.loaded_config();
    assert_eq!(config.delivery(), parse_delivery(&mode));
}

#[then("loading the configuration applies the built-in defaults")]
fn then_defaults_applied(harness: &Harness) {
    let config = harness.loaded_config();
    assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    assert_eq!(config.log_format(), default_log_format());
    assert_eq!(config.delivery(), default_delivery());
    assert_eq!(config.opening_balance(), DEFAULT_OPENING_BALANCE);
    assert_eq!(config.flight_capacity(), DEFAULT_FLIGHT_CAPACITY);
}

#[scenario(path = "tests/features/configuration_precedence.feature")]
fn configuration_precedence(#[from(harness)] harness: Harness) {
    let _ = harness;
}
