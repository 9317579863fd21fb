use crate::common::logging::{log_notice, log_warning};
use crate::error::{OidError, OidResult};
use crate::error_consts;
use lazy_static::lazy_static;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

pub const PARALLEL_THRESHOLD_MIN: usize = 1;
pub const PARALLEL_THRESHOLD_MAX: usize = 1 << 24;
pub const PARALLEL_THRESHOLD_DEFAULT: usize = 4096;

pub const MIN_THREADS: usize = 1;
pub const MAX_THREADS: usize = 64;
pub const DEFAULT_NUM_CPUS: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum ConfigKey {
    #[strum(serialize = "oid-parallel-threshold")]
    ParallelThreshold,
    #[strum(serialize = "oid-num-threads")]
    NumThreads,
}

impl ConfigKey {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigSettings {
    pub parallel_threshold: usize,
    pub num_threads: usize,
}

impl Default for ConfigSettings {
    fn default() -> Self {
        Self {
            parallel_threshold: PARALLEL_THRESHOLD_DEFAULT,
            num_threads: *NUM_CPUS,
        }
    }
}

fn available_threads() -> usize {
    match std::thread::available_parallelism() {
        Err(e) => {
            log_warning(format!("Failed to get available parallelism: {e:?}"));
            DEFAULT_NUM_CPUS
        }
        Ok(v) => v.get().clamp(MIN_THREADS, MAX_THREADS),
    }
}

pub static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(PARALLEL_THRESHOLD_DEFAULT);

lazy_static! {
    pub static ref NUM_CPUS: usize = available_threads();
    pub static ref NUM_THREADS: AtomicUsize = AtomicUsize::new(*NUM_CPUS);
}

pub fn config_settings() -> ConfigSettings {
    ConfigSettings {
        parallel_threshold: PARALLEL_THRESHOLD.load(Ordering::Relaxed),
        num_threads: NUM_THREADS.load(Ordering::Relaxed),
    }
}

fn parse_number_in_range(name: &str, value: &str, min: usize, max: usize) -> OidResult<usize> {
    let number = value.trim().parse::<usize>().map_err(|_e| {
        OidError::InvalidConfiguration(format!(
            "error parsing \"{name}\". Expected number, got {value}"
        ))
    })?;
    if !(min..=max).contains(&number) {
        return Err(OidError::InvalidConfiguration(format!(
            "Invalid value ({number}) for \"{name}\". Must be in the range [{min}, {max}]",
        )));
    }
    Ok(number)
}

fn update_parallel_threshold(val: &str) -> OidResult<()> {
    let threshold = parse_number_in_range(
        ConfigKey::ParallelThreshold.name(),
        val,
        PARALLEL_THRESHOLD_MIN,
        PARALLEL_THRESHOLD_MAX,
    )?;
    PARALLEL_THRESHOLD.store(threshold, Ordering::SeqCst);
    Ok(())
}

/// The thread pool reads this once, when it is first used.
fn update_num_threads(val: &str) -> OidResult<()> {
    let threads = parse_number_in_range(
        ConfigKey::NumThreads.name(),
        val,
        MIN_THREADS,
        MAX_THREADS,
    )?;
    NUM_THREADS.store(threads, Ordering::SeqCst);
    Ok(())
}

fn parse_key(name: &str) -> OidResult<ConfigKey> {
    ConfigKey::from_str(name).map_err(|_| {
        OidError::InvalidConfiguration(format!(
            "{}: \"{name}\"",
            error_consts::UNKNOWN_CONFIG
        ))
    })
}

/// Updates a setting by name, validating `value` against the setting's range.
pub fn set_config(name: &str, value: &str) -> OidResult<()> {
    let key = parse_key(name)?;
    let res = match key {
        ConfigKey::ParallelThreshold => update_parallel_threshold(value),
        ConfigKey::NumThreads => update_num_threads(value),
    };
    match &res {
        Ok(()) => log_notice(format!("config \"{name}\" set to {value}")),
        Err(e) => log_warning(format!("rejected config \"{name}\": {e}")),
    }
    res
}

pub fn get_config(name: &str) -> OidResult<String> {
    let settings = config_settings();
    let value = match parse_key(name)? {
        ConfigKey::ParallelThreshold => settings.parallel_threshold,
        ConfigKey::NumThreads => settings.num_threads,
    };
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test]
    fn keys_round_trip_by_name() {
        for key in ConfigKey::iter() {
            assert_eq!(parse_key(key.name()), Ok(key));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = set_config("oid-bogus", "1").unwrap_err();
        assert!(matches!(err, OidError::InvalidConfiguration(_)));
        assert!(get_config("oid-bogus").is_err());
    }

    #[test_case("oid-parallel-threshold", "0")]
    #[test_case("oid-parallel-threshold", "-5")]
    #[test_case("oid-parallel-threshold", "lots")]
    #[test_case("oid-parallel-threshold", "16777217")]
    #[test_case("oid-num-threads", "0")]
    #[test_case("oid-num-threads", "65")]
    #[serial]
    fn out_of_range_values_are_rejected(name: &str, value: &str) {
        let before = get_config(name).unwrap();
        assert!(set_config(name, value).is_err());
        assert_eq!(get_config(name).unwrap(), before);
    }

    #[test_case("oid-parallel-threshold", "1")]
    #[test_case("oid-parallel-threshold", "77")]
    #[test_case("oid-parallel-threshold", "16777216")]
    #[test_case("oid-num-threads", "1")]
    #[test_case("oid-num-threads", " 64 "; "num threads max padded")]
    #[serial]
    fn in_range_values_are_stored(name: &str, value: &str) {
        let before = get_config(name).unwrap();
        set_config(name, value).unwrap();

        let expected = value.trim();
        assert_eq!(get_config(name).unwrap(), expected);
        let settings = config_settings();
        let stored = match parse_key(name).unwrap() {
            ConfigKey::ParallelThreshold => settings.parallel_threshold,
            ConfigKey::NumThreads => settings.num_threads,
        };
        assert_eq!(stored.to_string(), expected);

        set_config(name, &before).unwrap();
        assert_eq!(get_config(name).unwrap(), before);
    }

    #[test]
    fn default_settings_are_in_range() {
        let settings = ConfigSettings::default();
        assert_eq!(settings.parallel_threshold, PARALLEL_THRESHOLD_DEFAULT);
        assert!((MIN_THREADS..=MAX_THREADS).contains(&settings.num_threads));
    }
}
