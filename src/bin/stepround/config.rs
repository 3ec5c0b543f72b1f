use serde::{Deserialize, Serialize};
use stepround::DurationUnit;

const DEFAULT_INTEGER_STEP: i64 = 1;
const DEFAULT_REAL_STEP: f64 = 0.01;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub(crate) struct Config {
    #[serde(default = "default_integer_step")]
    pub integer_step: i64,
    #[serde(default = "default_real_step")]
    pub real_step: f64,
    #[serde(default)]
    pub duration_unit: DurationUnit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            integer_step: DEFAULT_INTEGER_STEP,
            real_step: DEFAULT_REAL_STEP,
            duration_unit: DurationUnit::default(),
        }
    }
}

fn default_integer_step() -> i64 {
    DEFAULT_INTEGER_STEP
}

fn default_real_step() -> f64 {
    DEFAULT_REAL_STEP
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::{fs, io::Write};
    use stepround::DurationUnit;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempdir().expect("failed to create config tempdir");
        let path = dir.path().join("stepround.toml");

        let cfg: Config = confy::load_path(&path).expect("failed to load config");
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        let written = fs::read_to_string(&path).expect("failed to read written config");
        assert!(written.contains("duration_unit"));

        let reloaded: Config = confy::load_path(&path).expect("failed to reload written config");
        assert_eq!(reloaded, Config::default());
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let mut file = NamedTempFile::new().expect("failed to create config tempfile");
        file.write_all(b"integer_step = 15\nduration_unit = \"half-day\"\n")
            .expect("failed to write config to tempfile");

        let cfg: Config = confy::load_path(file.path()).expect("failed to load config");
        assert_eq!(cfg.integer_step, 15);
        assert_eq!(cfg.real_step, 0.01);
        assert_eq!(cfg.duration_unit, DurationUnit::HalfDay);
    }

    #[test]
    fn unknown_unit_fails_to_load() {
        let mut file = NamedTempFile::new().expect("failed to create config tempfile");
        file.write_all(b"duration_unit = \"fortnight\"\n")
            .expect("failed to write config to tempfile");

        let cfg = confy::load_path::<Config>(file.path());
        assert!(cfg.is_err());
    }
}
