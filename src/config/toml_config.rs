use crate::domain::model::{Point, Triangle};
use crate::utils::error::{Result, TrigonError};
use crate::utils::validation::{validate_finite, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = "triangle.json";

/// Settings for the demo run. Every section is optional and falls back to the
/// 3-4-5 sample, a 30 degree turn about A, a 45 degree turn about the
/// circumcenter and `triangle.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub triangle: TriangleConfig,
    pub rotation: RotationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleConfig {
    pub a: [f64; 2],
    pub b: [f64; 2],
    pub c: [f64; 2],
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            a: [0.0, 0.0],
            b: [4.0, 0.0],
            c: [0.0, 3.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Applied about vertex A.
    pub first_degrees: f64,
    /// Applied about the circumcenter after the first rotation.
    pub second_degrees: f64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            first_degrees: 30.0,
            second_degrees: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

impl DemoConfig {
    /// Loads settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrigonError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TrigonError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn sample_triangle(&self) -> Triangle {
        let point = |[x, y]: [f64; 2]| Point::new(x, y);
        Triangle::new(
            point(self.triangle.a),
            point(self.triangle.b),
            point(self.triangle.c),
        )
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        for (name, [x, y]) in [
            ("triangle.a", self.triangle.a),
            ("triangle.b", self.triangle.b),
            ("triangle.c", self.triangle.c),
        ] {
            validate_finite(&format!("{}[0]", name), x)?;
            validate_finite(&format!("{}[1]", name), y)?;
        }

        validate_finite("rotation.first_degrees", self.rotation.first_degrees)?;
        validate_finite("rotation.second_degrees", self.rotation.second_degrees)?;
        validate_path("output.path", &self.output.path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();

        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.output_path(), "triangle.json");
        assert_eq!(config.rotation.first_degrees, 30.0);
        assert_eq!(config.rotation.second_degrees, 45.0);
        assert_eq!(
            config.sample_triangle(),
            Triangle::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[triangle]
b = [2.0, 0.0]
c = [1.0, 1.7320508075688772]

[rotation]
second_degrees = -90.0
"#;

        let config = DemoConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.triangle.a, [0.0, 0.0]);
        assert_eq!(config.triangle.b, [2.0, 0.0]);
        assert_eq!(config.rotation.first_degrees, 30.0);
        assert_eq!(config.rotation.second_degrees, -90.0);
        assert_eq!(config.output_path(), DEFAULT_OUTPUT_PATH);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = DemoConfig::from_toml_str("[triangle\na = 1");
        assert!(matches!(result, Err(TrigonError::ConfigError { .. })));
    }

    #[test]
    fn test_config_validation() {
        let config = DemoConfig::from_toml_str("[rotation]\nfirst_degrees = nan\n").unwrap();
        match config.validate() {
            Err(TrigonError::InvalidConfigValue { field, .. }) => {
                assert_eq!(field, "rotation.first_degrees")
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let config = DemoConfig::from_toml_str("[output]\npath = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\npath = \"out/shape.json\"\n")
            .unwrap();

        let config = DemoConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_path(), "out/shape.json");
    }
}
