use serde::Deserialize;

/// Default alphabet for generated parameter keys.
const DEFAULT_KEY_CHARACTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Default alphabet for generated parameter values.
const DEFAULT_VALUE_CHARACTERS: &str = "abcdefghijklmnopqrstuvwxyz1234567890";

const DEFAULT_KEY_LENGTH_BOUNDS: (usize, usize) = (1, 1);
const DEFAULT_KEY_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_VALUE_LENGTH: usize = 8;
const DEFAULT_PARAMS_BOUNDS: (usize, usize) = (5, 15);

/// Loosely-typed attribute bag for building a [`RandomConfig`].
///
/// Every field is optional. Missing or invalid values fall back to defaults
/// at construction time rather than failing. Numeric fields are signed so
/// that non-positive input can be expressed (and rejected to defaults)
/// instead of being unrepresentable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RandomOptions {
    pub key_characters: Option<String>,
    pub key_min_length: Option<i64>,
    pub key_max_length: Option<i64>,
    pub key_max_attempts: Option<i64>,
    pub value_characters: Option<String>,
    pub value_length: Option<i64>,
    pub params_min_amount: Option<i64>,
    pub params_max_amount: Option<i64>,
}

/// Validated, immutable bounds for random parameter generation.
///
/// Construction never fails. Paired bounds (key length, parameter amount)
/// are validated atomically: if either half of a pair is missing,
/// non-positive, or the pair is inconsistent (min > max), both members of
/// that pair revert to their defaults together.
#[derive(Debug, Clone)]
pub struct RandomConfig {
    key_characters: String,
    key_min_length: usize,
    key_max_length: usize,
    key_max_attempts: u32,
    value_characters: String,
    value_length: usize,
    params_min_amount: usize,
    params_max_amount: usize,
}

impl RandomConfig {
    /// Build a configuration from an options bag, defaulting every field
    /// that is absent or out of bounds.
    pub fn new(options: &RandomOptions) -> Self {
        let (key_min_length, key_max_length) = bounded_pair(
            options.key_min_length,
            options.key_max_length,
            DEFAULT_KEY_LENGTH_BOUNDS,
        );
        let (params_min_amount, params_max_amount) = bounded_pair(
            options.params_min_amount,
            options.params_max_amount,
            DEFAULT_PARAMS_BOUNDS,
        );

        let key_max_attempts = options
            .key_max_attempts
            .filter(|&n| n > 0)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(DEFAULT_KEY_MAX_ATTEMPTS);

        let value_length = positive(options.value_length).unwrap_or(DEFAULT_VALUE_LENGTH);

        Self {
            key_characters: non_empty(options.key_characters.as_deref(), DEFAULT_KEY_CHARACTERS),
            key_min_length,
            key_max_length,
            key_max_attempts,
            value_characters: non_empty(
                options.value_characters.as_deref(),
                DEFAULT_VALUE_CHARACTERS,
            ),
            value_length,
            params_min_amount,
            params_max_amount,
        }
    }

    /// Alphabet used for generated parameter keys.
    pub fn key_characters(&self) -> &str {
        &self.key_characters
    }

    /// Minimum length of generated parameter keys.
    pub fn key_min_length(&self) -> usize {
        self.key_min_length
    }

    /// Maximum length of generated parameter keys.
    pub fn key_max_length(&self) -> usize {
        self.key_max_length
    }

    /// Maximum number of candidates tried when searching for a unique key.
    pub fn key_max_attempts(&self) -> u32 {
        self.key_max_attempts
    }

    /// Alphabet used for generated parameter values.
    pub fn value_characters(&self) -> &str {
        &self.value_characters
    }

    /// Length of generated parameter values.
    pub fn value_length(&self) -> usize {
        self.value_length
    }

    /// Minimum number of random parameters per batch.
    pub fn params_min_amount(&self) -> usize {
        self.params_min_amount
    }

    /// Maximum number of random parameters per batch.
    pub fn params_max_amount(&self) -> usize {
        self.params_max_amount
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self::new(&RandomOptions::default())
    }
}

fn non_empty(value: Option<&str>, default: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

fn positive(value: Option<i64>) -> Option<usize> {
    value.filter(|&n| n > 0).map(|n| n as usize)
}

/// Validate a (min, max) pair as a unit: both must be positive and ordered,
/// otherwise the whole pair falls back to `default`.
fn bounded_pair(min: Option<i64>, max: Option<i64>, default: (usize, usize)) -> (usize, usize) {
    match (positive(min), positive(max)) {
        (Some(min), Some(max)) if min <= max => (min, max),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RandomConfig::default();

        assert_eq!(config.key_characters(), "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(config.key_min_length(), 1);
        assert_eq!(config.key_max_length(), 1);
        assert_eq!(config.key_max_attempts(), 5);
        assert_eq!(
            config.value_characters(),
            "abcdefghijklmnopqrstuvwxyz1234567890"
        );
        assert_eq!(config.value_length(), 8);
        assert_eq!(config.params_min_amount(), 5);
        assert_eq!(config.params_max_amount(), 15);
    }

    #[test]
    fn test_valid_overrides() {
        let config = RandomConfig::new(&RandomOptions {
            key_characters: Some("xyz".to_string()),
            key_min_length: Some(3),
            key_max_length: Some(6),
            key_max_attempts: Some(10),
            value_characters: Some("01".to_string()),
            value_length: Some(2),
            params_min_amount: Some(2),
            params_max_amount: Some(4),
        });

        assert_eq!(config.key_characters(), "xyz");
        assert_eq!(config.key_min_length(), 3);
        assert_eq!(config.key_max_length(), 6);
        assert_eq!(config.key_max_attempts(), 10);
        assert_eq!(config.value_characters(), "01");
        assert_eq!(config.value_length(), 2);
        assert_eq!(config.params_min_amount(), 2);
        assert_eq!(config.params_max_amount(), 4);
    }

    #[test]
    fn test_partial_key_length_pair_resets_both() {
        // Only one half of the pair supplied: both revert to defaults.
        let config = RandomConfig::new(&RandomOptions {
            key_min_length: Some(4),
            ..Default::default()
        });

        assert_eq!(config.key_min_length(), 1);
        assert_eq!(config.key_max_length(), 1);
    }

    #[test]
    fn test_inverted_key_length_pair_resets_both() {
        let config = RandomConfig::new(&RandomOptions {
            key_min_length: Some(6),
            key_max_length: Some(3),
            ..Default::default()
        });

        assert_eq!(config.key_min_length(), 1);
        assert_eq!(config.key_max_length(), 1);
    }

    #[test]
    fn test_non_positive_params_pair_resets_both() {
        let config = RandomConfig::new(&RandomOptions {
            params_min_amount: Some(0),
            params_max_amount: Some(7),
            ..Default::default()
        });

        assert_eq!(config.params_min_amount(), 5);
        assert_eq!(config.params_max_amount(), 15);
    }

    #[test]
    fn test_negative_scalars_fall_back() {
        let config = RandomConfig::new(&RandomOptions {
            key_max_attempts: Some(-1),
            value_length: Some(0),
            ..Default::default()
        });

        assert_eq!(config.key_max_attempts(), 5);
        assert_eq!(config.value_length(), 8);
    }

    #[test]
    fn test_empty_alphabets_fall_back() {
        let config = RandomConfig::new(&RandomOptions {
            key_characters: Some(String::new()),
            value_characters: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(config.key_characters(), "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(
            config.value_characters(),
            "abcdefghijklmnopqrstuvwxyz1234567890"
        );
    }

    #[test]
    fn test_equal_pair_is_accepted() {
        let config = RandomConfig::new(&RandomOptions {
            params_min_amount: Some(3),
            params_max_amount: Some(3),
            ..Default::default()
        });

        assert_eq!(config.params_min_amount(), 3);
        assert_eq!(config.params_max_amount(), 3);
    }
}
