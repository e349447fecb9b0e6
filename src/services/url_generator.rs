//! URL generation with random query parameters.
//!
//! The generator parses the input URL once at construction, then produces a
//! fresh batch of random key/value pairs on every [`UrlGenerator::generate`]
//! call, merging them with the caller-supplied parameters so that original
//! values are never overwritten.

use rand::seq::SliceRandom;
use rand::Rng;
use url::form_urlencoded;

use super::random_config::RandomConfig;

/// Generates URLs augmented with random query parameters.
///
/// The parsed base URL and caller-supplied parameters are immutable for the
/// lifetime of the generator; only the random draws differ between calls.
#[derive(Debug, Clone)]
pub struct UrlGenerator {
    base_url: String,
    parameters: Vec<(String, String)>,
    config: RandomConfig,
}

impl UrlGenerator {
    /// Parse a full URL into its base and query parameters.
    ///
    /// The input is split on the first `?`. The query portion, if present, is
    /// decoded with standard urlencoded rules: repeated keys keep the last
    /// occurrence, and keys are lowercased for lookups. Construction never
    /// fails; an input without a `?` is treated as all base URL.
    pub fn new(url: &str, config: RandomConfig) -> Self {
        let (base_url, query) = match url.split_once('?') {
            Some((base, query)) => (base.to_string(), query),
            None => (url.to_string(), ""),
        };

        let mut parameters: Vec<(String, String)> = Vec::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let key = key.to_lowercase();
            match parameters.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value.into_owned(),
                None => parameters.push((key, value.into_owned())),
            }
        }

        Self {
            base_url,
            parameters,
            config,
        }
    }

    /// The portion of the input URL preceding the first `?`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Caller-supplied parameters, decoded and with lowercased keys, in
    /// first-occurrence order.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    /// Generate a URL combining a fresh batch of random parameters with the
    /// caller-supplied ones.
    pub fn generate(&self) -> String {
        self.generate_with_rng(&mut rand::rng())
    }

    /// Like [`generate`](Self::generate) but drawing from the given RNG, so
    /// callers can seed the output.
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> String {
        let random_params = self.random_parameters(rng);

        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &random_params {
            // Caller-supplied values always win over generated ones.
            if !self.has_parameter(key) {
                query.append_pair(key, value);
            }
        }
        for (key, value) in &self.parameters {
            query.append_pair(key, value);
        }

        format!("{}?{}", self.base_url, query.finish())
    }

    /// Whether a caller-supplied parameter with this key exists. Lookup is
    /// case-insensitive: stored keys are lowercased at parse time.
    fn has_parameter(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.parameters.iter().any(|(existing, _)| *existing == key)
    }

    /// Build one batch of random parameters. Stops early if the key search
    /// exhausts its attempt budget.
    fn random_parameters<R: Rng>(&self, rng: &mut R) -> Vec<(String, String)> {
        let min = self.config.params_min_amount();
        let max = self.config.params_max_amount();
        let amount = if min == max {
            min
        } else {
            rng.random_range(min..=max)
        };

        let mut params: Vec<(String, String)> = Vec::with_capacity(amount);
        for _ in 0..amount {
            let Some(key) = self.random_key(&params, rng) else {
                break;
            };
            let value = self.random_value(rng);
            params.push((key, value));
        }
        params
    }

    /// Search for a key that collides with neither the caller-supplied
    /// parameters (case-insensitive) nor the batch built so far
    /// (case-sensitive, generated keys are not case-normalized).
    ///
    /// Returns `None` when no unique key was found within
    /// `key_max_attempts` candidates.
    fn random_key<R: Rng>(&self, taken: &[(String, String)], rng: &mut R) -> Option<String> {
        let min = self.config.key_min_length();
        let max = self.config.key_max_length();

        for _ in 0..self.config.key_max_attempts() {
            let length = if min == max {
                min
            } else {
                rng.random_range(min..=max)
            };
            let candidate = shuffled_prefix(self.config.key_characters(), length, rng);

            if self.has_parameter(&candidate) {
                continue;
            }
            if taken.iter().any(|(key, _)| *key == candidate) {
                continue;
            }
            return Some(candidate);
        }

        None
    }

    fn random_value<R: Rng>(&self, rng: &mut R) -> String {
        shuffled_prefix(
            self.config.value_characters(),
            self.config.value_length(),
            rng,
        )
    }
}

/// Shuffle the alphabet and keep the first `length` characters.
///
/// Characters never repeat within the result, so the output is silently
/// capped at the alphabet's size when `length` exceeds it.
fn shuffled_prefix<R: Rng>(alphabet: &str, length: usize, rng: &mut R) -> String {
    let mut chars: Vec<char> = alphabet.chars().collect();
    chars.shuffle(rng);
    chars.truncate(length);
    chars.into_iter().collect()
}
