pub mod random_config;
pub mod url_generator;

pub use random_config::{RandomConfig, RandomOptions};
pub use url_generator::UrlGenerator;
