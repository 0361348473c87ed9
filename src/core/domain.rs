use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const MIN_BOOK_NAME_LENGTH_ENV: &str = "BOOKS_MIN_NAME_LENGTH";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the book store
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub min_book_name_length: usize,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            min_book_name_length: 4,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        let mut config = Configuration::new();
        if let Ok(val) = std::env::var(MIN_BOOK_NAME_LENGTH_ENV) {
            config.min_book_name_length = val.trim().parse::<usize>().map_err(|err| {
                LibraryError::validation(
                    format!("{} must be a non-negative integer: {}", MIN_BOOK_NAME_LENGTH_ENV, err).as_str(),
                    Some(MIN_BOOK_NAME_LENGTH_ENV.to_string()))
            })?;
        }
        Ok(config)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, MIN_BOOK_NAME_LENGTH_ENV};
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new();
        assert_eq!(4, config.min_book_name_length);
        assert_eq!(config, Configuration::default());
    }

    // single test touches the variable so parallel tests never race on it
    #[tokio::test]
    async fn test_should_load_config_from_env() {
        std::env::remove_var(MIN_BOOK_NAME_LENGTH_ENV);
        assert_eq!(4, Configuration::from_env().expect("should load defaults").min_book_name_length);

        std::env::set_var(MIN_BOOK_NAME_LENGTH_ENV, " 7 ");
        assert_eq!(7, Configuration::from_env().expect("should load override").min_book_name_length);

        std::env::set_var(MIN_BOOK_NAME_LENGTH_ENV, "-1");
        let err = Configuration::from_env().expect_err("should reject negative length");
        assert!(matches!(err, LibraryError::Validation{ message: _, reason_code: _ }));
        std::env::remove_var(MIN_BOOK_NAME_LENGTH_ENV);
    }
}
