use anyhow::{Context, Result};
use dictionary::{Dictionary, DEFAULT_API_URL};

pub const API_KEY_VAR: &str = "API_KEY";
pub const API_URL_VAR: &str = "DICT_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
}

impl Config {
    /// Reads the process environment, after loading a `.env` file if there is one.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let set = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let api_key = set(API_KEY_VAR).with_context(|| {
            format!("{API_KEY_VAR} is not set, please create a .env file containing {API_KEY_VAR}=<your key>")
        })?;
        let api_url = set(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        Ok(Self { api_url, api_key })
    }

    pub fn dictionary(&self) -> Result<Dictionary> {
        Dictionary::new(&self.api_url, self.api_key.as_str())
            .with_context(|| format!("cannot use {API_URL_VAR}={}", self.api_url))
    }
}
