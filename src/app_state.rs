use crate::config::Config;
use crate::github::GithubClient;
use crate::lookup::LookupOptions;
use crate::Result;

pub struct AppState {
    pub api: GithubClient,
    pub options: LookupOptions,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            api: GithubClient::new(&config.api_url)?,
            options: LookupOptions {
                surface_errors: config.surface_errors,
            },
        })
    }
}
