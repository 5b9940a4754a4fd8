pub mod app_state;
pub mod config;
pub mod error;
pub mod github;
pub mod handlers;
pub mod lookup;
pub mod renderer;
pub mod validator;
pub mod widget;

pub use error::{FetchError, Result};
