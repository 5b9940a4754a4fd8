mod client;
mod github_repository;
mod github_user;

#[cfg(test)]
pub(crate) use client::fixture;
pub use client::{GithubApi, GithubClient, ProfileLookup};
pub use github_repository::GithubRepository;
pub use github_user::GithubUser;
