//! The two user actions: search by handle and pick a random user.

use crate::error::FetchError;
use crate::github::{GithubApi, GithubRepository, GithubUser, ProfileLookup};
use crate::renderer::{render_profile, FETCH_FAILED, NOT_FOUND};
use crate::validator::{parse_handle, validate_username, Handle};
use crate::widget::{Patch, Phase, Transition, Widget};

pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    fn pick(&mut self, len: usize) -> usize {
        self.usize(..len)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LookupOptions {
    pub surface_errors: bool,
}

fn failed(error: FetchError, options: LookupOptions, patch: Patch) -> Transition {
    let span = tracing::error_span!("Upstream request failed");
    span.in_scope(|| {
        tracing::error!("{error}");
    });

    let patch = if options.surface_errors {
        Patch {
            container: Patch::show(FETCH_FAILED.to_string()).container,
            ..patch
        }
    } else {
        patch
    };

    Transition {
        phase: Phase::ErrorLogged,
        patch,
    }
}

/// Validation step of a search. An invalid input ends the action without
/// touching the network.
pub fn begin_search(raw: &str) -> Result<Handle, Transition> {
    parse_handle(raw).map_err(|validation| Transition {
        phase: Phase::Idle,
        patch: Patch::validation(raw, &validation),
    })
}

/// Profile, then repositories, for the same handle. The repositories are
/// requested even when the profile turns out not to exist; they are dropped
/// in that case, errors included.
async fn lookup_profile<A: GithubApi>(
    api: &A,
    handle: &Handle,
) -> Result<Option<(GithubUser, Vec<GithubRepository>)>, FetchError> {
    let profile = api.fetch_profile(handle).await?;
    let repositories = api.fetch_repositories(handle).await;

    match profile {
        ProfileLookup::NotFound => Ok(None),
        ProfileLookup::Found(user) => Ok(Some((user, repositories?))),
    }
}

pub async fn finish_search<A: GithubApi>(
    api: &A,
    handle: &Handle,
    options: LookupOptions,
) -> Transition {
    tracing::info!("Looking up {handle}");

    match lookup_profile(api, handle).await {
        Ok(Some((user, repositories))) => {
            tracing::debug!("Found {handle} with {} repositories", repositories.len());
            Transition {
                phase: Phase::Rendered,
                patch: Patch::show(render_profile(&user, &repositories)),
            }
        }
        Ok(None) => {
            tracing::debug!("{handle} does not exist");
            Transition {
                phase: Phase::NotFoundDisplayed,
                patch: Patch::replace(NOT_FOUND.to_string()),
            }
        }
        Err(e) => failed(e, options, Patch::default()),
    }
}

pub async fn search<A: GithubApi>(api: &A, raw: &str, options: LookupOptions) -> Transition {
    match begin_search(raw) {
        Ok(handle) => finish_search(api, &handle, options).await,
        Err(transition) => transition,
    }
}

/// Picks one entry of the user listing uniformly at random. An entry whose
/// login is missing or not a valid handle yields no pick.
pub async fn fetch_random_user<A: GithubApi, R: RandomSource>(
    api: &A,
    rng: &mut R,
) -> Result<Option<(Handle, GithubUser)>, FetchError> {
    let mut users = api.fetch_users().await?;
    if users.is_empty() {
        return Ok(None);
    }

    let user = users.swap_remove(rng.pick(users.len()));

    let handle = user.login.as_deref().and_then(|login| parse_handle(login).ok());

    Ok(handle.map(|handle| (handle, user)))
}

/// The listing entry itself is rendered, so fields the listing lacks show
/// as placeholders.
pub async fn random_user<A: GithubApi, R: RandomSource>(
    api: &A,
    rng: &mut R,
    options: LookupOptions,
) -> Transition {
    let picked = match fetch_random_user(api, rng).await {
        Ok(picked) => picked,
        Err(e) => return failed(e, options, Patch::default()),
    };

    let cleared = Patch::replace(String::new()).reset_input();

    let Some((handle, user)) = picked else {
        tracing::info!("No user picked from the listing");
        return Transition {
            phase: Phase::Idle,
            patch: cleared,
        };
    };

    tracing::info!("Picked random user {handle}");

    match api.fetch_repositories(&handle).await {
        Ok(repositories) => Transition {
            phase: Phase::Rendered,
            patch: Patch::show(render_profile(&user, &repositories)).reset_input(),
        },
        Err(e) => failed(e, options, cleared),
    }
}

impl Widget {
    pub fn input_changed(&mut self, text: &str) {
        self.input = text.to_string();
        self.apply(&Patch::validation(text, &validate_username(text)));
    }

    pub async fn search<A: GithubApi>(&mut self, api: &A, options: LookupOptions) {
        self.begin_action();
        self.phase = Phase::Validating;

        let transition = match begin_search(&self.input) {
            Ok(handle) => {
                self.phase = Phase::Fetching;
                finish_search(api, &handle, options).await
            }
            Err(transition) => transition,
        };

        self.complete(&transition);
    }

    pub async fn random_user<A: GithubApi, R: RandomSource>(
        &mut self,
        api: &A,
        rng: &mut R,
        options: LookupOptions,
    ) {
        self.begin_action();
        self.phase = Phase::Fetching;

        let transition = random_user(api, rng, options).await;
        self.complete(&transition);
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    pub fn decode_error() -> FetchError {
        let error = serde_json::from_str::<Vec<GithubRepository>>(r#"{"message":"Not Found"}"#)
            .unwrap_err();
        FetchError::Decode("fake".to_string(), error)
    }

    pub fn repository(owner: &str, name: &str) -> GithubRepository {
        GithubRepository {
            name: name.to_string(),
            html_url: format!("https://github.com/{owner}/{name}"),
        }
    }

    pub fn listed(login: &str) -> GithubUser {
        GithubUser {
            login: Some(login.to_string()),
            avatar_url: Some(format!("https://avatars.example/{login}.png")),
            ..Default::default()
        }
    }

    /// In-memory API. Unknown handles behave like GitHub: the profile has no
    /// login and the repository body is an object, which fails to decode.
    #[derive(Default)]
    pub struct FakeApi {
        pub profiles: HashMap<String, GithubUser>,
        pub repositories: HashMap<String, Vec<GithubRepository>>,
        pub users: Vec<GithubUser>,
        pub users_fail: bool,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        pub fn octocat() -> Self {
            let mut api = Self::default();
            api.profiles.insert(
                "octocat".to_string(),
                GithubUser {
                    login: Some("octocat".to_string()),
                    bio: None,
                    location: Some("San Francisco".to_string()),
                    followers: Some(9001),
                    avatar_url: Some("https://avatars.example/octocat.png".to_string()),
                },
            );
            api.repositories.insert(
                "octocat".to_string(),
                vec![
                    repository("octocat", "Hello-World"),
                    repository("octocat", "Spoon-Knife"),
                ],
            );
            api
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl GithubApi for FakeApi {
        async fn fetch_profile(&self, handle: &Handle) -> Result<ProfileLookup, FetchError> {
            self.record(format!("/users/{handle}"));
            Ok(match self.profiles.get(handle.as_str()) {
                Some(user) => ProfileLookup::Found(user.clone()),
                None => ProfileLookup::NotFound,
            })
        }

        async fn fetch_repositories(
            &self,
            handle: &Handle,
        ) -> Result<Vec<GithubRepository>, FetchError> {
            self.record(format!("/users/{handle}/repos"));
            self.repositories
                .get(handle.as_str())
                .cloned()
                .ok_or_else(decode_error)
        }

        async fn fetch_users(&self) -> Result<Vec<GithubUser>, FetchError> {
            self.record("/users".to_string());
            if self.users_fail {
                return Err(decode_error());
            }
            Ok(self.users.clone())
        }
    }

    pub struct FixedIndex(pub usize);

    impl RandomSource for FixedIndex {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }
}
