/// A user object as returned by `/users/{login}` or as an entry of `/users`.
///
/// Every field is optional: an unknown login answers with a body that has no
/// `login`, and listing entries carry no `bio`, `location` or `followers`.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Default, PartialEq)]
pub struct GithubUser {
    pub login: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub followers: Option<u64>,
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_unknown_fields() {
        let user: GithubUser = serde_json::from_str(
            r#"{"login":"octocat","id":583231,"bio":null,"followers":9001,"site_admin":false}"#,
        )
        .unwrap();

        assert_eq!(user.login.as_deref(), Some("octocat"));
        assert_eq!(user.bio, None);
        assert_eq!(user.followers, Some(9001));
    }

    #[test]
    fn not_found_body_has_no_login() {
        let user: GithubUser = serde_json::from_str(
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#,
        )
        .unwrap();

        assert_eq!(user, GithubUser::default());
    }
}
