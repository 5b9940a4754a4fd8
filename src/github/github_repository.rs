#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct GithubRepository {
    pub name: String,
    pub html_url: String,
}
