//! Markup for the display container.

use std::fmt::Write;

use crate::github::{GithubRepository, GithubUser};

pub const PLACEHOLDER: &str = "N/A";
pub const REPOSITORIES_MARKER: &str = "user__repositories";
pub const NOT_FOUND: &str = "<p>User not found. Please try again.</p>";
pub const FETCH_FAILED: &str = "<p>Something went wrong. Please try again.</p>";

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => escape(v),
        _ => PLACEHOLDER.to_string(),
    }
}

fn info_row(title: &str, value: &str) -> String {
    format!(
        r#"<div class="user__info"><h2 class="user__title">{title}</h2><p class="user__value">{value}</p></div>"#
    )
}

pub fn render_profile(user: &GithubUser, repositories: &[GithubRepository]) -> String {
    let mut html = String::from(r#"<div class="user__top"><div class="user__left">"#);

    html.push_str(&info_row("Username:", &escape(user.login.as_deref().unwrap_or_default())));
    html.push_str(&info_row("Bio:", &or_placeholder(user.bio.as_deref())));
    html.push_str(&info_row("Location:", &or_placeholder(user.location.as_deref())));
    html.push_str(&info_row("Followers:", &user.followers.unwrap_or(0).to_string()));

    let _ = write!(
        html,
        r#"</div><div class="user__right"><img class="user__img" src="{}" alt="User Avatar"></div></div>"#,
        escape(user.avatar_url.as_deref().unwrap_or_default())
    );

    if !repositories.is_empty() {
        html.push_str(&render_repositories(repositories));
    }

    html
}

fn render_repositories(repositories: &[GithubRepository]) -> String {
    let mut html = format!(
        r#"<div class="{REPOSITORIES_MARKER}"><h2 class="user__repositories-title">Repositories:</h2><ul class="user__repositories-list">"#
    );

    for repository in repositories {
        let _ = write!(
            html,
            r#"<li class="user__repositories-item"><a href="{}" target="_blank" class="user__repositories-link">{}</a></li>"#,
            escape(&repository.html_url),
            escape(&repository.name)
        );
    }

    html.push_str("</ul></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository(name: &str) -> GithubRepository {
        GithubRepository {
            name: name.to_string(),
            html_url: format!("https://github.com/octocat/{name}"),
        }
    }

    fn octocat() -> GithubUser {
        GithubUser {
            login: Some("octocat".to_string()),
            bio: Some("Mascot".to_string()),
            location: Some("San Francisco".to_string()),
            followers: Some(42),
            avatar_url: Some("https://avatars.example/octocat.png".to_string()),
        }
    }

    #[test]
    fn empty_repository_list_omits_section() {
        let html = render_profile(&octocat(), &[]);

        assert!(!html.contains(REPOSITORIES_MARKER));
        assert!(!html.contains("Repositories:"));
    }

    #[test]
    fn absent_fields_use_placeholders() {
        let user = GithubUser {
            login: Some("ghost".to_string()),
            ..Default::default()
        };

        let html = render_profile(&user, &[]);

        assert!(html.contains(r#"<h2 class="user__title">Bio:</h2><p class="user__value">N/A</p>"#));
        assert!(html.contains(r#"<h2 class="user__title">Location:</h2><p class="user__value">N/A</p>"#));
        assert!(html.contains(r#"<h2 class="user__title">Followers:</h2><p class="user__value">0</p>"#));
    }

    #[test]
    fn empty_strings_use_placeholders() {
        let user = GithubUser {
            bio: Some(String::new()),
            location: Some(String::new()),
            ..octocat()
        };

        let html = render_profile(&user, &[]);

        assert_eq!(html.matches(">N/A<").count(), 2);
    }

    #[test]
    fn renders_profile_fields_and_repository_links() {
        let html = render_profile(&octocat(), &[repository("Hello-World"), repository("Spoon-Knife")]);

        assert!(html.contains(">octocat<"));
        assert!(html.contains(">Mascot<"));
        assert!(html.contains(">San Francisco<"));
        assert!(html.contains(">42<"));
        assert!(html.contains(r#"src="https://avatars.example/octocat.png""#));
        assert!(html.contains(
            r#"<a href="https://github.com/octocat/Hello-World" target="_blank" class="user__repositories-link">Hello-World</a>"#
        ));
        assert!(html.contains(">Spoon-Knife</a>"));
        assert!(html.find("Hello-World").unwrap() < html.find("Spoon-Knife").unwrap());
    }

    #[test]
    fn escapes_interpolated_values() {
        let user = GithubUser {
            bio: Some("<script>alert(\"hi\")</script> & more".to_string()),
            ..octocat()
        };

        let html = render_profile(&user, &[]);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt; &amp; more"));
    }
}
