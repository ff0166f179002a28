//! Changelog ingestion: fetches the remote markdown changelog and mirrors it
//! into the bulletin channel, one message per release.
//!
//! The changelog format is `# Change Log` followed by releases, each a
//! `## <title>` heading with `### Added` / `### Changed` / `### Fixed`
//! sections of `-` items, separated by a paragraph containing a single `.`.

use serenity::builder::GetMessages;
use serenity::prelude::Context;

use crate::AppState;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Release {
    pub title: String,
    pub added: Vec<String>,
    pub changed: Vec<String>,
    pub fixed: Vec<String>,
}

/// Replaces the bulletin channel contents with the current changelog.
pub async fn refresh(ctx: &Context, state: &AppState) -> anyhow::Result<()> {
    let channels = state.channels.read().await.clone();
    let Some(bulletin) = channels.bulletin else {
        tracing::warn!(target: "changelog", "bulletin channel not resolved, skipping refresh");
        return Ok(());
    };

    tracing::info!(target: "changelog", url = %state.changelog_url, "refreshing changelog");
    let previous = bulletin
        .messages(&ctx.http, GetMessages::new().limit(100))
        .await?;
    for message in previous {
        bulletin.delete_message(&ctx.http, message.id).await?;
    }

    let body = reqwest::get(&state.changelog_url)
        .await?
        .error_for_status()?
        .text()
        .await?;

    for release in parse_releases(&body) {
        bulletin.say(&ctx.http, render_release(&release)).await?;
    }
    Ok(())
}

/// Parses the markdown changelog into releases. Tolerant of blank lines and
/// unknown headings; items outside a known section are dropped.
pub fn parse_releases(markdown: &str) -> Vec<Release> {
    #[derive(Clone, Copy)]
    enum Section {
        None,
        Added,
        Changed,
        Fixed,
    }

    let mut releases = Vec::new();
    let mut current: Option<Release> = None;
    let mut section = Section::None;

    for line in markdown.lines() {
        let line = line.trim();
        if line == "." {
            if let Some(release) = current.take() {
                releases.push(release);
            }
            section = Section::None;
        } else if let Some(title) = line.strip_prefix("## ") {
            if let Some(release) = current.take() {
                releases.push(release);
            }
            current = Some(Release {
                title: title.trim().to_string(),
                ..Release::default()
            });
            section = Section::None;
        } else if let Some(heading) = line.strip_prefix("### ") {
            section = match heading.trim() {
                "Added" => Section::Added,
                "Changed" => Section::Changed,
                "Fixed" => Section::Fixed,
                _ => Section::None,
            };
        } else if let Some(item) = line.strip_prefix("- ") {
            if let Some(release) = current.as_mut() {
                let item = item.trim().to_string();
                match section {
                    Section::Added => release.added.push(item),
                    Section::Changed => release.changed.push(item),
                    Section::Fixed => release.fixed.push(item),
                    Section::None => {}
                }
            }
        }
    }
    if let Some(release) = current.take() {
        releases.push(release);
    }
    releases
}

/// Renders one release as a Discord message: bold title and one fenced block
/// per section.
pub fn render_release(release: &Release) -> String {
    let block = |name: &str, items: &[String]| {
        let mut content = format!("```\n{name}\n");
        for item in items {
            content.push_str(&format!("- {item}\n"));
        }
        content.push_str("```");
        content
    };
    format!(
        "**{}**\n{}{}{}\n",
        release.title,
        block("Added", &release.added),
        block("Changed", &release.changed),
        block("Fixed", &release.fixed),
    )
}
