use chrono::Duration;

use rdo_presence_bot::changelog::{parse_releases, render_release, Release};
use rdo_presence_bot::ui::roster::format_elapsed;

#[test]
fn elapsed_drops_leading_zero_components() {
    assert_eq!(format_elapsed(Duration::seconds(0)), "0s");
    assert_eq!(format_elapsed(Duration::seconds(5)), "5s");
    assert_eq!(format_elapsed(Duration::seconds(123)), "2m3s");
    assert_eq!(format_elapsed(Duration::seconds(3600)), "1h0m0s");
    assert_eq!(format_elapsed(Duration::seconds(3723)), "1h2m3s");
    assert_eq!(format_elapsed(Duration::seconds(90061)), "25h1m1s");
}

#[test]
fn elapsed_clamps_negative_durations() {
    // Clock skew between the store timestamp and the reader.
    assert_eq!(format_elapsed(Duration::seconds(-30)), "0s");
    assert_eq!(format_elapsed(Duration::milliseconds(-1)), "0s");
}

const CHANGELOG: &str = "\
# Change Log

## v1.2 - The Camp Update

### Added
- Camp selection menu
- Footer messages

### Changed
- Bounty shown with a dollar sign

.

## v1.1

### Fixed
- Offline broadcast posted twice
";

#[test]
fn changelog_parses_releases_and_sections() {
    let releases = parse_releases(CHANGELOG);
    assert_eq!(releases.len(), 2);

    assert_eq!(releases[0].title, "v1.2 - The Camp Update");
    assert_eq!(
        releases[0].added,
        vec!["Camp selection menu", "Footer messages"]
    );
    assert_eq!(releases[0].changed, vec!["Bounty shown with a dollar sign"]);
    assert!(releases[0].fixed.is_empty());

    assert_eq!(releases[1].title, "v1.1");
    assert_eq!(releases[1].fixed, vec!["Offline broadcast posted twice"]);
}

#[test]
fn changelog_last_release_needs_no_trailing_separator() {
    let releases = parse_releases("## v1.0\n### Added\n- Everything");
    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].added, vec!["Everything"]);
}

#[test]
fn changelog_items_outside_sections_are_dropped() {
    let releases = parse_releases("## v1.0\n- stray item\n### Added\n- kept");
    assert_eq!(releases[0].added, vec!["kept"]);
    assert!(releases[0].changed.is_empty());
    assert!(releases[0].fixed.is_empty());
}

#[test]
fn changelog_empty_input_yields_no_releases() {
    assert!(parse_releases("").is_empty());
    assert!(parse_releases("# Change Log\n\nno headings here").is_empty());
}

#[test]
fn release_renders_bold_title_and_fenced_sections() {
    let release = Release {
        title: "v1.2".to_string(),
        added: vec!["Camp selection menu".to_string()],
        changed: vec![],
        fixed: vec!["Double broadcast".to_string()],
    };
    let rendered = render_release(&release);
    assert!(rendered.starts_with("**v1.2**\n"));
    assert!(rendered.contains("```\nAdded\n- Camp selection menu\n```"));
    assert!(rendered.contains("```\nChanged\n```"));
    assert!(rendered.contains("```\nFixed\n- Double broadcast\n```"));
}
