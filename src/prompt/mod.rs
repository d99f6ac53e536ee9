//! Branch resolution, dirty detection and prompt composition.
//!
//! Everything here is a pure function over a [`StatusSource`]; the subprocess
//! work happens before, in [`crate::git::GitCli::snapshot`].

use crate::constants::{
    AHEAD_GLYPH, BEHIND_GLYPH, DETACHED_HEAD_MARKER, GIT_DETACHED_SENTINEL, UNTRACKED_GLYPH,
};
use crate::formatting::Painter;
use crate::git::{GitQuery, StatusSource};
use crate::types::{PromptTheme, RepositoryStatus, SemanticColor, Tracking};
use tracing::debug;

/// Current branch name, or `None` when no Git segment should be shown
pub fn resolve_branch<S: StatusSource + ?Sized>(source: &S) -> Option<String> {
    let output = source.output(GitQuery::CurrentBranch)?;
    let name = output.trim();

    match name {
        "" => None,
        GIT_DETACHED_SENTINEL => Some(DETACHED_HEAD_MARKER.to_string()),
        name => Some(name.to_string()),
    }
}

/// Whether anything is modified, staged or untracked; unreadable state is clean
pub fn is_dirty<S: StatusSource + ?Sized>(source: &S) -> bool {
    source
        .output(GitQuery::Porcelain)
        .is_some_and(|listing| listing.lines().any(|line| !line.trim().is_empty()))
}

/// Ahead/behind counts from the porcelain branch header
pub fn read_tracking<S: StatusSource + ?Sized>(source: &S) -> Tracking {
    let Some(output) = source.output(GitQuery::PorcelainWithBranch) else {
        return Tracking::default();
    };
    let Some(header) = output.lines().next() else {
        return Tracking::default();
    };

    let tracking = Tracking::from_header(header);
    debug!(header, %tracking, "parsed branch header");
    tracking
}

pub fn count_untracked<S: StatusSource + ?Sized>(source: &S) -> u32 {
    source.output(GitQuery::UntrackedFiles).map_or(0, |listing| {
        let count = listing.lines().filter(|line| !line.trim().is_empty()).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    })
}

/// Gather the full status, or `None` outside a repository
pub fn collect_status<S: StatusSource + ?Sized>(source: &S) -> Option<RepositoryStatus> {
    let branch = resolve_branch(source)?;

    Some(RepositoryStatus {
        is_dirty: is_dirty(source),
        untracked: count_untracked(source),
        ..RepositoryStatus::new(branch).with_tracking(read_tracking(source))
    })
}

/// The prompt segment for the repository behind `source`, or `""`
pub fn compose<S: StatusSource + ?Sized>(source: &S, painter: &Painter) -> String {
    collect_status(source)
        .map(|status| render(&status, painter))
        .unwrap_or_default()
}

/// Format a status as ` (<branch>[ <extras>]) `
pub fn render(status: &RepositoryStatus, painter: &Painter) -> String {
    let theme = PromptTheme::for_class(status.branch_class());
    let (fg, bg) = theme.branch_colors(status.is_dirty);

    format!(
        "{open}{branch}{extras}{close}",
        open = painter.paint(" (", theme.base, None),
        branch = painter.paint(&status.branch_name, fg, bg),
        extras = extra_status(status, &theme, painter),
        close = painter.paint(") ", theme.base, None),
    )
}

// Ahead, behind, untracked; only strictly positive counts are shown
fn extra_status(status: &RepositoryStatus, theme: &PromptTheme, painter: &Painter) -> String {
    let groups: Vec<String> = [
        (AHEAD_GLYPH, status.ahead, theme.tracking),
        (BEHIND_GLYPH, status.behind, theme.tracking),
        (UNTRACKED_GLYPH, status.untracked, theme.untracked),
    ]
    .into_iter()
    .filter(|(_, count, _)| *count > 0)
    .map(|(glyph, count, color): (char, u32, SemanticColor)| {
        painter.paint(&format!("{}{}", glyph, count), color, None)
    })
    .collect();

    if groups.is_empty() {
        String::new()
    } else {
        format!(" {}", groups.concat())
    }
}
