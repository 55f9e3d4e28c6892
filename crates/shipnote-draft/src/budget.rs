//! Bullet caps

use crate::types::{Bullet, BulletSource};

/// Keep the first `max_commits` commit bullets and the first `max_changelog`
/// changelog bullets, preserving the interleaving of survivors
///
/// `None` leaves a source uncapped; `Some(0)` removes it entirely.
pub fn cap_bullets(
    bullets: Vec<Bullet>,
    max_commits: Option<usize>,
    max_changelog: Option<usize>,
) -> Vec<Bullet> {
    let mut commits_used = 0usize;
    let mut changelog_used = 0usize;

    bullets
        .into_iter()
        .filter(|bullet| {
            let (used, cap) = match bullet.source {
                BulletSource::Commit => (&mut commits_used, max_commits),
                BulletSource::Changelog => (&mut changelog_used, max_changelog),
            };
            if cap.is_some_and(|max| *used >= max) {
                return false;
            }
            *used += 1;
            true
        })
        .collect()
}
