//! Visited games command
//!
//! Summarizes every session in the seen list, most recent first.

use crate::catalog::Catalog;
use crate::core::{Levels, Tally, get_levels};
use crate::output::formatters::hive_banner;
use crate::session::{SessionError, SessionId, SessionStore, Sessions};

/// Summary of one visited session
pub struct SessionSummary {
    pub id: SessionId,
    pub banner: String,
    pub tally: Tally,
    pub levels: Levels,
    pub over: bool,
}

/// Load a summary for each seen session
///
/// Sessions whose file is gone or whose puzzle is not in `catalog` are
/// skipped with a warning.
///
/// # Errors
///
/// Returns an error if the seen list cannot be read.
pub fn list_sessions(
    sessions: &Sessions,
    catalog: &Catalog,
) -> Result<Vec<SessionSummary>, SessionError> {
    let seen = sessions.seen()?;
    let mut summaries = Vec::with_capacity(seen.ids().len());

    for id in seen.ids() {
        let state = match sessions.open(id).and_then(|store| store.load()) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(session = %id, "skipping session: {err}");
                continue;
            }
        };
        let Some(puzzle) = catalog.get(state.game) else {
            tracing::warn!(session = %id, game = state.game, "skipping session with unknown puzzle");
            continue;
        };

        let levels = get_levels(puzzle);
        let tally = Tally::with_levels(&levels, puzzle.high(), &state.found);
        summaries.push(SessionSummary {
            id: id.clone(),
            banner: hive_banner(puzzle),
            over: state.over || tally.complete,
            tally,
            levels,
        });
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn lists_seen_sessions_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let sessions = Sessions::new(dir.path());
        let catalog = Catalog::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let (first, _) = sessions.create(&catalog, &mut rng).unwrap();
        let (second, mut store) = sessions.create(&catalog, &mut rng).unwrap();
        store.set_over().unwrap();

        let mut seen = sessions.seen().unwrap();
        seen.record(&first).unwrap();
        seen.record(&second).unwrap();

        let summaries = list_sessions(&sessions, &catalog).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, second);
        assert!(summaries[0].over);
        assert_eq!(summaries[1].id, first);
        assert_eq!(summaries[1].tally.score, 0);
    }

    #[test]
    fn missing_session_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let sessions = Sessions::new(dir.path());
        let catalog = Catalog::embedded().unwrap();

        let mut seen = sessions.seen().unwrap();
        seen.record(&SessionId::parse("gone000000").unwrap()).unwrap();

        assert!(list_sessions(&sessions, &catalog).unwrap().is_empty());
    }
}
