use std::{fs::File, io, path::Path};

use anyhow::Context;
use fitgrid_engine::{Fixture, GameSession};

fn read_fixture_file(path: &Path) -> anyhow::Result<Fixture> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open fixture file: {}", path.display()))?;

    let reader = io::BufReader::new(file);
    let fixture = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse fixture JSON file: {}", path.display()))?;

    Ok(fixture)
}

/// Loads a fixture file and starts a session from it.
pub fn load_session<P>(path: P) -> anyhow::Result<GameSession>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let fixture = read_fixture_file(path)?;
    let session = GameSession::from_fixture(fixture)
        .with_context(|| format!("Invalid fixture file: {}", path.display()))?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fixture_reports_the_path() {
        let err = load_session("no/such/fixture.json").unwrap_err();
        assert!(err.to_string().contains("no/such/fixture.json"));
    }
}
