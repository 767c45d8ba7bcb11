use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use emberscope_core::SessionSnapshot;
use serde::{Deserialize, Serialize};
use store_logging::{store_error, store_info, store_warn};

const SESSION_FILENAME: &str = ".emberscope_session.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSession {
    query: String,
    max_nodes: u32,
    from: String,
    until: String,
    /// Informational only; ignored on load.
    saved_at: String,
}

pub(crate) fn load_session(dir: &Path) -> SessionSnapshot {
    let path = dir.join(SESSION_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return SessionSnapshot::default();
        }
        Err(err) => {
            store_warn!("Failed to read session state from {:?}: {}", path, err);
            return SessionSnapshot::default();
        }
    };

    let persisted: PersistedSession = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            store_warn!("Failed to parse session state from {:?}: {}", path, err);
            return SessionSnapshot::default();
        }
    };

    store_info!("Restored session state from {:?}", path);
    SessionSnapshot {
        query: persisted.query,
        max_nodes: persisted.max_nodes,
        from: persisted.from,
        until: persisted.until,
    }
}

pub(crate) fn save_session(dir: &Path, session: &SessionSnapshot) {
    let persisted = PersistedSession {
        query: session.query.clone(),
        max_nodes: session.max_nodes,
        from: session.from.clone(),
        until: session.until.clone(),
        saved_at: Utc::now().to_rfc3339(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            store_error!("Failed to serialize session state: {}", err);
            return;
        }
    };

    if let Err(err) = write_atomically(dir, SESSION_FILENAME, &content) {
        store_error!("Failed to write session state to {:?}: {}", dir, err);
    }
}

/// Write via a temp file then rename so a crash never leaves a torn state
/// file behind.
fn write_atomically(dir: &Path, filename: &str, content: &str) -> std::io::Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace an existing file explicitly; rename alone is not a
    // replacement on every platform.
    let target = dir.join(filename);
    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|err| err.error)?;
    Ok(())
}
