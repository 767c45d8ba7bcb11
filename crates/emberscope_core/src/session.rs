/// The slice of view state worth keeping between runs: the selection query
/// and the global time window. Pane-local (left/right) settings are
/// deliberately not part of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub query: String,
    pub max_nodes: u32,
    pub from: String,
    pub until: String,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            query: String::new(),
            max_nodes: 1024,
            from: "now-1h".to_string(),
            until: "now".to_string(),
        }
    }
}

impl SessionSnapshot {
    /// Fold a dispatched action into the snapshot. Only the global setters
    /// are absorbed; everything else is ignored.
    pub fn absorb(&mut self, action: &crate::Action) {
        use crate::Action;

        match action {
            Action::SetDateRange { from, until } => {
                self.from = from.clone();
                self.until = until.clone();
            }
            Action::SetFrom { from } => self.from = from.clone(),
            Action::SetUntil { until } => self.until = until.clone(),
            Action::SetMaxNodes { max_nodes } => self.max_nodes = *max_nodes,
            Action::SetQuery { query } => self.query = query.clone(),
            _ => {}
        }
    }
}
