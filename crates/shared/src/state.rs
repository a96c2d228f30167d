use crate::{config::ConnectionPool, utils::DependenciesInject};

/// Explicitly owned handle to everything a request needs. The pool lives
/// here and in the repositories it was cloned into; there is no
/// process-global connection.
#[derive(Clone, Debug)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let di_container = DependenciesInject::new(pool);

        Self { di_container }
    }
}
