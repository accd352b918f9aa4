use std::io;
use std::sync::Arc;

use db::{get_conn, migrations, new_pool, repository::PgRepository};
use errors::Error;

use crate::config::Config;
use crate::service::{QnaService, RepositoryService};
use crate::state::AppState;

fn connect(config: &Config) -> Result<Arc<dyn QnaService>, Error> {
    let pool = new_pool(&config.database_url, config.pool_size, config.connect_timeout)?;
    let conn = get_conn(&pool)?;
    migrations::run(&conn)?;

    Ok(Arc::new(RepositoryService::new(PgRepository::new(pool))))
}

/// Builds the shared state, or fails so the process exits and gets restarted
/// once the database is reachable.
pub fn init_state(config: &Config) -> io::Result<AppState> {
    let service = connect(config).map_err(|err| {
        error!("Could not initialize the database - {}", err);
        io::Error::new(io::ErrorKind::Other, err.to_string())
    })?;

    Ok(AppState::new(service))
}
