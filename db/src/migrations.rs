//! Schema setup shared by the server and the seeds binary.
//!
//! The SQL lives in the diesel-cli layout under `migrations/`, so
//! `diesel migration run` and `run` apply the same statements. Every
//! statement is idempotent.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;

use errors::Error;

const MIGRATIONS: [(&str, &str); 2] = [
    (
        "2021-03-14-000000_create_questions",
        include_str!("../../migrations/2021-03-14-000000_create_questions/up.sql"),
    ),
    (
        "2021-03-14-000100_create_answers",
        include_str!("../../migrations/2021-03-14-000100_create_answers/up.sql"),
    ),
];

pub fn run(conn: &PgConnection) -> Result<(), Error> {
    for (name, sql) in MIGRATIONS.iter() {
        conn.batch_execute(sql)?;
        debug!("Applied migration {}", name);
    }

    info!("Database schema is up to date");
    Ok(())
}
