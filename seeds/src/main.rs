#[macro_use]
extern crate log;

use std::env;
use std::time::Duration;

use chrono::Utc;
use dotenv::dotenv;

use db::{
    get_conn, migrations,
    models::{NewAnswer, NewQuestion},
    new_pool,
    repository::{PgRepository, Repository},
};
use errors::Error;

const SEED_DATA: [(&str, &[(&str, &str)]); 4] = [
    (
        "What is the difference between a process and a thread?",
        &[(
            "5f8d2b6e-1c3a-4e7b-9d2f-0a6c8e4b1d3f",
            "Threads share the address space of their process.",
        )],
    ),
    (
        "When should I reach for a foreign key with ON DELETE CASCADE?",
        &[
            (
                "5f8d2b6e-1c3a-4e7b-9d2f-0a6c8e4b1d3f",
                "When the child rows have no meaning without the parent.",
            ),
            (
                "c2a9e7f1-4b6d-4f3e-8a1c-7d5e9b2f6a04",
                "Comments on a post are the classic example.",
            ),
        ],
    ),
    ("How do I keep request handlers stateless?", &[]),
    ("Is a varchar(36) enough for a UUID?", &[]),
];

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| Error::InternalServerError("DATABASE_URL must be set".into()))?;
    let pool = new_pool(&database_url, 1, Duration::from_secs(30))?;
    migrations::run(&*get_conn(&pool)?)?;

    let repo = PgRepository::new(pool);
    for (text, answers) in SEED_DATA.iter() {
        let question = repo.create_question(NewQuestion {
            text: text.to_string(),
            created_at: Utc::now(),
        })?;

        for (user_id, text) in answers.iter() {
            repo.create_answer(NewAnswer {
                question_id: question.id,
                user_id: user_id.to_string(),
                text: text.to_string(),
                created_at: Utc::now(),
            })?;
        }
        info!(
            "Seeded question {} with {} answers",
            question.id,
            answers.len()
        );
    }

    Ok(())
}
