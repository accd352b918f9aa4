table! {
    answers (id) {
        id -> Int4,
        question_id -> Int4,
        user_id -> Varchar,
        text -> Text,
        created_at -> Timestamptz,
    }
}

table! {
    questions (id) {
        id -> Int4,
        text -> Text,
        created_at -> Timestamptz,
    }
}

joinable!(answers -> questions (question_id));

allow_tables_to_appear_in_same_query!(
    answers,
    questions,
);
