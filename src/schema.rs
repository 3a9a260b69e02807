diesel::table! {
    feeds (id) {
        id -> Uuid,
        name -> Text,
        url -> Text,
        last_fetched_at -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    posts (id) {
        id -> Uuid,
        feed_id -> Uuid,
        title -> Text,
        description -> Nullable<Text>,
        published_at -> Timestamptz,
        url -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(posts -> feeds (feed_id));

diesel::allow_tables_to_appear_in_same_query!(feeds, posts);
