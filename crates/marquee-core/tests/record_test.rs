//! Integration tests for reading backend movie records and validating them.

use marquee_core::{
    DraftValidator, Genre, Language, MovieRecord, MovieType, PersonId, Poster, Status, Validator,
};

const STORED_MOVIE: &str = r#"{
    "_id": "64f0c2",
    "title": "Interstellar",
    "storyLine": "A team travels through a wormhole.",
    "tags": ["space", "time"],
    "director": {"_id": "p1", "name": "Christopher Nolan"},
    "writers": [
        {"_id": "p2", "name": "Jonathan Nolan"},
        {"actorId": 7, "name": "Christopher Nolan"}
    ],
    "cast": [
        {"actor": {"_id": "a1", "name": "Matthew McConaughey", "avatar": {}}, "roleAs": "Cooper", "leadActor": true}
    ],
    "releaseDate": "2014-11-07T00:00:00.000Z",
    "status": "public",
    "type": "Film",
    "language": "English",
    "genre": ["Sci-Fi", "Drama"],
    "poster": {"url": "http://x/y.jpg", "public_id": "y"},
    "trailer": {"url": "http://x/t.mp4", "public_id": "t"}
}"#;

#[test]
fn test_stored_movie_is_read_completely() {
    let record: MovieRecord = serde_json::from_str(STORED_MOVIE).unwrap();
    let draft = &record.draft;

    assert_eq!(record.id.as_str(), "64f0c2");
    assert_eq!(draft.status, Some(Status::Public));
    assert_eq!(draft.movie_type, Some(MovieType::Film));
    assert_eq!(draft.language, Some(Language::English));
    assert_eq!(draft.genre, vec![Genre::SciFi, Genre::Drama]);
    assert_eq!(draft.writers[1].lookup_id(), Some(&PersonId::from("7")));
    assert!(draft.cast[0].actor.avatar.is_none());
    assert_eq!(draft.poster.url(), Some("http://x/y.jpg"));
    assert!(matches!(draft.poster, Poster::Existing(_)));
    assert_eq!(draft.release_date_display(), "2014-11-07");
}

#[test]
fn test_stored_movie_passes_validation() {
    let record: MovieRecord = serde_json::from_str(STORED_MOVIE).unwrap();
    assert!(DraftValidator.validate(&record.draft).is_ok());
}

#[test]
fn test_sparse_record_uses_defaults() {
    let record: MovieRecord =
        serde_json::from_str(r#"{"id": "1", "title": "Dune", "type": "", "poster": {}}"#)
            .unwrap();

    assert_eq!(record.id.as_str(), "1");
    assert_eq!(record.draft.movie_type, None);
    assert!(record.draft.poster.is_empty());
    assert!(record.draft.trailer.is_none());

    let err = DraftValidator.validate(&record.draft).unwrap_err();
    assert_eq!(err.message(), "Story line is missing!");
}

#[test]
fn test_record_written_back_with_backend_names() {
    let record: MovieRecord = serde_json::from_str(STORED_MOVIE).unwrap();
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["_id"], "64f0c2");
    assert_eq!(value["type"], "Film");
    assert_eq!(value["storyLine"], "A team travels through a wormhole.");
    assert_eq!(value["releaseDate"], "2014-11-07T00:00:00.000Z");
}

#[test]
fn test_unknown_option_is_rejected() {
    let err = serde_json::from_str::<MovieRecord>(r#"{"_id": "1", "status": "secret"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("secret"));
}
