//! Integration tests for the form's create and update flows.
//!
//! A fake backend records every request so the tests can check what the
//! form sends without talking to a real API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use marquee_core::{
    CastMember, Genre, Language, MediaRef, MovieDraft, MovieId, MovieRecord, MovieType, Person,
    Status,
};
use marquee_form::{
    ApiError, ApiResult, FormError, FormEvents, MovieApi, MovieForm, MoviePayload, NoticeKind,
    Notifier, SubmissionState, SubmitOutcome,
};

#[derive(Debug)]
enum Call {
    Create(MoviePayload),
    Update(MovieId, MoviePayload),
}

/// Backend double: records calls and answers with a fixed record or error.
#[derive(Debug, Default)]
struct FakeApi {
    calls: Mutex<Vec<Call>>,
    reject_with: Option<(u16, String)>,
}

impl FakeApi {
    fn rejecting(status: u16, message: &str) -> Self {
        Self {
            reject_with: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    fn answer(&self, id: &str, payload: &MoviePayload) -> ApiResult<MovieRecord> {
        if let Some((status, message)) = &self.reject_with {
            return Err(ApiError::Rejected {
                status: *status,
                message: message.clone(),
            });
        }
        let title = payload.text("title").unwrap_or_default();
        Ok(MovieRecord::new(id, MovieDraft::new(title)))
    }

    fn calls(&self) -> std::sync::MutexGuard<'_, Vec<Call>> {
        self.calls.lock().unwrap()
    }
}

#[async_trait]
impl MovieApi for FakeApi {
    async fn create_movie(&self, payload: MoviePayload) -> ApiResult<MovieRecord> {
        let answer = self.answer("created-1", &payload);
        self.calls.lock().unwrap().push(Call::Create(payload));
        answer
    }

    async fn update_movie(&self, id: &MovieId, payload: MoviePayload) -> ApiResult<MovieRecord> {
        let answer = self.answer(id.as_str(), &payload);
        self.calls
            .lock()
            .unwrap()
            .push(Call::Update(id.clone(), payload));
        answer
    }
}

#[derive(Debug, Default)]
struct Host {
    notices: Mutex<Vec<(NoticeKind, String)>>,
    dirty: AtomicUsize,
    closed: AtomicUsize,
    resets: AtomicUsize,
}

impl Notifier for Host {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.lock().unwrap().push((kind, message.to_string()));
    }
}

impl FormEvents for Host {
    fn form_dirty(&self) {
        self.dirty.fetch_add(1, Ordering::SeqCst);
    }

    fn close(&self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }

    fn creation_reset(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }

    fn confirm_discard(&self) -> bool {
        false
    }
}

fn new_form() -> (MovieForm, Arc<Host>) {
    let host = Arc::new(Host::default());
    let form = MovieForm::new(host.clone(), host.clone());
    (form, host)
}

/// Fill the form the way a user would, field by field.
fn fill_valid(form: &mut MovieForm) {
    form.set_field("title", "Interstellar").unwrap();
    form.set_field("storyLine", "A team travels through a wormhole.")
        .unwrap();
    form.set_field("releaseDate", "2014-11-07").unwrap();
    form.set_field("status", "public").unwrap();
    form.set_field("type", "Film").unwrap();
    form.set_field("language", "English").unwrap();
    form.update_tags(vec!["space".to_string()]);
    form.update_genres(vec![Genre::SciFi, Genre::Drama]);
}

fn stored_movie() -> MovieRecord {
    let draft = MovieDraft::new("Interstellar")
        .with_story_line("A team travels through a wormhole.")
        .with_tags(["space"])
        .with_language(Language::English)
        .with_release_date("2014-11-07T00:00:00.000Z")
        .with_status(Status::Public)
        .with_type(MovieType::Film)
        .with_genres([Genre::SciFi]);
    MovieRecord::new("64f0", draft)
}

#[tokio::test]
async fn test_create_success_resets_and_closes() {
    let (mut form, host) = new_form();
    let api = FakeApi::default();
    fill_valid(&mut form);
    assert!(form.is_dirty());
    assert_eq!(host.dirty.load(Ordering::SeqCst), 1);

    let outcome = form.submit(&api, None).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Created(_)));
    assert_eq!(outcome.record().id, MovieId::from("created-1"));
    assert_eq!(api.calls().len(), 1);
    assert!(matches!(api.calls()[0], Call::Create(_)));

    assert_eq!(form.draft(), &MovieDraft::default());
    assert_eq!(form.state(), SubmissionState::Idle);
    assert!(!form.is_dirty());
    assert_eq!(host.closed.load(Ordering::SeqCst), 1);
    assert_eq!(host.resets.load(Ordering::SeqCst), 1);
    assert_eq!(
        host.notices.lock().unwrap().as_slice(),
        &[(NoticeKind::Success, "Movie created successfully".to_string())]
    );
}

#[tokio::test]
async fn test_update_failure_keeps_draft() {
    let (mut form, host) = new_form();
    let api = FakeApi::rejecting(404, "Movie not found!");
    form.hydrate(stored_movie());
    form.set_field("title", "Interstellar (IMAX)").unwrap();
    let before = form.draft().clone();

    let err = form.submit(&api, None).await.unwrap_err();

    assert!(matches!(err, FormError::Api(_)));
    assert!(!err.is_local());
    assert_eq!(form.draft(), &before);
    assert_eq!(form.record_id(), Some(&MovieId::from("64f0")));
    assert_eq!(form.state(), SubmissionState::Idle);
    assert_eq!(host.closed.load(Ordering::SeqCst), 0);
    assert_eq!(
        host.notices.lock().unwrap().last(),
        Some(&(NoticeKind::Error, "Movie not found!".to_string()))
    );

    let calls = api.calls();
    match &calls[0] {
        Call::Update(id, payload) => {
            assert_eq!(id.as_str(), "64f0");
            assert_eq!(payload.text("title"), Some("Interstellar (IMAX)"));
            assert_eq!(
                payload.text("releaseDate"),
                Some("2014-11-07T00:00:00.000Z")
            );
        }
        other => panic!("expected an update call, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_success_does_not_reset_creation_flow() {
    let (mut form, host) = new_form();
    let api = FakeApi::default();
    form.hydrate(stored_movie());

    let outcome = form.submit(&api, None).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Updated(_)));
    assert!(!form.is_editing());
    assert_eq!(host.closed.load(Ordering::SeqCst), 1);
    assert_eq!(host.resets.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_backend() {
    let (mut form, host) = new_form();
    let api = FakeApi::default();
    fill_valid(&mut form);
    form.set_field("title", "").unwrap();

    let err = form.submit(&api, None).await.unwrap_err();

    assert!(err.is_local());
    assert!(api.calls().is_empty());
    assert_eq!(
        host.notices.lock().unwrap().as_slice(),
        &[(NoticeKind::Error, "Title is missing!".to_string())]
    );
}

#[tokio::test]
async fn test_people_are_sent_as_identifiers() {
    let (mut form, _) = new_form();
    let api = FakeApi::default();
    fill_valid(&mut form);
    let writers: Vec<Person> = serde_json::from_str(
        r#"[{"actorId": 1, "name": "Jonathan Nolan"}, {"actorId": 2, "name": "Christopher Nolan"}]"#,
    )
    .unwrap();
    for writer in writers {
        assert!(form.add_writer(writer));
    }
    assert!(!form.add_writer(Person::new("Christopher Nolan").with_actor_id("2")));
    assert!(form.add_cast(
        CastMember::new(Person::new("Matthew McConaughey").with_actor_id("9"), "Cooper").lead()
    ));

    form.submit(&api, None).await.unwrap();

    let calls = api.calls();
    let Call::Create(payload) = &calls[0] else {
        panic!("expected a create call");
    };
    let writers: serde_json::Value = serde_json::from_str(payload.text("writers").unwrap()).unwrap();
    assert_eq!(writers, serde_json::json!([1, 2]));
    let cast: serde_json::Value = serde_json::from_str(payload.text("cast").unwrap()).unwrap();
    assert_eq!(
        cast,
        serde_json::json!([{"actor": "9", "roleAs": "Cooper", "leadActor": true}])
    );
}

#[tokio::test]
async fn test_external_trailer_is_submitted() {
    let (mut form, _) = new_form();
    let api = FakeApi::default();
    fill_valid(&mut form);
    let trailer = MediaRef::new("https://cdn.test/trailer.mp4").with_public_id("tr1");

    form.submit(&api, Some(&trailer)).await.unwrap();

    let calls = api.calls();
    let Call::Create(payload) = &calls[0] else {
        panic!("expected a create call");
    };
    let sent: serde_json::Value = serde_json::from_str(payload.text("trailer").unwrap()).unwrap();
    assert_eq!(
        sent,
        serde_json::json!({"url": "https://cdn.test/trailer.mp4", "public_id": "tr1"})
    );
}
