use async_trait::async_trait;
use request_builder::telemetry::setup_tracing;
use request_builder::{
    create, delete, query, update, MockHandler, OperationError, OperationHandler, OperationOutcome,
    Status,
};
use request_builder::{create_operation, delete_operation, query_operation, update_operation};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
struct Note {
    id: String,
    parent_id: Option<String>,
    title: String,
}

impl Note {
    fn new(id: &str, parent_id: Option<&str>, title: &str) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.map(str::to_string),
            title: title.into(),
        }
    }
}

/// Executor test double keeping notes in memory, ordered by id.
#[derive(Default)]
struct InMemoryNotes {
    store: Mutex<BTreeMap<String, Note>>,
}

#[async_trait]
impl OperationHandler<Note> for InMemoryNotes {
    async fn create(&self, request: create_operation::Request<Note>) -> create_operation::Response<Note> {
        let Some(note) = request.into_entity() else {
            return create_operation::Response::failure("missing entity");
        };
        let mut store = self.store.lock().unwrap();
        if store.contains_key(&note.id) {
            return create_operation::Response::failure("Entity already exists");
        }
        store.insert(note.id.clone(), note.clone());
        create_operation::Response::success(note)
    }

    async fn query(&self, request: query_operation::Request<Note>) -> query_operation::Response<Note> {
        let store = self.store.lock().unwrap();
        let results = store
            .values()
            .filter(|n| !request.has_id() || request.id() == Some(n.id.as_str()))
            .filter(|n| !request.has_parent_id() || request.parent_id() == n.parent_id.as_deref())
            .cloned()
            .collect();
        query_operation::Response::success(results)
    }

    async fn update(&self, request: update_operation::Request<Note>) -> update_operation::Response<Note> {
        let Some(note) = request.into_entity() else {
            return update_operation::Response::failure("missing entity");
        };
        let mut store = self.store.lock().unwrap();
        match store.get_mut(&note.id) {
            Some(existing) => {
                *existing = note;
                update_operation::Response::success()
            }
            None => update_operation::Response::failure("Entity not found"),
        }
    }

    async fn delete(&self, request: delete_operation::Request<Note>) -> delete_operation::Response<Note> {
        let Some(id) = request.id() else {
            return delete_operation::Response::failure("missing id");
        };
        let mut store = self.store.lock().unwrap();
        let matches_parent = store
            .get(id)
            .is_some_and(|n| request.parent_id().is_none() || request.parent_id() == n.parent_id.as_deref());
        if !matches_parent {
            return delete_operation::Response::failure("Entity not found");
        }
        store.remove(id);
        delete_operation::Response::success()
    }
}

/// Caller code written once against the trait, run against both handlers below.
async fn save_and_reload<H: OperationHandler<Note>>(
    handler: &H,
    note: Note,
) -> Result<Vec<Note>, OperationError> {
    let id = note.id.clone();
    handler
        .create(create::<Note>().entity(note).build())
        .await
        .into_result()?;
    handler.query(query::<Note>().id(id).build()).await.into_result()
}

#[tokio::test]
async fn test_full_crud_cycle_against_in_memory_handler() {
    let _ = setup_tracing();
    let handler = InMemoryNotes::default();

    let note = Note::new("n1", Some("board-1"), "Draft");
    let reloaded = save_and_reload(&handler, note.clone()).await.expect("save failed");
    assert_eq!(reloaded, [note.clone()]);

    // Duplicate create fails in-band.
    let duplicate = handler.create(create::<Note>().entity(note.clone()).build()).await;
    assert!(duplicate.is_failure());
    assert_eq!(duplicate.message(), Some("Entity already exists"));
    assert_eq!(duplicate.entity(), None);

    // Update
    let renamed = Note {
        title: "Final".into(),
        ..note.clone()
    };
    let updated = handler.update(update::<Note>().entity(renamed.clone()).build()).await;
    assert_eq!(updated.check(), Ok(()));

    let found = handler
        .query(query::<Note>().with_identifiers("n1", "board-1").build())
        .await;
    assert_eq!(found.results(), [renamed]);

    // Delete with the wrong parent is rejected, with the right one succeeds.
    let wrong_parent = handler
        .delete(delete::<Note>().id("n1").parent_id("board-2").build())
        .await;
    assert!(wrong_parent.is_failure());

    let deleted = handler
        .delete(delete::<Note>().id("n1").parent_id("board-1").build())
        .await;
    assert!(deleted.is_success());

    let gone = handler.query(query::<Note>().id("n1").build()).await;
    assert!(gone.is_success());
    assert!(gone.is_empty());

    let missing = handler.delete(delete::<Note>().id("n1").build()).await;
    assert_eq!(
        missing.check(),
        Err(OperationError::Failed {
            message: Some("Entity not found".into())
        })
    );
}

#[tokio::test]
async fn test_query_without_filters_returns_everything_in_order() {
    let handler = InMemoryNotes::default();
    for id in ["c", "a", "b"] {
        let response = handler
            .create(create::<Note>().entity(Note::new(id, None, id)).build())
            .await;
        assert!(response.is_success());
    }

    // Empty identifiers count as absent, so this is an unfiltered query.
    let all = handler.query(query::<Note>().id("").context_id("").build()).await;
    let ids: Vec<&str> = all.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[tokio::test]
async fn test_concurrent_creates() {
    let handler = Arc::new(InMemoryNotes::default());

    let mut handles = vec![];
    for i in 0..10 {
        let handler = handler.clone();
        handles.push(tokio::spawn(async move {
            let note = Note::new(&format!("note_{:02}", i), Some("board"), "Concurrent");
            handler.create(create::<Note>().entity(note).build()).await
        }));
    }

    let mut successful = 0;
    for handle in handles {
        if handle.await.unwrap().is_success() {
            successful += 1;
        }
    }
    assert_eq!(successful, 10, "Expected every create to succeed");

    let board = handler.query(query::<Note>().parent_id("board").build()).await;
    assert_eq!(board.len(), 10);
    assert_eq!(board.results()[0].id, "note_00");
    assert_eq!(board.results()[9].id, "note_09");
}

#[tokio::test]
async fn test_caller_code_against_mock_handler() {
    let note = Note::new("n1", None, "Draft");

    let mut mock = MockHandler::<Note>::new();
    mock.expect_create().return_ok(note.clone());
    mock.expect_query().return_ok(vec![note.clone()]);

    let reloaded = save_and_reload(&mock, note.clone()).await;
    assert_eq!(reloaded, Ok(vec![note]));
    mock.verify();
}

#[tokio::test]
async fn test_mock_failure_short_circuits_caller() {
    let mut mock = MockHandler::<Note>::new();
    mock.expect_create()
        .return_response(create_operation::Response::new(Status::Failure).with_message("quota exceeded"));

    let result = save_and_reload(&mock, Note::new("n1", None, "Draft")).await;
    assert_eq!(
        result,
        Err(OperationError::Failed {
            message: Some("quota exceeded".into())
        })
    );
    // The query was never sent.
    assert_eq!(mock.received().len(), 1);
    mock.verify();
}
