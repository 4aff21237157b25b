use gallery_core::db::{open_db, open_db_in_memory};
use gallery_core::{
    AppConfig, GalleryStore, HeroField, MemoryStorageRepository, Project, ProjectDraft,
    SqliteStorageRepository, StorageKeys, StorageRepository, Theme,
};
use std::cell::RefCell;
use std::rc::Rc;

const NOW: i64 = 1_700_000_000_000;

fn fresh_session(storage: &MemoryStorageRepository) -> GalleryStore<&MemoryStorageRepository> {
    let mut store = GalleryStore::new(storage);
    store.initialize_at(NOW).unwrap();
    store
}

fn project(id: &str, tags: &[&str], image_url: Option<&str>) -> Project {
    Project {
        id: id.to_string(),
        title: format!("title {id}"),
        description: String::new(),
        url: format!("https://{id}.example"),
        image_url: image_url.map(str::to_string),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        created_at: NOW,
    }
}

#[test]
fn empty_storage_yields_seed_defaults_and_new_project_goes_first() {
    let storage = MemoryStorageRepository::new();
    let mut store = fresh_session(&storage);

    let ids: Vec<_> = store.projects().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(store.config(), &AppConfig::default());
    assert_eq!(store.theme(), Theme::Light);

    let created = ProjectDraft {
        title: "X".to_string(),
        url: "https://x".to_string(),
        tags: "a, b".to_string(),
        ..ProjectDraft::default()
    }
    .into_project()
    .unwrap();
    store.add_project(created.clone()).unwrap();

    let projects = store.projects();
    assert_eq!(projects.len(), 4);
    assert_eq!(projects[0].tags, vec!["a", "b"]);
    assert_eq!(projects[0].image_url, None);
    assert!(!["1", "2", "3"].contains(&projects[0].id.as_str()));
    assert_eq!(projects[0], created);
}

#[test]
fn initialization_writes_fallback_records_back() {
    let storage = MemoryStorageRepository::new();
    let store = fresh_session(&storage);
    assert!(store.is_initialized());

    let keys = StorageKeys::default();
    let stored: Vec<Project> =
        serde_json::from_str(&storage.get_item(&keys.projects).unwrap().unwrap()).unwrap();
    assert_eq!(stored.as_slice(), store.projects());
    let stored_config: AppConfig =
        serde_json::from_str(&storage.get_item(&keys.config).unwrap().unwrap()).unwrap();
    assert_eq!(&stored_config, store.config());
    assert_eq!(
        storage.get_item(&keys.theme).unwrap().as_deref(),
        Some("\"light\"")
    );
}

#[test]
fn seed_created_at_is_stable_across_sessions() {
    let storage = MemoryStorageRepository::new();
    let mut first = GalleryStore::new(&storage);
    first.initialize_at(1_000_000).unwrap();
    let seeded = first.projects().to_vec();
    drop(first);

    let mut second = GalleryStore::new(&storage);
    second.initialize_at(9_000_000).unwrap();
    assert_eq!(second.projects(), seeded.as_slice());
    assert_eq!(second.projects()[0].created_at, 1_000_000);
}

#[test]
fn project_list_roundtrips_across_sessions() {
    let storage = MemoryStorageRepository::new();
    let mut store = fresh_session(&storage);
    store.delete_project("1").unwrap();
    store.delete_project("2").unwrap();
    store.delete_project("3").unwrap();
    store
        .add_project(project("b", &["z", "a", "z"], None))
        .unwrap();
    store
        .add_project(project("a", &[], Some("https://img/a.png")))
        .unwrap();
    let written = store.projects().to_vec();
    drop(store);

    let reloaded = fresh_session(&storage);
    assert_eq!(reloaded.projects(), written.as_slice());
    assert_eq!(reloaded.projects()[1].tags, vec!["z", "a", "z"]);
    assert_eq!(reloaded.projects()[1].image_url, None);

    let raw = storage.get_item(&StorageKeys::default().projects).unwrap().unwrap();
    assert!(!raw.contains(r#""imageUrl":null"#));
}

#[test]
fn add_then_reload_prepends_and_keeps_prior_order() {
    let storage = MemoryStorageRepository::new();
    let mut store = fresh_session(&storage);
    let prior = store.projects().to_vec();
    let added = project("new", &["t"], None);
    store.add_project(added.clone()).unwrap();
    drop(store);

    let reloaded = fresh_session(&storage);
    assert_eq!(reloaded.projects()[0], added);
    assert_eq!(&reloaded.projects()[1..], prior.as_slice());
}

#[test]
fn delete_removes_every_match_and_keeps_relative_order() {
    let storage = MemoryStorageRepository::new();
    let mut store = fresh_session(&storage);
    store.add_project(project("dup", &[], None)).unwrap();
    store.add_project(project("keep", &[], None)).unwrap();
    store.add_project(project("dup", &["second"], None)).unwrap();

    let removed = store.delete_project("dup").unwrap();
    assert_eq!(removed, 2);
    let ids: Vec<_> = store.projects().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["keep", "1", "2", "3"]);

    assert_eq!(store.delete_project("missing").unwrap(), 0);
    drop(store);

    let reloaded = fresh_session(&storage);
    let ids: Vec<_> = reloaded.projects().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["keep", "1", "2", "3"]);
    assert!(reloaded.project("dup").is_none());
}

#[test]
fn deleting_every_project_persists_an_empty_list() {
    let storage = MemoryStorageRepository::new();
    let mut store = fresh_session(&storage);
    for id in ["1", "2", "3"] {
        store.delete_project(id).unwrap();
    }
    drop(store);

    let reloaded = fresh_session(&storage);
    assert!(reloaded.projects().is_empty());
}

#[test]
fn malformed_records_fall_back_independently() {
    let storage = MemoryStorageRepository::new();
    let keys = StorageKeys::default();
    storage.set_item(&keys.projects, "{not json").unwrap();
    storage
        .set_item(
            &keys.config,
            r#"{"heroTitle":"A","heroHighlight":"B","heroDescription":"C"}"#,
        )
        .unwrap();
    storage.set_item(&keys.theme, "\"dark\"").unwrap();

    let store = fresh_session(&storage);
    let ids: Vec<_> = store.projects().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(store.config().hero_title, "A");
    assert_eq!(store.theme(), Theme::Dark);

    // The malformed value is replaced by the seed list once loaded.
    let stored: Vec<Project> =
        serde_json::from_str(&storage.get_item(&keys.projects).unwrap().unwrap()).unwrap();
    assert_eq!(stored.as_slice(), store.projects());
    assert_eq!(
        storage.get_item(&keys.theme).unwrap().as_deref(),
        Some("\"dark\"")
    );
}

#[test]
fn wrong_shapes_are_treated_as_malformed() {
    let storage = MemoryStorageRepository::new();
    let keys = StorageKeys::default();
    storage.set_item(&keys.projects, "null").unwrap();
    storage.set_item(&keys.config, r#"{"heroTitle":"only"}"#).unwrap();
    storage.set_item(&keys.theme, "\"sepia\"").unwrap();

    let store = fresh_session(&storage);
    assert_eq!(store.projects().len(), 3);
    assert_eq!(store.config(), &AppConfig::default());
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn update_config_replaces_all_fields_together() {
    let storage = MemoryStorageRepository::new();
    let mut store = fresh_session(&storage);
    let next = AppConfig {
        hero_title: "T2".to_string(),
        hero_highlight: "H2".to_string(),
        hero_description: "D2".to_string(),
    };
    store.update_config(next.clone()).unwrap();
    assert_eq!(store.config(), &next);
    drop(store);

    let mut reloaded = fresh_session(&storage);
    assert_eq!(reloaded.config(), &next);

    let edited = reloaded.config().with_field(HeroField::Title, "");
    reloaded.update_config(edited).unwrap();
    drop(reloaded);

    let reloaded = fresh_session(&storage);
    assert_eq!(reloaded.config().hero_title, "");
    assert_eq!(reloaded.config().hero_highlight, "H2");
    assert_eq!(reloaded.config().hero_description, "D2");
}

#[test]
fn theme_persists_and_notifies_listener() {
    let storage = MemoryStorageRepository::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = fresh_session(&storage);
    let sink = Rc::clone(&seen);
    store.set_theme_listener(move |theme: Theme| sink.borrow_mut().push(theme));

    store.set_theme(Theme::Dark).unwrap();
    assert_eq!(*seen.borrow(), vec![Theme::Dark]);
    drop(store);

    let reloaded = fresh_session(&storage);
    assert_eq!(reloaded.theme(), Theme::Dark);
}

#[test]
fn bare_theme_token_is_accepted() {
    let storage = MemoryStorageRepository::new();
    storage.set_item(&StorageKeys::default().theme, "dark").unwrap();

    assert_eq!(fresh_session(&storage).theme(), Theme::Dark);
}

#[test]
fn writes_are_suppressed_until_initialized() {
    let storage = MemoryStorageRepository::new();
    let keys = StorageKeys::default();
    let saved = serde_json::to_string(&vec![project("saved", &[], None)]).unwrap();
    storage.set_item(&keys.projects, &saved).unwrap();

    let mut store = GalleryStore::new(&storage);
    assert!(!store.is_initialized());
    store.delete_project("saved").unwrap();
    store.set_theme(Theme::Dark).unwrap();
    store.update_config(AppConfig::default()).unwrap();

    assert_eq!(storage.get_item(&keys.projects).unwrap(), Some(saved.clone()));
    assert_eq!(storage.get_item(&keys.theme).unwrap(), None);
    assert_eq!(storage.get_item(&keys.config).unwrap(), None);

    store.initialize_at(NOW).unwrap();
    assert_eq!(store.projects()[0].id, "saved");
    assert_eq!(store.theme(), Theme::Light);
    assert_eq!(storage.get_item(&keys.projects).unwrap(), Some(saved));
}

#[test]
fn initialize_twice_keeps_session_state() {
    let storage = MemoryStorageRepository::new();
    let mut store = fresh_session(&storage);
    store.delete_project("1").unwrap();
    storage.remove_item(&StorageKeys::default().projects).unwrap();

    store.initialize_at(NOW).unwrap();
    assert_eq!(store.projects().len(), 2);
}

#[test]
fn custom_namespace_isolates_records() {
    let storage = MemoryStorageRepository::new();
    let keys = StorageKeys::with_namespace("staging");
    assert_eq!(keys.projects, "staging-data");

    let mut store = GalleryStore::with_keys(&storage, keys.clone());
    store.initialize_at(NOW).unwrap();
    store.set_theme(Theme::Dark).unwrap();
    drop(store);

    assert_eq!(fresh_session(&storage).theme(), Theme::Light);
    let mut staged = GalleryStore::with_keys(&storage, keys);
    staged.initialize_at(NOW).unwrap();
    assert_eq!(staged.theme(), Theme::Dark);
}

#[test]
fn sqlite_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteStorageRepository::try_new(&conn).unwrap();
        let mut store = GalleryStore::new(repo);
        store.initialize().unwrap();
        store.add_project(project("disk", &["x"], None)).unwrap();
        store.set_theme(Theme::Dark).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteStorageRepository::try_new(&conn).unwrap();
    let mut store = GalleryStore::new(repo);
    store.initialize().unwrap();
    assert_eq!(store.projects()[0].id, "disk");
    assert_eq!(store.projects().len(), 4);
    assert_eq!(store.theme(), Theme::Dark);
}

#[test]
fn into_inner_returns_the_written_storage() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStorageRepository::try_new(&conn).unwrap();
    let mut store = GalleryStore::new(repo);
    store.initialize_at(NOW).unwrap();
    store.update_config(AppConfig::default()).unwrap();

    let repo = store.into_inner();
    let keys = StorageKeys::default();
    let mut expected = vec![keys.config, keys.projects, keys.theme];
    expected.sort();
    assert_eq!(repo.keys().unwrap(), expected);
}
