//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `gallery_core` linkage without the Flutter/FFI runtime.
//! - Print a deterministic summary of the stored gallery state.

use gallery_core::db::open_db;
use gallery_core::{GalleryStore, SqliteStorageRepository};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("gallery_core ping={}", gallery_core::ping());
    println!("gallery_core version={}", gallery_core::core_version());

    match print_store_summary(&resolve_db_path()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gallery_cli error={err}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_db_path() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("GALLERY_DB_PATH").map(PathBuf::from))
        .unwrap_or_else(|| std::env::temp_dir().join("gallery_store.sqlite3"))
}

fn print_store_summary(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db(path)?;
    let repo = SqliteStorageRepository::try_new(&conn)?;
    let mut store = GalleryStore::new(repo);
    store.initialize()?;

    println!("gallery db={}", path.display());
    println!("gallery projects={}", store.projects().len());
    println!("gallery hero_title={}", store.config().hero_title);
    println!("gallery theme={}", store.theme());
    Ok(())
}
