#![allow(unused)] // Ignore due to all constants not being utilized across all environments

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static SEED_POSTS_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "seed_posts.csv"));

// Must stay in sync with the `include_bytes!` in `src/models/seed_posts.rs`
pub static COMPRESSED_SEED_POSTS_FILE_NAME: &str = "seed_posts.csv.gz";
