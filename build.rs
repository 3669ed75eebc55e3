#[path = "shared/constants.rs"]
mod constants;
use constants::{COMPRESSED_SEED_POSTS_FILE_NAME, SEED_POSTS_CSV_FILE_PATH};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!(
        "cargo:rerun-if-changed={}",
        SEED_POSTS_CSV_FILE_PATH.display()
    );

    let output_path = PathBuf::from(env::var("OUT_DIR")?).join(COMPRESSED_SEED_POSTS_FILE_NAME);

    let mut input_file = File::open(&*SEED_POSTS_CSV_FILE_PATH)?;

    // Compress the data with GzEncoder
    let mut compressed_data = Vec::new();
    {
        let mut encoder = GzEncoder::new(&mut compressed_data, Compression::default());
        io::copy(&mut input_file, &mut encoder)?;
        encoder.finish()?;
    }

    File::create(&output_path)?.write_all(&compressed_data)?;

    Ok(())
}
