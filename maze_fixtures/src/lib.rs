use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A row of `mazes/expected.csv`. A negative length means no path exists.
#[derive(Debug, Deserialize)]
struct Expectation {
    name: String,
    length: i64,
}

/// A maze as rows of `0`/`1` values together with the number of cells on its shortest path.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub name: String,
    pub rows: Vec<Vec<u8>>,
    pub length: Option<usize>,
}

fn maze_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("mazes")
}

fn load_expectations() -> HashMap<String, Option<usize>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(maze_dir().join("expected.csv"))
        .expect("Could not open expected.csv");
    reader
        .deserialize()
        .map(|result| {
            let record: Expectation = result.expect("Could not parse expectation record");
            let length = usize::try_from(record.length).ok();
            (record.name, length)
        })
        .collect()
}

fn parse_rows(text: &str) -> Vec<Vec<u8>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|v| v.parse::<u8>().expect("Could not parse cell value"))
                .collect()
        })
        .collect()
}

pub fn get_fixture_names() -> Vec<String> {
    let mut names = Vec::new();
    for entry in WalkDir::new(maze_dir()).into_iter() {
        let entry = entry.expect("Could not get dir entry");
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "maze") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_owned());
            }
        }
    }
    names.sort();
    names
}

pub fn get_fixture(name: &str) -> Fixture {
    let expectations = load_expectations();
    let length = *expectations
        .get(name)
        .unwrap_or_else(|| panic!("No expected length recorded for {}", name));
    let text = fs::read_to_string(maze_dir().join(format!("{}.maze", name)))
        .expect("Could not read maze file");
    Fixture {
        name: name.to_owned(),
        rows: parse_rows(&text),
        length,
    }
}

pub fn get_fixtures() -> Vec<Fixture> {
    get_fixture_names()
        .iter()
        .map(|name| get_fixture(name))
        .collect()
}
