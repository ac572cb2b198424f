use super::splice;
use crate::parser::parse;
use crate::toc::{render, GENERATED_MARKER};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Render the table of contents for the document currently on disk.
fn toc_for(path: &std::path::Path) -> String {
    let source = fs::read_to_string(path).unwrap();
    let outline = parse(&source).unwrap().unwrap();
    render(&outline)
}

#[test]
fn test_insert_after_top_level_heading() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# Title\n\nIntro text\n\n## Section\n").unwrap();

    let toc = toc_for(file.path());
    assert!(splice(file.path(), &toc).unwrap());

    let content = fs::read_to_string(file.path()).unwrap();
    let expected = format!(
        "# Title\n\
         \n{GENERATED_MARKER}\n\
         * [Title](#title)\n\
         \t* [Section](#section)\n\
         \n{GENERATED_MARKER}\n\
         \nIntro text\n\n## Section\n"
    );
    assert_eq!(content, expected);
}

#[test]
fn test_existing_block_is_replaced() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "# Title\n\
         \n{GENERATED_MARKER}\n\
         * [Title](#title)\n\
         \n{GENERATED_MARKER}\n\
         \nBody\n\n## New Section\n"
    )
    .unwrap();

    let toc = toc_for(file.path());
    assert!(splice(file.path(), &toc).unwrap());

    let content = fs::read_to_string(file.path()).unwrap();
    let expected = format!(
        "# Title\n\
         \n{GENERATED_MARKER}\n\
         * [Title](#title)\n\
         \t* [New Section](#new-section)\n\
         \n{GENERATED_MARKER}\n\
         \nBody\n\n## New Section\n"
    );
    assert_eq!(content, expected);
    assert_eq!(content.matches(GENERATED_MARKER).count(), 2);
}

#[test]
fn test_no_top_level_heading_is_a_noop() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "## Only a section\n\nBody text\n").unwrap();

    let toc = toc_for(file.path());
    assert!(!splice(file.path(), &toc).unwrap());

    let content = fs::read_to_string(file.path()).unwrap();
    assert_eq!(content, "## Only a section\n\nBody text\n");
}

#[test]
fn test_repeated_splice_is_idempotent() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# Title\n\n## Section\n").unwrap();

    let toc = toc_for(file.path());
    assert!(splice(file.path(), &toc).unwrap());
    let first = fs::read_to_string(file.path()).unwrap();

    // a second run sees its own block and replaces it in place
    let toc = toc_for(file.path());
    assert!(splice(file.path(), &toc).unwrap());
    let second = fs::read_to_string(file.path()).unwrap();

    assert_eq!(first, second);
}
