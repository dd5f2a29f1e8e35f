// tests/integration_tests/counting_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use charstats::{Category, Phase, count_file};

#[test]
fn test_counting_files() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let mixed = count_file(&temp_dir.path().join("mixed.txt"))?;
    assert_eq!(mixed.count(Category::Total), 6);
    assert_eq!(mixed.count(Category::Whitespace), 2);
    assert_eq!(mixed.count(Category::Control), 0);
    assert_eq!(format!("{:.2}", mixed.percent_of_total(Category::Alpha)), "33.33");

    let letters = count_file(&temp_dir.path().join("letters.txt"))?;
    assert_eq!(letters.count(Category::Total), 1000);
    assert_eq!(letters.count(Category::Lowercase), 1000);
    assert_eq!(format!("{:.2}", letters.percent_of_total(Category::Alpha)), "100.00");

    Ok(())
}

#[test]
fn test_binary_bytes() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let stats = count_file(&temp_dir.path().join("notes/binary.dat"))?;

    assert_eq!(stats.count(Category::Total), 8);
    assert_eq!(stats.count(Category::Control), 3, "NUL, ESC and DEL");
    assert_eq!(stats.count(Category::Whitespace), 1, "tab");
    assert_eq!(stats.count(Category::Alpha), 0, "high bytes are not letters");
    assert_eq!(stats.count(Category::Punctuation), 0);

    Ok(())
}

#[test]
fn test_empty_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let stats = count_file(&temp_dir.path().join("empty.txt"))?;
    for category in Category::ALL {
        assert_eq!(stats.count(category), 0);
        assert_eq!(stats.percent_of_total(category), 0.0);
    }

    Ok(())
}

#[test]
fn test_directory_is_not_countable() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    // Opening a directory succeeds on some platforms and fails on the first read.
    let err = count_file(&temp_dir.path().join("notes")).expect_err("directory cannot be read");
    assert!(matches!(err.phase(), Phase::OpenInput | Phase::Count));

    Ok(())
}
