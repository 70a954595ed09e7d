//! End-to-end flows against a real on-disk database, exercising the store
//! the way the CLI does: open, mutate, search, export, reopen.

use book_record_store::{export_csv, BookStore, Field, StoreError};

#[test]
fn full_crud_scenario() {
    let store = BookStore::open_in_memory().unwrap();

    let dune = store.create("Dune", "Sci-Fi", "1965").unwrap();
    let nineteen_eighty_four = store.create("1984", "Dystopia", "1949").unwrap();
    assert_eq!(dune, 1);
    assert_eq!(nineteen_eighty_four, 2);

    // Substring search is literal on title text: "19" matches "1984" but
    // not "Dune", even though Dune's year contains "19".
    let hits = store.search("19").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, nineteen_eighty_four);

    store.delete(dune).unwrap();
    let remaining = store.list_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, nineteen_eighty_four);
}

#[test]
fn records_survive_reopening_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("books.sqlite");

    let store = BookStore::open(&db_path).unwrap();
    let id = store.create("Dune", "Sci-Fi", "1965").unwrap();
    store.update_field(id, Field::Category, "Science Fiction").unwrap();
    store.close().unwrap();

    let store = BookStore::open(&db_path).unwrap();
    let records = store.list_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].category, "Science Fiction");
    assert_eq!(records[0].year, 1965);
}

#[test]
fn open_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("data").join("books.sqlite");

    let store = BookStore::open(&db_path).unwrap();
    store.create("Dune", "Sci-Fi", "1965").unwrap();
    assert!(db_path.exists());
}

#[test]
fn export_of_current_set_round_trips() {
    let store = BookStore::open_in_memory().unwrap();
    store.create("Dune", "Sci-Fi", "1965").unwrap();
    store.create("1984", "Dystopia", "1949").unwrap();
    store.create("The Lion, the Witch and the Wardrobe", "Fantasy", "1950").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("export.csv");
    let records = store.list_all().unwrap();
    export_csv(&records, &csv_path).unwrap();

    let content = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("ID,Title,Category,Year"));

    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(rows.len(), records.len());
    for (row, record) in rows.iter().zip(&records) {
        assert_eq!(row[0].parse::<i64>().unwrap(), record.id);
        assert_eq!(&row[1], record.title);
        assert_eq!(&row[2], record.category);
        assert_eq!(row[3].parse::<i64>().unwrap(), record.year);
    }
}

#[test]
fn errors_name_their_cause() {
    let store = BookStore::open_in_memory().unwrap();

    let err = store.create("Dune", "Sci-Fi", "soon").unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(err.to_string().contains("year"));

    let err = store.delete(42).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 42 }));
    assert!(err.to_string().contains("42"));
}
