//! Inspector 目录查询集成测试

mod common;

use apsim_db_explore::explorer::Inspector;
use tempfile::TempDir;

#[test]
fn test_table_names_sorted() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = common::create_apsim_db(&temp_dir);

    let inspector = Inspector::open(&db_path).expect("open");
    let tables = inspector.table_names().expect("table names");
    assert_eq!(tables, vec!["Daily", "Report", "Simulations"]);
    inspector.close().expect("close");
}

#[test]
fn test_row_count_and_columns() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = common::create_apsim_db(&temp_dir);

    let inspector = Inspector::open(&db_path).expect("open");

    assert_eq!(inspector.row_count("Report").expect("count"), 5);
    assert_eq!(inspector.row_count("Daily").expect("count"), 0);

    let columns = inspector.columns("Report").expect("columns");
    assert_eq!(columns.len(), 7);
    assert_eq!(columns[0].name, "Year");
    assert_eq!(columns[0].decl_type, "INTEGER");
    assert!(columns[0].not_null);
    assert!(!columns[0].is_primary_key());
    assert_eq!(columns[6].name, "Notes");
    assert_eq!(columns[6].default_value.as_deref(), Some("'none'"));

    let sim_columns = inspector.columns("Simulations").expect("columns");
    assert!(sim_columns[0].is_primary_key());
    assert_eq!(sim_columns[0].pk_position, 1);

    inspector.close().expect("close");
}

#[test]
fn test_table_info_combines_count_and_columns() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = common::create_apsim_db(&temp_dir);

    let inspector = Inspector::open(&db_path).expect("open");
    let info = inspector.table_info("Report").expect("table info");
    assert_eq!(info.name, "Report");
    assert_eq!(info.row_count, 5);
    assert_eq!(info.columns.len(), 7);
    assert_eq!(
        info.column_names()[..5],
        ["Year", "DryYield", "SowingDate", "HarvestDate", "CropSurvived"]
    );
    inspector.close().expect("close");
}

#[test]
fn test_sample_rows_limit_and_stringification() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("values.db");

    {
        let conn = rusqlite::Connection::open(&db_path).expect("create db");
        conn.execute_batch(
            "CREATE TABLE Daily (Date TEXT, Amount INTEGER, Factor REAL, Raw BLOB);",
        )
        .expect("schema");
        for i in 0..5 {
            conn.execute(
                "INSERT INTO Daily VALUES (?1, ?2, NULL, ?3)",
                rusqlite::params![format!("2001-01-0{}", i + 1), i, vec![0u8; 3]],
            )
            .expect("insert");
        }
        conn.close().expect("close");
    }

    let inspector = Inspector::open(&db_path).expect("open");
    let rows = inspector.sample_rows("Daily", 3).expect("samples");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0], "2001-01-01");
    assert_eq!(rows[0][1], "0");
    // NULL 字符串化为 None，BLOB 用占位符表示
    assert_eq!(rows[0][2], "None");
    assert_eq!(rows[0][3], "<blob 3 bytes>");
    inspector.close().expect("close");
}

#[test]
fn test_read_only_open_does_not_create_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let absent = temp_dir.path().join("absent.db");

    let result = Inspector::open(&absent);
    assert!(result.is_err(), "Read-only open must not create the file");
    assert!(!absent.exists());
}
