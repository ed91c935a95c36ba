//! 集成测试公共模块

use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;

/// 在临时目录中创建一个空的 SQLite 数据库文件
#[allow(dead_code)]
pub fn create_empty_db(dir: &TempDir, filename: &str) -> PathBuf {
    let db_path = dir.path().join(filename);
    let conn = Connection::open(&db_path).expect("Failed to create test database");
    // 强制落盘一个合法的空数据库文件
    conn.execute_batch("PRAGMA user_version = 1;")
        .expect("Failed to touch test database");
    conn.close().expect("Failed to close test database");
    db_path
}

/// 创建一个典型的 APSIM 运行产出数据库
///
/// - `Report`：全部期望列加两个额外列，5 行数据（其中一个超长文本值）
/// - `Daily`：全部期望列，0 行数据
/// - `Simulations`：常规伴随表，1 行数据
#[allow(dead_code)]
pub fn create_apsim_db(dir: &TempDir) -> PathBuf {
    let db_path = dir.path().join("apsim_run.db");
    let conn = Connection::open(&db_path).expect("Failed to create test database");

    conn.execute_batch(
        r#"
        CREATE TABLE Report (
            Year INTEGER NOT NULL,
            DryYield REAL,
            SowingDate TEXT,
            HarvestDate TEXT,
            CropSurvived TEXT,
            SimulationID INTEGER,
            Notes TEXT DEFAULT 'none'
        );
        CREATE TABLE Daily (
            Date TEXT,
            Year INTEGER,
            DryYield REAL,
            RadiationFactor REAL,
            WaterFactor REAL
        );
        CREATE TABLE Simulations (
            ID INTEGER PRIMARY KEY,
            Name TEXT NOT NULL
        );
        INSERT INTO Simulations (ID, Name) VALUES (1, 'Anameka_past');
        "#,
    )
    .expect("Failed to create schema");

    for year in 2000..2005 {
        conn.execute(
            "INSERT INTO Report (Year, DryYield, SowingDate, HarvestDate, CropSurvived, SimulationID, Notes)
             VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
            rusqlite::params![
                year,
                2.5 + f64::from(year - 2000),
                format!("{year}-05-15"),
                format!("{year}-11-20"),
                "yes",
                "a very long free-text note that exceeds twenty characters",
            ],
        )
        .expect("Failed to insert Report row");
    }

    conn.close().expect("Failed to close test database");
    db_path
}

/// 创建一个 Report 列很宽（15 列）且有数据的数据库
#[allow(dead_code)]
pub fn create_wide_report_db(dir: &TempDir) -> PathBuf {
    let db_path = dir.path().join("wide_report.db");
    let conn = Connection::open(&db_path).expect("Failed to create test database");

    let columns: Vec<String> = (0..15).map(|i| format!("col{i:02} TEXT")).collect();
    conn.execute_batch(&format!("CREATE TABLE Report ({});", columns.join(", ")))
        .expect("Failed to create wide table");

    let placeholders: Vec<String> = (1..=15).map(|i| format!("?{i}")).collect();
    let values: Vec<String> = (0..15).map(|i| format!("value-{i}")).collect();
    conn.execute(
        &format!("INSERT INTO Report VALUES ({})", placeholders.join(", ")),
        rusqlite::params_from_iter(values.iter()),
    )
    .expect("Failed to insert wide row");

    conn.close().expect("Failed to close test database");
    db_path
}
