use anyhow::Result;
use apsim_db_explore::config::Config;
use apsim_db_explore::error::ExploreError;
use apsim_db_explore::input_path::resolve_db_path;
use apsim_db_explore::process::explore_database;
use apsim_db_explore::report;
use std::path::Path;

/// 可选配置文件，存在时覆盖内置默认值
const CONFIG_FILE: &str = "apsimdb.toml";

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    let _ = apsim_db_explore::logging::init_default_logging();

    let config = if Path::new(CONFIG_FILE).is_file() {
        Config::from_file(CONFIG_FILE)?
    } else {
        Config::default()
    };

    let db_path = resolve_db_path(&config);

    match explore_database(&db_path, &config.explore) {
        Ok(outcome) => print!("{}", outcome.report),
        // 文件缺失只输出一行错误，按正常退出处理
        Err(ExploreError::MissingDatabase { path }) => {
            println!("{}", report::missing_database_line(&path));
        }
        Err(err) => return Err(err.into()),
    }

    println!("\n\n{}", "=".repeat(80));
    println!(
        "To explore other database files, pass a path argument or edit {CONFIG_FILE}."
    );
    println!("{}", "=".repeat(80));
    Ok(())
}
