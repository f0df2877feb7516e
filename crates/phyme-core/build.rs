const SETTINGS_PATH: &str = "src/default_settings.toml";

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS_PATH}");

    // `Settings::default()` parses this file; reject it here instead.
    let table: toml::Table = match include_str!("src/default_settings.toml").parse() {
        Ok(table) => table,
        Err(e) => panic!("{SETTINGS_PATH} contains invalid TOML: {e}"),
    };
    for section in ["phones", "query"] {
        if !table.get(section).is_some_and(toml::Value::is_table) {
            panic!("{SETTINGS_PATH} is missing the [{section}] table");
        }
    }
}
