use fetch_config::{ConfigDocument, ConfigStore, DefaultTemplate, RobustnessConfig};
use fetch_test_utils::TestHome;
use serde_json::json;

#[test]
fn snapshot_file_after_seed_and_update() {
    let home = TestHome::new();
    let template = ConfigDocument::try_from(json!({
        "hotkey": "Ctrl+Space",
        "directories": [],
        "reindexIntervalMinutes": 60
    }))
    .unwrap();
    let store = ConfigStore::with_config_dir(home.config_dir())
        .with_template(DefaultTemplate::from_document(template))
        .with_robustness(RobustnessConfig::fast());

    store
        .put([
            ("directories", json!(["/home/me/docs"])),
            ("theme", json!({"dark": true})),
        ])
        .unwrap();

    let content = home.read_config();
    assert!(content.ends_with("}\n"));
    insta::assert_snapshot!(content.trim_end(), @r###"
    {
      "hotkey": "Ctrl+Space",
      "directories": [
        "/home/me/docs"
      ],
      "reindexIntervalMinutes": 60,
      "theme": {
        "dark": true
      }
    }
    "###);
}

#[test]
fn snapshot_bundled_template() {
    let home = TestHome::new();
    let store = ConfigStore::with_config_dir(home.config_dir());

    store.get().unwrap();

    insta::assert_snapshot!(home.read_config().trim_end(), @r###"
    {
      "hotkey": "Ctrl+Space",
      "directories": [],
      "reindexIntervalMinutes": 60
    }
    "###);
}
