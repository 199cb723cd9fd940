use assert_cmd::Command;

fn bookshelf() -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.env("BOOKSHELF_CONFIG_DIR", "does-not-exist")
        .env_remove("BOOKSHELF_ENV");
    cmd
}

#[test]
fn openapi_lists_book_routes() {
    let output = bookshelf().arg("openapi").output().unwrap();
    assert!(output.status.success());

    let spec: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(spec["paths"]["/books"]["post"].is_object());
    assert!(spec["paths"]["/books/{book_id}"]["delete"].is_object());
    assert!(spec["components"]["schemas"]["Book"].is_object());
}

#[test]
fn config_prints_defaults() {
    let output = bookshelf().arg("config").output().unwrap();
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["environment"], "local");
    assert_eq!(settings["server"]["port"], 8080);
}

#[test]
fn unknown_environment_fails() {
    bookshelf()
        .env("BOOKSHELF_ENV", "qa")
        .arg("config")
        .assert()
        .failure();
}
