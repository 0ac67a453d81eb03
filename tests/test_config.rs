use std::io::Write;

use docserve::config::Config;

const SAMPLE: &str = r#"{
    "root_directory": "/srv/www",
    "redirect_map": { "/old": "/new", "/gone": "https://example.com/" }
}"#;

#[test]
fn test_config_from_json_defaults() {
    let cfg = Config::from_json_str(SAMPLE).unwrap();

    assert_eq!(cfg.root_directory, "/srv/www");
    assert_eq!(cfg.redirect_map.len(), 2);
    assert_eq!(cfg.redirect_map.get("/old").unwrap(), "/new");
    assert_eq!(cfg.listen_addr, "127.0.0.1:3000");
    assert!(!cfg.strict_containment);
    assert_eq!(cfg.max_connections, None);
}

#[test]
fn test_config_redirect_map_optional() {
    let cfg = Config::from_json_str(r#"{ "root_directory": "/srv" }"#).unwrap();
    assert!(cfg.redirect_map.is_empty());
}

#[test]
fn test_config_rejects_relative_root() {
    let err = Config::from_json_str(r#"{ "root_directory": "public" }"#).unwrap_err();
    assert!(err.to_string().contains("absolute"));
}

#[test]
fn test_config_rejects_missing_root() {
    assert!(Config::from_json_str(r#"{ "redirect_map": {} }"#).is_err());
}

#[test]
fn test_config_rejects_zero_connection_limit() {
    let raw = r#"{ "root_directory": "/srv", "max_connections": 0 }"#;
    assert!(Config::from_json_str(raw).is_err());
}

#[test]
fn test_config_listen_override() {
    let cfg = Config::from_json_str(SAMPLE).unwrap();

    let same = cfg.clone().with_listen_override(None);
    assert_eq!(same.listen_addr, "127.0.0.1:3000");

    let moved = cfg.with_listen_override(Some("0.0.0.0:8080".to_string()));
    assert_eq!(moved.listen_addr, "0.0.0.0:8080");
}

#[test]
fn test_config_from_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "root_directory: /srv/www\n\
         listen_addr: 0.0.0.0:4000\n\
         strict_containment: true\n\
         max_connections: 64\n\
         redirect_map:\n  /a: /b"
    )
    .unwrap();

    let cfg = Config::from_file(file.path()).unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:4000");
    assert!(cfg.strict_containment);
    assert_eq!(cfg.max_connections, Some(64));
    assert_eq!(cfg.redirect_map.get("/a").unwrap(), "/b");
}

#[test]
fn test_config_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let cfg = Config::from_file(file.path()).unwrap();
    assert_eq!(cfg.root_directory, "/srv/www");
}

#[test]
fn test_config_missing_file_names_path() {
    let err = Config::from_file("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
