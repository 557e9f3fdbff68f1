use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    assert!(cfg.public_dir.ends_with("public"));
}

#[test]
fn host_and_port_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn public_dir_override() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PUBLIC_DIR", "/srv/myboard/public")])).unwrap();
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/myboard/public"));
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
}

#[test]
fn out_of_range_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn invalid_host_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost:80")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost:80".to_owned()));
    assert_eq!(err.to_string(), "invalid HOST: localhost:80");
}
