use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use axum::Router;

use studypath_backend::config::Config;

pub fn test_config() -> Config {
    Config {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        log_level: "info".to_string(),
        data_dir: None,
    }
}

pub fn create_test_app() -> Router {
    studypath_backend::create_app(&test_config())
}

pub fn create_test_app_with_dir(dir: &Path) -> Router {
    let mut config = test_config();
    config.data_dir = Some(dir.to_path_buf());
    studypath_backend::create_app(&config)
}
