use podnet_shared::api::ApiConfig;

// Backend origin - 编译时从环境变量读取，默认本地开发地址
// 生产构建通过 PODNET_BACKEND_URL 环境变量设置
pub const BACKEND_URL: &str = match option_env!("PODNET_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8001",
};

/// REST endpoints of the configured backend.
pub fn api_config() -> ApiConfig {
    ApiConfig::new(BACKEND_URL)
}
