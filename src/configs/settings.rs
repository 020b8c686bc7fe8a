use serde::Deserialize;
use std::env;
use std::fs::{metadata, File};
use std::io::Read;
use once_cell::sync::Lazy;
use serde_yaml;

// ---------------------------------------------- Config ----------------------------------------------
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub responses_url: String,
    pub model: String,
    pub request_timeout: u64,
    pub connect_timeout: u64,
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 5001,
            responses_url: "https://api.openai.com/v1/responses".to_string(),
            model: "gpt-4.1".to_string(),
            request_timeout: 300,
            connect_timeout: 10,
            json_limit: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn load_config() -> Config {
        let config_path = if metadata("/etc/sketch-relay/configs.yaml").is_ok() {
            "/etc/sketch-relay/configs.yaml".to_string()
        } else {
            format!("{}/src/configs/configs.yaml", env!("CARGO_MANIFEST_DIR"))
        };
        let mut file = File::open(config_path).expect("Failed to open config file");
        let mut contents = String::new();
        file.read_to_string(&mut contents).expect("Failed to read config file");
        serde_yaml::from_str(&contents).expect("Failed to parse config file")
    }
}

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::load_config);

// The upstream credential comes from the environment only. There is no
// baked-in fallback; main refuses to start when the variable is absent.
pub fn openai_api_key() -> Result<String, env::VarError> {
    env::var("OPENAI_API_KEY")
}
