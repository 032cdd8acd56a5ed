use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir = env::var("FORMFIT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::data_local_dir()
                    .map(|d| d.join("formfit"))
                    .unwrap_or_else(|| PathBuf::from(".formfit"))
            });
        Self { data_dir }
    }
}
