pub mod app_config;
pub mod model;
pub mod probe_config;

pub use app_config::{AppConfig, load_config, load_dotenv, load_dotenv_from};
pub use model::{ContentPolicy, Credentials, LoginConfig};
