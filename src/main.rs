use bizdev_crm::config::AppConfig;
use bizdev_crm::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging(AppConfig::from_env().log_level);
	mount_to_body(App)
}
