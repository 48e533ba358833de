use log::info;
use rocket::fs::FileServer;

use mcp_dashboard::{catchers, fairings, utils::config};

fn configure_reporting() {
    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder.format_timestamp_micros();
    log_builder.try_init().expect("failed to initialize logging");
}

#[rocket::main]
async fn main() {
    dotenv::dotenv().ok();
    configure_reporting();

    info!("Mobile Control Panel starting, build {}", config::git_sha());

    let _ = rocket::build()
        .mount("/", mcp_dashboard::routes())
        .mount("/static", FileServer::from(config::static_dir()))
        .register(
            "/",
            rocket::catchers![catchers::error_catcher, catchers::not_found_handler],
        )
        .attach(fairings::RequestMonitor::new())
        .ignite()
        .await
        .expect("failed to ignite Rocket")
        .launch()
        .await
        .expect("failed to shut down Rocket");
}
