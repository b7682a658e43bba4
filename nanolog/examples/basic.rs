#![expect(missing_docs, reason = "example")]

use nanolog::{Config, Report, Severity};

fn main() {
    nanolog::build()
        .config(Config {
            use_color: true,
            level_filter: Severity::Debug,
            ..Config::default()
        })
        .set_global()
        .expect("logger was not set yet");

    nanolog::info!("MAIN", "up and running, version {}", 3);
    connect("10.0.0.7", 2);
    nanolog::debug!("MAIN", "shutting down");
}

fn connect(host: &str, retries: u32) {
    for attempt in 1..=retries {
        nanolog::warn!("NET", "connect to {host} failed, attempt {attempt}");
    }

    let report = Report::new(-3, "NET", "handshake timed out");
    report.log();
}
