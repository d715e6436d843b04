//! Campus events frontend.
//! Default: web (cargo run). Desktop: cargo run --features desktop.

#[cfg(feature = "desktop")]
fn main() {
    use campus_events_frontend::app::App;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("campus_events_frontend=info,campus_events_client=info"));
    // The dioxus launcher may install its own subscriber first.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    dioxus::launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
fn main() {
    // wasm-bindgen fails on reference-types with recent toolchains; set RUSTFLAGS in the
    // same shell as dx so its cargo child inherits them.
    let rustflags = std::env::var("RUSTFLAGS").unwrap_or_default();
    let rustflags = if rustflags.is_empty() {
        "-C target-feature=-reference-types".to_string()
    } else {
        format!("{} -C target-feature=-reference-types", rustflags)
    };
    let api_url = campus_events_frontend::config::FrontendConfig::from_env().api_url;
    let script = format!(
        "export RUSTFLAGS='{}'; export CAMPUS_EVENTS_API_URL='{}'; exec dx serve",
        rustflags.replace('\'', "'\"'\"'"),
        api_url.replace('\'', "'\"'\"'")
    );
    let status = std::process::Command::new("sh").args(["-c", &script]).status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            std::process::exit(1);
        }
    }
}

