// Desktop builds on Linux link against libxdo; fail early with install hints if it is missing.

fn main() {
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_DESKTOP");
    let desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if desktop && linux && !has_libxdo() {
        for line in [
            "",
            "  error: the campus events desktop app needs libxdo on Linux.",
            "",
            "    Fedora/RHEL:   sudo dnf install libxdo-devel",
            "    Debian/Ubuntu: sudo apt install libxdo-dev",
            "",
            "  Or run the browser build instead: cargo run",
            "",
        ] {
            eprintln!("{}", line);
        }
        std::process::exit(1);
    }
}

/// pkg-config first; some distros ship libxdo without a .pc file, so fall back to ldconfig.
fn has_libxdo() -> bool {
    let pkg_config = std::process::Command::new("pkg-config")
        .args(["--exists", "libxdo"])
        .status();
    match pkg_config {
        Ok(status) if status.success() => true,
        _ => std::process::Command::new("ldconfig")
            .arg("-p")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains("libxdo"))
            .unwrap_or(false),
    }
}
