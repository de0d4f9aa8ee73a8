use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Fallback wall-clock value for an RTC that lost power.
    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    println!("cargo:rustc-env=LAMPCTL_BUILD_EPOCH={epoch}");

    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
