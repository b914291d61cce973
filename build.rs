use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Forward .env entries to option_env!() in config.rs
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using defaults (mock route lookup, API_BASE_URL=/api). Copy .env.example to .env to configure.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    println!("cargo:rerun-if-env-changed=API_BASE_URL");
    println!("cargo:rerun-if-env-changed=ROUTE_LOOKUP_MODE");
    println!("cargo:rerun-if-env-changed=MOCK_LOOKUP_DELAY_MS");
    println!("cargo:rerun-if-env-changed=ENABLE_LOGGING");
    println!("cargo:rerun-if-env-changed=UI_LANGUAGE");
}
