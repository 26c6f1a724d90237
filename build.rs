use std::env;
use std::fs;
use std::path::Path;

// Exporta las entradas de .env como variables de compilación para que
// option_env! las vea (p.ej. CATALOG_API_URL).
fn main() {
    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }

    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();

            // Las variables ya definidas en el entorno mandan
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
