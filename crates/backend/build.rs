use std::env;
use std::fs;
use std::path::Path;

// config.toml из корня workspace кладётся рядом с бинарником (target/<profile>),
// где его ищет `shared::config::load_config`.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        return;
    };
    // OUT_DIR: target/<profile>/build/backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target/{} not found, config.toml not copied", profile);
        return;
    };

    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source.exists() {
        println!("cargo:warning=config.toml not found, the embedded default will be used");
        return;
    }

    if let Err(e) = fs::copy(&source, target_dir.join("config.toml")) {
        println!("cargo:warning=Failed to copy config.toml: {}", e);
    }
}
