use std::env;
use std::fs;
use std::path::Path;

// Кладет config.toml из корня workspace рядом с собираемым бинарником,
// чтобы загрузчик конфигурации нашел его при локальном запуске.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source.exists() {
        // Нет файла — бинарник поднимется на встроенном дефолте
        return;
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR вида target/<profile>/build/backend-xxx/out
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile));

    if let Some(target_dir) = target_dir {
        if let Err(e) = fs::copy(&source, target_dir.join("config.toml")) {
            panic!("Failed to copy config.toml: {}", e);
        }
    }
}
