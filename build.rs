use chrono::Utc;

fn main() {
    // Build timestamp shown by `mwodeora version` / 빌드 시각
    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    println!("cargo:rustc-env=MWODEORA_BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=catalog/tools.json");
}
