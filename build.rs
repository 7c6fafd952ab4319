use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata behind `rh-api --version`.
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
    println!("cargo:rerun-if-changed=migrations");
}
