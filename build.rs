use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata for `ocean --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
