use std::env;

fn main() {
    let endpoint = env::var("ACTIVITY_ENDPOINT")
        .unwrap_or_else(|_| String::from("/analytics/record-activity"));

    println!("cargo:rerun-if-env-changed=ACTIVITY_ENDPOINT");
    println!("cargo:rustc-env=ACTIVITY_ENDPOINT={}", endpoint);
}
