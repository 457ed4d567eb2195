use std::env;

// This build file selects the network the default vault list points at
fn main() {
    if cfg!(any(feature = "localnet", feature = "mainnet")) {
        // A network feature has been manually set, just ignore env variables.
    } else {
        let network = env::var("NETWORK").unwrap_or_else(|_| "mainnet".to_string());

        // Rerun if NETWORK is changed
        println!("cargo:rerun-if-env-changed=NETWORK");
        // Set feature according to current network
        match network.as_str() {
            "localnet" => println!("cargo:rustc-cfg=feature=\"localnet\""),
            _ => println!("cargo:rustc-cfg=feature=\"mainnet\""), // default to mainnet configuration
        }
    }
}
