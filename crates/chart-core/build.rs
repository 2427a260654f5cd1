// File: crates/chart-core/build.rs
// Summary: Link the Windows system libraries Skia's font manager and ICU pull in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // registry APIs used by the DirectWrite font manager
        println!("cargo:rustc-link-lib=advapi32");
    }
}
