// Build script for Frameless
// Links the Win32 libraries the demo window needs

fn main() {
    // Only run on Windows
    #[cfg(target_os = "windows")]
    {
        println!("cargo:rustc-link-lib=user32");
        println!("cargo:rustc-link-lib=gdi32");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
