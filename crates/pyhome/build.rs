// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

fn main() {
    #[cfg(target_os = "windows")]
    {
        let version = std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.1.0".to_string());

        let mut res = winresource::WindowsResource::new();
        res.set("ProductName", "Python Home Locator");
        res.set(
            "FileDescription",
            "Locates the Python install path in the registry",
        );
        res.set("CompanyName", "Microsoft Corporation");
        res.set(
            "LegalCopyright",
            "Copyright (c) Microsoft Corporation. All rights reserved.",
        );
        res.set("OriginalFilename", "pyhome.exe");
        res.set("InternalName", "pyhome");
        res.set("FileVersion", &version);
        res.set("ProductVersion", &version);
        res.compile().expect("Failed to compile Windows resources");
    }
}
