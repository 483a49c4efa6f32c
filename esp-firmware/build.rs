// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust
// (keine Environment-Konfiguration: alle Werte stehen in src/config.rs)

fn main() {
    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    //    Definiert Flash/RAM-Layout und Startup-Code
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Aufruf durch den Linker: <kind> <symbol>
    if let [_, kind, what, ..] = args.as_slice() {
        if kind == "undefined-symbol" {
            if let Some(hint) = hint_for_symbol(what) {
                eprintln!();
                eprintln!("💡 {hint}");
                eprintln!();
            }
            std::process::exit(0);
        }
        // "missing-lib" u.ä.: nichts Hilfreiches bekannt
        std::process::exit(1);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}

fn hint_for_symbol(what: &str) -> Option<&'static str> {
    match what {
        what if what.starts_with("_defmt_") => Some(
            "`defmt` not found - make sure `defmt.x` is added as a linker script and `esp-println` has the `defmt-espflash` feature",
        ),
        "_stack_start" => Some("Is the linker script `linkall.x` missing?"),
        what if what.starts_with("esp_rtos_") => Some(
            "`esp-rtos` scheduler symbols missing - check that `esp_rtos::start` is called in main",
        ),
        // serde_json im Core braucht einen globalen Allocator
        "__rust_alloc" | "__rust_dealloc" | "__rust_realloc" | "__rust_alloc_zeroed" => Some(
            "No global allocator - `esp_alloc::heap_allocator!` must run before the controller task is spawned",
        ),
        _ => None,
    }
}
