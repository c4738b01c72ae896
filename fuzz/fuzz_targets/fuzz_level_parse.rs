#![no_main]
use libfuzzer_sys::fuzz_target;
use tintlog::{Level, LevelRegistry};

fuzz_target!(|data: &str| {
    let registry = LevelRegistry::new();
    if let Ok(level) = data.parse::<Level>() {
        let _ = registry.resolve_name(level);
        let _ = registry.resolve_template(level).render(data);
    }
    let _ = registry.find(data);
});
