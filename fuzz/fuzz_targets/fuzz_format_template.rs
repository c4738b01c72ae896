#![no_main]
use libfuzzer_sys::fuzz_target;
use tintlog::fmt::{FormatTemplate, format_line};

fuzz_target!(|data: (&str, &str)| {
    let (template, message) = data;
    // Must not panic on any template string
    let template = FormatTemplate::parse(template);

    let line = format_line(&template, message, &|| ", t=0".to_string(), &String::new);
    assert!(line.ends_with('\n'));
});
