//! Tests for logger functionality.

mod common;

use common::{SharedBuffer, buffered};
use tintlog::{Ansi, Level, LevelOptions, Logger, State, debugf, infof, logf};

#[test]
fn builder_default() {
    let logger = Logger::builder().build();
    assert_eq!(logger.level(), Level::WARN);
    assert!(!logger.is_quiet());
    assert!(!logger.is_clean());
    assert!(!logger.is_color());
    assert_eq!(logger.state(), State::Uninitialized);
}

#[test]
fn threshold_filters_lower_levels() {
    let (logger, buffer) = buffered(Level::WARN);
    logger.debug("x");
    assert_eq!(buffer.contents(), "");

    logger.warn("y");
    assert_eq!(buffer.contents(), "[warn] y\n");
}

#[test]
fn emission_iff_level_at_or_above_threshold() {
    for threshold in Level::builtins() {
        for level in Level::builtins() {
            let (logger, buffer) = buffered(threshold);
            logger.log(level, "m");
            assert_eq!(
                !buffer.contents().is_empty(),
                level >= threshold,
                "level {level} threshold {threshold}"
            );
        }
    }
}

#[test]
fn quiet_suppresses_everything_gated() {
    let (mut logger, buffer) = buffered(Level::DEBUG);
    logger.set_quiet(true);
    logger.important("nope");
    logger.errorf(format_args!("nope {}", 1));
    assert_eq!(buffer.contents(), "");

    logger.console("banner\n");
    assert_eq!(buffer.contents(), "banner\n");
}

#[test]
fn clean_only_suppresses_console_passthrough() {
    let (mut logger, buffer) = buffered(Level::DEBUG);
    logger.set_clean(true);
    logger.console("banner\n");
    logger.consolef(format_args!("{}/{}\n", 1, 2));
    assert_eq!(buffer.contents(), "");

    logger.warn("still here");
    assert_eq!(buffer.contents(), "[warn] still here\n");
}

#[test]
fn console_is_ungated() {
    let (mut logger, buffer) = buffered(Level::IMPORTANT);
    logger.set_level(Level(1000));
    logger.console("raw");
    tintlog::consolef!(logger, " {}%", 50);
    assert_eq!(buffer.contents(), "raw 50%");
}

#[test]
fn builtin_templates() {
    let (logger, buffer) = buffered(Level::DEBUG);
    logger.debug("d");
    logger.warn("w");
    logger.info("i");
    logger.error("e");
    logger.important("!");
    assert_eq!(
        buffer.contents(),
        "[debug] d\n[warn] w\n[+] i , t=0\n[-] e , t=0\n[*] ! , t=0\n"
    );
}

#[test]
fn formatted_variants() {
    let (logger, buffer) = buffered(Level::DEBUG);
    logger.warnf(format_args!("{} of {}", 3, 4));
    debugf!(logger, "x={:>3}", 7);
    infof!(logger, "{}", "ready");
    logf!(logger, Level::ERROR, "code {}", 500);
    assert_eq!(
        buffer.contents(),
        "[warn] 3 of 4\n[debug] x=  7\n[+] ready , t=0\n[-] code 500 , t=0\n"
    );
}

#[test]
fn color_wraps_console_line() {
    let (mut logger, buffer) = buffered(Level::DEBUG);
    logger.set_color(true);
    logger.warn("y");
    assert_eq!(buffer.contents(), "\x1b[1;33m[warn] y\n\x1b[0m");
}

#[test]
fn color_off_is_byte_identical_to_render() {
    let (logger, buffer) = buffered(Level::DEBUG);
    for level in Level::builtins() {
        buffer.clear();
        logger.log(level, "msg");
        assert_eq!(buffer.contents(), logger.render(level, "msg"));
    }
}

#[test]
fn colorize_respects_flag() {
    let (mut logger, _buffer) = buffered(Level::DEBUG);
    assert_eq!(logger.colorize(Level::ERROR, "x"), "x");
    logger.set_color(true);
    assert_eq!(logger.colorize(Level::ERROR, "x"), "\x1b[1;31mx\x1b[0m");
    assert_eq!(logger.colorize(Level(3), "x"), "x");
}

#[test]
fn custom_level_resolution() {
    let (mut logger, buffer) = buffered(Level::DEBUG);
    logger.log(Level(100), "before");
    logger.register_level(Level(100), "trace", LevelOptions::new());
    logger.log(Level(100), "after");
    assert_eq!(buffer.contents(), "[100] before\n[trace] after\n");
}

#[test]
fn custom_level_with_format_and_color() {
    let (mut logger, buffer) = buffered(Level::DEBUG);
    logger.set_color(true);
    logger.register_level(
        Level(60),
        "audit",
        LevelOptions::new()
            .format("AUDIT %s{{suffix}}")
            .color(Ansi::GREEN),
    );
    logger.log(Level(60), "login");
    assert_eq!(buffer.contents(), "\x1b[32mAUDIT login, t=0\n\x1b[0m");
}

#[test]
fn instance_overrides_beat_registry() {
    let (mut logger, buffer) = buffered(Level::DEBUG);
    logger.set_format(Level::WARN, "W: %s");
    logger.set_color(true);
    logger.set_color_fn(Level::WARN, |s: &str| format!("<{s}>"));
    logger.warn("a");
    logger.debug("b");
    assert_eq!(buffer.contents(), "<W: a\n>\x1b[33m[debug] b\n\x1b[0m");
}

#[test]
fn set_formats_replaces_map() {
    let (mut logger, buffer) = buffered(Level::DEBUG);
    logger.set_format(Level::DEBUG, "D %s");
    logger.set_formats([(Level::WARN, "W %s")]);
    logger.debug("a");
    logger.warn("b");
    assert_eq!(buffer.contents(), "[debug] a\nW b\n");
}

#[test]
fn prefix_and_suffix_decorators() {
    let (mut logger, buffer) = buffered(Level::DEBUG);
    logger.set_format(Level::INFO, "{{prefix}}%s{{suffix}}");
    logger.set_prefix(|| "req-7 ".to_string());
    logger.set_suffix(|| " (ok)".to_string());
    logger.info("done");
    assert_eq!(buffer.contents(), "req-7 done (ok)\n");
}

#[test]
fn alert_template_scenario() {
    let (mut logger, buffer) = buffered(Level::DEBUG);
    logger.register_level(
        Level(45),
        "alert",
        LevelOptions::new().format("[ALERT] %s {{suffix}}"),
    );
    logger.set_suffix(|| ", t=42".to_string());
    logger.log(Level(45), "disk full");
    assert_eq!(buffer.contents(), "[ALERT] disk full , t=42\n");
}

#[test]
fn default_suffix_is_a_timestamp() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .level(Level::DEBUG)
        .output(buffer.clone())
        .build();
    logger.info("tick");
    let out = buffer.contents();
    assert!(out.starts_with("[+] tick , "), "{out}");
    // "YYYY-MM-DD HH:MM.SS"
    let stamp = out.trim_end().trim_start_matches("[+] tick , ");
    assert_eq!(stamp.len(), 19);
    assert_eq!(&stamp[4..5], "-");
    assert_eq!(&stamp[13..14], ":");
    assert_eq!(&stamp[16..17], ".");
}

#[test]
fn writer_variant_redirects_one_call() {
    let (mut logger, buffer) = buffered(Level::DEBUG);
    logger.set_color(true);
    let mut other: Vec<u8> = Vec::new();
    logger.warn_to(&mut other, "elsewhere");
    logger.debug_to(&mut other, "d");
    assert_eq!(buffer.contents(), "");
    assert_eq!(
        String::from_utf8(other).unwrap(),
        "\x1b[1;33m[warn] elsewhere\n\x1b[0m\x1b[33m[debug] d\n\x1b[0m"
    );
}

#[test]
fn writer_variant_is_gated() {
    let (logger, _buffer) = buffered(Level::ERROR);
    let mut other: Vec<u8> = Vec::new();
    logger.info_to(&mut other, "filtered");
    logger.logf_to(&mut other, Level::WARN, format_args!("{}", "filtered"));
    logger.error_to(&mut other, "kept");
    assert_eq!(String::from_utf8(other).unwrap(), "[-] kept , t=0\n");
}

#[test]
fn logf_skips_formatting_when_filtered() {
    struct Loud;
    impl std::fmt::Display for Loud {
        fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            panic!("formatted a filtered message");
        }
    }
    let (logger, buffer) = buffered(Level::ERROR);
    logger.debugf(format_args!("{}", Loud));
    assert_eq!(buffer.contents(), "");
}

#[test]
fn close_without_file_is_harmless() {
    let (logger, buffer) = buffered(Level::DEBUG);
    logger.close(false);
    logger.close(false);
    assert_eq!(logger.state(), State::Closed);
    logger.warn("after");
    assert_eq!(buffer.contents(), "[warn] after\n");
}

#[test]
fn init_without_file_warns() {
    let (mut logger, buffer) = buffered(Level::DEBUG);
    logger.init();
    assert_eq!(logger.state(), State::Uninitialized);
    assert_eq!(buffer.contents(), "[warn] no log file configured\n");
}

#[test]
fn logger_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Logger>();
}
