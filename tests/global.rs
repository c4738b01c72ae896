//! The process-wide logger is shared by every test in this binary, so all
//! checks live in one test.

mod common;

use common::SharedBuffer;
use tintlog::{Level, global};

#[test]
fn package_level_wrappers() {
    let buffer = SharedBuffer::new();
    global::configure(|logger| {
        assert_eq!(logger.level(), Level::WARN);
        logger.set_output(buffer.clone());
        logger.set_suffix(|| ", t=0".to_string());
    });

    global::debug("hidden");
    global::info("shown");
    global::warnf(format_args!("{}", 2));
    global::console("raw\n");
    assert_eq!(buffer.contents(), "[+] shown , t=0\n[warn] 2\nraw\n");

    buffer.clear();
    global::configure(|logger| logger.set_level(Level::DEBUG));
    global::debugf(format_args!("n={}", 1));
    global::log(Level(99), "custom");
    global::important("top");
    assert_eq!(
        buffer.contents(),
        "[debug] n=1\n[99] custom\n[*] top , t=0\n"
    );

    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("global.log");
    global::init_file(path.to_str().unwrap());
    global::error("to file");
    global::close(false);
    global::close(false);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[-] to file , t=0\n"
    );
    assert_eq!(global::with(tintlog::Logger::state), tintlog::State::Closed);
}
