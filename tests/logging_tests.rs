use issue_relay::setup_logging;

#[test]
fn test_logging_setup() {
    let result = std::panic::catch_unwind(|| {
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}

#[test]
fn test_logging_setup_is_repeatable() {
    // Warm Lambda containers may hit this path more than once
    setup_logging();
    setup_logging();
}
