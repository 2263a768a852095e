use lashell::{format_message, ShellError};

#[test]
fn substitutes_a_single_positional_argument() {
    let msg = format_message("Loaded {0} samples", &[&42]).unwrap();
    assert_eq!(msg, "Loaded 42 samples");
}

#[test]
fn substitutes_arguments_out_of_order() {
    let msg = format_message("{1} of {0}", &[&100, &25]).unwrap();
    assert_eq!(msg, "25 of 100");
}

#[test]
fn same_argument_may_be_referenced_twice() {
    let msg = format_message("{0} + {0}", &[&"x"]).unwrap();
    assert_eq!(msg, "x + x");
}

#[test]
fn template_without_placeholders_passes_through() {
    let msg = format_message("Capture aborted", &[]).unwrap();
    assert_eq!(msg, "Capture aborted");
}

#[test]
fn missing_argument_is_a_format_error() {
    let err = format_message("Loaded {0}", &[]).unwrap_err();
    assert!(matches!(err, ShellError::Format { .. }));
}

#[test]
fn extra_arguments_are_ignored() {
    let msg = format_message("Loaded {0}", &[&1, &2]).unwrap();
    assert_eq!(msg, "Loaded 1");
}

#[test]
fn non_numeric_placeholder_is_a_format_error() {
    assert!(matches!(
        format_message("Loaded {n}", &[&1]),
        Err(ShellError::Format { .. })
    ));
}

#[test]
fn unclosed_placeholder_is_a_format_error() {
    assert!(matches!(
        format_message("Loaded {0", &[&1]),
        Err(ShellError::Format { .. })
    ));
    assert!(matches!(
        format_message("Loaded {", &[&1]),
        Err(ShellError::Format { .. })
    ));
}

#[test]
fn oversized_placeholder_index_is_a_format_error() {
    // An index too large for usize must surface as a Format error, not
    // overflow into a wrong (wrapped) index.
    let err = format_message("Loaded {99999999999999999999} samples", &[&1]).unwrap_err();
    assert!(matches!(err, ShellError::Format { .. }));
}

#[test]
fn stray_closing_brace_is_literal() {
    let msg = format_message("100} done", &[]).unwrap();
    assert_eq!(msg, "100} done");
}
