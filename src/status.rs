//! Status-bar collaborator contract and status message formatting.

use std::fmt;

use crate::error::ShellError;

/// Text/progress surface of the status bar at the bottom of the window.
pub trait StatusBar {
    fn set_text(&mut self, text: &str);
    fn set_progress(&mut self, percent: u8);
    fn show_progress_bar(&mut self, visible: bool);
}

/// Substitute positional `{0}`-style placeholders in `template` with the
/// given arguments.
///
/// Fails with [`ShellError::Format`] when a placeholder references an
/// argument that was not provided, or when a `{` does not open a valid
/// `{N}` placeholder. A stray `}` is passed through literally.
///
/// ```
/// use lashell::format_message;
/// let msg = format_message("Loaded {0} samples", &[&42]).unwrap();
/// assert_eq!(msg, "Loaded 42 samples");
/// ```
pub fn format_message(template: &str, args: &[&dyn fmt::Display]) -> Result<String, ShellError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '{' {
            out.push(c);
            continue;
        }

        let mut index: Option<usize> = None;
        loop {
            match chars.next() {
                Some(d) if d.is_ascii_digit() => {
                    let digit = d as usize - '0' as usize;
                    let next = index
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|i| i.checked_add(digit));
                    match next {
                        Some(i) => index = Some(i),
                        None => {
                            return Err(ShellError::format(
                                template,
                                "placeholder index out of range",
                            ));
                        }
                    }
                }
                Some('}') => break,
                _ => {
                    return Err(ShellError::format(template, "malformed placeholder"));
                }
            }
        }

        let index = match index {
            Some(i) => i,
            None => return Err(ShellError::format(template, "malformed placeholder")),
        };
        match args.get(index) {
            Some(arg) => out.push_str(&arg.to_string()),
            None => {
                return Err(ShellError::format(
                    template,
                    format!(
                        "placeholder {{{}}} has no matching argument ({} provided)",
                        index,
                        args.len()
                    ),
                ));
            }
        }
    }

    Ok(out)
}
