//! Field-by-field prompting for the interactive command.

use std::io::{self, BufRead, Write};

use fetal_core::{FeatureField, RawInput, RawValue};
use fetal_inference::parse_field_value;

/// Prompt for every field by its human label, re-asking until each value
/// parses. Returns `None` if input ends first.
pub fn prompt_fields<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
) -> io::Result<Option<RawInput>> {
    let mut raw = RawInput::new();
    writeln!(output, "Enter the following features:")?;

    for field in FeatureField::ALL {
        loop {
            write!(output, "{}: ", field.label())?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let value = RawValue::Text(line.trim().to_string());
            match parse_field_value(field, Some(&value)) {
                Ok(v) => {
                    raw.insert(field.name(), v);
                    break;
                }
                Err(e) => writeln!(output, "  {}, try again", e.problem)?,
            }
        }
    }
    Ok(Some(raw))
}
