use netbar_core::Sample;

/// Token count of a valid counter data row.
const FIELD_COUNT: usize = 7;
/// Column positions within a data row:
/// `packets errs bytes packets errs bytes colls`.
const INPUT_BYTES_IDX: usize = 2;
const OUTPUT_BYTES_IDX: usize = 5;

/// Parse one line of periodic counter output.
///
/// The counter tool prints a multi-line header before data rows; header
/// rows and partial lines have a different token count and are dropped
/// by the shape check. Rows with the right shape but a non-numeric
/// token are dropped too, rather than letting a garbage value reach the
/// chart scale maths.
pub fn parse_line(line: &str) -> Option<Sample> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != FIELD_COUNT {
        return None;
    }

    let mut fields = [0u64; FIELD_COUNT];
    for (slot, token) in fields.iter_mut().zip(&tokens) {
        *slot = token.parse().ok()?;
    }

    Some(Sample {
        input_bytes:  fields[INPUT_BYTES_IDX],
        output_bytes: fields[OUTPUT_BYTES_IDX],
    })
}
