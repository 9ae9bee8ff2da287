//! Text output.

/// Format like C's `%g`: `precision` significant digits, trailing zeros
/// dropped, scientific notation for very small or large magnitudes.
pub fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);
    // Rounding first tells us the exponent of the printed value.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// `<value> <from> = <result> <to>`
pub fn conversion_line(value: f64, from: &str, result: f64, to: &str, precision: usize) -> String {
    format!(
        "{} {} = {} {}",
        format_significant(value, precision),
        from,
        format_significant(result, precision),
        to
    )
}

/// Usage banner followed by one line per unit.
pub fn unit_listing<'a, I>(definitions: &str, units: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    out.push_str("convert: unit conversions\n");
    out.push_str(&format!("current definition file is {}\n", definitions));
    out.push_str("use: convert value from_unit to_unit\n");
    out.push_str("allowed units are:\n");
    for (id, long_name) in units {
        out.push_str(&format!(" {:<12}{}\n", id, long_name));
    }
    out
}
