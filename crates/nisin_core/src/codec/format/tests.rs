use super::DisplayFormat;
use crate::codec::NisinError;

fn fmt(spec: &str) -> DisplayFormat {
	DisplayFormat::parse(spec).expect("format spec parses")
}

#[test]
fn default_hex_uses_sign_magnitude() {
	assert_eq!(DisplayFormat::HEX.format_int(1), "0x1");
	assert_eq!(DisplayFormat::HEX.format_int(255), "0xff");
	assert_eq!(DisplayFormat::HEX.format_int(-5), "-0x5");
	assert_eq!(fmt("#x"), DisplayFormat::HEX);
}

#[test]
fn zero_padding_goes_after_prefix() {
	assert_eq!(fmt("#010x").format_int(255), "0x000000ff");
	assert_eq!(fmt("08b").format_int(5), "00000101");
	assert_eq!(fmt("05d").format_int(-42), "-0042");
}

#[test]
fn alignment_and_sign_are_applied() {
	assert_eq!(fmt(">6").format_int(42), "    42");
	assert_eq!(fmt("*<5d").format_int(7), "7****");
	assert_eq!(fmt("+d").format_int(3), "+3");
	assert_eq!(fmt("#X").format_int(0xab), "0XAB");
	assert_eq!(fmt("#o").format_int(8), "0o10");
}

#[test]
fn grouping_separates_digits() {
	assert_eq!(fmt(",d").format_int(1_234_567), "1,234,567");
	assert_eq!(fmt("_x").format_int(0xdead_beef), "dead_beef");
	assert_eq!(fmt(",.2f").format_float(12345.678), "12,345.68");
}

#[test]
fn float_presentations_match_printf_style() {
	assert_eq!(fmt(".3f").format_float(3.14159), "3.142");
	assert_eq!(fmt(".2e").format_float(1234.5), "1.23e+03");
	assert_eq!(fmt("g").format_float(0.0001), "0.0001");
	assert_eq!(fmt("g").format_float(1e20), "1e+20");
	assert_eq!(fmt(".1%").format_float(0.256), "25.6%");
	assert_eq!(fmt(">8").format_float(1.5), "     1.5");
	assert_eq!(fmt("f").format_float(f64::INFINITY), "inf");
}

#[test]
fn integers_accept_float_presentations() {
	assert_eq!(fmt(".1f").format_int(3), "3.0");
}

#[test]
fn text_is_padded_and_truncated() {
	assert_eq!(fmt("^7").format_text("abc"), "  abc  ");
	assert_eq!(fmt(".2s").format_text("abcdef"), "ab");
	assert_eq!(fmt("x").format_text("abc"), "abc");
}

#[test]
fn malformed_specs_are_rejected() {
	for spec in ["q", ".", "5x5", "99999999999999999999999", "999999999999999999d", ".70000f", "#x!"] {
		let err = DisplayFormat::parse(spec).expect_err("spec should be rejected");
		assert!(matches!(err, NisinError::InvalidFormatSpec { .. }), "{spec:?} gave {err}");
	}
}

#[test]
fn width_and_precision_are_bounded() {
	let widest = DisplayFormat::parse("65535d").expect("width at the limit");
	assert_eq!(widest.format_int(7).len(), 65535);
	assert!(DisplayFormat::parse("65536d").is_err());
	assert!(DisplayFormat::parse(".65535f").is_ok());
	assert!(DisplayFormat::parse(".65536f").is_err());
}
