//! Runtime display format hints.
//!
//! Fields may carry a format spec in the `[[fill]align][sign][#][0][width][grouping][.precision][type]`
//! mini language. Specs are parsed once at compile time and applied to every decoded scalar of the field.

use crate::codec::{NisinError, Result};

/// Largest accepted width or precision.
const MAX_FIELD_LEN: usize = u16::MAX as usize;

/// Padding alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
	/// `<`
	Left,
	/// `>`
	Right,
	/// `^`
	Center,
	/// `=`, padding goes between sign/prefix and digits.
	AfterSign,
}

/// Sign rendering for non-negative numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sign {
	/// Only negative numbers get a sign.
	#[default]
	Minus,
	/// Always print a sign.
	Plus,
	/// Space in front of non-negative numbers.
	Space,
}

/// Parsed display format hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormat {
	fill: char,
	align: Option<Align>,
	sign: Sign,
	alternate: bool,
	width: usize,
	grouping: Option<char>,
	precision: Option<usize>,
	kind: Option<char>,
}

const KINDS: &str = "bcdoxXeEfFgGn%s";

impl DisplayFormat {
	/// `#x`, the default for integers without an explicit hint.
	pub const HEX: Self = Self {
		fill: ' ',
		align: None,
		sign: Sign::Minus,
		alternate: true,
		width: 0,
		grouping: None,
		precision: None,
		kind: Some('x'),
	};

	/// Parse a format spec such as `#010x`, `>8`, or `.3f`.
	pub fn parse(spec: &str) -> Result<Self> {
		let invalid = |reason: &'static str| NisinError::InvalidFormatSpec {
			spec: spec.to_owned(),
			reason,
		};

		let chars: Vec<char> = spec.chars().collect();
		let mut at = 0;
		let mut out = Self {
			fill: ' ',
			align: None,
			sign: Sign::Minus,
			alternate: false,
			width: 0,
			grouping: None,
			precision: None,
			kind: None,
		};

		if let Some(align) = chars.get(1).copied().and_then(parse_align) {
			out.fill = chars[0];
			out.align = Some(align);
			at = 2;
		} else if let Some(align) = chars.first().copied().and_then(parse_align) {
			out.align = Some(align);
			at = 1;
		}

		match chars.get(at) {
			Some('+') => {
				out.sign = Sign::Plus;
				at += 1;
			}
			Some(' ') => {
				out.sign = Sign::Space;
				at += 1;
			}
			Some('-') => at += 1,
			_ => {}
		}

		if chars.get(at) == Some(&'#') {
			out.alternate = true;
			at += 1;
		}
		if chars.get(at) == Some(&'0') {
			if out.align.is_none() {
				out.fill = '0';
				out.align = Some(Align::AfterSign);
			}
			at += 1;
		}

		let (width, next) = read_number(&chars, at).map_err(|_| invalid("width is too large"))?;
		out.width = width.unwrap_or(0);
		at = next;

		if let Some(sep @ (',' | '_')) = chars.get(at).copied() {
			out.grouping = Some(sep);
			at += 1;
		}

		if chars.get(at) == Some(&'.') {
			let (precision, next) = read_number(&chars, at + 1).map_err(|_| invalid("precision is too large"))?;
			let Some(precision) = precision else {
				return Err(invalid("missing precision after '.'"));
			};
			out.precision = Some(precision);
			at = next;
		}

		if let Some(kind) = chars.get(at).copied() {
			if !KINDS.contains(kind) {
				return Err(invalid("unknown presentation type"));
			}
			out.kind = Some(kind);
			at += 1;
		}

		if at != chars.len() {
			return Err(invalid("unexpected trailing characters"));
		}
		Ok(out)
	}

	/// Format an integer value.
	pub fn format_int(&self, value: i128) -> String {
		let negative = value < 0;
		let magnitude = value.unsigned_abs();
		let (prefix, digits) = match self.kind {
			None | Some('d' | 'n') => ("", group(&magnitude.to_string(), self.grouping, 3)),
			Some('x') => (if self.alternate { "0x" } else { "" }, group(&format!("{magnitude:x}"), self.grouping, 4)),
			Some('X') => (if self.alternate { "0X" } else { "" }, group(&format!("{magnitude:X}"), self.grouping, 4)),
			Some('o') => (if self.alternate { "0o" } else { "" }, group(&format!("{magnitude:o}"), self.grouping, 4)),
			Some('b') => (if self.alternate { "0b" } else { "" }, group(&format!("{magnitude:b}"), self.grouping, 4)),
			Some('c') => {
				return match u32::try_from(value).ok().and_then(char::from_u32) {
					Some(ch) => self.pad("", "", &ch.to_string(), Align::Left),
					None => value.to_string(),
				};
			}
			Some('e' | 'E' | 'f' | 'F' | 'g' | 'G' | '%') => return self.format_float(value as f64),
			Some(_) => return value.to_string(),
		};
		self.pad(self.sign_str(negative), prefix, &digits, Align::Right)
	}

	/// Format a floating point value.
	pub fn format_float(&self, value: f64) -> String {
		let negative = value.is_sign_negative() && !value.is_nan();
		let magnitude = value.abs();
		let upper = matches!(self.kind, Some('E' | 'F' | 'G'));

		let body = if !magnitude.is_finite() {
			let text = if magnitude.is_nan() { "nan" } else { "inf" };
			if upper { text.to_uppercase() } else { text.to_owned() }
		} else {
			match (self.kind, self.precision) {
				(Some('f' | 'F'), precision) => self.group_float(format!("{magnitude:.prec$}", prec = precision.unwrap_or(6))),
				(Some('e' | 'E'), precision) => format_exp(magnitude, precision.unwrap_or(6), upper),
				(Some('%'), precision) => {
					let fixed = self.group_float(format!("{:.prec$}", magnitude * 100.0, prec = precision.unwrap_or(6)));
					format!("{fixed}%")
				}
				(Some('g' | 'G' | 'n'), precision) | (None, precision @ Some(_)) => {
					format_general(magnitude, precision.unwrap_or(6), upper, self.alternate)
				}
				(None, None) => self.group_float(format!("{magnitude:?}")),
				(Some(_), _) => return format!("{value:?}"),
			}
		};
		self.pad(self.sign_str(negative), "", &body, Align::Right)
	}

	/// Format text, honoring precision as a maximum length.
	pub fn format_text(&self, text: &str) -> String {
		match self.kind {
			None | Some('s') => {
				let body: String = match self.precision {
					Some(max) => text.chars().take(max).collect(),
					None => text.to_owned(),
				};
				self.pad("", "", &body, Align::Left)
			}
			Some(_) => text.to_owned(),
		}
	}

	/// Whether the presentation type renders integers as numbers.
	pub(crate) fn is_numeric(&self) -> bool {
		self.kind.is_some_and(|kind| kind != 's')
	}

	fn sign_str(&self, negative: bool) -> &'static str {
		match (negative, self.sign) {
			(true, _) => "-",
			(false, Sign::Plus) => "+",
			(false, Sign::Space) => " ",
			(false, Sign::Minus) => "",
		}
	}

	fn group_float(&self, fixed: String) -> String {
		let Some(sep) = self.grouping else {
			return fixed;
		};
		let split = fixed.find(|c: char| !c.is_ascii_digit()).unwrap_or(fixed.len());
		format!("{}{}", group(&fixed[..split], Some(sep), 3), &fixed[split..])
	}

	fn pad(&self, sign: &str, prefix: &str, body: &str, default_align: Align) -> String {
		let len = sign.chars().count() + prefix.chars().count() + body.chars().count();
		if self.width <= len {
			return format!("{sign}{prefix}{body}");
		}

		let fill_len = self.width - len;
		let fill = |count: usize| self.fill.to_string().repeat(count);
		match self.align.unwrap_or(default_align) {
			Align::Left => format!("{sign}{prefix}{body}{}", fill(fill_len)),
			Align::Right => format!("{}{sign}{prefix}{body}", fill(fill_len)),
			Align::Center => format!("{}{sign}{prefix}{body}{}", fill(fill_len / 2), fill(fill_len - fill_len / 2)),
			Align::AfterSign => format!("{sign}{prefix}{}{body}", fill(fill_len)),
		}
	}
}

fn parse_align(ch: char) -> Option<Align> {
	match ch {
		'<' => Some(Align::Left),
		'>' => Some(Align::Right),
		'^' => Some(Align::Center),
		'=' => Some(Align::AfterSign),
		_ => None,
	}
}

fn read_number(chars: &[char], start: usize) -> std::result::Result<(Option<usize>, usize), ()> {
	let mut at = start;
	let mut value: Option<usize> = None;
	while let Some(digit) = chars.get(at).and_then(|ch| ch.to_digit(10)) {
		let next = value
			.unwrap_or(0)
			.checked_mul(10)
			.and_then(|item| item.checked_add(digit as usize))
			.filter(|item| *item <= MAX_FIELD_LEN)
			.ok_or(())?;
		value = Some(next);
		at += 1;
	}
	Ok((value, at))
}

fn group(digits: &str, sep: Option<char>, every: usize) -> String {
	let Some(sep) = sep else {
		return digits.to_owned();
	};
	let len = digits.len();
	let mut out = String::with_capacity(len + len / every);
	for (idx, ch) in digits.chars().enumerate() {
		if idx > 0 && (len - idx) % every == 0 {
			out.push(sep);
		}
		out.push(ch);
	}
	out
}

fn format_exp(magnitude: f64, precision: usize, upper: bool) -> String {
	let raw = format!("{magnitude:.precision$e}");
	let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
	let exp: i32 = exp.parse().unwrap_or(0);
	let marker = if upper { 'E' } else { 'e' };
	let exp_sign = if exp < 0 { '-' } else { '+' };
	format!("{mantissa}{marker}{exp_sign}{:02}", exp.unsigned_abs())
}

fn format_general(magnitude: f64, precision: usize, upper: bool, keep_zeros: bool) -> String {
	let precision = precision.max(1);
	if magnitude == 0.0 {
		return if keep_zeros { format!("{:.prec$}", 0.0, prec = precision - 1) } else { "0".to_owned() };
	}

	let scientific = format!("{magnitude:.prec$e}", prec = precision - 1);
	let exp: i64 = scientific.split_once('e').and_then(|(_, exp)| exp.parse().ok()).unwrap_or(0);

	if exp >= -4 && exp < precision as i64 {
		let decimals = (precision as i64 - 1 - exp).max(0) as usize;
		let fixed = format!("{magnitude:.decimals$}");
		if keep_zeros { fixed } else { strip_zeros(&fixed).to_owned() }
	} else {
		let exp_text = format_exp(magnitude, precision - 1, upper);
		if keep_zeros {
			return exp_text;
		}
		let marker = if upper { 'E' } else { 'e' };
		match exp_text.split_once(marker) {
			Some((mantissa, exp)) => format!("{}{marker}{exp}", strip_zeros(mantissa)),
			None => exp_text,
		}
	}
}

fn strip_zeros(fixed: &str) -> &str {
	if !fixed.contains('.') {
		return fixed;
	}
	fixed.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests;
