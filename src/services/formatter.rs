use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, Months, NaiveDateTime, Offset, Utc};
use serde::{Deserialize, Serialize};

use super::response::ServiceError;

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Locale {
	#[default]
	#[serde(rename = "pt-BR")]
	PtBr,
	#[serde(rename = "en-US")]
	EnUs,
}

impl FromStr for Locale {
	type Err = ServiceError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.replace('_', "-").to_ascii_lowercase().as_str() {
			"pt-br" | "pt" => Ok(Locale::PtBr),
			"en-us" | "en" => Ok(Locale::EnUs),
			other => Err(ServiceError::InvalidConfig(format!("unsupported locale `{other}`"))),
		}
	}
}

/// Human-readable timestamps for headers and comment bylines.
pub trait TimestampFormatter {
	fn format_absolute(
		&self,
		timestamp: DateTime<Utc>,
	) -> String;

	/// Distance between `timestamp` and `now` in words. With `add_suffix` the
	/// direction is spelled out ("há ...", "... ago").
	fn format_relative(
		&self,
		timestamp: DateTime<Utc>,
		now: DateTime<Utc>,
		add_suffix: bool,
	) -> String;
}

#[derive(Clone, Copy, Debug)]
pub struct LocalizedFormatter {
	locale: Locale,
	offset: FixedOffset,
}

impl LocalizedFormatter {
	pub fn new(locale: Locale) -> Self {
		Self {
			locale,
			offset: Utc.fix(),
		}
	}

	/// Renders absolute times in the given UTC offset instead of UTC.
	pub fn with_offset(
		mut self,
		offset: FixedOffset,
	) -> Self {
		self.offset = offset;
		self
	}

	fn distance_words(
		&self,
		minutes: i64,
		months: i64,
	) -> String {
		let (unit, n) = Distance::bucket(minutes, months);
		match self.locale {
			Locale::PtBr => unit.pt_br(n),
			Locale::EnUs => unit.en_us(n),
		}
	}
}

impl Default for LocalizedFormatter {
	fn default() -> Self {
		Self::new(Locale::default())
	}
}

impl TimestampFormatter for LocalizedFormatter {
	fn format_absolute(
		&self,
		timestamp: DateTime<Utc>,
	) -> String {
		let local = timestamp.with_timezone(&self.offset);
		match self.locale {
			Locale::PtBr => local.format_localized("%-d de %B às %H:%Mh", chrono::Locale::pt_BR).to_string(),
			Locale::EnUs => local.format_localized("%B %-d at %H:%M", chrono::Locale::en_US).to_string(),
		}
	}

	fn format_relative(
		&self,
		timestamp: DateTime<Utc>,
		now: DateTime<Utc>,
		add_suffix: bool,
	) -> String {
		let seconds = (now - timestamp).num_seconds();
		let minutes = (seconds.abs() as f64 / 60.0).round() as i64;
		let (earlier, later) = if seconds >= 0 { (timestamp, now) } else { (now, timestamp) };
		let months = calendar_months(
			earlier.with_timezone(&self.offset).naive_local(),
			later.with_timezone(&self.offset).naive_local(),
		);
		let words = self.distance_words(minutes, months);
		if !add_suffix {
			return words;
		}
		let in_past = seconds >= 0;
		match (self.locale, in_past) {
			(Locale::PtBr, true) => format!("há {words}"),
			(Locale::PtBr, false) => format!("em {words}"),
			(Locale::EnUs, true) => format!("{words} ago"),
			(Locale::EnUs, false) => format!("in {words}"),
		}
	}
}

/// Whole calendar months from `earlier` to `later`.
fn calendar_months(
	earlier: NaiveDateTime,
	later: NaiveDateTime,
) -> i64 {
	let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month()) - i64::from(earlier.month());
	while months > 0 {
		let reached = u32::try_from(months)
			.ok()
			.and_then(|n| earlier.checked_add_months(Months::new(n)))
			.is_some_and(|shifted| shifted <= later);
		if reached {
			break;
		}
		months -= 1;
	}
	months.max(0)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Distance {
	LessThanXMinutes,
	XMinutes,
	AboutXHours,
	XDays,
	AboutXMonths,
	XMonths,
	AboutXYears,
	OverXYears,
	AlmostXYears,
}

impl Distance {
	fn bucket(
		minutes: i64,
		months: i64,
	) -> (Distance, i64) {
		let rounded = |divisor: i64| (minutes as f64 / divisor as f64).round() as i64;
		if minutes < 1 {
			return (Distance::LessThanXMinutes, 1);
		}
		if minutes < 45 {
			return (Distance::XMinutes, minutes);
		}
		if minutes < 90 {
			return (Distance::AboutXHours, 1);
		}
		if minutes < MINUTES_IN_DAY {
			return (Distance::AboutXHours, rounded(60));
		}
		if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
			return (Distance::XDays, 1);
		}
		if minutes < MINUTES_IN_MONTH {
			return (Distance::XDays, rounded(MINUTES_IN_DAY));
		}
		if minutes < MINUTES_IN_TWO_MONTHS {
			return (Distance::AboutXMonths, rounded(MINUTES_IN_MONTH));
		}
		if months < 12 {
			return (Distance::XMonths, months);
		}
		let years = months / 12;
		match months % 12 {
			rest if rest < 3 => (Distance::AboutXYears, years),
			rest if rest < 9 => (Distance::OverXYears, years),
			_ => (Distance::AlmostXYears, years + 1),
		}
	}

	fn pt_br(
		self,
		n: i64,
	) -> String {
		let one = n == 1;
		match self {
			Distance::LessThanXMinutes if one => "menos de um minuto".into(),
			Distance::LessThanXMinutes => format!("menos de {n} minutos"),
			Distance::XMinutes if one => "1 minuto".into(),
			Distance::XMinutes => format!("{n} minutos"),
			Distance::AboutXHours if one => "cerca de 1 hora".into(),
			Distance::AboutXHours => format!("cerca de {n} horas"),
			Distance::XDays if one => "1 dia".into(),
			Distance::XDays => format!("{n} dias"),
			Distance::AboutXMonths if one => "cerca de 1 mês".into(),
			Distance::AboutXMonths => format!("cerca de {n} meses"),
			Distance::XMonths if one => "1 mês".into(),
			Distance::XMonths => format!("{n} meses"),
			Distance::AboutXYears if one => "cerca de 1 ano".into(),
			Distance::AboutXYears => format!("cerca de {n} anos"),
			Distance::OverXYears if one => "mais de 1 ano".into(),
			Distance::OverXYears => format!("mais de {n} anos"),
			Distance::AlmostXYears if one => "quase 1 ano".into(),
			Distance::AlmostXYears => format!("quase {n} anos"),
		}
	}

	fn en_us(
		self,
		n: i64,
	) -> String {
		let one = n == 1;
		match self {
			Distance::LessThanXMinutes if one => "less than a minute".into(),
			Distance::LessThanXMinutes => format!("less than {n} minutes"),
			Distance::XMinutes if one => "1 minute".into(),
			Distance::XMinutes => format!("{n} minutes"),
			Distance::AboutXHours if one => "about 1 hour".into(),
			Distance::AboutXHours => format!("about {n} hours"),
			Distance::XDays if one => "1 day".into(),
			Distance::XDays => format!("{n} days"),
			Distance::AboutXMonths if one => "about 1 month".into(),
			Distance::AboutXMonths => format!("about {n} months"),
			Distance::XMonths if one => "1 month".into(),
			Distance::XMonths => format!("{n} months"),
			Distance::AboutXYears if one => "about 1 year".into(),
			Distance::AboutXYears => format!("about {n} years"),
			Distance::OverXYears if one => "over 1 year".into(),
			Distance::OverXYears => format!("over {n} years"),
			Distance::AlmostXYears if one => "almost 1 year".into(),
			Distance::AlmostXYears => format!("almost {n} years"),
		}
	}
}
