//! Display locales, month and weekday names, and digit localization.

/// Display locale for month names, weekday labels and numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Bengali script with Bengali digits.
    Bn,
    /// English with ASCII digits.
    En,
    /// Arabic script with Arabic-Indic digits.
    Ar,
}

/// Gregorian month names, January first.
pub const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Bengali month names, Boishakh first.
pub const BENGALI_MONTH_NAMES: [&str; 12] = [
    "বৈশাখ",
    "জ্যৈষ্ঠ",
    "আষাঢ়",
    "শ্রাবণ",
    "ভাদ্র",
    "আশ্বিন",
    "কার্তিক",
    "অগ্রহায়ণ",
    "পৌষ",
    "মাঘ",
    "ফাল্গুন",
    "চৈত্র",
];

/// Hijri month names in Arabic, Muharram first.
pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

const BN_WEEKDAYS: [&str; 7] = ["রবি", "সোম", "মঙ্গল", "বুধ", "বৃহ", "শুক্র", "শনি"];
const EN_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const AR_WEEKDAYS: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

const BENGALI_ZERO: u32 = 0x09E6;
const ARABIC_INDIC_ZERO: u32 = 0x0660;

impl Locale {
    /// Weekday column labels, Sunday first.
    pub fn weekday_labels(self) -> &'static [&'static str; 7] {
        match self {
            Self::Bn => &BN_WEEKDAYS,
            Self::En => &EN_WEEKDAYS,
            Self::Ar => &AR_WEEKDAYS,
        }
    }

    /// Heading shown above a calendar in this locale.
    pub fn calendar_label(self) -> &'static str {
        match self {
            Self::Bn => "বাংলা ক্যালেন্ডার",
            Self::En => "Gregorian Calendar",
            Self::Ar => "التقويم الهجري",
        }
    }

    /// Whether text in this locale is laid out right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    fn zero_code_point(self) -> Option<u32> {
        match self {
            Self::Bn => Some(BENGALI_ZERO),
            Self::En => None,
            Self::Ar => Some(ARABIC_INDIC_ZERO),
        }
    }
}

/// Replaces ASCII digits in `text` with the digit glyphs of `locale`.
///
/// Non-digit characters pass through unchanged; [`Locale::En`] returns the
/// input as-is.
pub fn localize_digits(text: &str, locale: Locale) -> String {
    let Some(zero) = locale.zero_code_point() else {
        return text.to_string();
    };
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(zero + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Formats a number with the digit glyphs of `locale`.
pub fn format_number(value: impl std::fmt::Display, locale: Locale) -> String {
    localize_digits(&value.to_string(), locale)
}

/// Parses a non-negative integer written in ASCII, Bengali or Arabic-Indic digits.
///
/// Returns `None` for empty input, any non-digit character, or overflow.
pub fn parse_localized_digits(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.chars().try_fold(0u32, |acc, c| {
        let digit = native_digit_value(c)?;
        acc.checked_mul(10)?.checked_add(digit)
    })
}

fn native_digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return c.to_digit(10);
    }
    let cp = c as u32;
    [BENGALI_ZERO, ARABIC_INDIC_ZERO]
        .into_iter()
        .find(|&zero| (zero..zero + 10).contains(&cp))
        .map(|zero| cp - zero)
}
