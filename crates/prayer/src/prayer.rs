//! The five daily prayers plus sunrise, and auxiliary schedule entries.

/// A countdown target in the daily schedule, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All targets in schedule order. Ties in the next-prayer search resolve
    /// to the earliest entry of this list.
    pub const ALL: [Self; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// Position in [`Prayer::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The entry before this one, wrapping from Fajr to Isha.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Key used by prayer-time providers and config files.
    pub fn key(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }

    pub fn arabic_name(self) -> &'static str {
        match self {
            Self::Fajr => "الفجر",
            Self::Sunrise => "الشروق",
            Self::Dhuhr => "الظهر",
            Self::Asr => "العصر",
            Self::Maghrib => "المغرب",
            Self::Isha => "العشاء",
        }
    }

    pub fn bengali_name(self) -> &'static str {
        match self {
            Self::Fajr => "ফজর",
            Self::Sunrise => "সূর্যোদয়",
            Self::Dhuhr => "যোহর",
            Self::Asr => "আসর",
            Self::Maghrib => "মাগরিব",
            Self::Isha => "ইশা",
        }
    }
}

/// Schedule entries that are displayed but never counted down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuxiliaryTime {
    Imsak,
    Sunset,
    Midnight,
}

impl AuxiliaryTime {
    pub const ALL: [Self; 3] = [Self::Imsak, Self::Sunset, Self::Midnight];

    pub fn key(self) -> &'static str {
        match self {
            Self::Imsak => "Imsak",
            Self::Sunset => "Sunset",
            Self::Midnight => "Midnight",
        }
    }

    pub fn arabic_name(self) -> &'static str {
        match self {
            Self::Imsak => "الإمساك",
            Self::Sunset => "الغروب",
            Self::Midnight => "منتصف الليل",
        }
    }

    pub fn bengali_name(self) -> &'static str {
        match self {
            Self::Imsak => "ইমসাক",
            Self::Sunset => "সূর্যাস্ত",
            Self::Midnight => "মধ্যরাত",
        }
    }
}
