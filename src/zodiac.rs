//! Western zodiac signs, named in Vietnamese.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the twelve zodiac signs (cung hoàng đạo).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs, in calendar order starting from Aries.
    pub const ALL: [ZodiacSign; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Vietnamese name of the sign.
    pub fn name(&self) -> &'static str {
        use ZodiacSign::*;
        match self {
            Aries => "Bạch Dương",
            Taurus => "Kim Ngưu",
            Gemini => "Song Tử",
            Cancer => "Cự Giải",
            Leo => "Sư Tử",
            Virgo => "Xử Nữ",
            Libra => "Thiên Bình",
            Scorpio => "Bọ Cạp",
            Sagittarius => "Nhân Mã",
            Capricorn => "Ma Kết",
            Aquarius => "Bảo Bình",
            Pisces => "Song Ngư",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = Error;

    /// Accepts the Vietnamese name (case-insensitive) or the English name.
    ///
    /// ```
    /// use amlich::ZodiacSign;
    ///
    /// assert_eq!(Ok(ZodiacSign::Scorpio), "bọ cạp".parse().map_err(|_| ()));
    /// assert_eq!(Ok(ZodiacSign::Leo), "leo".parse().map_err(|_| ()));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|sign| {
                sign.name().to_lowercase() == wanted
                    || format!("{sign:?}").to_lowercase() == wanted
            })
            .ok_or_else(|| Error::UnknownZodiac(s.to_owned()))
    }
}

impl TryFrom<String> for ZodiacSign {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ZodiacSign> for String {
    fn from(sign: ZodiacSign) -> String {
        sign.name().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        for (i, a) in ZodiacSign::ALL.iter().enumerate() {
            for b in &ZodiacSign::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn parse_names() {
        for sign in ZodiacSign::ALL {
            assert_eq!(sign, sign.name().parse().unwrap());
            assert_eq!(sign, sign.to_string().to_uppercase().parse().unwrap());
        }
        assert_eq!(ZodiacSign::Capricorn, " Ma Kết ".parse().unwrap());
        assert!(matches!(
            "Rồng".parse::<ZodiacSign>(),
            Err(Error::UnknownZodiac(_))
        ));
    }
}
