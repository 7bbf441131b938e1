//! Daily wisdom: a short piece of advice for a day, written by a text
//! generation service.
//!
//! The service itself lives outside this crate behind [`WisdomSource`]; this
//! module only builds the prompt and decides what to show when the service
//! fails or answers with nothing.

use tracing::{debug, warn};

use crate::error::Result;
use crate::grid::DayInfo;
use crate::zodiac::ZodiacSign;

/// Shown when the source fails.
pub const FALLBACK_ON_ERROR: &str = "Tâm an vạn sự an. Chúc bạn một ngày tốt lành.";

/// Generates text for a prompt.
pub trait WisdomSource {
    fn generate(&self, prompt: &str) -> Result<String>;
}

impl<F> WisdomSource for F
where
    F: Fn(&str) -> Result<String>,
{
    fn generate(&self, prompt: &str) -> Result<String> {
        self(prompt)
    }
}

/// Builds the prompt asking for advice about `day`.
///
/// # Example
///
/// ```
/// use amlich::{Date, DayInfo, ZodiacSign, wisdom_prompt};
///
/// let date = Date::from_gregorian(2025, 2, 12).unwrap();
/// let prompt = wisdom_prompt(&DayInfo::new(date, date), Some(ZodiacSign::Leo));
///
/// assert!(prompt.contains("Dương lịch: 12/2/2025."));
/// assert!(prompt.contains("Âm lịch: 15/1/2025 (Ất Tỵ)."));
/// assert!(prompt.contains("Sư Tử"));
/// ```
pub fn wisdom_prompt(day: &DayInfo, zodiac: Option<ZodiacSign>) -> String {
    let mut prompt = String::from("Bạn là một chuyên gia văn hóa, tử vi và phong thủy.\n");
    prompt += &format!("Hôm nay là Dương lịch: {}.\n", day.solar);
    prompt += &format!("Âm lịch: {} ({}).\n", day.lunar, day.can_chi);
    if let Some(sign) = zodiac {
        prompt += &format!("Người xem thuộc cung hoàng đạo: {sign}.\n");
    }
    prompt += "\nHãy cho tôi một lời khuyên ngắn gọn (dưới 60 từ) về vận trình, \
               những việc nên làm hoặc cần tránh trong ngày hôm nay.\n";
    if let Some(sign) = zodiac {
        prompt += &format!(
            "Hãy kết hợp phong thủy ngày âm lịch với tính cách/vận hạn của cung {sign} \
             để đưa ra lời khuyên cụ thể hơn.\n"
        );
    }
    prompt += "Văn phong chiêm nghiệm, nhẹ nhàng, sâu sắc. Chỉ trả về nội dung lời khuyên.";
    prompt
}

/// Shown when the source answers with blank text.
pub fn fallback_blessing(zodiac: Option<ZodiacSign>) -> String {
    let who = zodiac.map_or("bạn", |sign| sign.name());
    format!("Chúc cung {who} một ngày an lành và hạnh phúc.")
}

/// Asks `source` for the advice of `day`. Never fails: errors and blank
/// answers are replaced by a fallback text.
pub fn daily_wisdom<S>(source: &S, day: &DayInfo, zodiac: Option<ZodiacSign>) -> String
where
    S: WisdomSource + ?Sized,
{
    let prompt = wisdom_prompt(day, zodiac);
    debug!(date = %day.solar, "requesting daily wisdom");
    match source.generate(&prompt) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_owned(),
        Ok(_) => fallback_blessing(zodiac),
        Err(e) => {
            warn!(error = %e, "error fetching wisdom");
            FALLBACK_ON_ERROR.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;
    use crate::error::Error;

    fn sample_day() -> DayInfo {
        let date = Date::from_gregorian(2025, 1, 29).unwrap();
        DayInfo::new(date, date)
    }

    #[test]
    fn prompt_without_zodiac() {
        let prompt = wisdom_prompt(&sample_day(), None);
        assert!(prompt.contains("Dương lịch: 29/1/2025."));
        assert!(prompt.contains("Âm lịch: 1/1/2025 (Ất Tỵ)."));
        assert!(!prompt.contains("cung hoàng đạo"));
        assert!(prompt.contains("dưới 60 từ"));
    }

    #[test]
    fn answer_is_trimmed() {
        let source = |_: &str| -> Result<String> { Ok("  Hãy bình tĩnh.\n".to_owned()) };
        assert_eq!("Hãy bình tĩnh.", daily_wisdom(&source, &sample_day(), None));
    }

    #[test]
    fn prompt_reaches_source() {
        let source = |prompt: &str| -> Result<String> { Ok(prompt.lines().nth(1).unwrap_or_default().to_owned()) };
        assert_eq!(
            "Hôm nay là Dương lịch: 29/1/2025.",
            daily_wisdom(&source, &sample_day(), None)
        );
    }

    #[test]
    fn blank_answer() {
        let source = |_: &str| -> Result<String> { Ok("   ".to_owned()) };
        assert_eq!(
            "Chúc cung Ma Kết một ngày an lành và hạnh phúc.",
            daily_wisdom(&source, &sample_day(), Some(ZodiacSign::Capricorn))
        );
        assert_eq!(
            "Chúc cung bạn một ngày an lành và hạnh phúc.",
            daily_wisdom(&source, &sample_day(), None)
        );
    }

    #[test]
    fn failing_source() {
        let source = |_: &str| -> Result<String> { Err(Error::Wisdom("quota exceeded".to_owned())) };
        assert_eq!(FALLBACK_ON_ERROR, daily_wisdom(&source, &sample_day(), None));
    }
}
