//! Statistical language identification.

/// Sentinel code used when detection fails or the input is empty.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Detect the language of `text`, returning an ISO 639-1-style code.
///
/// Best-effort only: trigram detection is unreliable under ~20 characters,
/// so treat the result as a signal, not ground truth.
#[must_use]
pub fn detect_language(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return UNKNOWN_LANGUAGE.to_string();
    }
    match whatlang::detect(trimmed) {
        Some(info) => iso639_1(info.lang()).to_string(),
        None => UNKNOWN_LANGUAGE.to_string(),
    }
}

/// Map the detector's ISO 639-3 code onto the two-letter codes the rest of
/// the pipeline (and the feed configuration) speaks. Languages outside the
/// table keep their three-letter code.
fn iso639_1(lang: whatlang::Lang) -> &'static str {
    match lang.code() {
        "fra" => "fr",
        "eng" => "en",
        "spa" => "es",
        "deu" => "de",
        "ita" => "it",
        "por" => "pt",
        "nld" => "nl",
        "rus" => "ru",
        "pol" => "pl",
        "swe" => "sv",
        "tur" => "tr",
        "ara" => "ar",
        "cmn" => "zh",
        "jpn" => "ja",
        "kor" => "ko",
        code => code,
    }
}
