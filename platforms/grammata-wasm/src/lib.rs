use wasm_bindgen::prelude::*;
use grammata_parser::{assemble_book, AssemblyOptions};
use grammata_protocol::{Book, Gematria};
use serde::Serialize;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Summary handed to the JavaScript side next to the verses.
#[derive(Serialize)]
pub struct BookReport {
    pub book: Book,
    pub verse_count: usize,
    pub word_count: usize,
    pub colophon_verses: Vec<String>,
    pub gematria: Gematria,
}

impl BookReport {
    pub fn new(book: Book) -> Self {
        let word_count = book.verses.iter().map(|v| v.words.len()).sum();
        let colophon_verses = book
            .verses
            .iter()
            .filter(|v| v.has_colophon())
            .map(|v| format!("{}:{}", v.chapter, v.verse))
            .collect();
        let gematria = book.verses.iter().map(|v| &v.gematria).sum();
        Self {
            verse_count: book.verses.len(),
            word_count,
            colophon_verses,
            gematria,
            book,
        }
    }
}

/// Text -> Verses -> JS object
#[wasm_bindgen(js_name = parseBook)]
pub fn parse_book(id: &str, text: &str, letters: bool) -> Result<JsValue, JsValue> {
    let book = assemble_book(id, text, AssemblyOptions { letter_breakdown: letters });
    Ok(serde_wasm_bindgen::to_value(&BookReport::new(book))?)
}

#[wasm_bindgen]
pub fn gematria(text: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&grammata_script::compute(text))?)
}

#[wasm_bindgen]
pub fn transliterate(text: &str) -> String {
    grammata_script::transliterate(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let text = "1:1 paulov 3972 {N-NSM} 16:27 amhn 281 {HEB} | [prov] 4314 {PREP} rwmaiouv 4514 {A-APM}";
        let report = BookReport::new(assemble_book("ROM", text, AssemblyOptions::default()));

        assert_eq!(report.verse_count, 2);
        assert_eq!(report.word_count, 4);
        assert_eq!(report.colophon_verses, ["16:27"]);
        assert_eq!(report.gematria, grammata_script::compute("παυλος αμην ρωμαιους"));
    }
}
