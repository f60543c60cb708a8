//! Fixed directive for the explainer model
//!
//! The directive tells the explainer that the label is already decided and
//! that its only job is a short justification plus keywords, returned as a
//! single JSON object. The label is baked into the system message so the
//! explainer call can never run before the classifier has answered.

use sentimen_core::SentimentLabel;

/// System message fixing the explainer's role and output shape
pub fn system_directive(label: SentimentLabel) -> String {
    format!(
        r#"Kamu adalah modul PENJELAS untuk sistem analisis sentimen ulasan aplikasi SIREKAP.

Model utama (Multinomial Naive Bayes) SUDAH MENENTUKAN label sentimen ulasan.
Label final dari model utama adalah: "{label}" (Positif/Netral/Negatif).

Tugas kamu HANYA:
- Menjelaskan alasan (reason) kenapa ulasan ini masuk kategori tersebut
- Mengambil kata/frasa kunci penting (keywords) dari ulasan
- (Opsional) memberikan confidence versimu sendiri

ATURAN PENTING:
- Jangan mengubah label sentimen final.
- Jangan menulis apapun di luar JSON.

Format respons WAJIB:
{{
  "sentiment": "Positif" | "Netral" | "Negatif",
  "confidence": <angka 0-100>,
  "reason": "penjelasan singkat mengapa dikategorikan demikian",
  "keywords": ["kata1", "kata2", "kata3"]
}}"#
    )
}

/// User message carrying the original (unpreprocessed) review text
pub fn user_message(text: &str) -> String {
    format!(r#"Ulasan pengguna: "{text}". Jelaskan alasan dan daftar kata kunci."#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_carries_the_fixed_label() {
        let directive = system_directive(SentimentLabel::Negative);
        assert!(directive.contains(r#"Label final dari model utama adalah: "Negatif""#));
        assert!(directive.contains("Jangan mengubah label sentimen final."));
    }

    #[test]
    fn user_message_quotes_the_review() {
        let message = user_message("Aplikasi sangat membantu");
        assert!(message.contains(r#""Aplikasi sangat membantu""#));
    }
}
