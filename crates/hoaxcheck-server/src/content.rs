//! User-facing copy shown by the web UI and the CLI

use hoaxcheck_core::Domain;
use serde::Serialize;

pub const PAGE_TITLE: &str = "📰 Identifikasi Berita & Sosmed Hoax";

/// Global disclaimer shown above both detection tabs
pub const DISCLAIMER: &str = "PENTING (DISCLAIMER): Sistem ini dibangun untuk membantu \
mengidentifikasi potensi hoax berdasarkan pola bahasa. Hasil prediksi model bukanlah klaim \
kebenaran mutlak.";

pub const FOOTER: &str = "© 2026 Muhamad Rizal Rifaldi | Sistem Identifikasi Hoax Berbasis Naive Bayes";

/// Per-result note embedding the confidence percentage
pub fn result_note(confidence_percent: &str) -> String {
    format!(
        "*Catatan: Skor {confidence_percent}% menunjukkan tingkat kemiripan teks dengan pola data \
         yang dipelajari model. Hasil ini tidak dapat dijadikan satu-satunya bukti hukum tanpa \
         verifikasi lebih lanjut."
    )
}

/// Warning shown when detection is triggered with blank input
pub fn empty_input_warning(domain: Domain) -> &'static str {
    match domain {
        Domain::News => "⚠️ Masukkan teks berita terlebih dahulu.",
        Domain::Social => "⚠️ Masukkan teks postingan terlebih dahulu.",
    }
}

/// Copy for one detection tab
#[derive(Debug, Clone, Serialize)]
pub struct TabCopy {
    pub domain: Domain,
    pub tab_label: &'static str,
    pub description: &'static str,
    pub input_label: &'static str,
    pub button_label: &'static str,
    pub busy_message: &'static str,
}

pub fn tab_copy(domain: Domain) -> TabCopy {
    match domain {
        Domain::News => TabCopy {
            domain,
            tab_label: "📰 Analisis Berita",
            description: "Analisis teks artikel atau berita daring dengan narasi yang panjang.",
            input_label: "Masukkan Teks Berita:",
            button_label: "🚀 Deteksi Berita",
            busy_message: "Menganalisis pola berita...",
        },
        Domain::Social => TabCopy {
            domain,
            tab_label: "📱 Analisis Media Sosial",
            description: "Analisis teks pendek seperti caption Instagram, tweet, atau broadcast WhatsApp.",
            input_label: "Masukkan Teks Sosmed:",
            button_label: "🚀 Deteksi Sosmed",
            busy_message: "Menganalisis pola bahasa sosmed...",
        },
    }
}

/// Everything the page needs besides detection results
#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    pub title: &'static str,
    pub disclaimer: &'static str,
    pub tabs: Vec<TabCopy>,
    pub footer: &'static str,
}

impl PageInfo {
    pub fn current() -> Self {
        Self {
            title: PAGE_TITLE,
            disclaimer: DISCLAIMER,
            tabs: Domain::ALL.into_iter().map(tab_copy).collect(),
            footer: FOOTER,
        }
    }
}
