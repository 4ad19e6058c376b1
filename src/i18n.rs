//! Page copy in the five languages the site ships, plus detection and
//! persistence of the visitor's choice.
//!
//! Strings live in one table keyed by short identifiers; `Translator::t`
//! returns the key itself when a lookup misses, so a typo shows up on the
//! page instead of crashing it.

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lang {
    Ru,
    En,
    Zh,
    Hi,
    Id,
}

impl Lang {
    pub const ALL: [Lang; 5] = [Lang::Ru, Lang::En, Lang::Zh, Lang::Hi, Lang::Id];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
            Lang::Zh => "zh",
            Lang::Hi => "hi",
            Lang::Id => "id",
        }
    }

    /// Maps a BCP 47 tag ("ru-RU", "zh-Hans-CN", legacy "in" for Indonesian)
    /// to a supported language. Anything unrecognized falls back to English.
    pub fn from_code(code: &str) -> Lang {
        let code = code.to_lowercase();
        if code.starts_with("ru") {
            Lang::Ru
        } else if code.starts_with("zh") {
            Lang::Zh
        } else if code.starts_with("hi") {
            Lang::Hi
        } else if code.starts_with("id") || code.starts_with("in") {
            Lang::Id
        } else {
            Lang::En
        }
    }

    /// The language's own name, shown in the switcher menu.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::Ru => "Русский",
            Lang::En => "English",
            Lang::Zh => "简体中文",
            Lang::Hi => "हिन्दी",
            Lang::Id => "Bahasa Indonesia",
        }
    }
}

/// Stored choice wins; otherwise the first browser-preferred language that
/// maps to something we ship.
pub fn initial_lang() -> Lang {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(config::LANG_STORAGE_KEY) {
                return Lang::from_code(&stored);
            }
        }
        let navigator = window.navigator();
        for code in navigator.languages().iter() {
            if let Some(code) = code.as_string() {
                return Lang::from_code(&code);
            }
        }
        if let Some(code) = navigator.language() {
            return Lang::from_code(&code);
        }
    }
    Lang::En
}

/// Persists the choice and mirrors it onto the root element. Storage may be
/// unavailable in private browsing; the page keeps working without it.
pub fn store_lang(lang: Lang) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(config::LANG_STORAGE_KEY, lang.code());
        }
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("lang", lang.code());
                let _ = root.set_attribute("dir", "ltr");
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct Translator {
    lang: Lang,
}

impl Translator {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn t(&self, key: &'static str) -> &'static str {
        match STRINGS.iter().find(|entry| entry.key == key) {
            Some(entry) => match self.lang {
                Lang::Ru => entry.ru,
                Lang::En => entry.en,
                Lang::Zh => entry.zh,
                Lang::Hi => entry.hi,
                Lang::Id => entry.id,
            },
            None => key,
        }
    }
}

struct Entry {
    key: &'static str,
    en: &'static str,
    ru: &'static str,
    zh: &'static str,
    hi: &'static str,
    id: &'static str,
}

const STRINGS: &[Entry] = &[
    Entry {
        key: "nav_wallets",
        en: "Wallets",
        ru: "Кошельки",
        zh: "钱包",
        hi: "वॉलेट",
        id: "Dompet",
    },
    Entry {
        key: "nav_how",
        en: "How it works",
        ru: "Как это работает",
        zh: "流程",
        hi: "यह कैसे काम करता है",
        id: "Cara kerja",
    },
    Entry {
        key: "nav_features",
        en: "Why us",
        ru: "Почему мы",
        zh: "为什么选我们",
        hi: "हम ही क्यों",
        id: "Kenapa kami",
    },
    Entry {
        key: "nav_form",
        en: "Get an offer",
        ru: "Получить оценку",
        zh: "获取报价",
        hi: "ऑफ़र पाएं",
        id: "Dapatkan penawaran",
    },
    Entry {
        key: "hero_badge_fast_estimate",
        en: "Estimate in minutes",
        ru: "Оценка за минуты",
        zh: "几分钟内估价",
        hi: "मिनटों में अनुमान",
        id: "Estimasi dalam hitungan menit",
    },
    Entry {
        key: "hero_title_1",
        en: "We buy back access to",
        ru: "Выкупаем доступ к",
        zh: "我们回购以下钱包的访问权",
        hi: "हम वापस खरीदते हैं",
        id: "Kami membeli kembali akses ke",
    },
    Entry {
        key: "hero_title_and",
        en: "and",
        ru: "и",
        zh: "和",
        hi: "और",
        id: "dan",
    },
    Entry {
        key: "hero_badge_safe",
        en: "No seed phrase ever asked",
        ru: "Сид-фраза не нужна",
        zh: "绝不索要助记词",
        hi: "सीड फ़्रेज़ कभी नहीं मांगा जाता",
        id: "Seed phrase tidak pernah diminta",
    },
    Entry {
        key: "hero_badge_fast_payout",
        en: "Payout within a day",
        ru: "Выплата в течение дня",
        zh: "一天内付款",
        hi: "एक दिन में भुगतान",
        id: "Pembayaran dalam sehari",
    },
    Entry {
        key: "hero_cta",
        en: "Get an offer",
        ru: "Получить предложение",
        zh: "获取报价",
        hi: "ऑफ़र पाएं",
        id: "Dapatkan penawaran",
    },
    Entry {
        key: "hero_scroll",
        en: "Scroll to see how it works",
        ru: "Листайте, чтобы узнать больше",
        zh: "向下滚动查看流程",
        hi: "आगे देखने के लिए स्क्रॉल करें",
        id: "Gulir untuk melihat caranya",
    },
    Entry {
        key: "seed_safety_hint",
        en: "Never share your seed phrase — we will not ask for it.",
        ru: "Никогда не сообщайте сид-фразу — мы её не запрашиваем.",
        zh: "切勿泄露助记词 — 我们不会索要。",
        hi: "अपना सीड फ़्रेज़ कभी साझा न करें — हम इसे नहीं मांगेंगे।",
        id: "Jangan pernah membagikan seed phrase — kami tidak akan memintanya.",
    },
    Entry {
        key: "form_fast_estimate",
        en: "Fast estimate",
        ru: "Быстрая оценка",
        zh: "快速估价",
        hi: "त्वरित अनुमान",
        id: "Estimasi cepat",
    },
    Entry {
        key: "form_pre_title",
        en: "Wallet pre-check",
        ru: "Предварительная проверка",
        zh: "钱包预检",
        hi: "वॉलेट प्री-चेक",
        id: "Pra-pemeriksaan dompet",
    },
    Entry {
        key: "minutes_short",
        en: "min",
        ru: "мин",
        zh: "分钟",
        hi: "मिनट",
        id: "mnt",
    },
    Entry {
        key: "form_network",
        en: "Network",
        ru: "Сеть",
        zh: "网络",
        hi: "नेटवर्क",
        id: "Jaringan",
    },
    Entry {
        key: "form_network_placeholder",
        en: "Select network",
        ru: "Выберите сеть",
        zh: "选择网络",
        hi: "नेटवर्क चुनें",
        id: "Pilih jaringan",
    },
    Entry {
        key: "form_network_other",
        en: "Other",
        ru: "Другая",
        zh: "其他",
        hi: "अन्य",
        id: "Lainnya",
    },
    Entry {
        key: "form_address_label",
        en: "Wallet address",
        ru: "Адрес кошелька",
        zh: "钱包地址",
        hi: "वॉलेट पता",
        id: "Alamat dompet",
    },
    Entry {
        key: "form_address_placeholder",
        en: "0x… or another public address",
        ru: "0x… или другой публичный адрес",
        zh: "0x… 或其他公开地址",
        hi: "0x… या कोई अन्य सार्वजनिक पता",
        id: "0x… atau alamat publik lain",
    },
    Entry {
        key: "form_contact_label",
        en: "Contact",
        ru: "Контакт",
        zh: "联系方式",
        hi: "संपर्क",
        id: "Kontak",
    },
    Entry {
        key: "form_contact_placeholder",
        en: "@telegram, e-mail or phone",
        ru: "@telegram, e-mail или телефон",
        zh: "@telegram、邮箱或电话",
        hi: "@telegram, ई-मेल या फ़ोन",
        id: "@telegram, e-mail atau telepon",
    },
    Entry {
        key: "form_desc_label",
        en: "Details",
        ru: "Детали",
        zh: "详情",
        hi: "विवरण",
        id: "Rincian",
    },
    Entry {
        key: "form_desc_placeholder",
        en: "What is inside, since when, anything else that matters",
        ru: "Что внутри, с какого времени, всё, что важно",
        zh: "里面有什么、持有多久、其他要点",
        hi: "अंदर क्या है, कब से, और जो भी ज़रूरी हो",
        id: "Apa isinya, sejak kapan, hal lain yang penting",
    },
    Entry {
        key: "form_owner_confirm",
        en: "I confirm that I own this wallet and the information above is accurate.",
        ru: "Подтверждаю, что являюсь владельцем кошелька и данные верны.",
        zh: "我确认本人拥有该钱包且以上信息属实。",
        hi: "मैं पुष्टि करता/करती हूं कि यह वॉलेट मेरा है और जानकारी सही है।",
        id: "Saya mengonfirmasi bahwa dompet ini milik saya dan informasi di atas akurat.",
    },
    Entry {
        key: "form_payouts_hint",
        en: "Payouts in USDT, ETH or the currency you prefer",
        ru: "Выплаты в USDT, ETH или удобной вам валюте",
        zh: "以 USDT、ETH 或您偏好的币种付款",
        hi: "USDT, ETH या आपकी पसंद की मुद्रा में भुगतान",
        id: "Pembayaran dalam USDT, ETH atau mata uang pilihan Anda",
    },
    Entry {
        key: "form_submit",
        en: "Request an estimate",
        ru: "Запросить оценку",
        zh: "申请估价",
        hi: "अनुमान का अनुरोध करें",
        id: "Minta estimasi",
    },
    Entry {
        key: "form_submit_short",
        en: "Send",
        ru: "Отправить",
        zh: "发送",
        hi: "भेजें",
        id: "Kirim",
    },
    Entry {
        key: "form_thanks",
        en: "Thanks! Your request is in — an evaluator will reach out shortly.",
        ru: "Спасибо! Заявка принята — оценщик скоро свяжется с вами.",
        zh: "谢谢！请求已收到，估价师将尽快联系您。",
        hi: "धन्यवाद! अनुरोध मिल गया — मूल्यांकक जल्द संपर्क करेंगे।",
        id: "Terima kasih! Permintaan diterima — penilai akan segera menghubungi Anda.",
    },
    Entry {
        key: "form_title_left",
        en: "Tell us about your wallet",
        ru: "Расскажите о своём кошельке",
        zh: "介绍一下您的钱包",
        hi: "अपने वॉलेट के बारे में बताएं",
        id: "Ceritakan tentang dompet Anda",
    },
    Entry {
        key: "form_subtitle_left",
        en: "Fill in the form and an evaluator replies with an offer, usually within a couple of hours.",
        ru: "Заполните форму — оценщик пришлёт предложение, обычно в течение пары часов.",
        zh: "填写表单，估价师通常会在几小时内给出报价。",
        hi: "फ़ॉर्म भरें — मूल्यांकक आमतौर पर कुछ घंटों में ऑफ़र भेजते हैं।",
        id: "Isi formulir dan penilai akan membalas dengan penawaran, biasanya dalam beberapa jam.",
    },
    Entry {
        key: "form_contacts_hint",
        en: "We reply on Telegram, e-mail or phone — whichever you leave.",
        ru: "Отвечаем в Telegram, по почте или телефону — как вам удобно.",
        zh: "我们会通过 Telegram、邮箱或电话回复您。",
        hi: "हम Telegram, ई-मेल या फ़ोन पर जवाब देते हैं — जो भी आप छोड़ें।",
        id: "Kami membalas lewat Telegram, e-mail atau telepon — mana saja yang Anda tinggalkan.",
    },
    Entry {
        key: "form_buyback_hint",
        en: "Buyback offers stay valid for 24 hours.",
        ru: "Предложение о выкупе действует 24 часа.",
        zh: "回购报价 24 小时内有效。",
        hi: "बायबैक ऑफ़र 24 घंटे तक मान्य रहता है।",
        id: "Penawaran buyback berlaku selama 24 jam.",
    },
    Entry {
        key: "feat_transparency_title",
        en: "Transparent terms",
        ru: "Прозрачные условия",
        zh: "条款透明",
        hi: "पारदर्शी शर्तें",
        id: "Ketentuan transparan",
    },
    Entry {
        key: "feat_transparency_text",
        en: "A written offer before any transfer, fixed once you accept. No hidden fees, no renegotiation mid-deal.",
        ru: "Письменное предложение до любых переводов, фиксируется после согласия. Без скрытых комиссий и пересмотров.",
        zh: "转账前提供书面报价，确认后即锁定。没有隐藏费用，交易中途不改价。",
        hi: "किसी भी ट्रांसफ़र से पहले लिखित ऑफ़र, स्वीकारते ही तय। कोई छिपा शुल्क नहीं।",
        id: "Penawaran tertulis sebelum transfer apa pun, terkunci begitu Anda setuju. Tanpa biaya tersembunyi.",
    },
    Entry {
        key: "feat_networks_title",
        en: "All major networks",
        ru: "Все основные сети",
        zh: "支持主流网络",
        hi: "सभी प्रमुख नेटवर्क",
        id: "Semua jaringan utama",
    },
    Entry {
        key: "feat_networks_text",
        en: "Ethereum, Solana, BNB Chain, Polygon, TON and more — one form covers them all.",
        ru: "Ethereum, Solana, BNB Chain, Polygon, TON и другие — одна форма для всех.",
        zh: "Ethereum、Solana、BNB Chain、Polygon、TON 等 — 一张表单全部覆盖。",
        hi: "Ethereum, Solana, BNB Chain, Polygon, TON और अधिक — एक ही फ़ॉर्म सबके लिए।",
        id: "Ethereum, Solana, BNB Chain, Polygon, TON dan lainnya — satu formulir untuk semuanya.",
    },
    Entry {
        key: "feat_fast_payout_title",
        en: "Fast payout",
        ru: "Быстрая выплата",
        zh: "快速付款",
        hi: "तेज़ भुगतान",
        id: "Pembayaran cepat",
    },
    Entry {
        key: "feat_fast_payout_text",
        en: "Funds leave our side the same day the handover is verified, in the currency you pick.",
        ru: "Средства уходят в день подтверждения передачи, в выбранной вами валюте.",
        zh: "移交核验当天即付款，币种由您选择。",
        hi: "हैंडओवर सत्यापित होते ही उसी दिन आपकी चुनी मुद्रा में भुगतान।",
        id: "Dana dikirim pada hari serah terima diverifikasi, dalam mata uang pilihan Anda.",
    },
    Entry {
        key: "step_label",
        en: "Step",
        ru: "Шаг",
        zh: "第",
        hi: "चरण",
        id: "Langkah",
    },
    Entry {
        key: "step_01",
        en: "Submit the form",
        ru: "Отправьте форму",
        zh: "提交表单",
        hi: "फ़ॉर्म भेजें",
        id: "Kirim formulir",
    },
    Entry {
        key: "step_01_text",
        en: "Network, public address and a way to reach you — that is all we need to start.",
        ru: "Сеть, публичный адрес и контакт — больше ничего не нужно для начала.",
        zh: "网络、公开地址和联系方式 — 这就够了。",
        hi: "नेटवर्क, सार्वजनिक पता और संपर्क — शुरू करने के लिए बस इतना ही।",
        id: "Jaringan, alamat publik dan cara menghubungi Anda — itu saja untuk memulai.",
    },
    Entry {
        key: "step_02",
        en: "Get an estimate",
        ru: "Получите оценку",
        zh: "获取估价",
        hi: "अनुमान पाएं",
        id: "Terima estimasi",
    },
    Entry {
        key: "step_02_text",
        en: "An evaluator reviews the wallet from public data only and sends a written offer.",
        ru: "Оценщик изучает кошелёк только по публичным данным и присылает письменное предложение.",
        zh: "估价师仅依据公开数据评估并发送书面报价。",
        hi: "मूल्यांकक केवल सार्वजनिक डेटा से वॉलेट जांचते हैं और लिखित ऑफ़र भेजते हैं।",
        id: "Penilai meninjau dompet hanya dari data publik dan mengirim penawaran tertulis.",
    },
    Entry {
        key: "step_03",
        en: "Confirm the deal",
        ru: "Подтвердите сделку",
        zh: "确认交易",
        hi: "सौदे की पुष्टि करें",
        id: "Konfirmasi kesepakatan",
    },
    Entry {
        key: "step_03_text",
        en: "Agree on the terms and the handover procedure over your preferred channel.",
        ru: "Согласуйте условия и порядок передачи в удобном вам канале.",
        zh: "通过您偏好的渠道确认条款与移交流程。",
        hi: "अपनी पसंद के चैनल पर शर्तें और हैंडओवर तय करें।",
        id: "Sepakati ketentuan dan prosedur serah terima lewat kanal pilihan Anda.",
    },
    Entry {
        key: "step_04",
        en: "Receive the payout",
        ru: "Получите выплату",
        zh: "收到付款",
        hi: "भुगतान पाएं",
        id: "Terima pembayaran",
    },
    Entry {
        key: "step_04_text",
        en: "Once the handover is verified, the agreed amount is sent the same day.",
        ru: "После подтверждения передачи согласованная сумма уходит в тот же день.",
        zh: "移交核验后，约定金额当天到账。",
        hi: "हैंडओवर सत्यापित होते ही तय राशि उसी दिन भेज दी जाती है।",
        id: "Setelah serah terima diverifikasi, jumlah yang disepakati dikirim hari itu juga.",
    },
    Entry {
        key: "footer_tagline",
        en: "wallet evaluation & buyback",
        ru: "оценка и выкуп кошельков",
        zh: "钱包评估与回购",
        hi: "वॉलेट मूल्यांकन और बायबैक",
        id: "evaluasi & buyback dompet",
    },
];

#[cfg(test)]
mod tests {
    use super::{Lang, Translator, STRINGS};

    #[test]
    fn codes_map_by_prefix() {
        assert_eq!(Lang::from_code("ru-RU"), Lang::Ru);
        assert_eq!(Lang::from_code("zh-Hans-CN"), Lang::Zh);
        assert_eq!(Lang::from_code("hi"), Lang::Hi);
        assert_eq!(Lang::from_code("id-ID"), Lang::Id);
        assert_eq!(Lang::from_code("in"), Lang::Id);
        assert_eq!(Lang::from_code("en-GB"), Lang::En);
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        assert_eq!(Lang::from_code("fr"), Lang::En);
        assert_eq!(Lang::from_code(""), Lang::En);
        assert_eq!(Lang::from_code("xx-YY"), Lang::En);
    }

    #[test]
    fn code_round_trips() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn known_keys_translate_per_language() {
        assert_eq!(Translator::new(Lang::En).t("form_network"), "Network");
        assert_eq!(Translator::new(Lang::Ru).t("form_network"), "Сеть");
        assert_ne!(
            Translator::new(Lang::Zh).t("form_submit"),
            Translator::new(Lang::En).t("form_submit")
        );
    }

    #[test]
    fn missing_keys_fall_back_to_the_key() {
        assert_eq!(Translator::new(Lang::En).t("no_such_key"), "no_such_key");
    }

    #[test]
    fn every_entry_is_filled_for_every_language() {
        for entry in STRINGS {
            for text in [entry.en, entry.ru, entry.zh, entry.hi, entry.id] {
                assert!(!text.is_empty(), "untranslated key: {}", entry.key);
            }
        }
    }
}
