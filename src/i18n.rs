//! UI Translations
//!
//! Static English / Hindi / Gujarati strings for every dashboard section.
//! Record text (schemes, tips, alerts) comes localized from the backend.

use crate::models::Language;

pub struct HeaderText {
    pub welcome: &'static str,
    pub logout: &'static str,
    pub open_menu: &'static str,
    pub language: &'static str,
}

pub struct SidebarText {
    pub menu: &'static str,
    pub close: &'static str,
    /// Home, Profile, Chat, Weather Alerts, Equipment Rentals,
    /// Govt Schemes, Farming Tips, Crops Info, Notifications
    pub items: [&'static str; 9],
}

pub struct ChatText {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub send: &'static str,
    pub greeting: &'static str,
    pub thinking: &'static str,
    pub listen: &'static str,
    pub stop_listening: &'static str,
    pub speak: &'static str,
    pub stop_speaking: &'static str,
    pub clear: &'static str,
    pub error: &'static str,
    pub speech_unsupported: &'static str,
    pub speech_failed: &'static str,
}

pub struct WeatherText {
    pub title: &'static str,
    pub refresh: &'static str,
    pub loading: &'static str,
    pub no_alerts: &'static str,
    pub error: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub wind: &'static str,
    pub rainfall: &'static str,
}

pub struct SchemesText {
    pub title: &'static str,
    pub apply: &'static str,
    pub eligibility: &'static str,
    pub benefits: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub error: &'static str,
}

pub struct TipsText {
    pub title: &'static str,
    pub read_more: &'static str,
    pub show_less: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub error: &'static str,
    /// (backend category value, label); empty value means "all"
    pub categories: [(&'static str, &'static str); 5],
}

pub struct MandiText {
    pub title: &'static str,
    pub commodity: &'static str,
    pub market: &'static str,
    pub price: &'static str,
    pub min: &'static str,
    pub max: &'static str,
    pub modal: &'static str,
    pub no_data: &'static str,
    pub no_data_hint: &'static str,
    pub try_hint: &'static str,
    pub error: &'static str,
    pub loading: &'static str,
    pub refresh: &'static str,
}

pub struct LandingText {
    pub title: &'static str,
    pub tagline: &'static str,
    pub go: &'static str,
}

pub struct Translations {
    pub header: HeaderText,
    pub sidebar: SidebarText,
    pub chat: ChatText,
    pub weather: WeatherText,
    pub schemes: SchemesText,
    pub tips: TipsText,
    pub mandi: MandiText,
    pub landing: LandingText,
}

/// Strings for the given language
pub fn t(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Gu => &GU,
    }
}

static EN: Translations = Translations {
    header: HeaderText {
        welcome: "Welcome back, Farmer!",
        logout: "Logout",
        open_menu: "Open menu",
        language: "Language",
    },
    sidebar: SidebarText {
        menu: "Menu",
        close: "Close",
        items: [
            "Home",
            "Profile",
            "Chat",
            "Weather Alerts",
            "Equipment Rentals",
            "Govt Schemes",
            "Farming Tips",
            "Crops Info",
            "Notifications",
        ],
    },
    chat: ChatText {
        title: "AI Chat Assistant",
        placeholder: "Ask about farming...",
        send: "Send",
        greeting: "Hello! I'm your AI farming assistant. Ask me anything about crops, weather, or farming practices.",
        thinking: "Thinking...",
        listen: "Speak your question",
        stop_listening: "Stop listening",
        speak: "Read last answer aloud",
        stop_speaking: "Stop reading",
        clear: "Clear chat",
        error: "Could not get a reply. Please try again.",
        speech_unsupported: "Voice features are not supported in this browser.",
        speech_failed: "Voice feature failed.",
    },
    weather: WeatherText {
        title: "Weather Alerts",
        refresh: "Refresh",
        loading: "Loading alerts...",
        no_alerts: "No weather alerts for your area.",
        error: "Failed to fetch weather alerts.",
        temperature: "Temp",
        humidity: "Humidity",
        wind: "Wind",
        rainfall: "Rain",
    },
    schemes: SchemesText {
        title: "Government Schemes",
        apply: "Apply Now",
        eligibility: "Eligibility",
        benefits: "Benefits",
        loading: "Loading schemes...",
        empty: "No schemes available right now.",
        error: "Failed to fetch schemes.",
    },
    tips: TipsText {
        title: "Farming Tips",
        read_more: "Read More",
        show_less: "Show Less",
        loading: "Loading tips...",
        empty: "No tips in this category yet.",
        error: "Failed to fetch farming tips.",
        categories: [
            ("", "All"),
            ("crop", "Crops"),
            ("soil", "Soil"),
            ("water", "Water"),
            ("pest", "Pests"),
        ],
    },
    mandi: MandiText {
        title: "Live Mandi Prices",
        commodity: "Select Commodity",
        market: "Market",
        price: "Price (₹/Qtl.)",
        min: "Min",
        max: "Max",
        modal: "Modal",
        no_data: "No data available for this commodity. Try another one.",
        no_data_hint: "Try selecting a different commodity",
        try_hint: "Try: Potato, Tomato, Onion",
        error: "Failed to fetch market prices.",
        loading: "Loading prices...",
        refresh: "Refresh",
    },
    landing: LandingText {
        title: "Educating Farmer",
        tagline: "Empowering Indian farmers with AI-powered tools and practical guidance",
        go: "Go to Dashboard",
    },
};

static HI: Translations = Translations {
    header: HeaderText {
        welcome: "स्वागत है, किसान!",
        logout: "लॉग आउट",
        open_menu: "मेनू खोलें",
        language: "भाषा",
    },
    sidebar: SidebarText {
        menu: "मेनू",
        close: "बंद करें",
        items: [
            "होम",
            "प्रोफाइल",
            "चैट",
            "मौसम चेतावनी",
            "उपकरण किराया",
            "सरकारी योजनाएं",
            "खेती टिप्स",
            "फसल जानकारी",
            "सूचनाएं",
        ],
    },
    chat: ChatText {
        title: "AI चैट सहायक",
        placeholder: "खेती के बारे में पूछें...",
        send: "भेजें",
        greeting: "नमस्ते! मैं आपका AI खेती सहायक हूं। फसल, मौसम या खेती के बारे में कुछ भी पूछें।",
        thinking: "सोच रहा हूं...",
        listen: "अपना प्रश्न बोलें",
        stop_listening: "सुनना बंद करें",
        speak: "आखिरी उत्तर सुनें",
        stop_speaking: "पढ़ना बंद करें",
        clear: "चैट साफ करें",
        error: "उत्तर नहीं मिल सका। कृपया फिर से प्रयास करें।",
        speech_unsupported: "इस ब्राउज़र में आवाज़ सुविधाएं उपलब्ध नहीं हैं।",
        speech_failed: "आवाज़ सुविधा विफल रही।",
    },
    weather: WeatherText {
        title: "मौसम चेतावनी",
        refresh: "रिफ्रेश",
        loading: "चेतावनियां लोड हो रही हैं...",
        no_alerts: "आपके क्षेत्र के लिए कोई मौसम चेतावनी नहीं है।",
        error: "मौसम चेतावनी लाने में विफल।",
        temperature: "तापमान",
        humidity: "नमी",
        wind: "हवा",
        rainfall: "वर्षा",
    },
    schemes: SchemesText {
        title: "सरकारी योजनाएं",
        apply: "अभी आवेदन करें",
        eligibility: "पात्रता",
        benefits: "लाभ",
        loading: "योजनाएं लोड हो रही हैं...",
        empty: "अभी कोई योजना उपलब्ध नहीं है।",
        error: "योजनाएं लाने में विफल।",
    },
    tips: TipsText {
        title: "खेती टिप्स",
        read_more: "और पढ़ें",
        show_less: "कम दिखाएं",
        loading: "टिप्स लोड हो रहे हैं...",
        empty: "इस श्रेणी में अभी कोई टिप नहीं है।",
        error: "खेती टिप्स लाने में विफल।",
        categories: [
            ("", "सभी"),
            ("crop", "फसल"),
            ("soil", "मिट्टी"),
            ("water", "पानी"),
            ("pest", "कीट"),
        ],
    },
    mandi: MandiText {
        title: "लाइव मंडी भाव",
        commodity: "फसल चुनें",
        market: "मंडी",
        price: "मूल्य (₹/क्विंटल)",
        min: "न्यूनतम",
        max: "अधिकतम",
        modal: "औसत",
        no_data: "इस फसल के लिए कोई डेटा उपलब्ध नहीं है। दूसरी फसल चुनें।",
        no_data_hint: "दूसरी फसल चुनकर देखें",
        try_hint: "आज़माएं: आलू, टमाटर, प्याज",
        error: "बाजार मूल्य लाने में विफल।",
        loading: "कीमतें लोड हो रही हैं...",
        refresh: "रिफ्रेश",
    },
    landing: LandingText {
        title: "शिक्षित किसान",
        tagline: "AI-संचालित साधनों और व्यावहारिक मार्गदर्शन से भारतीय किसानों को सशक्त बनाना",
        go: "डैशबोर्ड पर जाएं",
    },
};

static GU: Translations = Translations {
    header: HeaderText {
        welcome: "સ્વાગત છે, ખેડૂત!",
        logout: "લૉગ આઉટ",
        open_menu: "મેનૂ ખોલો",
        language: "ભાષા",
    },
    sidebar: SidebarText {
        menu: "મેનૂ",
        close: "બંધ કરો",
        items: [
            "હોમ",
            "પ્રોફાઇલ",
            "ચેટ",
            "હવામાન ચેતવણીઓ",
            "સાધન ભાડે",
            "સરકારી યોજનાઓ",
            "ખેતી ટીપ્સ",
            "પાક માહિતી",
            "સૂચનાઓ",
        ],
    },
    chat: ChatText {
        title: "AI ચેટ સહાયક",
        placeholder: "ખેતી વિશે પૂછો...",
        send: "મોકલો",
        greeting: "નમસ્તે! હું તમારો AI ખેતી સહાયક છું. પાક, હવામાન અથવા ખેતી વિશે કંઈપણ પૂછો.",
        thinking: "વિચારી રહ્યો છું...",
        listen: "તમારો પ્રશ્ન બોલો",
        stop_listening: "સાંભળવાનું બંધ કરો",
        speak: "છેલ્લો જવાબ સાંભળો",
        stop_speaking: "વાંચવાનું બંધ કરો",
        clear: "ચેટ સાફ કરો",
        error: "જવાબ મળી શક્યો નથી. કૃપા કરી ફરી પ્રયાસ કરો.",
        speech_unsupported: "આ બ્રાઉઝરમાં અવાજ સુવિધાઓ ઉપલબ્ધ નથી.",
        speech_failed: "અવાજ સુવિધા નિષ્ફળ ગઈ.",
    },
    weather: WeatherText {
        title: "હવામાન ચેતવણીઓ",
        refresh: "રિફ્રેશ",
        loading: "ચેતવણીઓ લોડ થઈ રહી છે...",
        no_alerts: "તમારા વિસ્તાર માટે કોઈ હવામાન ચેતવણી નથી.",
        error: "હવામાન ચેતવણીઓ મેળવવામાં નિષ્ફળ.",
        temperature: "તાપમાન",
        humidity: "ભેજ",
        wind: "પવન",
        rainfall: "વરસાદ",
    },
    schemes: SchemesText {
        title: "સરકારી યોજનાઓ",
        apply: "હમણાં અરજી કરો",
        eligibility: "પાત્રતા",
        benefits: "લાભો",
        loading: "યોજનાઓ લોડ થઈ રહી છે...",
        empty: "હાલમાં કોઈ યોજના ઉપલબ્ધ નથી.",
        error: "યોજનાઓ મેળવવામાં નિષ્ફળ.",
    },
    tips: TipsText {
        title: "ખેતી ટીપ્સ",
        read_more: "વધુ વાંચો",
        show_less: "ઓછું બતાવો",
        loading: "ટીપ્સ લોડ થઈ રહી છે...",
        empty: "આ શ્રેણીમાં હજી કોઈ ટીપ નથી.",
        error: "ખેતી ટીપ્સ મેળવવામાં નિષ્ફળ.",
        categories: [
            ("", "બધા"),
            ("crop", "પાક"),
            ("soil", "જમીન"),
            ("water", "પાણી"),
            ("pest", "જીવાત"),
        ],
    },
    mandi: MandiText {
        title: "લાઇવ મંડી ભાવ",
        commodity: "પાક પસંદ કરો",
        market: "માર્કેટ",
        price: "કિંમત (₹/ક્વિન્ટલ)",
        min: "ન્યૂનતમ",
        max: "મહત્તમ",
        modal: "સરેરાશ",
        no_data: "આ પાક માટે કોઈ ડેટા ઉપલબ્ધ નથી. બીજો પાક અજમાવો.",
        no_data_hint: "બીજો પાક પસંદ કરી જુઓ",
        try_hint: "અજમાવો: બટાકા, ટામેટા, ડુંગળી",
        error: "બજાર ભાવ મેળવવામાં નિષ્ફળ.",
        loading: "કિંમતો લોડ થઈ રહી છે...",
        refresh: "રિફ્રેશ કરો",
    },
    landing: LandingText {
        title: "શિક્ષિત ખેડૂત",
        tagline: "AI-આધારિત સાધનો અને વ્યવહારુ માર્ગદર્શન દ્વારા ભારતીય ખેડૂતોને સશક્ત બનાવવા",
        go: "ડેશબોર્ડ પર જાઓ",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_text() {
        for lang in Language::ALL {
            let tr = t(lang);
            assert!(!tr.chat.greeting.is_empty());
            assert!(!tr.mandi.title.is_empty());
            assert!(tr.sidebar.items.iter().all(|item| !item.is_empty()));
            assert_eq!(tr.tips.categories[0].0, "");
        }
    }

    #[test]
    fn test_languages_differ() {
        assert_ne!(t(Language::En).chat.greeting, t(Language::Hi).chat.greeting);
        assert_ne!(t(Language::Hi).weather.title, t(Language::Gu).weather.title);
        assert_eq!(t(Language::Hi).schemes.apply, "अभी आवेदन करें");
    }

    #[test]
    fn test_category_values_shared() {
        let en: Vec<_> = t(Language::En).tips.categories.iter().map(|(v, _)| *v).collect();
        for lang in [Language::Hi, Language::Gu] {
            let other: Vec<_> = t(lang).tips.categories.iter().map(|(v, _)| *v).collect();
            assert_eq!(en, other);
        }
    }
}
