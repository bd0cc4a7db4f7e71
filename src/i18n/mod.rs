//! i18n - Internationalization Module
//!
//! Static translation table (English and Serbian) with HashMap-based
//! lookups, plus the page-title table. Keys are dot-namespaced after the
//! page sections they belong to.

pub mod localizer;

use std::sync::OnceLock;

use ahash::AHashMap;

/// Supported languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    /// English
    #[default]
    En,
    /// Serbian
    Sr,
}

impl Lang {
    /// Two-letter code as persisted and mirrored on the root element
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Sr => "sr",
        }
    }

    /// Uppercased code shown on the toggle control
    pub fn label(&self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Sr => "SR",
        }
    }

    /// Parse a persisted code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Lang::En),
            "sr" => Some(Lang::Sr),
            _ => None,
        }
    }

    /// The other language (binary cycle)
    pub fn toggled(&self) -> Self {
        match self {
            Lang::En => Lang::Sr,
            Lang::Sr => Lang::En,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<AHashMap<&'static str, (&'static str, &'static str)>> =
    OnceLock::new();

/// Initialize translations (key -> (en, sr))
fn init_translations() -> AHashMap<&'static str, (&'static str, &'static str)> {
    let mut map = AHashMap::new();

    // Navigation
    map.insert("nav.home", ("Home", "Početna"));
    map.insert("nav.services", ("Services", "Usluge"));
    map.insert("nav.about", ("About", "O nama"));
    map.insert("nav.contact", ("Contact", "Kontakt"));

    // Hero section
    map.insert("hero.badge", ("Innovations in Finance", "Inovacije u Finansijama"));
    map.insert("hero.title1", ("We Build", "Razvijamo"));
    map.insert("hero.title2", ("Financial Technology", "Finansijsku Tehnologiju"));
    map.insert("hero.title3", ("Of the Future", "Budućnosti"));
    map.insert("hero.description", (
        "Expert software engineering for fintech, banking, and enterprise solutions. We transform complex financial challenges into elegant, scalable technology.",
        "Ekspertsko softversko inženjerstvo za fintech, bankarstvo i enterprise rešenja. Transformišemo kompleksne finansijske izazove u elegantnu, skalabilnu tehnologiju.",
    ));
    map.insert("hero.cta1", ("Start a Project", "Započni Projekat"));
    map.insert("hero.cta2", ("Our Expertise", "Naša Ekspertiza"));
    map.insert("hero.scroll", ("Scroll to explore", "Skroluj za više"));

    // Services section
    map.insert("services.tag", ("What We Do", "Šta Radimo"));
    map.insert("services.title1", ("Expertise That", "Ekspertiza Koja"));
    map.insert("services.title2", ("Drives Results", "Donosi Rezultate"));
    map.insert("services.description", (
        "From concept to deployment, we deliver end-to-end solutions that meet the rigorous demands of financial institutions and modern enterprises.",
        "Od koncepta do implementacije, isporučujemo end-to-end rešenja koja zadovoljavaju rigorozne zahteve finansijskih institucija i modernih preduzeća.",
    ));

    // Fintech
    map.insert("services.fintech.title", ("Fintech Solutions", "Fintech Rešenja"));
    map.insert("services.fintech.description", (
        "Banking systems, payment processing, regulatory compliance, and financial infrastructure built to scale. We understand the unique challenges of finance.",
        "Bankarski sistemi, procesiranje plaćanja, regulatorna usklađenost i finansijska infrastruktura spremna za skaliranje. Razumemo jedinstvene izazove finansija.",
    ));
    map.insert("services.fintech.f1", ("Payment Systems", "Platni Sistemi"));
    map.insert("services.fintech.f2", ("Core Banking", "Core Banking"));
    map.insert("services.fintech.f3", ("Compliance & Security", "Usklađenost i Sigurnost"));
    map.insert("services.fintech.f4", ("API Integrations", "API Integracije"));

    // Web
    map.insert("services.web.title", ("Web Development", "Web Razvoj"));
    map.insert("services.web.description", (
        "Modern, performant web applications built with cutting-edge technologies. From dashboards to customer portals.",
        "Moderne, performantne web aplikacije izgrađene najnovijim tehnologijama. Od dashboard-a do korisničkih portala.",
    ));
    map.insert("services.web.f1", ("Custom Dashboards", "Prilagođeni Dashboard-i"));
    map.insert("services.web.f2", ("Customer Portals", "Korisnički Portali"));
    map.insert("services.web.f3", ("Cloud Architecture", "Cloud Arhitektura"));

    // Mobile
    map.insert("services.mobile.title", ("Mobile Apps", "Mobilne Aplikacije"));
    map.insert("services.mobile.description", (
        "Native and cross-platform mobile experiences that users love. iOS, Android, and everything in between.",
        "Nativna i cross-platform mobilna iskustva koja korisnici vole. iOS, Android i sve između.",
    ));
    map.insert("services.mobile.f1", ("iOS & Android", "iOS & Android"));
    map.insert("services.mobile.f2", ("Cross-Platform", "Cross-Platform"));
    map.insert("services.mobile.f3", ("Secure & Performant", "Sigurno i Performantno"));

    // Integration
    map.insert("services.integration.title", ("System Integration", "Sistemska Integracija"));
    map.insert("services.integration.description", (
        "Seamlessly connect disparate systems, APIs, and data sources into unified, efficient workflows.",
        "Besprekorno povezujemo različite sisteme, API-je i izvore podataka u unificirane, efikasne tokove rada.",
    ));
    map.insert("services.integration.f1", ("API Development", "API Razvoj"));
    map.insert("services.integration.f2", ("Legacy Modernization", "Modernizacija Legacy Sistema"));
    map.insert("services.integration.f3", ("Data Pipelines", "Data Pipeline-ovi"));

    // Consulting
    map.insert("services.consulting.title", ("Consulting & Strategy", "Konsalting i Strategija"));
    map.insert("services.consulting.description", (
        "Expert guidance on technology decisions, architecture planning, and digital transformation roadmaps.",
        "Ekspertsko vođenje u tehnološkim odlukama, planiranju arhitekture i mapama digitalne transformacije.",
    ));
    map.insert("services.consulting.f1", ("Technical Assessment", "Tehnička Procena"));
    map.insert("services.consulting.f2", ("Architecture Design", "Dizajn Arhitekture"));

    // About section
    map.insert("about.tag", ("About Encodius", "O Encodius-u"));
    map.insert("about.title1", ("Built by Engineers,", "Kreirano od Inženjera,"));
    map.insert("about.title2", ("Driven by Excellence", "Vođeno Izvrsnošću"));
    map.insert("about.p1", (
        "We are a team of seasoned software engineers with deep expertise in financial technology. Our mission is to bridge the gap between complex financial requirements and elegant technical solutions.",
        "Mi smo tim iskusnih softverskih inženjera sa dubokom ekspertizom u finansijskoj tehnologiji. Naša misija je da premostimo jaz između kompleksnih finansijskih zahteva i elegantnih tehničkih rešenja.",
    ));
    map.insert("about.p2", (
        "In an industry where precision, security, and reliability are non-negotiable, we deliver software that exceeds expectations. Every line of code we write is crafted with the understanding that financial systems demand nothing less than perfection.",
        "U industriji gde su preciznost, sigurnost i pouzdanost neupitni, isporučujemo softver koji prevazilazi očekivanja. Svaka linija koda koju pišemo je izrađena sa razumevanjem da finansijski sistemi ne zahtevaju ništa manje od savršenstva.",
    ));

    // Values
    map.insert("about.value1.title", ("Security First", "Sigurnost Na Prvom Mestu"));
    map.insert("about.value1.text", (
        "Financial data demands the highest security standards. We build with security as a foundation, not an afterthought.",
        "Finansijski podaci zahtevaju najviše sigurnosne standarde. Gradimo sa sigurnošću kao temeljem, ne kao naknadnom mišlju.",
    ));
    map.insert("about.value2.title", ("Scalable Architecture", "Skalabilna Arhitektura"));
    map.insert("about.value2.text", (
        "Systems designed to grow with your business. From startup to enterprise, our solutions scale seamlessly.",
        "Sistemi dizajnirani da rastu sa vašim biznisom. Od startupa do enterprise-a, naša rešenja se besprekorno skaliraju.",
    ));
    map.insert("about.value3.title", ("Regulatory Awareness", "Regulatorna Svest"));
    map.insert("about.value3.text", (
        "Deep understanding of financial regulations and compliance requirements built into every solution.",
        "Duboko razumevanje finansijskih regulativa i zahteva usklađenosti ugrađeno u svako rešenje.",
    ));

    // Contact section
    map.insert("contact.tag", ("Get in Touch", "Stupite u Kontakt"));
    map.insert("contact.title1", ("Let's Build", "Hajde da Izgradimo"));
    map.insert("contact.title2", ("Something Great", "Nešto Veliko"));
    map.insert("contact.description", (
        "Ready to discuss your next project? We're here to help transform your vision into reality. Reach out and let's start a conversation.",
        "Spremni da razgovarate o svom sledećem projektu? Tu smo da pomognemo da transformišete vašu viziju u stvarnost. Javite nam se i započnimo razgovor.",
    ));

    // Form
    map.insert("contact.form.subject", ("Subject", "Tema"));
    map.insert("contact.form.subjectPlaceholder", ("What's this about?", "O čemu se radi?"));
    map.insert("contact.form.message", ("Message", "Poruka"));
    map.insert("contact.form.messagePlaceholder", (
        "Tell us about your project...",
        "Recite nam o vašem projektu...",
    ));
    map.insert("contact.form.submit", ("Send Message", "Pošalji Poruku"));

    // Footer
    map.insert("footer.tagline", (
        "Engineering the future of financial technology.",
        "Gradimo budućnost finansijske tehnologije.",
    ));
    map.insert("footer.navigation", ("Navigation", "Navigacija"));
    map.insert("footer.copyright", (
        "Encodius. All rights reserved.",
        "Encodius. Sva prava zadržana.",
    ));

    map
}

/// Get translations
fn translations() -> &'static AHashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Look up a key for a language. A missing key yields `None`; callers
/// leave the bound element untouched in that case (no fallback language).
pub fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    translations().get(key).map(|&(en, sr)| match lang {
        Lang::En => en,
        Lang::Sr => sr,
    })
}

/// Page title per language
pub fn page_title(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Encodius | Fintech & Software Engineering Experts",
        Lang::Sr => "Encodius | Fintech i Softverski Inženjering Eksperti",
    }
}
