//! Page - Index Document
//!
//! Builds the Encodius index page as a document tree: the element, id,
//! class and binding-key inventory the feature controllers expect, with
//! layout offsets for the scroll-gated sections. Used by the binary and
//! the integration tests.

use crate::dom::{Document, Element, NodeId};

/// Assemble the index page
pub fn build_index_page() -> Document {
    let mut doc = Document::new();
    doc.set_title("Encodius | Fintech & Software Engineering Experts");

    let root = doc.root();
    let body = doc.append(root, Element::new("body"));

    build_header(&mut doc, body);
    build_mobile_nav(&mut doc, body);
    build_hero(&mut doc, body);
    build_services(&mut doc, body);
    build_about(&mut doc, body);
    build_contact(&mut doc, body);
    build_footer(&mut doc, body);

    doc.scroll_height = 4800.0;
    doc
}

fn nav_links(doc: &mut Document, parent: NodeId) {
    for (href, key, text) in [
        ("#home", "nav.home", "Home"),
        ("#services", "nav.services", "Services"),
        ("#about", "nav.about", "About"),
        ("#contact", "nav.contact", "Contact"),
    ] {
        doc.append(
            parent,
            Element::new("a")
                .with_class("nav__link")
                .with_attr("href", href)
                .with_attr("data-i18n", key)
                .with_text(text),
        );
    }
}

fn build_header(doc: &mut Document, body: NodeId) {
    let header = doc.append(
        body,
        Element::new("header").with_id("header").with_class("nav"),
    );
    let menu = doc.append(header, Element::new("div").with_class("nav__menu"));
    nav_links(doc, menu);

    let theme_toggle = doc.append(header, Element::new("button").with_id("theme-toggle"));
    doc.append(theme_toggle, Element::new("span").with_class("icon-sun"));
    doc.append(theme_toggle, Element::new("span").with_class("icon-moon"));

    let lang_toggle = doc.append(header, Element::new("button").with_id("lang-toggle"));
    doc.append(
        lang_toggle,
        Element::new("span").with_class("lang-toggle__text").with_text("EN"),
    );

    doc.append(header, Element::new("button").with_id("nav-toggle"));
}

fn build_mobile_nav(doc: &mut Document, body: NodeId) {
    let nav_mobile = doc.append(body, Element::new("nav").with_id("nav-mobile"));
    doc.append(nav_mobile, Element::new("button").with_id("nav-mobile-close"));
    nav_links(doc, nav_mobile);
    doc.append(body, Element::new("div").with_id("nav-backdrop"));
}

fn build_hero(doc: &mut Document, body: NodeId) {
    let hero = doc.append(
        body,
        Element::new("section").with_id("home").with_class("hero").with_offset(0.0),
    );

    doc.append(hero, Element::new("div").with_class("hero__glow--1"));
    doc.append(hero, Element::new("div").with_class("hero__glow--2"));
    for _ in 0..5 {
        doc.append(hero, Element::new("div").with_class("floating-shape"));
    }

    doc.append(
        hero,
        Element::new("div")
            .with_class("hero__badge")
            .with_attr("data-i18n", "hero.badge")
            .with_text("Innovations in Finance"),
    );

    let title = doc.append(hero, Element::new("h1").with_class("hero__title"));
    for (key, text) in [
        ("hero.title1", "We Build"),
        ("hero.title2", "Financial Technology"),
        ("hero.title3", "Of the Future"),
    ] {
        doc.append(
            title,
            Element::new("span")
                .with_class("title-line")
                .with_attr("data-i18n", key)
                .with_text(text),
        );
    }

    doc.append(
        hero,
        Element::new("p")
            .with_class("hero__description")
            .with_attr("data-i18n", "hero.description")
            .with_text("Expert software engineering for fintech, banking, and enterprise solutions. We transform complex financial challenges into elegant, scalable technology."),
    );

    let actions = doc.append(hero, Element::new("div").with_class("hero__actions"));
    doc.append(
        actions,
        Element::new("a")
            .with_class("btn")
            .with_class("btn--primary")
            .with_attr("href", "#contact")
            .with_attr("data-i18n", "hero.cta1")
            .with_text("Start a Project")
            .with_rect(120.0, 540.0, 180.0, 56.0),
    );
    doc.append(
        actions,
        Element::new("a")
            .with_class("btn")
            .with_class("btn--secondary")
            .with_attr("href", "#services")
            .with_attr("data-i18n", "hero.cta2")
            .with_text("Our Expertise")
            .with_rect(320.0, 540.0, 180.0, 56.0),
    );

    let code_window = doc.append(hero, Element::new("div").with_class("code-window"));
    for _ in 0..6 {
        doc.append(code_window, Element::new("span").with_class("code-line"));
    }

    doc.append(
        hero,
        Element::new("div")
            .with_class("hero__scroll")
            .with_attr("data-i18n", "hero.scroll")
            .with_text("Scroll to explore"),
    );
}

fn section_title(doc: &mut Document, parent: NodeId, offset: f32, keys: [(&str, &str); 2]) {
    let title = doc.append(
        parent,
        Element::new("h2").with_class("section-title").with_offset(offset),
    );
    for (key, text) in keys {
        doc.append(
            title,
            Element::new("span").with_attr("data-i18n", key).with_text(text),
        );
    }
}

fn build_services(doc: &mut Document, body: NodeId) {
    let services = doc.append(
        body,
        Element::new("section")
            .with_id("services")
            .with_class("services")
            .with_offset(1600.0),
    );

    doc.append(
        services,
        Element::new("span")
            .with_class("section-tag")
            .with_attr("data-i18n", "services.tag")
            .with_text("What We Do")
            .with_offset(1640.0),
    );
    section_title(
        doc,
        services,
        1690.0,
        [
            ("services.title1", "Expertise That"),
            ("services.title2", "Drives Results"),
        ],
    );
    doc.append(
        services,
        Element::new("p")
            .with_class("section-description")
            .with_attr("data-i18n", "services.description")
            .with_text("From concept to deployment, we deliver end-to-end solutions that meet the rigorous demands of financial institutions and modern enterprises.")
            .with_offset(1760.0),
    );

    let grid = doc.append(services, Element::new("div").with_class("services__grid"));
    let cards: [(&str, &[&str]); 5] = [
        ("fintech", &["f1", "f2", "f3", "f4"]),
        ("web", &["f1", "f2", "f3"]),
        ("mobile", &["f1", "f2", "f3"]),
        ("integration", &["f1", "f2", "f3"]),
        ("consulting", &["f1", "f2"]),
    ];
    for (index, (name, features)) in cards.into_iter().enumerate() {
        let card = doc.append(
            grid,
            Element::new("article")
                .with_class("service-card")
                .with_offset(1880.0 + index as f32 * 160.0),
        );
        doc.append(card, Element::new("div").with_class("service-card__icon"));
        doc.append(
            card,
            Element::new("h3")
                .with_class("service-card__title")
                .with_attr("data-i18n", format!("services.{name}.title")),
        );
        doc.append(
            card,
            Element::new("p")
                .with_class("service-card__description")
                .with_attr("data-i18n", format!("services.{name}.description")),
        );
        let list = doc.append(card, Element::new("ul"));
        for feature in features {
            doc.append(
                list,
                Element::new("li")
                    .with_class("service-card__feature")
                    .with_attr("data-i18n", format!("services.{name}.{feature}")),
            );
        }
    }
}

fn build_about(doc: &mut Document, body: NodeId) {
    let about = doc.append(
        body,
        Element::new("section").with_id("about").with_class("about").with_offset(2800.0),
    );

    let content = doc.append(about, Element::new("div").with_class("about__content"));
    doc.append(
        content,
        Element::new("span")
            .with_class("section-tag")
            .with_attr("data-i18n", "about.tag")
            .with_text("About Encodius"),
    );
    section_title(
        doc,
        content,
        2860.0,
        [
            ("about.title1", "Built by Engineers,"),
            ("about.title2", "Driven by Excellence"),
        ],
    );
    let text = doc.append(
        content,
        Element::new("div").with_class("about__text").with_offset(2940.0),
    );
    doc.append(text, Element::new("p").with_attr("data-i18n", "about.p1"));
    doc.append(text, Element::new("p").with_attr("data-i18n", "about.p2"));

    doc.append(about, Element::new("div").with_class("about__line"));
    doc.append(about, Element::new("div").with_class("about__line"));

    for (index, value) in ["value1", "value2", "value3"].into_iter().enumerate() {
        let card = doc.append(
            about,
            Element::new("div")
                .with_class("value-card")
                .with_offset(3000.0 + index as f32 * 140.0),
        );
        doc.append(
            card,
            Element::new("span")
                .with_class("value-card__number")
                .with_text(format!("0{}", index + 1)),
        );
        doc.append(
            card,
            Element::new("h3").with_attr("data-i18n", format!("about.{value}.title")),
        );
        doc.append(
            card,
            Element::new("p").with_attr("data-i18n", format!("about.{value}.text")),
        );
    }
}

fn build_contact(doc: &mut Document, body: NodeId) {
    let contact = doc.append(
        body,
        Element::new("section")
            .with_id("contact")
            .with_class("contact")
            .with_offset(3600.0),
    );

    let info = doc.append(contact, Element::new("div").with_class("contact__info"));
    doc.append(
        info,
        Element::new("span")
            .with_class("section-tag")
            .with_attr("data-i18n", "contact.tag")
            .with_text("Get in Touch"),
    );
    section_title(
        doc,
        info,
        3660.0,
        [
            ("contact.title1", "Let's Build"),
            ("contact.title2", "Something Great"),
        ],
    );
    doc.append(
        info,
        Element::new("p")
            .with_class("contact__description")
            .with_attr("data-i18n", "contact.description")
            .with_offset(3740.0),
    );
    let details = doc.append(
        info,
        Element::new("div").with_class("contact__details").with_offset(3820.0),
    );
    doc.append(details, Element::new("div").with_class("contact__detail").with_text("hello@encodius.com"));
    doc.append(details, Element::new("div").with_class("contact__detail").with_text("Belgrade, Serbia"));

    let wrapper = doc.append(
        contact,
        Element::new("div").with_class("contact__form-wrapper").with_offset(3700.0),
    );
    let form = doc.append(
        wrapper,
        Element::new("form")
            .with_id("contact-form")
            .with_class("contact-form")
            .with_offset(3720.0),
    );

    for (name, tag) in [("name", "input"), ("email", "input")] {
        let group = doc.append(form, Element::new("div").with_class("form-group"));
        doc.append(
            group,
            Element::new(tag)
                .with_class("form-input")
                .with_attr("name", name)
                .with_attr("value", ""),
        );
    }

    let subject_group = doc.append(form, Element::new("div").with_class("form-group"));
    doc.append(
        subject_group,
        Element::new("label")
            .with_attr("data-i18n", "contact.form.subject")
            .with_text("Subject"),
    );
    doc.append(
        subject_group,
        Element::new("input")
            .with_class("form-input")
            .with_attr("name", "subject")
            .with_attr("value", "")
            .with_attr("data-i18n-placeholder", "contact.form.subjectPlaceholder")
            .with_attr("placeholder", "What's this about?"),
    );

    let message_group = doc.append(form, Element::new("div").with_class("form-group"));
    doc.append(
        message_group,
        Element::new("label")
            .with_attr("data-i18n", "contact.form.message")
            .with_text("Message"),
    );
    doc.append(
        message_group,
        Element::new("textarea")
            .with_class("form-input")
            .with_attr("name", "message")
            .with_attr("value", "")
            .with_attr("data-i18n-placeholder", "contact.form.messagePlaceholder")
            .with_attr("placeholder", "Tell us about your project..."),
    );

    doc.append(
        form,
        Element::new("button")
            .with_class("btn")
            .with_class("btn--primary")
            .with_attr("type", "submit")
            .with_attr("data-i18n", "contact.form.submit")
            .with_text("Send Message")
            .with_rect(760.0, 4150.0, 200.0, 56.0),
    );

    doc.append(
        contact,
        Element::new("p").with_id("form-status").with_class("form-status"),
    );
}

fn build_footer(doc: &mut Document, body: NodeId) {
    let footer = doc.append(
        body,
        Element::new("footer").with_class("footer").with_offset(4300.0),
    );
    let grid = doc.append(footer, Element::new("div").with_class("footer__grid"));

    let brand = doc.append(grid, Element::new("div"));
    doc.append(
        brand,
        Element::new("p")
            .with_class("footer__tagline")
            .with_attr("data-i18n", "footer.tagline")
            .with_text("Engineering the future of financial technology."),
    );

    let nav_col = doc.append(grid, Element::new("div"));
    doc.append(
        nav_col,
        Element::new("h4")
            .with_attr("data-i18n", "footer.navigation")
            .with_text("Navigation"),
    );
    nav_links(doc, nav_col);

    let legal = doc.append(grid, Element::new("div"));
    doc.append(legal, Element::new("span").with_id("current-year"));
    doc.append(
        legal,
        Element::new("span")
            .with_attr("data-i18n", "footer.copyright")
            .with_text("Encodius. All rights reserved."),
    );
}
